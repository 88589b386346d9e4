//! `jotjot capture` command - create a jot from stdin
//!
//! Example usage:
//! - `pbpaste | jotjot capture`
//! - `echo "call mom" | jotjot capture --pin`

use std::io::{self, Read};

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use jotjot_core::config::JotConfig;
use jotjot_core::error::{JotError, Result};
use jotjot_core::format::{escape_record, jot_to_json};
use jotjot_core::note::Jot;
use jotjot_core::store::JotStore;

/// Execute the capture command
pub fn execute(cli: &Cli, store: &mut JotStore, config: &JotConfig, pin: bool) -> Result<()> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    debug!(content_len = content.len(), "read_stdin");

    capture_content(cli, store, config, &content, pin)
}

/// Store `content` as a new jot and report it
pub fn capture_content(
    cli: &Cli,
    store: &mut JotStore,
    config: &JotConfig,
    content: &str,
    pin: bool,
) -> Result<()> {
    // Trim trailing whitespace but preserve internal formatting
    let content = content.trim_end();
    if content.is_empty() {
        return Err(JotError::UsageError(
            "nothing to capture: stdin was empty".to_string(),
        ));
    }

    let jot = store.add(Jot::new(content).pinned(pin))?.clone();
    store.save()?;

    debug!(jot_id = %jot.id, pinned = pin, "capture");

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&jot_to_json(&jot))?);
        }
        OutputFormat::Human => {
            println!("{}", jot.id);
        }
        OutputFormat::Records => {
            println!(
                "J {} pinned={} created={} \"{}\"",
                jot.id,
                jot.is_pinned,
                jot.created_at.to_rfc3339(),
                escape_record(&jot.preview(config.preview.length))
            );
        }
    }

    Ok(())
}
