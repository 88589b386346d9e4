//! `jotjot edit` command - replace a jot's content from stdin
//!
//! Example usage:
//! - `pbpaste | jotjot edit 01HV...`

use std::io::{self, Read};

use chrono::Utc;
use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use jotjot_core::config::JotConfig;
use jotjot_core::error::{JotError, Result};
use jotjot_core::format::{escape_record, jot_to_json};
use jotjot_core::store::JotStore;

/// Execute the edit command
pub fn execute(cli: &Cli, store: &mut JotStore, config: &JotConfig, id: &str) -> Result<()> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    debug!(content_len = content.len(), "read_stdin");

    edit_content(cli, store, config, id, &content)
}

/// Replace the content of jot `id` and report it
pub fn edit_content(
    cli: &Cli,
    store: &mut JotStore,
    config: &JotConfig,
    id: &str,
    content: &str,
) -> Result<()> {
    let content = content.trim_end();
    if content.is_empty() {
        return Err(JotError::UsageError(
            "refusing to blank a jot: stdin was empty (use `jotjot delete` instead)".to_string(),
        ));
    }

    store.set_content(id, content, Utc::now())?;
    store.save()?;
    let jot = store.get(id)?;

    debug!(jot_id = %jot.id, "edit");

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&jot_to_json(jot))?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Updated {}", jot.id);
            }
        }
        OutputFormat::Records => {
            println!(
                "J {} pinned={} updated={} \"{}\"",
                jot.id,
                jot.is_pinned,
                jot.updated_at.to_rfc3339(),
                escape_record(&jot.preview(config.preview.length))
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{create_cli, create_test_store, t0};

    #[test]
    fn test_edit_replaces_content() {
        let (_dir, mut store) = create_test_store();
        let cli = create_cli(OutputFormat::Human, true);
        let config = JotConfig::default();

        edit_content(&cli, &mut store, &config, "w", "water the plants\nand the herbs\n").unwrap();

        let reopened = JotStore::open(store.path()).unwrap();
        let jot = reopened.get("w").unwrap();
        assert_eq!(jot.content, "water the plants\nand the herbs");
        assert!(jot.updated_at > t0());
    }

    #[test]
    fn test_edit_rejects_blank_content() {
        let (_dir, mut store) = create_test_store();
        let cli = create_cli(OutputFormat::Json, false);
        let config = JotConfig::default();

        let err = edit_content(&cli, &mut store, &config, "w", "\n  ").unwrap_err();
        assert!(matches!(err, JotError::UsageError(_)));
        assert_eq!(store.get("w").unwrap().content, "water the plants");
    }

    #[test]
    fn test_edit_unknown_id() {
        let (_dir, mut store) = create_test_store();
        let cli = create_cli(OutputFormat::Records, false);
        let config = JotConfig::default();

        let err = edit_content(&cli, &mut store, &config, "missing", "text").unwrap_err();
        assert!(matches!(err, JotError::JotNotFound { .. }));
    }
}
