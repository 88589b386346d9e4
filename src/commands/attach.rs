//! `jotjot attach` command - attach an image or video to a jot

use std::path::Path;

use chrono::Utc;
use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use jotjot_core::error::Result;
use jotjot_core::note::MediaItem;
use jotjot_core::store::JotStore;

/// Execute the attach command
pub fn execute(cli: &Cli, store: &mut JotStore, id: &str, file: &Path) -> Result<()> {
    // Fail on an unknown jot before reading the file
    store.get(id)?;

    let item = MediaItem::from_file(file)?;
    let (media_id, kind, bytes) = (item.id.clone(), item.kind, item.data.len());
    debug!(jot_id = id, %kind, bytes, "attach");

    store.attach(id, item, Utc::now())?;
    store.save()?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": id,
                "media": { "id": media_id, "kind": kind, "bytes": bytes },
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Attached {} {} to {}", kind, media_id, id);
            }
        }
        OutputFormat::Records => {
            println!("M {} jot={} kind={} bytes={}", media_id, id, kind, bytes);
        }
    }

    Ok(())
}
