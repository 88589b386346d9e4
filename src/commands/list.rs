//! `jotjot list` command - list jots, pinned first then most recently updated

use crate::cli::{Cli, OutputFormat};
use jotjot_core::config::JotConfig;
use jotjot_core::error::Result;
use jotjot_core::format::{escape_record, jot_to_json};
use jotjot_core::note::Jot;
use jotjot_core::store::JotStore;

/// Execute the list command
pub fn execute(cli: &Cli, store: &JotStore, config: &JotConfig) -> Result<()> {
    let preview_length = config.preview.length;
    let jots = store.sorted_for_display();

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = jots.iter().map(|j| jot_to_json(j)).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if jots.is_empty() {
                if !cli.quiet {
                    println!("No jots found");
                }
                return Ok(());
            }
            for jot in jots {
                let pin = if jot.is_pinned { "*" } else { " " };
                let media = if jot.media.is_empty() {
                    String::new()
                } else {
                    format!(" [{} attachment(s)]", jot.media.len())
                };
                println!(
                    "{} {} {}{}",
                    pin,
                    jot.id,
                    jot.first_line().chars().take(preview_length).collect::<String>(),
                    media
                );
            }
        }
        OutputFormat::Records => {
            println!("H jotjot=1 records=1 mode=list jots={}", jots.len());
            for jot in jots {
                println!("{}", jot_record(jot, preview_length));
            }
        }
    }

    Ok(())
}

/// `J` record line for a listed jot
fn jot_record(jot: &Jot, preview_length: usize) -> String {
    format!(
        "J {} pinned={} created={} updated={} media={} \"{}\"",
        jot.id,
        jot.is_pinned,
        jot.created_at.to_rfc3339(),
        jot.updated_at.to_rfc3339(),
        jot.media.len(),
        escape_record(&jot.preview(preview_length))
    )
}
