//! `jotjot merge` command - fold one jot into another
//!
//! With explicit IDs the first jot is kept and the second is removed after
//! its content and attachments are folded in. Without IDs the current best
//! suggestion is applied.

use chrono::Utc;

use crate::cli::{Cli, OutputFormat};
use crate::commands::suggest::best_suggestion;
use jotjot_core::config::JotConfig;
use jotjot_core::error::Result;
use jotjot_core::format::jot_to_json;
use jotjot_core::merge::merge_jots;
use jotjot_core::store::JotStore;

/// Execute the merge command
pub fn execute(
    cli: &Cli,
    store: &mut JotStore,
    config: &JotConfig,
    ids: Option<(&str, &str)>,
    threshold: f64,
    dry_run: bool,
) -> Result<()> {
    let (kept_id, merged_id) = match ids {
        Some((kept, merged)) => (kept.to_string(), merged.to_string()),
        None => match best_suggestion(store, config, threshold) {
            Some(s) => (s.kept, s.merged),
            None => {
                if !cli.quiet {
                    println!("No merge suggestion");
                }
                return Ok(());
            }
        },
    };

    let separator = config.merge.separator.as_str();
    let now = Utc::now();

    let result = if dry_run {
        merge_jots(store.get(&kept_id)?, store.get(&merged_id)?, separator, now)?
    } else {
        let merged = store
            .apply_merge(&kept_id, &merged_id, separator, now)?
            .clone();
        store.save()?;
        merged
    };

    tracing::debug!(kept = %kept_id, merged = %merged_id, dry_run, "merge");

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "kept": kept_id,
                "merged": merged_id,
                "dry_run": dry_run,
                "result": jot_to_json(&result),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if dry_run {
                println!("Dry run: would merge {} into {}", merged_id, kept_id);
                println!("Attachments would be: {}", result.media.len());
            } else if !cli.quiet {
                println!("Merged {} into {}", merged_id, kept_id);
            }
        }
        OutputFormat::Records => {
            println!(
                "H jotjot=1 records=1 mode=merge kept={} merged={} dry_run={} media={}",
                kept_id,
                merged_id,
                dry_run,
                result.media.len()
            );
        }
    }

    Ok(())
}
