//! `jotjot suggest` command - show the single best merge suggestion

use std::collections::HashSet;

use crate::cli::{Cli, OutputFormat};
use jotjot_core::config::JotConfig;
use jotjot_core::error::Result;
use jotjot_core::format::escape_record;
use jotjot_core::merge::{suggest_merge, MergeSuggestion, PairKey};
use jotjot_core::store::JotStore;

/// Best suggestion for the store, skipping dismissed pairs and honouring the
/// configured preview length
pub fn best_suggestion(
    store: &JotStore,
    config: &JotConfig,
    threshold: f64,
) -> Option<MergeSuggestion> {
    let dismissed: HashSet<PairKey> = store.dismissed().iter().cloned().collect();
    suggest_merge(store.jots(), threshold, config.preview.length, &dismissed)
}

/// Execute the suggest command
pub fn execute(cli: &Cli, store: &JotStore, config: &JotConfig, threshold: f64) -> Result<()> {
    let suggestion = best_suggestion(store, config, threshold);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "suggestion": suggestion });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match &suggestion {
            None => {
                if !cli.quiet {
                    println!("No merge suggestion");
                }
            }
            Some(s) => {
                println!("Similar jots found ({})", s.reason);
                println!("  keep:  {}  {}", s.kept, s.kept_preview.replace('\n', " "));
                println!("  merge: {}  {}", s.merged, s.merged_preview.replace('\n', " "));
                println!("  score: {:.3}", s.score);
                if !cli.quiet {
                    println!();
                    println!("Run `jotjot merge` to apply or `jotjot dismiss` to skip.");
                }
            }
        },
        OutputFormat::Records => {
            println!(
                "H jotjot=1 records=1 mode=suggest jots={} suggestions={}",
                store.jots().len(),
                usize::from(suggestion.is_some())
            );
            if let Some(s) = &suggestion {
                println!(
                    "S kept={} merged={} score={:.4} reason=\"{}\"",
                    s.kept,
                    s.merged,
                    s.score,
                    escape_record(&s.reason)
                );
            }
        }
    }

    Ok(())
}
