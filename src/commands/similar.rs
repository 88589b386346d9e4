//! `jotjot similar` command - list pairs of jots that look alike, best first

use crate::cli::{Cli, OutputFormat};
use jotjot_core::error::Result;
use jotjot_core::format::{pair_to_json, pair_to_record};
use jotjot_core::similarity::SimilarityAnalyzer;
use jotjot_core::store::JotStore;

/// Execute the similar command
pub fn execute(cli: &Cli, store: &JotStore, threshold: f64, limit: Option<usize>) -> Result<()> {
    let jots = store.jots();
    let mut pairs = SimilarityAnalyzer::new(jots).find_similar_pairs(threshold);
    let total = pairs.len();
    if let Some(limit) = limit {
        pairs.truncate(limit);
    }

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "threshold": threshold,
                "total": total,
                "pairs": pairs.iter().map(pair_to_json).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if pairs.is_empty() {
                if !cli.quiet {
                    println!(
                        "No similar jots (threshold {:.2}, {} jots scanned)",
                        threshold,
                        jots.len()
                    );
                }
                return Ok(());
            }
            for pair in &pairs {
                println!(
                    "{:.3}  {} + {}  {}",
                    pair.score, pair.first.id, pair.second.id, pair.reason
                );
            }
            if pairs.len() < total && !cli.quiet {
                println!("... {} more", total - pairs.len());
            }
        }
        OutputFormat::Records => {
            println!(
                "H jotjot=1 records=1 mode=similar jots={} pairs={} threshold={}",
                jots.len(),
                total,
                threshold
            );
            for pair in &pairs {
                println!("{}", pair_to_record(pair));
            }
        }
    }

    Ok(())
}
