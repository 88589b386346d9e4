//! `jotjot dismiss` command - stop suggesting a pair of jots
//!
//! Without IDs the current best suggestion is dismissed. Dismissals are kept
//! in the store file so later `suggest` and `merge` runs skip the pair.

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use jotjot_core::advisor::MergeAdvisor;
use jotjot_core::config::JotConfig;
use jotjot_core::error::Result;
use jotjot_core::store::JotStore;

/// Execute the dismiss command
pub fn execute(
    cli: &Cli,
    store: &mut JotStore,
    config: &JotConfig,
    ids: Option<(&str, &str)>,
    threshold: f64,
) -> Result<()> {
    let (kept, merged) = match ids {
        Some((kept, merged)) => (kept.to_string(), merged.to_string()),
        None => {
            let mut advisor = MergeAdvisor::new(threshold)
                .with_preview_length(config.preview.length)
                .with_dismissed(store.dismissed().iter().cloned());
            advisor.observe(store.jots());
            match advisor.dismiss() {
                Some(s) => (s.kept, s.merged),
                None => {
                    if !cli.quiet {
                        println!("No merge suggestion");
                    }
                    return Ok(());
                }
            }
        }
    };

    let added = store.dismiss_pair(&kept, &merged)?;
    if added {
        store.save()?;
    }

    debug!(kept = %kept, merged = %merged, added, "dismiss");

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "kept": kept,
                "merged": merged,
                "already_dismissed": !added,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                if added {
                    println!("Dismissed {} / {}", kept, merged);
                } else {
                    println!("Already dismissed {} / {}", kept, merged);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H jotjot=1 records=1 mode=dismiss kept={} merged={} added={}",
                kept, merged, added
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::suggest::best_suggestion;
    use crate::commands::test_support::{create_cli, create_test_store};
    use jotjot_core::error::JotError;

    #[test]
    fn test_dismiss_current_suggestion_persists() {
        let (_dir, mut store) = create_test_store();
        let cli = create_cli(OutputFormat::Human, true);
        let config = JotConfig::default();

        execute(&cli, &mut store, &config, None, 0.35).unwrap();

        let reopened = JotStore::open(store.path()).unwrap();
        assert_eq!(
            reopened.dismissed(),
            &[("a".to_string(), "b".to_string())]
        );
        assert!(best_suggestion(&reopened, &config, 0.35).is_none());
        assert_eq!(reopened.jots().len(), 3);
    }

    #[test]
    fn test_dismiss_with_nothing_to_suggest() {
        let (_dir, mut store) = create_test_store();
        let cli = create_cli(OutputFormat::Json, false);
        let config = JotConfig::default();

        execute(&cli, &mut store, &config, None, 5.0).unwrap();
        assert!(store.dismissed().is_empty());
    }

    #[test]
    fn test_dismiss_explicit_ids() {
        let (_dir, mut store) = create_test_store();
        let cli = create_cli(OutputFormat::Records, false);
        let config = JotConfig::default();

        execute(&cli, &mut store, &config, Some(("b", "a")), 0.35).unwrap();
        execute(&cli, &mut store, &config, Some(("a", "b")), 0.35).unwrap();
        assert_eq!(store.dismissed().len(), 1);

        let err = execute(&cli, &mut store, &config, Some(("a", "nope")), 0.35).unwrap_err();
        assert!(matches!(err, JotError::JotNotFound { .. }));
    }
}
