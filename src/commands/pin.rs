//! `jotjot pin` / `jotjot unpin` commands

use chrono::Utc;

use crate::cli::{Cli, OutputFormat};
use jotjot_core::error::Result;
use jotjot_core::store::JotStore;

/// Execute the pin or unpin command
pub fn execute(cli: &Cli, store: &mut JotStore, id: &str, pinned: bool) -> Result<()> {
    store.set_pinned(id, pinned, Utc::now())?;
    store.save()?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "id": id, "is_pinned": pinned });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{} {}", if pinned { "Pinned" } else { "Unpinned" }, id);
            }
        }
        OutputFormat::Records => {
            println!("J {} pinned={}", id, pinned);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{create_cli, create_test_store};
    use jotjot_core::error::JotError;

    #[test]
    fn test_pin_then_unpin() {
        let (_dir, mut store) = create_test_store();
        let cli = create_cli(OutputFormat::Human, true);

        execute(&cli, &mut store, "w", true).unwrap();
        let reopened = JotStore::open(store.path()).unwrap();
        assert!(reopened.get("w").unwrap().is_pinned);
        assert_eq!(reopened.sorted_for_display()[0].id, "w");

        execute(&cli, &mut store, "w", false).unwrap();
        let reopened = JotStore::open(store.path()).unwrap();
        assert!(!reopened.get("w").unwrap().is_pinned);
    }

    #[test]
    fn test_pin_unknown_id() {
        let (_dir, mut store) = create_test_store();
        let cli = create_cli(OutputFormat::Human, false);
        let err = execute(&cli, &mut store, "missing", true).unwrap_err();
        assert!(matches!(err, JotError::JotNotFound { .. }));
    }
}
