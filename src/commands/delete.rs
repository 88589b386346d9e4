//! `jotjot delete` command - remove a jot

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use jotjot_core::error::Result;
use jotjot_core::store::JotStore;

/// Execute the delete command
pub fn execute(cli: &Cli, store: &mut JotStore, id: &str) -> Result<()> {
    let removed = store.remove(id)?;
    store.save()?;

    debug!(jot_id = %removed.id, media = removed.media.len(), "delete");

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "deleted": removed.id });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Deleted {}", removed.id);
            }
        }
        OutputFormat::Records => {
            println!("H jotjot=1 records=1 mode=delete id={}", removed.id);
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
    fn test_delete_removes_from_store() {
        let (_dir, mut store) = create_test_store();
        let cli = create_cli(OutputFormat::Human, true);

        execute(&cli, &mut store, "w").unwrap();

        let reopened = JotStore::open(store.path()).unwrap();
        let ids: Vec<&str> = reopened.jots().iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_delete_unknown_id() {
        let (_dir, mut store) = create_test_store();
        let cli = create_cli(OutputFormat::Json, false);

        let err = execute(&cli, &mut store, "missing").unwrap_err();
        assert!(matches!(err, JotError::JotNotFound { .. }));
        assert_eq!(store.jots().len(), 3);
    }
}
