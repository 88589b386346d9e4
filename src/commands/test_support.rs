//! Shared helpers for command unit tests

use crate::cli::{Cli, OutputFormat};
use chrono::{DateTime, TimeZone, Utc};
use jotjot_core::note::Jot;
use jotjot_core::store::JotStore;
use tempfile::TempDir;

pub fn create_cli(format: OutputFormat, quiet: bool) -> Cli {
    Cli {
        root: None,
        store: None,
        format,
        quiet,
        verbose: false,
        log_level: None,
        log_json: false,
        command: None,
    }
}

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 5, 9, 0, 0).unwrap()
}

/// A store in a temp dir holding two near-duplicates and one unrelated jot
pub fn create_test_store() -> (TempDir, JotStore) {
    let temp_dir = TempDir::new().unwrap();
    let mut store = JotStore::open(&JotStore::default_path(temp_dir.path())).unwrap();
    store
        .add(
            Jot::new("reading list\nrust book chapter ownership")
                .with_id("a")
                .with_created_at(t0()),
        )
        .unwrap();
    store
        .add(
            Jot::new("water the plants")
                .with_id("w")
                .with_created_at(t0() - chrono::Duration::days(2)),
        )
        .unwrap();
    store
        .add(
            Jot::new("reading list\nrust book chapter borrowing ownership")
                .with_id("b")
                .with_created_at(t0() + chrono::Duration::minutes(10)),
        )
        .unwrap();
    store.save().unwrap();
    (temp_dir, store)
}
