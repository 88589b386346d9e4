//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::paths::resolve_store_path;
use crate::cli::Cli;
use jotjot_core::config::{validate_threshold, JotConfig};
use jotjot_core::error::Result;
use jotjot_core::store::JotStore;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn store_path(&self) -> PathBuf {
        resolve_store_path(self.root, self.cli.store.as_deref())
    }

    pub fn open_store(&self) -> Result<JotStore> {
        JotStore::open(&self.store_path())
    }

    pub fn config(&self) -> Result<JotConfig> {
        JotConfig::load()
    }

    /// Threshold from the command line, else from configuration
    pub fn threshold(&self, config: &JotConfig, flag: Option<f64>) -> Result<f64> {
        validate_threshold(flag.unwrap_or(config.similarity.threshold))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("jotjot {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Quick-capture notes with merge suggestions.");
        println!();
        println!("Run `jotjot --help` for usage information.");
        Ok(())
    }
}
