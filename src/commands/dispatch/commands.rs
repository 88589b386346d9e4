//! Command implementations for the Commands enum

use tracing::debug;

use super::command::{Command, CommandContext};
use crate::cli::Commands;
use crate::commands;
use jotjot_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Capture { pin } => {
                let config = ctx.config()?;
                let mut store = ctx.open_store()?;
                debug!(elapsed = ?ctx.start.elapsed(), "open_store");
                commands::capture::execute(ctx.cli, &mut store, &config, *pin)
            }
            Commands::List => {
                let config = ctx.config()?;
                let store = ctx.open_store()?;
                commands::list::execute(ctx.cli, &store, &config)
            }
            Commands::Edit { id } => {
                let config = ctx.config()?;
                let mut store = ctx.open_store()?;
                commands::edit::execute(ctx.cli, &mut store, &config, id)
            }
            Commands::Delete { id } => {
                let mut store = ctx.open_store()?;
                commands::delete::execute(ctx.cli, &mut store, id)
            }
            Commands::Pin { id } => {
                let mut store = ctx.open_store()?;
                commands::pin::execute(ctx.cli, &mut store, id, true)
            }
            Commands::Unpin { id } => {
                let mut store = ctx.open_store()?;
                commands::pin::execute(ctx.cli, &mut store, id, false)
            }
            Commands::Attach { id, file } => {
                let mut store = ctx.open_store()?;
                commands::attach::execute(ctx.cli, &mut store, id, file)
            }
            Commands::Similar { threshold, limit } => {
                let config = ctx.config()?;
                let threshold = ctx.threshold(&config, *threshold)?;
                let store = ctx.open_store()?;
                commands::similar::execute(ctx.cli, &store, threshold, *limit)
            }
            Commands::Suggest { threshold } => {
                let config = ctx.config()?;
                let threshold = ctx.threshold(&config, *threshold)?;
                let store = ctx.open_store()?;
                commands::suggest::execute(ctx.cli, &store, &config, threshold)
            }
            Commands::Dismiss {
                kept,
                merged,
                threshold,
            } => {
                let config = ctx.config()?;
                let threshold = ctx.threshold(&config, *threshold)?;
                let mut store = ctx.open_store()?;
                let ids = kept.as_deref().zip(merged.as_deref());
                commands::dismiss::execute(ctx.cli, &mut store, &config, ids, threshold)
            }
            Commands::Merge {
                kept,
                merged,
                threshold,
                dry_run,
            } => {
                let config = ctx.config()?;
                let threshold = ctx.threshold(&config, *threshold)?;
                let mut store = ctx.open_store()?;
                let ids = kept.as_deref().zip(merged.as_deref());
                commands::merge::execute(ctx.cli, &mut store, &config, ids, threshold, *dry_run)
            }
        }
    }
}
