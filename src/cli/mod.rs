//! CLI argument parsing for jotjot
//!
//! Global flags: --root, --store, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod output;
pub mod paths;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

/// JotJot - quick-capture notes with merge suggestions
#[derive(Parser, Debug)]
#[command(name = "jotjot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store file (.json, .yaml or .yml)
    #[arg(long, global = true, env = "JOTJOT_STORE")]
    pub store: Option<PathBuf>,

    /// Output format: human, json, or records
    #[arg(long, global = true, default_value = "human", value_parser = output::parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, jotjot_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a jot from stdin
    Capture {
        /// Pin the new jot
        #[arg(long)]
        pin: bool,
    },

    /// List jots, pinned first
    List,

    /// Replace a jot's content with stdin
    Edit {
        /// Jot ID
        id: String,
    },

    /// Delete a jot
    Delete {
        /// Jot ID
        id: String,
    },

    /// Pin a jot
    Pin {
        /// Jot ID
        id: String,
    },

    /// Unpin a jot
    Unpin {
        /// Jot ID
        id: String,
    },

    /// Attach an image or video file to a jot
    Attach {
        /// Jot ID
        id: String,

        /// Media file to attach
        file: PathBuf,
    },

    /// List pairs of jots that look alike, best first
    Similar {
        /// Minimum score (defaults to the configured threshold)
        #[arg(long, allow_negative_numbers = true)]
        threshold: Option<f64>,

        /// Show at most this many pairs
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show the single best merge suggestion
    Suggest {
        /// Minimum score (defaults to the configured threshold)
        #[arg(long, allow_negative_numbers = true)]
        threshold: Option<f64>,
    },

    /// Stop suggesting a pair; without IDs, dismisses the current suggestion
    Dismiss {
        /// First jot of the pair
        #[arg(requires = "merged")]
        kept: Option<String>,

        /// Second jot of the pair
        merged: Option<String>,

        /// Minimum score when picking the suggestion
        #[arg(long, allow_negative_numbers = true)]
        threshold: Option<f64>,
    },

    /// Merge one jot into another; without IDs, applies the current suggestion
    Merge {
        /// Jot to keep
        #[arg(requires = "merged")]
        kept: Option<String>,

        /// Jot folded into the kept one and then removed
        merged: Option<String>,

        /// Minimum score when picking the suggestion
        #[arg(long, allow_negative_numbers = true)]
        threshold: Option<f64>,

        /// Show what would happen without making changes
        #[arg(long)]
        dry_run: bool,
    },
}
