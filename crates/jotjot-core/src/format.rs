//! Output format handling for jotjot
//!
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented format, one record per line

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::JotError;
use crate::note::Jot;
use crate::similarity::SimilarPair;

/// Output format for jotjot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records
    Records,
}

impl FromStr for OutputFormat {
    type Err = JotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(JotError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Escape a value for a quoted records field: quotes and line breaks
pub fn escape_record(s: &str) -> String {
    s.replace('\\', r"\\")
        .replace('"', r#"\""#)
        .replace('\n', r"\n")
}

/// JSON object for a jot; attachment bytes are summarised, not embedded
pub fn jot_to_json(jot: &Jot) -> Value {
    serde_json::json!({
        "id": jot.id,
        "content": jot.content,
        "is_pinned": jot.is_pinned,
        "created_at": jot.created_at.to_rfc3339(),
        "updated_at": jot.updated_at.to_rfc3339(),
        "media": jot.media.iter().map(|m| serde_json::json!({
            "id": m.id,
            "kind": m.kind,
            "bytes": m.data.len(),
        })).collect::<Vec<_>>(),
    })
}

/// JSON object for a similar pair
pub fn pair_to_json(pair: &SimilarPair<'_>) -> Value {
    serde_json::json!({
        "first": pair.first.id,
        "second": pair.second.id,
        "score": pair.score,
        "signals": pair.signals.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
        "reason": pair.reason,
    })
}

/// `P` record line for a similar pair
pub fn pair_to_record(pair: &SimilarPair<'_>) -> String {
    let signals: Vec<&str> = pair.signals.iter().map(|s| s.as_str()).collect();
    format!(
        "P first={} second={} score={:.4} signals={} reason=\"{}\"",
        pair.first.id,
        pair.second.id,
        pair.score,
        if signals.is_empty() {
            "-".to_string()
        } else {
            signals.join(",")
        },
        escape_record(&pair.reason)
    )
}
