//! File-backed jot collection
//!
//! A store is a single file holding every jot. `.yaml`/`.yml` paths are read
//! and written as YAML, anything else as JSON. The default location is
//! `.jotjot/jots.json` under the working root.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{JotError, Result};
use crate::merge::{is_dismissed, merge_jots, PairKey};
use crate::note::{Jot, MediaItem};

/// Directory created under the root for the default store
pub const DEFAULT_STORE_DIR: &str = ".jotjot";
/// File name of the default store
pub const DEFAULT_STORE_FILE: &str = "jots.json";
/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Json,
    Yaml,
}

impl Encoding {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Encoding::Yaml
            }
            _ => Encoding::Json,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    jots: Vec<Jot>,
    /// Pairs the user asked not to be suggested again
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    dismissed: Vec<PairKey>,
}

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

/// The jot store
#[derive(Debug)]
pub struct JotStore {
    path: PathBuf,
    encoding: Encoding,
    jots: Vec<Jot>,
    dismissed: Vec<PairKey>,
}

impl JotStore {
    /// Default store path under `root`
    pub fn default_path(root: &Path) -> PathBuf {
        root.join(DEFAULT_STORE_DIR).join(DEFAULT_STORE_FILE)
    }

    /// Open a store file. A missing file is an empty store.
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        let encoding = Encoding::for_path(path);

        if !path.exists() {
            tracing::debug!("store file missing, starting empty");
            return Ok(JotStore {
                path: path.to_path_buf(),
                encoding,
                jots: Vec::new(),
                dismissed: Vec::new(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| JotError::InvalidStore {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let parsed: std::result::Result<StoreFile, String> = match encoding {
            Encoding::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
            Encoding::Yaml => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        };
        let file = parsed.map_err(|reason| JotError::InvalidStore {
            path: path.to_path_buf(),
            reason,
        })?;

        if file.version > STORE_FORMAT_VERSION {
            return Err(JotError::InvalidStore {
                path: path.to_path_buf(),
                reason: format!(
                    "store format version {} is newer than supported version {}",
                    file.version, STORE_FORMAT_VERSION
                ),
            });
        }

        tracing::debug!(jots = file.jots.len(), "store_loaded");

        Ok(JotStore {
            path: path.to_path_buf(),
            encoding,
            jots: file.jots,
            dismissed: file.dismissed,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Jots in insertion order; this is the order the analyzer sees
    pub fn jots(&self) -> &[Jot] {
        &self.jots
    }

    pub fn get(&self, id: &str) -> Result<&Jot> {
        self.jots
            .iter()
            .find(|j| j.id == id)
            .ok_or_else(|| JotError::jot_not_found(id))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Jot> {
        self.jots
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| JotError::jot_not_found(id))
    }

    /// Append a jot. Ids must be unique.
    pub fn add(&mut self, jot: Jot) -> Result<&Jot> {
        if self.jots.iter().any(|j| j.id == jot.id) {
            crate::bail_invalid!("jot id", format!("{} already exists", jot.id));
        }
        self.jots.push(jot);
        Ok(&self.jots[self.jots.len() - 1])
    }

    /// Replace a jot's content
    pub fn set_content(&mut self, id: &str, content: &str, now: DateTime<Utc>) -> Result<()> {
        let jot = self.get_mut(id)?;
        if jot.content != content {
            jot.content = content.to_string();
            jot.updated_at = now;
        }
        Ok(())
    }

    /// Delete a jot, returning it. Dismissals that mention it are dropped.
    pub fn remove(&mut self, id: &str) -> Result<Jot> {
        let idx = self.index_of(id)?;
        let removed = self.jots.remove(idx);
        self.forget_dismissals(id);
        tracing::debug!(id, "remove");
        Ok(removed)
    }

    /// Dismissed `(kept, merged)` pairs
    pub fn dismissed(&self) -> &[PairKey] {
        &self.dismissed
    }

    /// Record that `kept`/`merged` should not be suggested again.
    /// Returns false when the pair was already dismissed.
    pub fn dismiss_pair(&mut self, kept: &str, merged: &str) -> Result<bool> {
        self.index_of(kept)?;
        self.index_of(merged)?;
        if kept == merged {
            crate::bail_invalid!("dismiss", format!("{} is the same jot twice", kept));
        }

        let known: HashSet<PairKey> = self.dismissed.iter().cloned().collect();
        if is_dismissed(&known, kept, merged) {
            return Ok(false);
        }
        self.dismissed.push((kept.to_string(), merged.to_string()));
        Ok(true)
    }

    fn forget_dismissals(&mut self, id: &str) {
        self.dismissed.retain(|(a, b)| a != id && b != id);
    }

    pub fn set_pinned(&mut self, id: &str, is_pinned: bool, now: DateTime<Utc>) -> Result<()> {
        let jot = self.get_mut(id)?;
        if jot.is_pinned != is_pinned {
            jot.is_pinned = is_pinned;
            jot.updated_at = now;
        }
        Ok(())
    }

    pub fn attach(&mut self, id: &str, item: MediaItem, now: DateTime<Utc>) -> Result<()> {
        let jot = self.get_mut(id)?;
        jot.media.push(item);
        jot.updated_at = now;
        Ok(())
    }

    /// Fold `merged_id` into `kept_id`: the kept jot is replaced in place by
    /// the merged result and the other jot is removed.
    pub fn apply_merge(
        &mut self,
        kept_id: &str,
        merged_id: &str,
        separator: &str,
        now: DateTime<Utc>,
    ) -> Result<&Jot> {
        let kept_idx = self.index_of(kept_id)?;
        let merged_idx = self.index_of(merged_id)?;

        let result = merge_jots(&self.jots[kept_idx], &self.jots[merged_idx], separator, now)?;
        self.jots[kept_idx] = result;
        self.jots.remove(merged_idx);
        self.forget_dismissals(merged_id);

        tracing::debug!(kept = kept_id, merged = merged_id, "apply_merge");

        let kept_idx = self.index_of(kept_id)?;
        Ok(&self.jots[kept_idx])
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.jots
            .iter()
            .position(|j| j.id == id)
            .ok_or_else(|| JotError::jot_not_found(id))
    }

    /// Pinned first, then most recently updated, then id
    pub fn sorted_for_display(&self) -> Vec<&Jot> {
        let mut jots: Vec<&Jot> = self.jots.iter().collect();
        jots.sort_by(|a, b| {
            (Reverse(a.is_pinned), Reverse(a.updated_at), &a.id).cmp(&(
                Reverse(b.is_pinned),
                Reverse(b.updated_at),
                &b.id,
            ))
        });
        jots
    }

    /// Write the store back to its file, creating parent directories
    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .map_err(|e| JotError::io_operation("create directory", dir.display(), e))?;
            }
        }

        let file = StoreFile {
            version: STORE_FORMAT_VERSION,
            jots: self.jots.clone(),
            dismissed: self.dismissed.clone(),
        };
        let content = match self.encoding {
            Encoding::Json => serde_json::to_string_pretty(&file)?,
            Encoding::Yaml => serde_yaml::to_string(&file)?,
        };

        fs::write(&self.path, content)
            .map_err(|e| JotError::io_operation("write store", self.path.display(), e))?;
        Ok(())
    }
}
