//! Jot model
//!
//! A [`Jot`] is a plain value snapshot. The analyzer only ever borrows a slice
//! of them; edits, pinning and merges happen in the store and produce new
//! values.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Jot identifier
pub type JotId = String;

/// Generate a fresh identifier
pub fn new_id() -> JotId {
    ulid::Ulid::new().to_string()
}

/// A single captured note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jot {
    pub id: JotId,
    pub content: String,
    #[serde(default)]
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<MediaItem>,
}

impl Jot {
    /// Create an unpinned jot stamped with the current time
    pub fn new(content: impl Into<String>) -> Self {
        let now = Utc::now();
        Jot {
            id: new_id(),
            content: content.into(),
            is_pinned: false,
            created_at: now,
            updated_at: now,
            media: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<JotId>) -> Self {
        self.id = id.into();
        self
    }

    /// Override both timestamps
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = created_at;
        self
    }

    pub fn with_media(mut self, media: Vec<MediaItem>) -> Self {
        self.media = media;
        self
    }

    pub fn pinned(mut self, is_pinned: bool) -> Self {
        self.is_pinned = is_pinned;
        self
    }

    /// Text up to the first newline
    pub fn first_line(&self) -> &str {
        crate::text::first_line(&self.content)
    }

    /// First `limit` characters, with `...` appended when truncated
    pub fn preview(&self, limit: usize) -> String {
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(limit).collect();
        if chars.next().is_some() {
            format!("{}...", head)
        } else {
            head
        }
    }
}

/// Kind of attached media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a file by its guessed MIME type
    pub fn from_path(path: &Path) -> Result<Self> {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        match mime.type_().as_str() {
            "image" => Ok(MediaKind::Image),
            "video" => Ok(MediaKind::Video),
            _ => crate::bail_unsupported!("media type", mime.essence_str(), "image/*, video/*"),
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// Attachment carried by a jot. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub kind: MediaKind,
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
    #[serde(
        default,
        with = "base64_bytes_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail: Option<Vec<u8>>,
    pub created_at: DateTime<Utc>,
}

impl MediaItem {
    pub fn new(kind: MediaKind, data: Vec<u8>) -> Self {
        MediaItem {
            id: new_id(),
            kind,
            data,
            thumbnail: None,
            created_at: Utc::now(),
        }
    }

    /// Read a media file from disk, classifying it by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let kind = MediaKind::from_path(path)?;
        let data = std::fs::read(path)
            .map_err(|e| crate::error::JotError::io_operation("read", path.display(), e))?;
        Ok(MediaItem::new(kind, data))
    }
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}

mod base64_bytes_opt {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        bytes: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match bytes {
            Some(b) => serializer.serialize_some(&STANDARD.encode(b)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(encoded) => STANDARD
                .decode(encoded.as_bytes())
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
