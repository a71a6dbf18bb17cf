//! Catalog file models for the on-disk JSON format.
//!
//! This module defines the raw catalog file types used for deserialization.
//! These types are separate from domain models to maintain a clear boundary
//! between the file representation and business logic. Entries are lenient:
//! every field is optional, so a partially filled entry still loads, and items
//! with missing fields simply fail the filter predicates closed.

use crate::domain::MediaItem;
use serde::{Deserialize, Serialize};

/// Catalog file container format.
///
/// This is the top-level structure deserialized from disk. Wraps the item list
/// in a single object for better JSON structure and future extensibility.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "items": [
///     {
///       "title": "Sunset Beach",
///       "category": "photo",
///       "url": "https://example.com/sunset.jpg",
///       "size": 2048576,
///       "uploaded_at": 1234567890
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Version of the catalog format for future migrations.
    #[serde(default = "default_version")]
    pub version: u32,

    /// All catalog entries in file order.
    #[serde(default)]
    pub items: Vec<CatalogEntry>,
}

const fn default_version() -> u32 {
    1
}

impl Default for CatalogFile {
    fn default() -> Self {
        Self {
            version: default_version(),
            items: Vec::new(),
        }
    }
}

/// One entry of the catalog file.
///
/// All fields are optional so a malformed or partial entry does not fail the
/// whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display title of the media.
    #[serde(default)]
    pub title: Option<String>,

    /// Category label (e.g. "photo", "video").
    #[serde(default)]
    pub category: Option<String>,

    /// Location of the underlying media.
    #[serde(default)]
    pub url: Option<String>,

    /// Size of the media in bytes.
    #[serde(default)]
    pub size: Option<u64>,

    /// Unix timestamp of the upload.
    #[serde(default)]
    pub uploaded_at: Option<i64>,
}

impl From<CatalogEntry> for MediaItem {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            title: entry.title,
            category: entry.category,
            url: entry.url,
            size: entry.size,
            uploaded_at: entry.uploaded_at,
        }
    }
}
