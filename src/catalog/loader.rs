//! Catalog file loading.
//!
//! This module reads the media catalog from its JSON file and converts the raw
//! entries into domain items. The catalog is read-only: the plugin never
//! writes it back, so loading is a single parse at initialization.
//!
//! # Missing vs. Malformed
//!
//! A missing catalog file yields an empty item list (the plugin shows its
//! empty state). A present but unparsable file is an error, surfaced to the
//! caller so it can be logged; the gallery then stays empty rather than
//! showing a partial or stale list.

use crate::catalog::models::CatalogFile;
use crate::domain::error::{MediashelfError, Result};
use crate::domain::MediaItem;
use std::path::Path;

/// Loads media items from the catalog file at `path`.
///
/// Items are returned newest-first by upload time; entries without a
/// timestamp sort last, keeping their file order.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or contains invalid
/// JSON. A missing file is not an error and yields an empty list.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<MediaItem>> {
    let path = path.as_ref();
    tracing::debug!(path = ?path, "loading catalog");

    if !path.exists() {
        tracing::debug!("catalog file does not exist, starting empty");
        return Ok(vec![]);
    }

    let contents = std::fs::read_to_string(path)?;
    let catalog: CatalogFile = serde_json::from_str(&contents)
        .map_err(|e| MediashelfError::Catalog(format!("failed to parse catalog JSON: {e}")))?;

    tracing::debug!(
        version = catalog.version,
        entry_count = catalog.items.len(),
        "catalog parsed"
    );

    let mut items: Vec<MediaItem> = catalog.items.into_iter().map(MediaItem::from).collect();
    items.sort_by_key(|item| std::cmp::Reverse(item.uploaded_at.unwrap_or(i64::MIN)));

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_catalog(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let items = load_catalog(dir.path().join("catalog.json")).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn invalid_json_is_a_catalog_error() {
        let (_dir, path) = write_catalog("{ not json");
        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, MediashelfError::Catalog(_)));
    }

    #[test]
    fn items_sort_newest_first() {
        let (_dir, path) = write_catalog(
            r#"{
                "version": 1,
                "items": [
                    {"title": "Old Clip", "category": "video", "uploaded_at": 100},
                    {"title": "Sunset Beach", "category": "photo", "uploaded_at": 300},
                    {"title": "No Timestamp", "category": "photo"}
                ]
            }"#,
        );

        let items = load_catalog(&path).unwrap();
        let titles: Vec<&str> = items.iter().map(MediaItem::display_title).collect();
        assert_eq!(titles, vec!["Sunset Beach", "Old Clip", "No Timestamp"]);
    }

    #[test]
    fn partial_entries_load_with_missing_fields() {
        let (_dir, path) = write_catalog(r#"{"items": [{"title": "Orphan"}, {}]}"#);

        let items = load_catalog(&path).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].display_title(), "Orphan");
        assert!(items[0].category.is_none());
        assert!(items[1].title.is_none());
    }

    #[test]
    fn version_defaults_when_omitted() {
        let (_dir, path) = write_catalog(r#"{"items": []}"#);
        assert!(load_catalog(&path).unwrap().is_empty());
    }
}
