//! Media item domain model and display formatting.
//!
//! This module defines the core `MediaItem` type representing one entry of the
//! rendered gallery. The two fields the filter predicate matches against (title
//! and category) are optional: catalog entries can be malformed, and an item
//! missing either field fails the search predicate closed instead of erroring.

use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Number of bytes in one kibibyte.
const BYTES_PER_KB: u64 = 1024;

/// Number of bytes in one mebibyte.
const BYTES_PER_MB: u64 = 1024 * 1024;

/// Represents one entry of the media gallery.
///
/// Items are produced by the catalog loader at plugin initialization and are
/// fixed for the session; an item's identity is its position in the loaded
/// collection. Only `title` and `category` participate in filtering, the
/// remaining fields are presentation metadata.
///
/// # Fields
///
/// - `title`: Display title, `None` if the catalog entry omitted it
/// - `category`: Category label (e.g. `"photo"`, `"video"`), `None` if omitted
/// - `url`: Location of the underlying media, opened on selection
/// - `size`: Size of the media in bytes, if known
/// - `uploaded_at`: Unix timestamp of the upload, if known
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub title: Option<String>,
    pub category: Option<String>,
    pub url: Option<String>,
    pub size: Option<u64>,
    pub uploaded_at: Option<i64>,
}

impl MediaItem {
    /// Creates a new item with the given title and category.
    ///
    /// The remaining metadata fields are set to `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediashelf::domain::MediaItem;
    ///
    /// let item = MediaItem::new("Sunset Beach", "Photo");
    /// assert_eq!(item.title.as_deref(), Some("Sunset Beach"));
    /// assert!(item.size.is_none());
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            category: Some(category.into()),
            url: None,
            size: None,
            uploaded_at: None,
        }
    }

    /// Returns the title for display, falling back to a placeholder.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(untitled)")
    }

    /// Returns the category label for display, falling back to a placeholder.
    #[must_use]
    pub fn display_category(&self) -> &str {
        self.category.as_deref().unwrap_or("-")
    }

    /// Returns a human-readable size string (`512 B`, `1.5 KB`, `2.3 MB`).
    ///
    /// Returns `"-"` when the size is unknown.
    #[must_use]
    pub fn display_size(&self) -> String {
        #[allow(clippy::cast_precision_loss)]
        match self.size {
            None => "-".to_string(),
            Some(size) if size < BYTES_PER_KB => format!("{size} B"),
            Some(size) if size < BYTES_PER_MB => {
                format!("{:.1} KB", size as f64 / BYTES_PER_KB as f64)
            }
            Some(size) => format!("{:.1} MB", size as f64 / BYTES_PER_MB as f64),
        }
    }

    /// Returns a human-readable string describing how long ago the item was uploaded.
    ///
    /// The format varies based on the time elapsed:
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago" (e.g., "5m ago")
    /// - Less than 1 day: "Xh ago" (e.g., "3h ago")
    /// - 1 day or more: "Xd ago" (e.g., "7d ago")
    ///
    /// Returns `"-"` when the upload time is unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediashelf::domain::MediaItem;
    ///
    /// let mut item = MediaItem::new("Sunset Beach", "Photo");
    /// item.uploaded_at = Some(chrono::Utc::now().timestamp() - 300);
    /// assert_eq!(item.time_ago(), "5m ago");
    /// ```
    #[must_use]
    pub fn time_ago(&self) -> String {
        let Some(uploaded_at) = self.uploaded_at else {
            return "-".to_string();
        };

        let now = chrono::Utc::now().timestamp();
        let diff = now - uploaded_at;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_title_falls_back_on_missing_field() {
        let item = MediaItem {
            title: None,
            category: Some("photo".to_string()),
            url: None,
            size: None,
            uploaded_at: None,
        };
        assert_eq!(item.display_title(), "(untitled)");
    }

    #[test]
    fn display_size_formats_units() {
        let mut item = MediaItem::new("clip", "video");
        assert_eq!(item.display_size(), "-");

        item.size = Some(512);
        assert_eq!(item.display_size(), "512 B");

        item.size = Some(1536);
        assert_eq!(item.display_size(), "1.5 KB");

        item.size = Some(3 * 1024 * 1024);
        assert_eq!(item.display_size(), "3.0 MB");
    }

    #[test]
    fn time_ago_buckets_by_elapsed_time() {
        let now = chrono::Utc::now().timestamp();
        let mut item = MediaItem::new("clip", "video");
        assert_eq!(item.time_ago(), "-");

        item.uploaded_at = Some(now - 10);
        assert_eq!(item.time_ago(), "just now");

        item.uploaded_at = Some(now - 5 * 60);
        assert_eq!(item.time_ago(), "5m ago");

        item.uploaded_at = Some(now - 3 * 3600);
        assert_eq!(item.time_ago(), "3h ago");

        item.uploaded_at = Some(now - 2 * 86400);
        assert_eq!(item.time_ago(), "2d ago");
    }
}
