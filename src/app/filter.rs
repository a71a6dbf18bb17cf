//! Combined search and category filter predicate.
//!
//! This module implements the filtering contract of the plugin: given the
//! current [`FilterState`] (search term + active category), decide for each
//! [`MediaItem`] whether it is visible. The predicate is pure so it can be
//! tested without a rendering environment; [`crate::app::AppState`] owns the
//! state and applies the predicate to the whole collection atomically.
//!
//! # Visibility Rule
//!
//! An item is visible iff both of the following hold:
//!
//! 1. The search term is empty, OR the item's title or category contains the
//!    term (case-insensitive substring).
//! 2. The active category is `"all"`, OR the item's category equals the
//!    active category (case-insensitive).
//!
//! Items missing a title or category never match a non-empty search term, and
//! items missing a category never match a specific category: malformed
//! catalog entries fail closed rather than erroring.

use crate::domain::MediaItem;

/// Category token that disables category filtering.
pub const CATEGORY_ALL: &str = "all";

/// The current filter selection.
///
/// Both fields are stored lower-cased; they are mutated only by user input
/// events and reset when the plugin reloads. The most recent search input and
/// the most recent category selection together determine the applied
/// predicate (last-write-wins per field).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Lower-cased search term, empty when no search is active.
    pub search_term: String,

    /// Lower-cased active category token, [`CATEGORY_ALL`] by default.
    pub active_category: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            active_category: CATEGORY_ALL.to_string(),
        }
    }
}

impl FilterState {
    /// Stores a new search term, lower-casing the raw input.
    pub fn set_search_term(&mut self, raw: &str) {
        self.search_term = raw.to_lowercase();
    }

    /// Stores a new active category, lower-casing the token.
    pub fn set_active_category(&mut self, token: &str) {
        self.active_category = token.to_lowercase();
    }
}

/// Decides whether an item is visible under the given filter state.
///
/// Pure function implementing the visibility rule above. Both predicates must
/// pass; an empty search term trivially passes the search predicate and the
/// [`CATEGORY_ALL`] token trivially passes the category predicate.
///
/// # Examples
///
/// ```
/// use mediashelf::app::filter::{item_visible, FilterState};
/// use mediashelf::domain::MediaItem;
///
/// let item = MediaItem::new("Sunset Beach", "Photo");
/// let mut filter = FilterState::default();
/// assert!(item_visible(&item, &filter));
///
/// filter.set_search_term("BEACH");
/// assert!(item_visible(&item, &filter));
///
/// filter.set_active_category("video");
/// assert!(!item_visible(&item, &filter));
/// ```
#[must_use]
pub fn item_visible(item: &MediaItem, filter: &FilterState) -> bool {
    matches_search(item, &filter.search_term) && matches_category(item, &filter.active_category)
}

/// Search predicate: empty term passes, otherwise title or category must
/// contain the term. Missing fields fail closed.
fn matches_search(item: &MediaItem, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let (Some(title), Some(category)) = (&item.title, &item.category) else {
        return false;
    };

    contains_term(title, term) || contains_term(category, term)
}

/// Category predicate: `"all"` passes, otherwise the category must match
/// exactly (case-insensitive). Missing category fails closed.
fn matches_category(item: &MediaItem, active: &str) -> bool {
    if active == CATEGORY_ALL {
        return true;
    }

    item.category
        .as_deref()
        .is_some_and(|category| category.to_lowercase() == active)
}

/// Returns whether `text` contains `term` case-insensitively.
fn contains_term(text: &str, term: &str) -> bool {
    !match_ranges(text, term).is_empty()
}

/// Computes character index ranges where `term` occurs in `text`,
/// case-insensitively.
///
/// Ranges are `(start, end)` pairs (exclusive end) in character indices of
/// the original text, suitable for
/// [`crate::ui::helpers::render_highlighted_text`]. Overlapping occurrences
/// are not merged; the scan resumes after each match. Returns an empty vector
/// when the term is empty or never occurs.
///
/// Comparison folds each character individually (first lower-case mapping),
/// keeping indices aligned with the original text.
#[must_use]
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    if term.is_empty() {
        return vec![];
    }

    let haystack: Vec<char> = text.chars().map(fold_char).collect();
    let needle: Vec<char> = term.chars().map(fold_char).collect();

    if needle.len() > haystack.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut pos = 0;

    while pos + needle.len() <= haystack.len() {
        if haystack[pos..pos + needle.len()] == needle[..] {
            ranges.push((pos, pos + needle.len()));
            pos += needle.len();
        } else {
            pos += 1;
        }
    }

    ranges
}

/// Maps a character to its primary lower-case form for comparison.
fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, category: &str) -> MediaItem {
        MediaItem::new(title, category)
    }

    #[test]
    fn empty_search_term_passes_every_item() {
        let filter = FilterState::default();
        assert!(item_visible(&item("Sunset Beach", "Photo"), &filter));
        assert!(item_visible(&item("City Drive", "Video"), &filter));
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut filter = FilterState::default();
        filter.set_search_term("PHOTO");

        // "PHOTO" matches both an item titled "My Photo" and any item whose
        // category label contains "photo".
        assert!(item_visible(&item("My Photo", "Image"), &filter));
        assert!(item_visible(&item("Sunset Beach", "Photo"), &filter));
        assert!(!item_visible(&item("City Drive", "Video"), &filter));
    }

    #[test]
    fn category_match_is_exact_and_case_insensitive() {
        let mut filter = FilterState::default();
        filter.set_active_category("VIDEO");

        assert!(item_visible(&item("City Drive", "Video"), &filter));
        assert!(!item_visible(&item("Sunset Beach", "Photo"), &filter));
        // Substring category labels do not match exactly.
        assert!(!item_visible(&item("Old Clip", "Videos"), &filter));
    }

    #[test]
    fn all_token_disables_category_filtering() {
        let mut filter = FilterState::default();
        filter.set_active_category("video");
        filter.set_active_category(CATEGORY_ALL);

        assert!(item_visible(&item("Sunset Beach", "Photo"), &filter));
        assert!(item_visible(&item("City Drive", "Video"), &filter));
    }

    #[test]
    fn both_predicates_must_pass() {
        let mut filter = FilterState::default();
        filter.set_search_term("beach");
        filter.set_active_category("video");

        // Matches the search but not the category.
        assert!(!item_visible(&item("Sunset Beach", "Photo"), &filter));
        // Matches the category but not the search.
        assert!(!item_visible(&item("City Drive", "Video"), &filter));
    }

    #[test]
    fn missing_fields_fail_search_closed() {
        let mut filter = FilterState::default();
        filter.set_search_term("beach");

        let no_title = MediaItem {
            title: None,
            category: Some("Beach".to_string()),
            url: None,
            size: None,
            uploaded_at: None,
        };
        let no_category = MediaItem {
            title: Some("Sunset Beach".to_string()),
            category: None,
            url: None,
            size: None,
            uploaded_at: None,
        };

        assert!(!item_visible(&no_title, &filter));
        assert!(!item_visible(&no_category, &filter));

        // With an empty term the items pass the search predicate again, but a
        // missing category still fails a specific category filter.
        filter.set_search_term("");
        filter.set_active_category("photo");
        assert!(!item_visible(&no_category, &filter));
    }

    #[test]
    fn match_ranges_finds_case_insensitive_occurrences() {
        assert_eq!(match_ranges("My Photo", "photo"), vec![(3, 8)]);
        assert_eq!(match_ranges("Sunset Beach", "BEACH"), vec![(7, 12)]);
        assert_eq!(match_ranges("aaa", "aa"), vec![(0, 2)]);
        assert!(match_ranges("City Drive", "beach").is_empty());
        assert!(match_ranges("City Drive", "").is_empty());
    }
}
