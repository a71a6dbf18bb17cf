//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, along with methods for filtering, selection management, and UI view
//! model generation. It serves as the single source of truth for all transient
//! UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the loaded media items, the category tab
//! row) from derived state (per-item visibility flags, selected index) to
//! maintain consistency and simplify state transitions. View models are
//! computed on-demand from state snapshots.
//!
//! # State Components
//!
//! - **Items**: Master list of media items loaded from the catalog, fixed for
//!   the session; an item's identity is its position in this list
//! - **Visibility**: One flag per item, recomputed as a whole by
//!   [`AppState::apply_filters`] on every filter change (never partially)
//! - **Categories**: The filter tab row, `"all"` plus the distinct categories
//!   found in the catalog; exactly one tab is active at any time
//! - **Selection**: Current cursor position within the visible items
//! - **Input Mode**: Controls keybinding interpretation and UI layout

use super::filter::{self, FilterState, CATEGORY_ALL};
use super::modes::{InputMode, SearchFocus};
use crate::domain::MediaItem;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FilterBarInfo, FilterTabInfo, FooterInfo, HeaderInfo, SearchBarInfo,
    UIViewModel,
};

/// Central application state container.
///
/// Holds all transient UI state including the item list, filter selection,
/// cursor position, and mode information. Mutated by the event handler in
/// response to user input; view models are computed on-demand from state
/// snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Master list of media items loaded from the catalog.
    ///
    /// Fixed for the session once loaded. Ordered newest-first by the catalog
    /// loader.
    pub items: Vec<MediaItem>,

    /// Per-item visibility flags, parallel to `items`.
    ///
    /// Recomputed atomically by [`apply_filters`](Self::apply_filters); no
    /// partially updated state is ever observable.
    pub visibility: Vec<bool>,

    /// Filter tab tokens: `"all"` followed by the distinct lower-cased
    /// categories present in the catalog, sorted.
    pub categories: Vec<String>,

    /// Index of the active tab within `categories`.
    ///
    /// Exactly one tab is active by construction.
    pub active_category_index: usize,

    /// The combined search/category filter selection.
    pub filter: FilterState,

    /// Raw search text as typed, for search bar display.
    ///
    /// The lower-cased form lives in `filter.search_term`.
    pub search_input: String,

    /// Zero-based cursor position within the visible items.
    ///
    /// Clamped to valid bounds by `apply_filters()`. Wraps around during
    /// navigation via `move_selection_up/down()`.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state with initial items and theme.
    ///
    /// Derives the category tab row from the items and computes initial
    /// visibility (everything visible under the default filter).
    #[must_use]
    pub fn new(items: Vec<MediaItem>, theme: Theme) -> Self {
        let mut state = Self {
            items: vec![],
            visibility: vec![],
            categories: vec![CATEGORY_ALL.to_string()],
            active_category_index: 0,
            filter: FilterState::default(),
            search_input: String::new(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            theme,
        };
        state.set_catalog(items);
        state
    }

    /// Replaces the item list and rebuilds the category tab row.
    ///
    /// Called once when the catalog finishes loading. If the previously active
    /// category is no longer present, the selection falls back to `"all"`.
    /// Visibility is recomputed for the new collection.
    pub fn set_catalog(&mut self, items: Vec<MediaItem>) {
        self.items = items;
        self.categories = Self::derive_categories(&self.items);

        let previous = self.filter.active_category.clone();
        self.active_category_index = self
            .categories
            .iter()
            .position(|token| *token == previous)
            .unwrap_or(0);
        self.filter
            .set_active_category(&self.categories[self.active_category_index].clone());

        self.apply_filters();
    }

    /// Builds the tab row: `"all"` plus the distinct lower-cased categories
    /// present in the items, sorted. Items without a category contribute
    /// nothing.
    fn derive_categories(items: &[MediaItem]) -> Vec<String> {
        let mut distinct: Vec<String> = items
            .iter()
            .filter_map(|item| item.category.as_deref())
            .map(str::to_lowercase)
            .collect();
        distinct.sort();
        distinct.dedup();

        let mut categories = Vec::with_capacity(distinct.len() + 1);
        categories.push(CATEGORY_ALL.to_string());
        categories.extend(distinct);
        categories
    }

    /// Appends a character to the search input and re-applies the filters.
    pub fn push_search_char(&mut self, c: char) {
        self.search_input.push(c);
        self.store_search_term();
    }

    /// Removes the last character of the search input and re-applies the filters.
    pub fn pop_search_char(&mut self) {
        self.search_input.pop();
        self.store_search_term();
    }

    /// Clears the search input and re-applies the filters.
    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.store_search_term();
    }

    /// Lower-cases the current input into the filter state and recomputes.
    fn store_search_term(&mut self) {
        let raw = self.search_input.clone();
        self.filter.set_search_term(&raw);
        self.apply_filters();
    }

    /// Activates the filter tab at `index`, deactivating all others.
    ///
    /// Stores the tab's token as the active category and recomputes visibility
    /// using the current search term. Out-of-range indices are ignored.
    pub fn select_category(&mut self, index: usize) {
        if index >= self.categories.len() {
            tracing::debug!(index, tabs = self.categories.len(), "category index out of range");
            return;
        }

        self.active_category_index = index;
        let token = self.categories[index].clone();
        self.filter.set_active_category(&token);
        self.apply_filters();
    }

    /// Activates the next filter tab, wrapping to the first.
    pub fn next_category(&mut self) {
        let next = (self.active_category_index + 1) % self.categories.len();
        self.select_category(next);
    }

    /// Activates the previous filter tab, wrapping to the last.
    pub fn prev_category(&mut self) {
        let prev = if self.active_category_index == 0 {
            self.categories.len() - 1
        } else {
            self.active_category_index - 1
        };
        self.select_category(prev);
    }

    /// Recomputes visibility for every item under the current filter state.
    ///
    /// All items are re-evaluated together in a single pass, so no partial
    /// update is ever observable, and the operation is idempotent. Clamps the
    /// selection to the new visible bounds afterwards.
    ///
    /// # Tracing
    ///
    /// Creates a debug-level span with total items, term length, and the
    /// active category.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!("apply_filters",
            total_items = self.items.len(),
            term_len = self.filter.search_term.len(),
            active_category = %self.filter.active_category,
        )
        .entered();

        self.visibility = self
            .items
            .iter()
            .map(|item| filter::item_visible(item, &self.filter))
            .collect();

        let visible = self.visible_count();
        if visible == 0 {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(visible - 1);
        }

        tracing::debug!(visible_count = visible, "filters applied");
    }

    /// Number of currently visible items.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visibility.iter().filter(|v| **v).count()
    }

    /// Iterates over the visible items in catalog order.
    pub fn visible_items(&self) -> impl Iterator<Item = &MediaItem> {
        self.items
            .iter()
            .zip(self.visibility.iter())
            .filter_map(|(item, visible)| visible.then_some(item))
    }

    /// Moves the cursor down by one visible item, wrapping to the top.
    ///
    /// No-op if nothing is visible.
    pub fn move_selection_down(&mut self) {
        let visible = self.visible_count();
        if visible == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % visible;
    }

    /// Moves the cursor up by one visible item, wrapping to the bottom.
    ///
    /// No-op if nothing is visible.
    pub fn move_selection_up(&mut self) {
        let visible = self.visible_count();
        if visible == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = visible - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns a reference to the currently selected item, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&MediaItem> {
        self.visible_items().nth(self.selected_index)
    }

    /// Computes a renderable UI view model from current state and terminal
    /// dimensions.
    ///
    /// Handles windowing (showing a subset of visible items centered on the
    /// selection), substring match highlighting, and the empty-catalog state.
    /// When filters hide every item the gallery simply renders zero rows; the
    /// tab row and search bar stay available.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let empty_state = if self.items.is_empty() {
            Some(EmptyState {
                message: "No media found".to_string(),
                subtitle: "Add items to the catalog file and reopen the plugin".to_string(),
            })
        } else {
            None
        };

        let visible: Vec<&MediaItem> = self.visible_items().collect();

        let available_rows = self.calculate_available_rows(rows);
        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(visible.len());

        let actual_count = visible_end.saturating_sub(visible_start);
        if actual_count < available_rows && visible.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let highlight_term = if matches!(self.input_mode, InputMode::Search(_))
            && !self.filter.search_term.is_empty()
        {
            Some(self.filter.search_term.as_str())
        } else {
            None
        };

        let display_items: Vec<DisplayItem> = visible[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, item)| {
                let absolute_idx = visible_start + relative_idx;
                Self::compute_display_item(item, absolute_idx == self.selected_index, highlight_term)
            })
            .collect();

        UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_header(),
            footer: self.compute_footer(),
            filter_bar: self.compute_filter_bar(),
            empty_state,
            search_bar: self.compute_search_bar(),
        }
    }

    /// Computes a display item for one visible row.
    ///
    /// Handles title truncation and substring match highlighting.
    fn compute_display_item(
        item: &MediaItem,
        is_selected: bool,
        highlight_term: Option<&str>,
    ) -> DisplayItem {
        let full_title = item.display_title();
        let title = if full_title.chars().count() > 35 {
            let prefix: String = full_title.chars().take(32).collect();
            format!("{prefix}...")
        } else {
            full_title.to_string()
        };

        let highlight_ranges = highlight_term
            .map_or_else(Vec::new, |term| filter::match_ranges(&title, term));

        DisplayItem {
            title,
            category: item.display_category().to_string(),
            size: item.display_size(),
            uploaded: item.time_ago(),
            is_selected,
            highlight_ranges,
        }
    }

    /// Computes header information: title with visible/total counts.
    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Media Library ({}/{}) ", self.visible_count(), self.items.len()),
        }
    }

    /// Computes footer keybindings text based on the current input mode.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: open  Ctrl+n/p: navigate  Type to filter".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k or Ctrl+n/p: navigate  Enter: open".to_string()
            }
            InputMode::Normal => {
                "j/k: navigate  Tab/h/l: category  1-9: tab  /: search  Enter: open  q: quit"
                    .to_string()
            }
        };

        FooterInfo { keybindings }
    }

    /// Computes the filter tab row with exactly one active tab.
    fn compute_filter_bar(&self) -> FilterBarInfo {
        let tabs = self
            .categories
            .iter()
            .enumerate()
            .map(|(index, token)| FilterTabInfo {
                label: token.clone(),
                is_active: index == self.active_category_index,
            })
            .collect();

        FilterBarInfo { tabs }
    }

    /// Computes search bar state if in search mode.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.search_input.clone(),
            })
        } else {
            None
        }
    }

    /// Calculates available rows for the gallery after subtracting UI chrome.
    ///
    /// Accounts for the blank top line, header, borders, filter tab row,
    /// column headers, footer, and the search box (3 rows) when active.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(7),
            InputMode::Search(_) => total_rows.saturating_sub(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<MediaItem> {
        vec![
            MediaItem::new("Sunset Beach", "Photo"),
            MediaItem::new("City Drive", "Video"),
        ]
    }

    fn state_with(items: Vec<MediaItem>) -> AppState {
        AppState::new(items, Theme::default())
    }

    fn visible_titles(state: &AppState) -> Vec<&str> {
        state.visible_items().map(MediaItem::display_title).collect()
    }

    #[test]
    fn everything_visible_under_default_filter() {
        let state = state_with(sample_items());
        assert_eq!(visible_titles(&state), vec!["Sunset Beach", "City Drive"]);
    }

    #[test]
    fn categories_derived_from_catalog() {
        let state = state_with(sample_items());
        assert_eq!(state.categories, vec!["all", "photo", "video"]);
        assert_eq!(state.active_category_index, 0);
    }

    #[test]
    fn search_then_category_then_all_matches_combined_predicate() {
        let mut state = state_with(sample_items());

        // Search "beach": only the photo remains.
        for c in "beach".chars() {
            state.push_search_char(c);
        }
        assert_eq!(visible_titles(&state), vec!["Sunset Beach"]);

        // Activating "video" keeps the search term applied, so nothing passes
        // the combined predicate.
        let video = state.categories.iter().position(|t| t == "video").unwrap();
        state.select_category(video);
        assert_eq!(state.visible_count(), 0);

        // Back to "all": the search term alone decides again.
        state.select_category(0);
        assert_eq!(visible_titles(&state), vec!["Sunset Beach"]);
    }

    #[test]
    fn category_filter_hides_other_categories() {
        let mut state = state_with(sample_items());
        let video = state.categories.iter().position(|t| t == "video").unwrap();
        state.select_category(video);
        assert_eq!(visible_titles(&state), vec!["City Drive"]);
    }

    #[test]
    fn apply_filters_is_idempotent() {
        let mut state = state_with(sample_items());
        for c in "photo".chars() {
            state.push_search_char(c);
        }

        let first = state.visibility.clone();
        state.apply_filters();
        assert_eq!(state.visibility, first);
    }

    #[test]
    fn exactly_one_tab_active_after_any_selection() {
        let mut state = state_with(sample_items());

        for index in [2, 0, 1, 1] {
            state.select_category(index);
            let bar = state.compute_filter_bar();
            let active = bar.tabs.iter().filter(|tab| tab.is_active).count();
            assert_eq!(active, 1);
        }

        // Out-of-range selection leaves the active tab untouched.
        state.select_category(99);
        let bar = state.compute_filter_bar();
        assert_eq!(bar.tabs.iter().filter(|tab| tab.is_active).count(), 1);
        assert!(bar.tabs[1].is_active);
    }

    #[test]
    fn tab_cycling_wraps_both_directions() {
        let mut state = state_with(sample_items());

        state.prev_category();
        assert_eq!(state.active_category_index, 2);
        state.next_category();
        assert_eq!(state.active_category_index, 0);
    }

    #[test]
    fn selection_clamps_when_filter_shrinks_the_list() {
        let mut state = state_with(vec![
            MediaItem::new("Sunset Beach", "Photo"),
            MediaItem::new("Harbor Night", "Photo"),
            MediaItem::new("City Drive", "Video"),
        ]);

        state.move_selection_down();
        state.move_selection_down();
        assert_eq!(state.selected_index, 2);

        for c in "beach".chars() {
            state.push_search_char(c);
        }
        assert_eq!(state.visible_count(), 1);
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_item().unwrap().display_title(), "Sunset Beach");
    }

    #[test]
    fn selection_wraps_over_visible_items() {
        let mut state = state_with(sample_items());

        state.move_selection_up();
        assert_eq!(state.selected_index, 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn malformed_item_never_matches_search() {
        let broken = MediaItem {
            title: Some("Sunset Beach".to_string()),
            category: None,
            url: None,
            size: None,
            uploaded_at: None,
        };
        let mut state = state_with(vec![broken]);

        for c in "beach".chars() {
            state.push_search_char(c);
        }
        assert_eq!(state.visible_count(), 0);

        state.clear_search();
        assert_eq!(state.visible_count(), 1);
    }

    #[test]
    fn viewmodel_reports_counts_and_empty_state() {
        let state = state_with(vec![]);
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.empty_state.is_some());
        assert!(vm.display_items.is_empty());

        let mut state = state_with(sample_items());
        for c in "beach".chars() {
            state.push_search_char(c);
        }
        let vm = state.compute_viewmodel(24, 80);
        // Hidden items are excluded from the gallery, not the whole UI.
        assert!(vm.empty_state.is_none());
        assert_eq!(vm.display_items.len(), 1);
        assert_eq!(vm.header.title, " Media Library (1/2) ");
    }

    #[test]
    fn viewmodel_highlights_matches_only_in_search_mode() {
        let mut state = state_with(sample_items());
        for c in "beach".chars() {
            state.push_search_char(c);
        }

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.display_items[0].highlight_ranges.is_empty());

        state.input_mode = InputMode::Search(SearchFocus::Typing);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(7, 12)]);
    }
}
