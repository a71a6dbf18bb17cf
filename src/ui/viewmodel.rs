//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like highlight ranges and selection
//! state.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render the plugin UI. The view
/// model is computed from `AppState` and includes pre-processed display items,
/// selection state, and optional UI elements like search bars and empty states.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// List of items to display in the gallery.
    pub display_items: Vec<DisplayItem>,

    /// Index of the currently selected item, relative to `display_items`.
    pub selected_index: usize,

    /// Header information (title, counts).
    pub header: HeaderInfo,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// The category filter tab row. Always present; exactly one tab is active.
    pub filter_bar: FilterBarInfo,

    /// Optional empty state message (when the catalog has no items).
    pub empty_state: Option<EmptyState>,

    /// Optional search bar information (when in search mode).
    pub search_bar: Option<SearchBarInfo>,
}

/// Display information for a single media item.
///
/// Represents one row in the gallery view. Contains pre-computed highlight
/// ranges for substring match rendering.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Item title, truncated for display.
    pub title: String,

    /// Category label.
    pub category: String,

    /// Human-readable size string.
    pub size: String,

    /// Human-readable upload age string.
    pub uploaded: String,

    /// Whether this item is currently selected.
    pub is_selected: bool,

    /// Character ranges of the title to highlight (search term matches).
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header, including visible/total counts.
    pub title: String,
}

/// Footer display information.
///
/// Contains help text and keybinding hints for the bottom of the UI.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "q: quit  /: search").
    pub keybindings: String,
}

/// Category filter tab row display information.
///
/// Invariant: exactly one tab has `is_active` set.
#[derive(Debug, Clone)]
pub struct FilterBarInfo {
    /// Tabs in display order, `"all"` first.
    pub tabs: Vec<FilterTabInfo>,
}

/// One tab of the category filter row.
#[derive(Debug, Clone)]
pub struct FilterTabInfo {
    /// Tab label (the lower-cased category token).
    pub label: String,

    /// Whether this tab is the active filter.
    pub is_active: bool,
}

/// Empty state message display information.
///
/// Shown when the catalog contains no items at all. Filtered-out items do not
/// trigger this state; the gallery simply renders zero rows.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No media found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
///
/// Contains the current search query for rendering the search input box.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text, as typed.
    pub query: String,
}
