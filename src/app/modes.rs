//! Input mode state types for the application.
//!
//! This module defines the state machine enums that control user interaction
//! modes. These types determine which keybindings are active and how input is
//! processed.
//!
//! # State Machine
//!
//! The application operates in one of two primary input modes:
//! - **Normal**: Default navigation and command mode
//! - **Search**: Active search with typing or result navigation focus
//!
//! Category filtering is not a mode: the active tab lives in
//! [`crate::app::AppState`] and applies in both input modes.

/// Focus state within search mode.
///
/// Determines whether search input is being typed or search results are being
/// navigated. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is navigating through filtered search results.
    ///
    /// Accepts j/k for movement, enter to open, and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and available commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), / (search), enter (open item),
    /// tab/h/l (switch category), 1-9 (select category), q (quit).
    Normal,

    /// Active search mode with focus state.
    ///
    /// Contains a [`SearchFocus`] variant indicating whether the user is typing
    /// or navigating results. Footer displays search-specific keybindings.
    Search(SearchFocus),
}
