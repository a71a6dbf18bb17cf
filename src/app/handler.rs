//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input and
//! catalog load results, translating them into state changes and action
//! sequences. It serves as the primary control flow coordinator for the
//! application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Navigation**: `KeyDown`, `KeyUp`, `OpenItem`
//! - **Input**: `Char`, `Backspace`, `Escape`
//! - **Mode Switching**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`
//! - **Category Tabs**: `SelectCategory`, `NextCategory`, `PrevCategory`
//! - **System**: `CatalogLoaded`, `CatalogFailed`

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::MediaItem;

/// Events triggered by user input or catalog loading.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Opens the currently highlighted item.
    OpenItem,
    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the gallery (from typing mode).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears search query and returns to normal mode.
    Escape,

    /// Activates the filter tab at the given index, deactivating all others.
    SelectCategory(usize),
    /// Activates the next filter tab, wrapping around.
    NextCategory,
    /// Activates the previous filter tab, wrapping around.
    PrevCategory,

    /// Reports items loaded from the catalog file.
    ///
    /// Triggered once after the host grants filesystem access. Replaces the
    /// item list and rebuilds the category tab row.
    CatalogLoaded {
        /// Items parsed from the catalog, newest first.
        items: Vec<MediaItem>,
    },

    /// Reports catalog load failure.
    ///
    /// Logged but does not affect application state; the gallery stays empty.
    /// The user can fix the catalog file and reopen the plugin.
    CatalogFailed {
        /// Error message describing the failure.
        error: String,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler that coordinates all state transitions and
/// side effects. It pattern-matches on event types, calls state mutation methods,
/// and collects actions to be executed by the plugin runtime.
///
/// # Returns
///
/// A tuple of (`should_render`, actions). The boolean requests a re-render;
/// the action vector may be empty if the event requires no side effects.
///
/// # Errors
///
/// Returns errors from state mutation methods. The current event set never
/// fails, but the signature keeps the handler composable with fallible
/// operations.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::unnecessary_wraps)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::OpenItem => {
            use super::modes::InputMode;

            let Some(item) = state.selected_item() else {
                tracing::debug!("no item selected");
                if matches!(state.input_mode, InputMode::Search(_)) {
                    tracing::debug!("exiting search mode (no selection)");
                    state.input_mode = InputMode::Normal;
                    state.clear_search();
                    return Ok((true, vec![]));
                }
                return Ok((false, vec![]));
            };

            let Some(url) = item.url.clone() else {
                tracing::debug!(title = %item.display_title(), "selected item has no url");
                return Ok((false, vec![]));
            };

            tracing::debug!(title = %item.display_title(), url = %url, "opening item");
            Ok((false, vec![Action::OpenItem { url }]))
        }
        Event::SearchMode => {
            use super::modes::{InputMode, SearchFocus};
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.clear_search();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            use super::modes::{InputMode, SearchFocus};
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            use super::modes::{InputMode, SearchFocus};

            if state.search_input.is_empty() {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            use super::modes::InputMode;
            tracing::debug!(query = %state.search_input, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.clear_search();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            use super::modes::InputMode;

            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.push_search_char(*c);

            tracing::trace!(query = %state.search_input, char = %c, "search query updated");

            Ok((true, vec![]))
        }
        Event::Backspace => {
            use super::modes::InputMode;
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.pop_search_char();

            Ok((true, vec![]))
        }
        Event::Escape => {
            use super::modes::InputMode;
            state.input_mode = InputMode::Normal;

            state.clear_search();

            Ok((true, vec![]))
        }
        Event::SelectCategory(index) => {
            state.select_category(*index);
            Ok((true, vec![]))
        }
        Event::NextCategory => {
            state.next_category();
            Ok((true, vec![]))
        }
        Event::PrevCategory => {
            state.prev_category();
            Ok((true, vec![]))
        }
        Event::CatalogLoaded { items } => {
            tracing::debug!(item_count = items.len(), "catalog loaded");
            state.set_catalog(items.clone());
            Ok((true, vec![]))
        }
        Event::CatalogFailed { error } => {
            tracing::error!(error = %error, "catalog load failed");
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{InputMode, SearchFocus};
    use crate::ui::theme::Theme;

    fn loaded_state() -> AppState {
        let mut item = MediaItem::new("Sunset Beach", "Photo");
        item.url = Some("https://example.com/sunset.jpg".to_string());
        AppState::new(vec![item, MediaItem::new("City Drive", "Video")], Theme::default())
    }

    #[test]
    fn chars_only_apply_in_search_mode() {
        let mut state = loaded_state();

        let (rendered, actions) = handle_event(&mut state, &Event::Char('b')).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
        assert!(state.search_input.is_empty());

        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('b')).unwrap();
        assert_eq!(state.search_input, "b");
    }

    #[test]
    fn escape_clears_query_and_restores_visibility() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "beach".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        assert_eq!(state.visible_count(), 1);

        handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.visible_count(), 2);
    }

    #[test]
    fn focus_results_with_empty_query_leaves_search() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);

        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('c')).unwrap();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
    }

    #[test]
    fn open_item_emits_action_only_with_url() {
        let mut state = loaded_state();

        let (_, actions) = handle_event(&mut state, &Event::OpenItem).unwrap();
        assert_eq!(
            actions,
            vec![Action::OpenItem {
                url: "https://example.com/sunset.jpg".to_string()
            }]
        );

        // The second item carries no url.
        handle_event(&mut state, &Event::KeyDown).unwrap();
        let (rendered, actions) = handle_event(&mut state, &Event::OpenItem).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
    }

    #[test]
    fn category_events_drive_the_tab_row() {
        let mut state = loaded_state();

        handle_event(&mut state, &Event::NextCategory).unwrap();
        assert_eq!(state.filter.active_category, "photo");

        handle_event(&mut state, &Event::PrevCategory).unwrap();
        assert_eq!(state.filter.active_category, "all");

        handle_event(&mut state, &Event::SelectCategory(2)).unwrap();
        assert_eq!(state.filter.active_category, "video");
        assert_eq!(state.visible_count(), 1);
    }

    #[test]
    fn catalog_events_replace_items_and_tolerate_failure() {
        let mut state = AppState::new(vec![], Theme::default());
        assert_eq!(state.categories, vec!["all"]);

        let (rendered, _) = handle_event(
            &mut state,
            &Event::CatalogLoaded {
                items: vec![MediaItem::new("Harbor Night", "Photo")],
            },
        )
        .unwrap();
        assert!(rendered);
        assert_eq!(state.categories, vec!["all", "photo"]);
        assert_eq!(state.visible_count(), 1);

        let (rendered, actions) = handle_event(
            &mut state,
            &Event::CatalogFailed {
                error: "parse error".to_string(),
            },
        )
        .unwrap();
        assert!(rendered);
        assert!(actions.is_empty());
        assert_eq!(state.visible_count(), 1);
    }

    #[test]
    fn quit_emits_close_focus() {
        let mut state = loaded_state();
        let (rendered, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!rendered);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
