//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or system events.
//! Actions bridge pure state transformations and effectful operations like
//! hiding the plugin pane or opening a media item in an external program.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The plugin runtime
//! executes these actions in sequence via the action processor.

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the action
/// processor. They represent the boundary between pure state transformations
/// and effectful operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,

    /// Opens a media item in the host's default handler.
    ///
    /// Sent when the user presses Enter on a visible item that carries a URL.
    OpenItem {
        /// Location of the media to open.
        url: String,
    },
}
