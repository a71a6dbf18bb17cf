//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Mediashelf
//! library and the Zellij plugin system. It implements the `ZellijPlugin`
//! trait to handle Zellij events and lifecycle.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` and `PermissionRequestResult` events
//! 3. **Permissions Granted**: Read the catalog file and populate the gallery
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! Zellij events are translated to library events:
//!
//! - `Key(Down)` → `Event::KeyDown`
//! - `Key(Enter)` → `Event::OpenItem` (in any mode)
//! - `Key(Esc)` → `Event::ExitSearch` (in search mode)
//! - `PermissionRequestResult(Granted)` → `Event::CatalogLoaded { items }`
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! In normal mode:
//! - `j`/`Down`: Move down
//! - `k`/`Up`: Move up
//! - `Enter`: Open selected item
//! - `q`: Close plugin
//! - `/`: Enter search mode
//! - `Tab`/`l`: Next category tab
//! - `h`: Previous category tab
//! - `1`-`9`: Activate category tab by number
//!
//! In search mode:
//! - printable keys: Type characters
//! - `Tab`: Focus the gallery
//! - `Enter`: Open selected item
//! - `Esc`: Exit search
//! - `/`: Return to search input

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::path::PathBuf;
use zellij_tile::prelude::*;

use mediashelf::{handle_event, Action, Config, Event, InputMode, SearchFocus};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns like the
/// resolved catalog location.
struct State {
    /// Core application state from library layer.
    app: mediashelf::app::AppState,

    /// Resolved path to the catalog file.
    catalog_path: PathBuf,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: mediashelf::initialize(&default_config),
            catalog_path: default_config.resolved_catalog_path(),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// application state, requests permissions, and subscribes to events. The
    /// catalog is not read here: filesystem access requires granted
    /// permissions first.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `FullHdAccess`: Read the catalog file via the `/host` mount
    /// - `RunCommands`: Open media items with `xdg-open`
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        mediashelf::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        tracing::debug!(catalog_path = ?config.catalog_path, "parsed configuration");
        self.app = mediashelf::initialize(&config);
        self.catalog_path = config.resolved_catalog_path();
        tracing::debug!("app state initialized");

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::FullHdAccess, PermissionType::RunCommands]);

        tracing::debug!("subscribing to events");
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to `handle_event`,
    /// and executes resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        tracing::debug!(event = %event_name, "processing event");

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                match self.map_permission_result(permissions) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        mediashelf::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        let typing = self.app.input_mode == InputMode::Search(SearchFocus::Typing);

        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Char('j') if !typing => Event::KeyDown,
            BareKey::Char('k') if !typing => Event::KeyUp,
            BareKey::Esc => match self.app.input_mode {
                InputMode::Search(_) => Event::ExitSearch,
                InputMode::Normal => Event::Escape,
            },
            BareKey::Char('q') if self.app.input_mode == InputMode::Normal => Event::CloseFocus,
            BareKey::Enter => Event::OpenItem,
            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(_) => Event::FocusSearchBar,
            },
            BareKey::Tab => match self.app.input_mode {
                InputMode::Normal => Event::NextCategory,
                InputMode::Search(_) => Event::FocusResults,
            },
            BareKey::Char('l') if !typing => Event::NextCategory,
            BareKey::Char('h') if !typing => Event::PrevCategory,
            BareKey::Char(c @ '1'..='9') if self.app.input_mode == InputMode::Normal => {
                Event::SelectCategory(c as usize - '1' as usize)
            }
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Maps permission request results to application events.
    ///
    /// On grant, reads the catalog synchronously; the file is small and read
    /// exactly once per plugin load.
    fn map_permission_result(&self, permissions: PermissionStatus) -> Option<Event> {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!(path = ?self.catalog_path, "permissions granted - reading catalog");
                match mediashelf::catalog::load_catalog(&self.catalog_path) {
                    Ok(items) => Some(Event::CatalogLoaded { items }),
                    Err(e) => Some(Event::CatalogFailed {
                        error: e.to_string(),
                    }),
                }
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - plugin functionality limited");
                None
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Close plugin pane
    /// - `OpenItem`: Open the media URL via `xdg-open` and close the plugin
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::OpenItem { ref url } => {
                tracing::debug!(url = %url, "opening media item");
                run_command(&["xdg-open", url.as_str()], BTreeMap::new());
                hide_self();
            }
        }
    }
}
