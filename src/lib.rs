//! Mediashelf: A Zellij plugin for browsing a media catalog.
//!
//! Mediashelf renders a JSON media catalog as a filterable gallery inside a
//! Zellij pane:
//! - Live case-insensitive substring search over titles and category labels
//! - Category filter tabs with exactly one active tab at a time
//! - Combined filtering: an item is shown only when it passes both the search
//!   term and the active category
//! - Opening the selected item in the host's default handler

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Filter predicate
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                            │
//! ┌───────────────────┐     ┌───────────────────┐
//! │ UI Layer (ui/)    │     │ Catalog (catalog/)│
//! │ - Rendering       │     │ - JSON loading    │
//! │ - Theming         │     │ - File models     │
//! │ - Components      │     │                   │
//! └───────────────────┘     └───────────────────┘
//!         │                            │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Media item model (domain/item)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model and the
//!   search/category filter predicate
//! - [`catalog`]: Read-only JSON catalog loading
//! - [`domain`]: Core domain types (`MediaItem`, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/mediashelf.wasm" {
//!         catalog_path "~/media/catalog.json"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    create `AppState` with theme, request permissions, subscribe to events
//! 2. **Permissions Granted**: read and parse the catalog file, feed the items
//!    to the state via `Event::CatalogLoaded`
//! 3. **UI Rendering**: compute view model from state, render components
//!    (header, filter bar, gallery, footer)
//! 4. **Input**: keys translate to events; search keystrokes and tab switches
//!    recompute visibility for the whole collection at once
//!
//! # Filtering Model
//!
//! Filtering never mutates the loaded items; each item carries a visibility
//! flag recomputed from the full collection on every change. The search term
//! and the active category are independent pieces of state and both always
//! apply, so switching tabs respects the live search term and vice versa.

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, FilterState, InputMode, SearchFocus};
pub use domain::{MediaItem, MediashelfError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/mediashelf.wasm" {
///     catalog_path "~/media/catalog.json"
///     theme "catppuccin-mocha"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to the catalog JSON file.
    ///
    /// Tilde-prefixed paths are expanded against the sandbox `/host` mount.
    /// Default: `/host/.local/share/zellij/mediashelf/catalog.json`
    pub catalog_path: Option<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. This function extracts values with fallback
    /// defaults; empty strings are treated as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use mediashelf::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("catalog_path".to_string(), "~/media/catalog.json".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.catalog_path.as_deref(), Some("~/media/catalog.json"));
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Self {
            catalog_path: non_empty("catalog_path"),
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
        }
    }

    /// Resolves the catalog file path, expanding tildes and falling back to
    /// the default location.
    #[must_use]
    pub fn resolved_catalog_path(&self) -> std::path::PathBuf {
        self.catalog_path.as_deref().map_or_else(
            infrastructure::default_catalog_path,
            |path| std::path::PathBuf::from(infrastructure::expand_tilde(path)),
        )
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with:
/// - Loaded theme (from file, name, or default)
/// - Empty item list (populated once permissions are granted and the catalog
///   is read)
///
/// Tracing is initialized separately via
/// [`observability::init_tracing`] before this call.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing mediashelf plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(theme_file.clone()).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(vec![], theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_treats_empty_values_as_unset() {
        let mut map = BTreeMap::new();
        map.insert("catalog_path".to_string(), "  ".to_string());
        map.insert("theme".to_string(), "catppuccin-frappe".to_string());

        let config = Config::from_zellij(&map);
        assert!(config.catalog_path.is_none());
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-frappe"));
    }

    #[test]
    fn catalog_path_resolution() {
        let config = Config::default();
        assert_eq!(
            config.resolved_catalog_path().to_str().unwrap(),
            "/host/.local/share/zellij/mediashelf/catalog.json"
        );

        let config = Config {
            catalog_path: Some("~/media/catalog.json".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolved_catalog_path().to_str().unwrap(),
            "/host/media/catalog.json"
        );
    }

    #[test]
    fn initialize_falls_back_to_default_theme() {
        let state = initialize(&Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Default::default()
        });
        assert_eq!(state.theme.name, "catppuccin-mocha");
        assert!(state.items.is_empty());
    }
}
