//! Read-only media catalog loading.
//!
//! This module owns the on-disk catalog format and its loading logic. The
//! catalog is a JSON file read once at plugin initialization; the plugin never
//! writes it.
//!
//! # Modules
//!
//! - [`models`]: Raw catalog file types (serde)
//! - [`loader`]: File reading, parsing, and conversion to domain items

pub mod loader;
pub mod models;

pub use loader::load_catalog;
pub use models::{CatalogEntry, CatalogFile};
