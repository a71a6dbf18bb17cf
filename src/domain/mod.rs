//! Domain layer for the Mediashelf plugin.
//!
//! This module contains the core domain types for the plugin, independent of
//! Zellij-specific APIs or infrastructure concerns. It follows domain-driven
//! design principles by keeping business rules isolated from external
//! dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Media item domain model and display formatting
//!
//! # Examples
//!
//! ```
//! use mediashelf::domain::{MediaItem, Result};
//!
//! fn first_photo(items: &[MediaItem]) -> Option<&MediaItem> {
//!     items.iter().find(|i| i.category.as_deref() == Some("photo"))
//! }
//! ```

pub mod error;
pub mod item;

pub use error::{MediashelfError, Result};
pub use item::MediaItem;
