//! Path manipulation utilities for Zellij sandbox environment.
//!
//! This module provides functions for working with filesystem paths in the Zellij
//! plugin sandbox, where the host filesystem is mounted under `/host`. It handles
//! tilde expansion and catalog location management.

use std::path::PathBuf;

/// Returns the data directory for Mediashelf.
///
/// The directory is located at `/host/.local/share/zellij/mediashelf` in the
/// Zellij sandbox. In Zellij's plugin environment, `/host` points to the cwd of
/// the last focused terminal, or the folder where Zellij was started if that's
/// not available.
///
/// This typically resolves to the user's home directory when Zellij is started
/// from a home directory terminal, making the actual path
/// `~/.local/share/zellij/mediashelf`. The catalog file `catalog.json` is
/// located within this directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("mediashelf")
}

/// Returns the default catalog file path.
#[must_use]
pub fn default_catalog_path() -> PathBuf {
    get_data_dir().join("catalog.json")
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// In the Zellij sandbox environment, the host's home directory (`~`) maps to
/// `/host`. This function converts tilde-prefixed paths to their sandbox
/// equivalents.
///
/// # Examples
///
/// ```
/// use mediashelf::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/media/catalog.json"), "/host/media/catalog.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_lives_in_the_data_dir() {
        assert_eq!(
            default_catalog_path().to_str().unwrap(),
            "/host/.local/share/zellij/mediashelf/catalog.json"
        );
    }

    #[test]
    fn tilde_expands_to_host_prefix() {
        assert_eq!(expand_tilde("~/x"), "/host/x");
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("/abs"), "/abs");
        assert_eq!(expand_tilde("relative"), "relative");
    }
}
