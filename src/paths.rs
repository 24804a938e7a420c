//! XDG-style path utilities for configuration and data directories.
//!
//! This module provides consistent path resolution across platforms,
//! preferring XDG Base Directory Specification conventions over
//! OS-specific locations.

use std::path::PathBuf;

/// Returns the configuration directory for ava.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/ava` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/ava` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| home_dir().join(".config").join("ava"),
        |xdg| PathBuf::from(xdg).join("ava"),
    )
}

/// Returns the data directory for ava (task storage).
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/ava` if `XDG_DATA_HOME` is set
/// 2. `~/.local/share/ava` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn data_dir() -> PathBuf {
    std::env::var("XDG_DATA_HOME").map_or_else(
        |_| home_dir().join(".local").join("share").join("ava"),
        |xdg| PathBuf::from(xdg).join("ava"),
    )
}

/// Returns the user's home directory.
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
#[allow(clippy::expect_used)]
fn home_dir() -> PathBuf {
    dirs::home_dir().expect("Failed to determine home directory")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_xdg_override() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::set_var("XDG_CONFIG_HOME", "/custom/config") };

        let dir = config_dir();
        assert_eq!(dir, PathBuf::from("/custom/config/ava"));

        // Restore
        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        } else {
            unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
        }
    }

    #[test]
    fn test_data_dir_xdg_override() {
        let original = std::env::var("XDG_DATA_HOME").ok();
        unsafe { std::env::set_var("XDG_DATA_HOME", "/custom/data") };

        let dir = data_dir();
        assert_eq!(dir, PathBuf::from("/custom/data/ava"));

        // Restore
        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_DATA_HOME", val) };
        } else {
            unsafe { std::env::remove_var("XDG_DATA_HOME") };
        }
    }
}
