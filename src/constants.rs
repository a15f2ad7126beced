//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and configuration locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Navmenu";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "navmenu";

/// Directory name under the platform config directory.
pub const APP_CONFIG_DIR_NAME: &str = "Navmenu";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "NAVMENU_CONFIG_DIR";
