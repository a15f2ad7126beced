//! CLI command handlers for Navmenu.
//!
//! This module provides headless, scriptable access to the palette derivation,
//! the route tree builder and the configuration file.

pub mod common;
pub mod config;
pub mod palette;
pub mod routes;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use palette::PaletteArgs;
pub use routes::RoutesArgs;
