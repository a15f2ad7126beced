//! Navmenu Library
//!
//! This library provides the core of an application navigation menu:
//! deriving an accessible menu palette from a single brand color, and
//! turning a page/folder hierarchy into a route tree while tracking
//! hidden and orphaned pages.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod parser;
pub mod services;
