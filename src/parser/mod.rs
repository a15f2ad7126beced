//! Parsing for application navigation documents.
//!
//! This module reads the page list, navigation hierarchy and hidden pages of
//! an application from JSON, JSON5 or YAML files.

pub mod app_document;

// Re-export commonly used functions
pub use app_document::{load_app_document, parse_app_document, AppDocument, DocumentFormat};
