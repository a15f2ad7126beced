//! Data models for menu colors, page hierarchies and route trees.
//!
//! This module contains the core data structures used throughout the crate.
//! Models are independent of the derivation and tree-building logic.

pub mod navigation;
pub mod page;
pub mod rgb;
pub mod route;

// Re-export all model types
pub use navigation::{colors, ColorMode, ColorToken, ItemState, MenuColor};
pub use page::{HiddenSet, PageEntry, PageHierarchyNode, PageIndex};
pub use rgb::{Hsla, RgbaColor};
pub use route::{RouteNode, PLACEHOLDER_PATH};
