//! Service layer for business logic.
//!
//! This module contains the menu color derivation and the route tree builder,
//! plus the color primitives they share.

pub mod color_scheme;
pub mod color_utils;
pub mod route_tree;

// Re-export commonly used types and functions
pub use color_scheme::{MenuColorScheme, SignInStyles};
pub use route_tree::{
    build_detached, build_route_tree, PagePathResolver, RouteBuild, RouteTreeBuilder, ViewerUrl,
};
