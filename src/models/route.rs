//! Renderable route tree produced from the page hierarchy.

use serde::{Deserialize, Serialize};

/// Path used by folders and folder labels, which have no page of their own.
pub const PLACEHOLDER_PATH: &str = "/";

/// A node of the navigation route tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteNode {
    /// Display name
    pub name: String,
    /// Namespaced icon (`icon-<id>`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Navigation target; [`PLACEHOLDER_PATH`] for folders
    pub path: String,
    /// Nested routes, present only on folders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<RouteNode>>,
}

impl RouteNode {
    /// Creates a page route.
    #[must_use]
    pub fn page(name: impl Into<String>, icon: Option<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon,
            path: path.into(),
            routes: None,
        }
    }

    /// Creates a folder route with nested routes.
    #[must_use]
    pub fn folder(name: impl Into<String>, icon: Option<String>, routes: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            icon,
            path: PLACEHOLDER_PATH.to_string(),
            routes: Some(routes),
        }
    }

    /// Creates a folder label with no target and no nested routes.
    #[must_use]
    pub fn label(name: impl Into<String>, icon: Option<String>) -> Self {
        Self {
            name: name.into(),
            icon,
            path: PLACEHOLDER_PATH.to_string(),
            routes: None,
        }
    }

    /// Returns true if this node carries nested routes.
    #[must_use]
    pub const fn is_folder(&self) -> bool {
        self.routes.is_some()
    }

    /// Depth-first iterator over this node and all of its descendants.
    pub fn walk(&self) -> impl Iterator<Item = &RouteNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            if let Some(routes) = &node.routes {
                stack.extend(routes.iter().rev());
            }
            Some(node)
        })
    }
}
