//! Route tree construction from the page hierarchy.
//!
//! The builder walks the hierarchy in pre-order, appending each emitted node
//! to the route list of its parent. Page nodes are resolved by title against a
//! [`PageIndex`], and each resolved entry is marked visited so the caller can
//! detect pages that exist but were never placed in the menu.
//!
//! Unresolvable page titles are dropped from the output and reported in
//! [`RouteBuild::unresolved`]. Nodes whose `page_id` is in the [`HiddenSet`]
//! are dropped silently, wherever they sit in the tree.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::models::{HiddenSet, PageHierarchyNode, PageIndex, RouteNode};

/// Turns a resolved page into a navigation path.
pub trait PagePathResolver {
    /// Path of the page with the given title and identifier.
    fn page_path(&self, title: &str, page_id: &str) -> String;
}

impl<F> PagePathResolver for F
where
    F: Fn(&str, &str) -> String,
{
    fn page_path(&self, title: &str, page_id: &str) -> String {
        self(title, page_id)
    }
}

/// Viewer URLs of a published application: `/app/{app_slug}/{page_slug}-{page_id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerUrl {
    /// Slug of the application
    pub app_slug: String,
}

impl ViewerUrl {
    /// Creates a resolver for the given application slug.
    #[must_use]
    pub fn new(app_slug: impl Into<String>) -> Self {
        Self {
            app_slug: app_slug.into(),
        }
    }
}

impl PagePathResolver for ViewerUrl {
    fn page_path(&self, title: &str, page_id: &str) -> String {
        format!("/app/{}/{}-{}", self.app_slug, slugify(title), page_id)
    }
}

/// URL slug of a title: lowercase, runs of characters that are not Unicode
/// letters, marks or decimal digits collapsed to `-`.
///
/// # Examples
///
/// ```
/// use navmenu::services::route_tree::slugify;
///
/// assert_eq!(slugify("Sales & Marketing"), "sales-marketing");
/// assert_eq!(slugify("Über uns"), "über-uns");
/// assert_eq!(slugify("  "), "page");
/// ```
#[must_use]
pub fn slugify(title: &str) -> String {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    let separators = SEPARATORS.get_or_init(|| {
        Regex::new(r"[^\p{Alphabetic}\p{M}\p{Nd}]+").expect("slug pattern is valid")
    });

    let lowered = title.to_lowercase();
    let slug = separators.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        "page".to_string()
    } else {
        slug.to_string()
    }
}

/// Result of a route tree build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteBuild {
    /// Emitted routes, in hierarchy order
    pub routes: Vec<RouteNode>,
    /// Titles of page nodes that were not found in the page index
    pub unresolved: Vec<String>,
}

/// Namespaced icon for a node, if it has a non-empty icon identifier.
fn icon_class(icon: Option<&str>) -> Option<String> {
    icon.filter(|id| !id.is_empty()).map(|id| format!("icon-{id}"))
}

/// Builds a route tree from a page hierarchy.
///
/// The builder holds the only mutable borrow of the page index for the
/// duration of the build.
pub struct RouteTreeBuilder<'a, P: PagePathResolver + ?Sized> {
    pages: &'a mut PageIndex,
    hidden: &'a HiddenSet,
    paths: &'a P,
    unresolved: Vec<String>,
}

impl<'a, P: PagePathResolver + ?Sized> RouteTreeBuilder<'a, P> {
    /// Creates a builder over the given page index, hidden set and path resolver.
    pub fn new(pages: &'a mut PageIndex, hidden: &'a HiddenSet, paths: &'a P) -> Self {
        Self {
            pages,
            hidden,
            paths,
            unresolved: Vec::new(),
        }
    }

    /// Transforms the root-level hierarchy into routes.
    pub fn build(mut self, hierarchy: &[PageHierarchyNode]) -> RouteBuild {
        let mut routes = Vec::with_capacity(hierarchy.len());
        for node in hierarchy {
            self.push_node(node, &mut routes);
        }

        debug!(
            routes = routes.len(),
            unresolved = self.unresolved.len(),
            "built route tree"
        );

        RouteBuild {
            routes,
            unresolved: self.unresolved,
        }
    }

    fn push_node(&mut self, node: &PageHierarchyNode, out: &mut Vec<RouteNode>) {
        let Some(route) = self.make_route(node) else {
            return;
        };

        if let Some(page_id) = node.page_id.as_deref() {
            if self.hidden.contains(page_id) {
                debug!(title = %node.title, page_id, "skipping hidden node");
                return;
            }
        }

        out.push(route);
    }

    fn make_route(&mut self, node: &PageHierarchyNode) -> Option<RouteNode> {
        let icon = icon_class(node.icon.as_deref());

        if node.is_page {
            let Some(entry) = self.pages.visit(&node.title) else {
                warn!(title = %node.title, "page in navigation hierarchy not found in page index");
                self.unresolved.push(node.title.clone());
                return None;
            };
            let path = self.paths.page_path(&node.title, &entry.page_id);
            return Some(RouteNode::page(node.title.clone(), icon, path));
        }

        if let Some(children) = node.folder_children() {
            let mut routes = Vec::with_capacity(children.len());
            for child in children {
                self.push_node(child, &mut routes);
            }
            return Some(RouteNode::folder(node.title.clone(), icon, routes));
        }

        Some(RouteNode::label(node.title.clone(), icon))
    }
}

/// Builds a route tree, marking visited pages in `pages`.
pub fn build_route_tree<P: PagePathResolver + ?Sized>(
    hierarchy: &[PageHierarchyNode],
    pages: &mut PageIndex,
    hidden: &HiddenSet,
    paths: &P,
) -> RouteBuild {
    RouteTreeBuilder::new(pages, hidden, paths).build(hierarchy)
}

/// Builds a route tree against a copy of `pages`, returning the routes and the
/// updated copy. The input index is left untouched.
#[must_use]
pub fn build_detached<P: PagePathResolver + ?Sized>(
    hierarchy: &[PageHierarchyNode],
    pages: &PageIndex,
    hidden: &HiddenSet,
    paths: &P,
) -> (RouteBuild, PageIndex) {
    let mut pages = pages.clone();
    let build = build_route_tree(hierarchy, &mut pages, hidden, paths);
    (build, pages)
}
