//! Page hierarchy input and the page index used to resolve it.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::warn;

/// A node of the page/folder hierarchy, as authored in the application.
///
/// A node with `is_page` set refers to a page by title. A node with
/// non-empty `children` is a folder. Anything else is a bare folder label.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageHierarchyNode {
    /// Display title; pages are resolved by this title
    #[serde(default)]
    pub title: String,
    /// Icon identifier (without the `icon-` prefix)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether this node refers to a page
    #[serde(default)]
    pub is_page: bool,
    /// Page identifier, used for hidden-set matching
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_page_id"
    )]
    pub page_id: Option<String>,
    /// Nested nodes for folders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<PageHierarchyNode>>,
}

impl PageHierarchyNode {
    /// Creates a page node referring to `title`.
    #[must_use]
    pub fn page(title: impl Into<String>, page_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_page: true,
            page_id: Some(page_id.into()),
            ..Self::default()
        }
    }

    /// Creates a folder node with the given children.
    #[must_use]
    pub fn folder(title: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            title: title.into(),
            children: Some(children),
            ..Self::default()
        }
    }

    /// Creates a folder label with no target and no children.
    #[must_use]
    pub fn label(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the icon identifier.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Returns the children if this node is a folder with at least one child.
    #[must_use]
    pub fn folder_children(&self) -> Option<&[Self]> {
        self.children.as_deref().filter(|children| !children.is_empty())
    }
}

/// A page known to the application, with its build-time visited flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEntry {
    /// Page identifier
    pub page_id: String,
    /// Set when a build placed this page in the route tree
    pub visited: bool,
}

/// Pages by title.
///
/// Built by the caller from the application's actual pages before a route
/// tree build. After the build, entries that are still unvisited are pages
/// that exist but are unreachable from the navigation hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageIndex {
    pages: BTreeMap<String, PageEntry>,
}

impl PageIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page. Titles are expected to be unique; a duplicate title
    /// replaces the earlier entry.
    pub fn insert(&mut self, title: impl Into<String>, page_id: impl Into<String>) {
        let title = title.into();
        let entry = PageEntry {
            page_id: page_id.into(),
            visited: false,
        };
        if let Some(previous) = self.pages.insert(title.clone(), entry) {
            warn!(
                title = %title,
                replaced_page_id = %previous.page_id,
                "duplicate page title in page index; keeping the later page"
            );
        }
    }

    /// Looks up a page by title.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&PageEntry> {
        self.pages.get(title)
    }

    /// Looks up a page by title and marks it visited.
    pub fn visit(&mut self, title: &str) -> Option<&PageEntry> {
        let entry = self.pages.get_mut(title)?;
        entry.visited = true;
        Some(entry)
    }

    /// Titles of pages not visited by the last build, sorted by title.
    #[must_use]
    pub fn orphans(&self) -> Vec<&str> {
        self.pages
            .iter()
            .filter(|(_, entry)| !entry.visited)
            .map(|(title, _)| title.as_str())
            .collect()
    }

    /// Clears every visited flag.
    pub fn reset_visits(&mut self) {
        for entry in self.pages.values_mut() {
            entry.visited = false;
        }
    }

    /// Iterates over `(title, entry)` pairs in title order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PageEntry)> {
        self.pages.iter().map(|(title, entry)| (title.as_str(), entry))
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns true if the index has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl<T, I> FromIterator<(T, I)> for PageIndex
where
    T: Into<String>,
    I: Into<String>,
{
    fn from_iter<It: IntoIterator<Item = (T, I)>>(iter: It) -> Self {
        let mut index = Self::new();
        for (title, page_id) in iter {
            index.insert(title, page_id);
        }
        index
    }
}

/// Page identifiers excluded from navigation.
pub type HiddenSet = HashSet<String>;

/// A page identifier as written in a document: quoted or a bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPageId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl From<RawPageId> for String {
    fn from(id: RawPageId) -> Self {
        match id {
            RawPageId::Text(text) => text,
            RawPageId::Signed(n) => n.to_string(),
            RawPageId::Unsigned(n) => n.to_string(),
            // Integral floats (`1.0`) print without the fraction
            RawPageId::Float(n) => n.to_string(),
        }
    }
}

/// Deserializes a page identifier from a string or a number.
pub(crate) fn deserialize_page_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawPageId::deserialize(deserializer).map(String::from)
}

/// Like [`deserialize_page_id`], for optional identifiers.
pub(crate) fn deserialize_optional_page_id<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawPageId>::deserialize(deserializer).map(|id| id.map(String::from))
}

/// Like [`deserialize_page_id`], for a list of identifiers.
pub(crate) fn deserialize_page_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<RawPageId>::deserialize(deserializer)
        .map(|ids| ids.into_iter().map(String::from).collect())
}
