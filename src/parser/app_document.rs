//! Application navigation document loader.
//!
//! An application document bundles everything the route tree builder needs:
//! the application's pages, the navigation hierarchy and the hidden pages.
//! It can be written as JSON, JSON5 or YAML. Page identifiers may be quoted
//! strings or bare numbers:
//!
//! ```json
//! {
//!   "pages": [{ "title": "Home", "pageId": "1" }],
//!   "hierarchy": [{ "title": "Home", "isPage": true, "pageId": "1" }],
//!   "hidden": []
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::page::{deserialize_page_id, deserialize_page_ids};
use crate::models::{HiddenSet, PageHierarchyNode, PageIndex};

/// A page of the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    /// Page title, unique within the application
    pub title: String,
    /// Page identifier, quoted or a bare number
    #[serde(deserialize_with = "deserialize_page_id")]
    pub page_id: String,
}

/// Pages, hierarchy and hidden pages of one application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDocument {
    /// Every page of the application
    #[serde(default)]
    pub pages: Vec<PageRecord>,
    /// Navigation hierarchy, root level first
    #[serde(default)]
    pub hierarchy: Vec<PageHierarchyNode>,
    /// Identifiers of pages hidden from navigation
    #[serde(default, deserialize_with = "deserialize_page_ids")]
    pub hidden: Vec<String>,
}

impl AppDocument {
    /// Builds a fresh page index (all entries unvisited) from the page list.
    #[must_use]
    pub fn page_index(&self) -> PageIndex {
        self.pages
            .iter()
            .map(|page| (page.title.as_str(), page.page_id.as_str()))
            .collect()
    }

    /// Returns the hidden page identifiers as a set.
    #[must_use]
    pub fn hidden_set(&self) -> HiddenSet {
        self.hidden.iter().cloned().collect()
    }
}

/// Document syntax, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Plain JSON
    Json,
    /// JSON5 (comments, trailing commas, unquoted keys)
    Json5,
    /// YAML
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from a path's extension; unknown extensions are read as JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json5") => Self::Json5,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parses a document from a string in the given format.
pub fn parse_app_document(content: &str, format: DocumentFormat) -> Result<AppDocument> {
    let document = match format {
        DocumentFormat::Json => {
            serde_json::from_str(content).context("Failed to parse JSON application document")?
        }
        DocumentFormat::Json5 => {
            json5::from_str(content).context("Failed to parse JSON5 application document")?
        }
        DocumentFormat::Yaml => {
            serde_yml::from_str(content).context("Failed to parse YAML application document")?
        }
    };
    Ok(document)
}

/// Loads an application document from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_app_document(path: &Path) -> Result<AppDocument> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read application document: {}", path.display()))?;

    parse_app_document(&content, DocumentFormat::from_path(path))
        .with_context(|| format!("Invalid application document: {}", path.display()))
}
