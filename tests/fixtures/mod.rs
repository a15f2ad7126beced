//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Each test binary uses a subset of the fixtures

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Application document with a nested folder, a hidden page and one orphan.
///
/// Pages: Home(1), Guide(2), Secret(3), Changelog(4), About(5).
/// `About` never appears in the hierarchy; `Secret` is hidden.
pub const SAMPLE_DOCUMENT_JSON: &str = r#"{
    "pages": [
        { "title": "Home", "pageId": "1" },
        { "title": "Guide", "pageId": "2" },
        { "title": "Secret", "pageId": "3" },
        { "title": "Changelog", "pageId": "4" },
        { "title": "About", "pageId": "5" }
    ],
    "hierarchy": [
        { "title": "Home", "isPage": true, "pageId": "1", "icon": "home" },
        {
            "title": "Docs",
            "icon": "book",
            "children": [
                { "title": "Guide", "isPage": true, "pageId": "2" },
                { "title": "Secret", "isPage": true, "pageId": "3" }
            ]
        },
        { "title": "Changelog", "isPage": true, "pageId": "4" }
    ],
    "hidden": ["3"]
}"#;

/// Document where every page is placed and resolved.
pub const COMPLETE_DOCUMENT_YAML: &str = "\
pages:
  - title: Home
    pageId: '1'
  - title: Settings
    pageId: '2'
hierarchy:
  - title: Home
    isPage: true
    pageId: '1'
  - title: Admin
    children:
      - title: Settings
        isPage: true
        pageId: '2'
";

/// Document whose hierarchy references a page that does not exist.
pub const UNRESOLVED_DOCUMENT_JSON5: &str = r#"{
    pages: [{ title: 'Home', pageId: '1' }],
    hierarchy: [
        { title: 'Home', isPage: true, pageId: '1' },
        { title: 'Missing', isPage: true, pageId: '9' },
    ],
}"#;

/// Writes `content` to `name` inside a fresh temp directory.
///
/// The returned `TempDir` must be kept alive for the file to exist.
pub fn temp_document(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write document");
    (temp_dir, path)
}

/// Path to the navmenu binary
pub fn navmenu_bin() -> &'static str {
    env!("CARGO_BIN_EXE_navmenu")
}

/// Runs navmenu with an isolated config directory.
pub fn run_isolated(args: &[&str], config_dir: &Path) -> Output {
    Command::new(navmenu_bin())
        .env("NAVMENU_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Parses stdout as JSON, failing with stderr on error.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| {
        panic!(
            "Should parse JSON output ({e}). stdout: {stdout} stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}
