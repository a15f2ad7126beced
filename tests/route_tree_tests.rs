//! Library-level tests for building routes from parsed application documents.

use navmenu::models::{PageHierarchyNode, PageIndex, RouteNode};
use navmenu::parser::{parse_app_document, DocumentFormat};
use navmenu::services::{build_detached, build_route_tree, RouteTreeBuilder, ViewerUrl};

mod fixtures;
use fixtures::SAMPLE_DOCUMENT_JSON;

fn names(routes: &[RouteNode]) -> Vec<&str> {
    routes
        .iter()
        .flat_map(RouteNode::walk)
        .map(|node| node.name.as_str())
        .collect()
}

#[test]
fn test_sample_document_end_to_end() {
    let doc = parse_app_document(SAMPLE_DOCUMENT_JSON, DocumentFormat::Json).unwrap();
    let mut pages = doc.page_index();
    let hidden = doc.hidden_set();

    let build = build_route_tree(&doc.hierarchy, &mut pages, &hidden, &ViewerUrl::new("demo"));

    assert_eq!(names(&build.routes), vec!["Home", "Docs", "Guide", "Changelog"]);
    assert!(build.unresolved.is_empty());
    assert_eq!(pages.orphans(), vec!["About"]);
    assert!(pages.get("Secret").is_some_and(|entry| entry.visited));
}

#[test]
fn test_detached_builds_are_repeatable() {
    let doc = parse_app_document(SAMPLE_DOCUMENT_JSON, DocumentFormat::Json).unwrap();
    let pages = doc.page_index();
    let hidden = doc.hidden_set();
    let paths = ViewerUrl::new("demo");

    let (first, first_pages) = build_detached(&doc.hierarchy, &pages, &hidden, &paths);
    let (second, second_pages) = build_detached(&doc.hierarchy, &pages, &hidden, &paths);

    assert_eq!(first, second);
    assert_eq!(first_pages, second_pages);
    // Source index untouched
    assert_eq!(pages.orphans().len(), 5);
}

#[test]
fn test_rebuild_after_reset() {
    let hierarchy = vec![PageHierarchyNode::page("Home", "1")];
    let mut pages: PageIndex = [("Home", "1"), ("About", "2")].into_iter().collect();
    let hidden = Default::default();
    let paths = |title: &str, id: &str| format!("/{title}/{id}");

    let first = RouteTreeBuilder::new(&mut pages, &hidden, &paths).build(&hierarchy);
    assert_eq!(pages.orphans(), vec!["About"]);

    pages.reset_visits();
    assert_eq!(pages.orphans(), vec!["About", "Home"]);

    let second = RouteTreeBuilder::new(&mut pages, &hidden, &paths).build(&hierarchy);
    assert_eq!(first, second);
    assert_eq!(second.routes[0].path, "/Home/1");
}

#[test]
fn test_hidden_page_deep_in_folders() {
    let hierarchy = vec![PageHierarchyNode::folder(
        "Outer",
        vec![PageHierarchyNode::folder(
            "Inner",
            vec![
                PageHierarchyNode::page("Visible", "1"),
                PageHierarchyNode::page("Hidden", "2"),
            ],
        )],
    )];
    let mut pages: PageIndex = [("Visible", "1"), ("Hidden", "2")].into_iter().collect();
    let hidden = ["2".to_string()].into_iter().collect();

    let build = build_route_tree(&hierarchy, &mut pages, &hidden, &ViewerUrl::new("demo"));

    assert_eq!(names(&build.routes), vec!["Outer", "Inner", "Visible"]);
    assert!(pages.orphans().is_empty());
}
