//! Browser tests for the mounted page: the issue table, the hidden info
//! label and the theme switch.
//!
//! **Run with**: `wasm-pack test --headless --firefox crates/frontend`

#![cfg(target_arch = "wasm32")]

use board_frontend::app::App;
use board_frontend::domain::a001_issue::data::SNAPSHOT_ELEMENT_ID;
use board_frontend::domain::a001_issue::ui::list::{IssueList, ISSUE_TABLE_ID};
use board_frontend::layout::top_header::SWITCH_ID;
use board_frontend::page_init;
use contracts::domain::a001_issue::IssueRow;
use contracts::enums::{Difficulty, IssueType, Status};
use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

const SNAPSHOT: &str = r#"{
    "last_updated": 1700000000,
    "issues": [
        {"id": 10, "title": "Zeta", "link": "https://github.com/org/repo/issues/10", "creator": "ann", "labels": ["D0-easy", "T12-benchmarks"]},
        {"id": 11, "title": "Alpha", "link": "https://github.com/org/repo/issues/11", "creator": "bob", "labels": ["D3-involved", "I2-bug"], "assigned": true},
        {"id": 12, "title": "Beta", "link": "https://github.com/org/repo/issues/12", "creator": "cid", "labels": ["D1-medium", "I5-enhancement"], "pull_request": true},
        {"id": 13, "title": "Gamma", "link": "https://github.com/org/repo/issues/13", "creator": "dee", "labels": ["D0-easy", "I2-bug"]}
    ]
}"#;

// ============================================================================
// Helpers
// ============================================================================

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn by_id(id: &str) -> Element {
    document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("#{} is not in the DOM", id))
}

fn append_to_body(tag: &str) -> Element {
    let el = document().create_element(tag).unwrap();
    document().body().unwrap().append_child(&el).unwrap();
    el
}

/// Lets queued effects run
async fn settle() {
    TimeoutFuture::new(0).await;
    TimeoutFuture::new(0).await;
}

fn theme_attribute() -> Option<String> {
    document()
        .document_element()
        .and_then(|root| root.get_attribute("data-bs-theme"))
}

fn switch_checked() -> bool {
    by_id(SWITCH_ID)
        .class_name()
        .split_whitespace()
        .any(|class| class == "checked")
}

async fn click_switch() {
    by_id(SWITCH_ID).unchecked_into::<HtmlElement>().click();
    settle().await;
}

fn body_rows(host: &Element) -> Vec<Element> {
    let rows = host.query_selector_all("table.dataTable tbody tr").unwrap();
    (0..rows.length())
        .filter_map(|i| rows.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn row_link(row: &Element) -> Option<String> {
    row.query_selector("a")
        .ok()
        .flatten()
        .and_then(|a| a.get_attribute("href"))
}

fn assert_no_search_or_paging(host: &Element) {
    for selector in [
        "input",
        ".dataTables_filter",
        ".dataTables_paginate",
        ".dataTables_length",
    ] {
        assert!(
            host.query_selector(selector).unwrap().is_none(),
            "unexpected {}",
            selector
        );
    }
}

fn issue_row(id: u64) -> IssueRow {
    IssueRow {
        id,
        title: format!("Issue {}", id),
        link: format!("https://github.com/org/repo/issues/{}", id),
        creator: "eve".to_string(),
        difficulty: Some(Difficulty::Medium),
        status: Some(Status::Free),
        kind: Some(IssueType::Bug),
    }
}

// ============================================================================
// Page tests
// ============================================================================

/// The whole page lifecycle in one test: initialization runs once per page
/// load, so it cannot be split across tests sharing the document.
#[wasm_bindgen_test]
async fn test_page_initialization_and_theme_switch() {
    let island = append_to_body("script");
    island.set_attribute("type", "application/json").unwrap();
    island.set_id(SNAPSHOT_ELEMENT_ID);
    island.set_text_content(Some(SNAPSHOT));

    let host = append_to_body("div");
    let handle = mount_to(host.clone().unchecked_into(), App);
    settle().await;

    // Info label is rendered but hidden
    let info: HtmlElement = by_id(&format!("{}_info", ISSUE_TABLE_ID)).unchecked_into();
    assert_eq!(info.style().get_property_value("display").unwrap(), "none");

    // Every issue is rendered in status, difficulty, type, title order
    let links: Vec<_> = body_rows(&host).iter().filter_map(row_link).collect();
    let expected: Vec<_> = [13, 10, 11, 12]
        .iter()
        .map(|id| format!("https://github.com/org/repo/issues/{}", id))
        .collect();
    assert_eq!(links, expected);
    assert_no_search_or_paging(&host);

    // Initial theme: light, switch checked
    assert_eq!(theme_attribute().as_deref(), Some("light"));
    assert!(switch_checked());

    click_switch().await;
    assert_eq!(theme_attribute().as_deref(), Some("light"));
    assert!(!switch_checked());

    click_switch().await;
    assert_eq!(theme_attribute().as_deref(), Some("dark"));
    assert!(switch_checked());

    click_switch().await;
    assert_eq!(theme_attribute().as_deref(), Some("light"));
    assert!(!switch_checked());

    // A second readiness signal does nothing
    assert!(!page_init::on_ready());
    assert_eq!(info.style().get_property_value("display").unwrap(), "none");

    drop(handle);
    host.remove();
    island.remove();
}

#[wasm_bindgen_test]
async fn test_issue_list_renders_every_row_without_paging() {
    let rows: Vec<IssueRow> = (1..=120).map(issue_row).collect();

    let host = append_to_body("div");
    let handle = mount_to(host.clone().unchecked_into(), move || {
        view! { <IssueList rows=rows /> }
    });
    settle().await;

    assert_eq!(body_rows(&host).len(), 120);
    assert_no_search_or_paging(&host);

    let info = host.query_selector(".dataTables_info").unwrap().unwrap();
    assert_eq!(
        info.text_content().as_deref(),
        Some("Showing 1 to 120 of 120 entries")
    );

    drop(handle);
    host.remove();
}

#[wasm_bindgen_test]
async fn test_empty_issue_list_renders_empty_table() {
    let host = append_to_body("div");
    let handle = mount_to(host.clone().unchecked_into(), || {
        view! { <IssueList rows=Vec::new() /> }
    });
    settle().await;

    assert!(host.query_selector("table.dataTable").unwrap().is_some());
    assert!(body_rows(&host).is_empty());

    drop(handle);
    host.remove();
}
