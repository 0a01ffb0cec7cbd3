//! Tests for the document view

use super::*;
use chrono::NaiveDate;
use crodash_app::config::Settings;
use crodash_app::{PageQuery, SessionFlags};
use crodash_core::DatasetId;
use serde_json::json;

const HINT: &str = r#"<div class="notice mobile-hint">"#;

fn app() -> AppState {
    AppState::new(Settings::default()).unwrap()
}

fn at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn render(app: &AppState, query: &str, flags: SessionFlags, data: &DataStore) -> String {
    let session = app.session(PageQuery::parse(query), flags);
    view(&RenderContext {
        app,
        session: &session,
        data,
        drilldown: ActionsDrilldown::parse(query),
        show_hint: wants_mobile_hint(app, &session),
        generated_at: at(),
    })
}

// ─────────────────────────────────────────────────────────
// Layout selection
// ─────────────────────────────────────────────────────────

#[test]
fn test_desktop_has_sidebar_and_toggle_only() {
    let app = app();
    let html = render(&app, "page=risk", SessionFlags::default(), &DataStore::empty());

    assert!(html.contains(r#"<div class="app desktop">"#));
    assert!(html.contains(r#"<aside class="sidebar">"#));
    assert!(html.contains(r#"<form class="debug-toggle""#));
    assert!(!html.contains(r#"<nav class="tab-strip">"#));
}

#[test]
fn test_mobile_flag_has_tab_strip_only() {
    let app = app();
    let html = render(&app, "page=risk&mobile=1", SessionFlags::default(), &DataStore::empty());

    assert!(html.contains(r#"<div class="app mobile"><nav class="tab-strip">"#));
    assert!(!html.contains(r#"<aside class="sidebar">"#));
    assert!(!html.contains(r#"<form class="debug-toggle""#));
    // every page is reachable from the strip
    assert_eq!(html.matches(r#"<a class="tab"#).count(), app.registry.len());
}

#[test]
fn test_debug_override_forces_mobile() {
    let app = app();
    let flags = SessionFlags { hint_seen: true };
    let html = render(&app, "mobile=0&force_mobile=1", flags, &DataStore::empty());
    assert!(html.contains(r#"<nav class="tab-strip">"#));
    assert!(!html.contains(r#"<aside class="sidebar">"#));
    assert!(html.contains(r#"<a class="tab debug-exit" href="/?page=overview&amp;mobile=0">"#));
}

#[test]
fn test_debug_toggle_can_be_disabled() {
    let mut settings = Settings::default();
    settings.ui.show_debug_toggle = false;
    let app = AppState::new(settings).unwrap();

    let html = render(&app, "", SessionFlags::default(), &DataStore::empty());
    assert!(html.contains(r#"<aside class="sidebar">"#));
    assert!(!html.contains(r#"<form class="debug-toggle""#));
}

// ─────────────────────────────────────────────────────────
// Page selection
// ─────────────────────────────────────────────────────────

#[test]
fn test_title_and_header_follow_active_page() {
    let app = app();
    let html = render(&app, "page=reporting", SessionFlags::default(), &DataStore::empty());
    assert!(html.contains("<title>Reporting Automatisé - CRO Dashboard</title>"));
    assert!(html.contains(r#"<h1 class="page-title">📑 Reporting Automatisé</h1>"#));
    assert!(html.contains(r#"<a class="nav-link active" href="/navigate?to=reporting&amp;page=reporting">"#));
}

#[test]
fn test_unknown_page_renders_default() {
    let app = app();
    let html = render(&app, "page=nope", SessionFlags::default(), &DataStore::empty());
    assert!(html.contains("<title>Vue d&#39;Ensemble - CRO Dashboard</title>"));
}

// ─────────────────────────────────────────────────────────
// Data and failures
// ─────────────────────────────────────────────────────────

#[test]
fn test_missing_data_still_renders_every_page() {
    let app = app();
    for entry in app.registry.entries() {
        let html = render(
            &app,
            &format!("page={}", entry.id),
            SessionFlags::default(),
            &DataStore::empty(),
        );
        assert!(html.ends_with("</main></div></body></html>"));
        assert!(html.contains("Données par défaut utilisées pour : kpi_data.json"));
        assert!(!html.contains("Page en maintenance"), "{} failed", entry.id);
    }
}

#[test]
fn test_malformed_dataset_shows_maintenance_box() {
    let app = app();
    let data = DataStore::empty().with_value(DatasetId::Pillars, json!("not an object"));
    let html = render(&app, "page=framework", SessionFlags::default(), &data);

    assert!(html.contains("🔧 Page en maintenance"));
    assert!(html.contains("Erreur lors du chargement de la page Framework CRO"));
    // chrome is intact
    assert!(html.contains(r#"<aside class="sidebar">"#));
}

#[test]
fn test_actions_drilldown_keeps_mobile_flags() {
    let app = app();
    let data = DataStore::empty().with_value(
        DatasetId::Checklist,
        json!({"pillar_1": {"title": "Gouvernance", "tasks": [{"task": "Charte", "priority": "high"}]}}),
    );
    let html = render(
        &app,
        "page=actions&force_mobile=1&pillar=pillar_1",
        SessionFlags { hint_seen: true },
        &data,
    );

    assert!(html.contains("Actions du pilier Gouvernance"));
    assert!(html.contains(
        r#"<a class="filter active" href="/?page=actions&amp;force_mobile=1&amp;pillar=pillar_1">Tous</a>"#
    ));
    // leaving forced mobile drops the drill-down with it
    assert!(html.contains(r#"<a class="tab debug-exit" href="/?page=actions">"#));
}

// ─────────────────────────────────────────────────────────
// Mobile hint
// ─────────────────────────────────────────────────────────

#[test]
fn test_hint_only_once_and_only_on_mobile() {
    let app = app();
    let mobile = render(&app, "mobile=1", SessionFlags::default(), &DataStore::empty());
    assert!(mobile.contains(HINT));

    let seen = SessionFlags { hint_seen: true };
    let again = render(&app, "mobile=1", seen, &DataStore::empty());
    assert!(!again.contains(HINT));

    let desktop = render(&app, "", SessionFlags::default(), &DataStore::empty());
    assert!(!desktop.contains(HINT));
}
