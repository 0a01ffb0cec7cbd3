//! Desktop/mobile layout switching and the debug override

use crate::*;

const SIDEBAR: &str = r#"<aside class="sidebar">"#;
const TAB_STRIP: &str = r#"<nav class="tab-strip">"#;
const DEBUG_TOGGLE: &str = r#"<form class="debug-toggle""#;
const HINT: &str = r#"<div class="notice mobile-hint">"#;

#[tokio::test]
async fn test_desktop_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let router = dashboard(dir.path());
    let mut browser = Browser::default();

    let (_, html) = browser.visit(&router, "/?page=risk").await;
    assert!(html.contains(SIDEBAR));
    assert!(html.contains(DEBUG_TOGGLE));
    assert!(!html.contains(TAB_STRIP));
}

#[tokio::test]
async fn test_mobile_flag_survives_tab_navigation() {
    let dir = tempfile::tempdir().unwrap();
    let router = dashboard(dir.path());
    let mut browser = Browser::default();

    let (_, first) = browser.visit(&router, "/?mobile=1").await;
    assert!(first.contains(TAB_STRIP));
    assert!(!first.contains(SIDEBAR));
    assert!(!first.contains(DEBUG_TOGGLE));
    assert!(first.contains(HINT));

    let (url, next) = browser
        .visit(&router, &link_to(&first, "Tests de Résistance"))
        .await;
    assert_eq!(url, "/?page=stress&mobile=1");
    assert!(next.contains(TAB_STRIP));
    // hint only once per session
    assert!(!next.contains(HINT));
}

#[tokio::test]
async fn test_other_mobile_values_stay_desktop() {
    let dir = tempfile::tempdir().unwrap();
    let router = dashboard(dir.path());
    let mut browser = Browser::default();

    for uri in ["/?mobile=0", "/?mobile=true", "/?mobile="] {
        let (_, html) = browser.visit(&router, uri).await;
        assert!(html.contains(SIDEBAR), "{}", uri);
    }
}

#[tokio::test]
async fn test_force_mobile_toggle_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let router = dashboard(dir.path());
    let mut browser = Browser::default();

    let resp = browser
        .post_form(&router, "/debug/mobile", "force_mobile=on&page=compliance")
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/?page=compliance&force_mobile=1");
    let (_, html) = browser.visit(&router, &location(&resp)).await;
    assert!(html.contains(TAB_STRIP));
    assert_eq!(title(&html), "Conformité Réglementaire - CRO Dashboard");

    // clearing the override restores the desktop layout
    let resp = browser
        .post_form(&router, "/debug/mobile", "page=compliance")
        .await;
    assert_eq!(location(&resp), "/?page=compliance");
    let (_, html) = browser.visit(&router, &location(&resp)).await;
    assert!(html.contains(SIDEBAR));
}

#[tokio::test]
async fn test_forced_mobile_can_return_to_desktop() {
    let dir = tempfile::tempdir().unwrap();
    let router = dashboard(dir.path());
    let mut browser = Browser::default();

    let resp = browser
        .post_form(&router, "/debug/mobile", "force_mobile=on&page=risk")
        .await;
    let (url, html) = browser.visit(&router, &location(&resp)).await;
    assert!(html.contains(TAB_STRIP));
    assert!(!html.contains(DEBUG_TOGGLE));

    // reload and tab navigation keep the override
    let (_, reloaded) = browser.visit(&router, &url).await;
    assert!(reloaded.contains(TAB_STRIP));
    let (url, next) = browser
        .visit(&router, &link_to(&reloaded, "Tests de Résistance"))
        .await;
    assert_eq!(url, "/?page=stress&force_mobile=1");
    assert!(next.contains(TAB_STRIP));

    // the strip links back to the same page on desktop
    let (url, desktop) = browser
        .visit(&router, &link_to(&next, "Quitter le mode mobile forcé"))
        .await;
    assert_eq!(url, "/?page=stress");
    assert!(desktop.contains(SIDEBAR));
    assert!(desktop.contains(DEBUG_TOGGLE));
    assert_eq!(title(&desktop), "Tests de Résistance - CRO Dashboard");
}

#[tokio::test]
async fn test_plain_page_url_ignores_earlier_override() {
    let dir = tempfile::tempdir().unwrap();
    let router = dashboard(dir.path());
    let mut browser = Browser::default();

    browser
        .post_form(&router, "/debug/mobile", "force_mobile=on&page=risk")
        .await;
    let (_, html) = browser.visit(&router, "/?page=risk").await;
    assert!(html.contains(SIDEBAR));
    assert!(!html.contains(TAB_STRIP));
}
