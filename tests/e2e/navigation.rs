//! Page routing through links, redirects and reloads

use crate::*;

#[tokio::test]
async fn test_sidebar_click_then_reload_keeps_page() {
    let dir = tempfile::tempdir().unwrap();
    let router = dashboard(dir.path());
    let mut browser = Browser::default();

    let (_, home) = browser.visit(&router, "/").await;
    assert_eq!(title(&home), "Vue d&#39;Ensemble - CRO Dashboard");

    let (url, page) = browser
        .visit(&router, &link_to(&home, "Pilotage des Actions"))
        .await;
    assert_eq!(url, "/?page=actions");
    assert_eq!(title(&page), "Pilotage des Actions - CRO Dashboard");

    // reload with the synchronized URL
    let (_, reloaded) = browser.visit(&router, &url).await;
    assert_eq!(title(&reloaded), "Pilotage des Actions - CRO Dashboard");
}

#[tokio::test]
async fn test_every_page_reachable_by_navigation() {
    let dir = tempfile::tempdir().unwrap();
    let router = dashboard(dir.path());
    let registry = crodash_app::PageRegistry::builtin().unwrap();
    let mut browser = Browser::default();

    for entry in registry.entries() {
        let (url, html) = browser
            .visit(&router, &format!("/navigate?to={}&page=overview", entry.id))
            .await;
        assert_eq!(url, format!("/?page={}", entry.id));
        assert!(
            html.contains(&format!(r#"<a class="nav-link active" href="/navigate?to={}&amp;"#, entry.id)),
            "{} not active",
            entry.id
        );
    }
}

#[tokio::test]
async fn test_unknown_page_param_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let router = dashboard(dir.path());
    let mut browser = Browser::default();

    for uri in ["/?page=unknown", "/?page=", "/?page=RISK"] {
        let (_, html) = browser.visit(&router, uri).await;
        assert_eq!(title(&html), "Vue d&#39;Ensemble - CRO Dashboard", "{}", uri);
    }
}

#[tokio::test]
async fn test_data_files_feed_pages() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("pillars_data.json"),
        r#"{"pillar_1": {"name": "Gouvernance des risques"}}"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("checklist_data.json"),
        r#"{"pillar_1": {"tasks": [{"completed": true}, {"completed": true}]}}"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("kpi_data.json"), "{ not json").unwrap();
    let router = dashboard(dir.path());
    let mut browser = Browser::default();

    let (_, framework) = browser.visit(&router, "/?page=framework").await;
    assert!(framework.contains("Gouvernance des risques"));
    assert!(framework.contains("2 / 2 tâches (100%)"));

    // malformed JSON is a fallback, not a failure
    let (_, overview) = browser.visit(&router, "/?page=overview").await;
    assert!(overview.contains("Aucun indicateur disponible."));
    assert!(overview.contains("kpi_data.json"));
    assert!(!overview.contains("Page en maintenance"));
}
