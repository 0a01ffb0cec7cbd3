//! Desktop sidebar: sectioned page links, debug toggle and footer

use chrono::NaiveDateTime;
use crodash_app::{NavigationState, PageRegistry};

use super::{navigate_href, Widget};
use crate::html::escape;

const DEBUG_TOGGLE_HELP: &str = "Active l'interface mobile même sur desktop (pour tests)";

/// Hierarchical navigation shown in desktop layout
pub struct Sidebar<'a> {
    registry: &'a PageRegistry,
    navigation: &'a NavigationState,
    title: &'a str,
    show_debug_toggle: bool,
    updated_at: Option<NaiveDateTime>,
}

impl<'a> Sidebar<'a> {
    pub fn new(registry: &'a PageRegistry, navigation: &'a NavigationState, title: &'a str) -> Self {
        Self {
            registry,
            navigation,
            title,
            show_debug_toggle: false,
            updated_at: None,
        }
    }

    pub fn debug_toggle(mut self, show: bool) -> Self {
        self.show_debug_toggle = show;
        self
    }

    /// Timestamp printed in the footer
    pub fn updated_at(mut self, at: NaiveDateTime) -> Self {
        self.updated_at = Some(at);
        self
    }

    fn render_links(&self, out: &mut String) {
        let current = self.navigation.canonical_url();
        out.push_str(r#"<nav class="sidebar-content">"#);
        for (section, entries) in self.registry.by_section() {
            if let Some(title) = section.title() {
                out.push_str(r#"<div class="nav-section-title">"#);
                out.push_str(&escape(title));
                out.push_str("</div>");
            }
            for entry in entries {
                let class = if entry.id == self.navigation.active_page() {
                    "nav-link active"
                } else {
                    "nav-link"
                };
                out.push_str(&format!(
                    r#"<a class="{}" href="{}">"#,
                    class,
                    escape(&navigate_href(&entry.id, &current))
                ));
                if !entry.icon.is_empty() {
                    out.push_str(&escape(&entry.icon));
                    out.push(' ');
                }
                out.push_str(&escape(&entry.label));
                out.push_str("</a>");
            }
        }
        out.push_str("</nav>");
    }

    fn render_footer(&self, out: &mut String) {
        out.push_str(r#"<div class="sidebar-footer"><strong>Version "#);
        out.push_str(env!("CARGO_PKG_VERSION"));
        out.push_str("</strong>");
        if let Some(at) = self.updated_at {
            out.push_str(&format!(
                "<br>Mis à jour le {}",
                at.format("%d/%m/%Y à %H:%M")
            ));
        }
        out.push_str("</div>");
    }
}

impl Widget for Sidebar<'_> {
    fn render_into(&self, out: &mut String) {
        out.push_str(r#"<aside class="sidebar"><div class="main-logo"><h1>🏦 "#);
        out.push_str(&escape(self.title));
        out.push_str("</h1></div>");
        self.render_links(out);
        if self.show_debug_toggle {
            DebugToggle::new(self.navigation).render_into(out);
        }
        self.render_footer(out);
        out.push_str("</aside>");
    }
}

/// "Forcer le mode mobile" form posting to `/debug/mobile`
pub struct DebugToggle<'a> {
    navigation: &'a NavigationState,
}

impl<'a> DebugToggle<'a> {
    pub fn new(navigation: &'a NavigationState) -> Self {
        Self { navigation }
    }
}

impl Widget for DebugToggle<'_> {
    fn render_into(&self, out: &mut String) {
        out.push_str(r#"<form class="debug-toggle" method="post" action="/debug/mobile">"#);
        out.push_str("<strong>🔧 Mode Debug</strong>");
        out.push_str(&format!(
            r#"<input type="hidden" name="page" value="{}">"#,
            escape(self.navigation.active_page())
        ));
        if let Some(mobile) = &self.navigation.url().mobile {
            out.push_str(&format!(
                r#"<input type="hidden" name="mobile" value="{}">"#,
                escape(mobile)
            ));
        }
        out.push_str(&format!(
            r#"<label title="{}"><input type="checkbox" name="force_mobile"{}> Forcer le mode mobile</label>"#,
            escape(DEBUG_TOGGLE_HELP),
            if self.navigation.mobile_override() {
                " checked"
            } else {
                ""
            }
        ));
        out.push_str(r#"<button type="submit">Appliquer</button></form>"#);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crodash_app::{PageEntry, PageQuery};
    use crodash_core::{NavSection, PageKind};

    fn registry() -> PageRegistry {
        PageRegistry::new(vec![
            PageEntry::new("home", "Home", PageKind::Overview).default_page(),
            PageEntry::new("risk", "Risques", PageKind::RiskDashboard)
                .section(NavSection::RiskManagement),
        ])
        .unwrap()
    }

    fn navigation(registry: &PageRegistry, query: &str) -> NavigationState {
        NavigationState::from_query(registry, PageQuery::parse(query))
    }

    #[test]
    fn test_sidebar_sections_and_active_link() {
        let registry = registry();
        let nav = navigation(&registry, "page=risk");
        let html = Sidebar::new(&registry, &nav, "CRO Dashboard").render();

        assert!(html.starts_with(r#"<aside class="sidebar"><div class="main-logo"><h1>🏦 CRO Dashboard</h1></div>"#));
        assert!(html.contains(r#"<a class="nav-link" href="/navigate?to=home&amp;page=risk">Home</a>"#));
        assert!(html.contains(
            r#"<div class="nav-section-title">Gestion des Risques</div><a class="nav-link active" href="/navigate?to=risk&amp;page=risk">Risques</a>"#
        ));
        assert!(!html.contains("debug-toggle"));
    }

    #[test]
    fn test_sidebar_with_debug_toggle() {
        let registry = registry();
        let nav = navigation(&registry, "");
        let html = Sidebar::new(&registry, &nav, "CRO Dashboard")
            .debug_toggle(true)
            .render();
        assert!(html.contains(r#"<form class="debug-toggle""#));
    }

    #[test]
    fn test_sidebar_footer_timestamp() {
        let registry = registry();
        let nav = navigation(&registry, "");
        let at = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let html = Sidebar::new(&registry, &nav, "CRO Dashboard")
            .updated_at(at)
            .render();
        assert!(html.contains("<br>Mis à jour le 15/01/2024 à 09:30</div></aside>"));
    }

    #[test]
    fn test_debug_toggle_unchecked() {
        let registry = registry();
        let nav = navigation(&registry, "page=bogus");
        insta::assert_snapshot!(
            DebugToggle::new(&nav).render(),
            @r#"<form class="debug-toggle" method="post" action="/debug/mobile"><strong>🔧 Mode Debug</strong><input type="hidden" name="page" value="home"><label title="Active l&#39;interface mobile même sur desktop (pour tests)"><input type="checkbox" name="force_mobile"> Forcer le mode mobile</label><button type="submit">Appliquer</button></form>"#
        );
    }

    #[test]
    fn test_debug_toggle_checked_keeps_mobile_flag() {
        let registry = registry();
        let nav = navigation(&registry, "page=risk&mobile=0&force_mobile=1");
        let html = DebugToggle::new(&nav).render();
        assert!(html.contains(r#"<input type="hidden" name="page" value="risk"><input type="hidden" name="mobile" value="0">"#));
        assert!(html.contains(r#"name="force_mobile" checked>"#));
    }
}
