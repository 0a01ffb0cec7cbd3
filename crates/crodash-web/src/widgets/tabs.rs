//! Mobile tab strip

use crodash_app::{ModeSource, NavigationState, PageRegistry};

use super::{navigate_href, Widget};
use crate::html::escape;

const DEBUG_EXIT_LABEL: &str = "🔧 Quitter le mode mobile forcé";

/// Fixed top strip with one tab per registered page, in registry order
///
/// When the debug override selected the mobile layout, a last tab links back
/// to the same page without it.
pub struct TabStrip<'a> {
    registry: &'a PageRegistry,
    navigation: &'a NavigationState,
}

impl<'a> TabStrip<'a> {
    pub fn new(registry: &'a PageRegistry, navigation: &'a NavigationState) -> Self {
        Self {
            registry,
            navigation,
        }
    }
}

impl Widget for TabStrip<'_> {
    fn render_into(&self, out: &mut String) {
        let current = self.navigation.canonical_url();
        out.push_str(r#"<nav class="tab-strip">"#);
        for entry in self.registry.entries() {
            let class = if entry.id == self.navigation.active_page() {
                "tab active"
            } else {
                "tab"
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
        if self.navigation.viewport().source == ModeSource::DebugOverride {
            out.push_str(&format!(
                r#"<a class="tab debug-exit" href="{}">{}</a>"#,
                escape(&current.with_force_mobile(false).href()),
                escape(DEBUG_EXIT_LABEL)
            ));
        }
        out.push_str("</nav>");
    }
}
