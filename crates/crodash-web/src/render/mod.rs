//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use chrono::NaiveDateTime;
use crodash_app::{AppState, SessionState};
use crodash_core::prelude::*;
use crodash_core::DataStore;

use crate::html::escape;
use crate::layout;
use crate::pages::{self, ActionsDrilldown, BodyRequest};
use crate::theme::styles;
use crate::widgets::{MaintenanceBox, MobileHint, PageHeader, Sidebar, TabStrip, Widget};

/// Everything one render reads
pub struct RenderContext<'a> {
    pub app: &'a AppState,
    pub session: &'a SessionState,
    pub data: &'a DataStore,
    /// Actions page selection from the request query
    pub drilldown: ActionsDrilldown,
    /// Include the one-time mobile hint
    pub show_hint: bool,
    /// Shown in the sidebar footer
    pub generated_at: NaiveDateTime,
}

/// Whether this render should carry the mobile hint
pub fn wants_mobile_hint(app: &AppState, session: &SessionState) -> bool {
    app.settings.ui.mobile_hint
        && session.navigation.viewport().is_mobile()
        && !session.hint_seen
}

/// Render the complete HTML document for the session's active page
///
/// A page body that fails is replaced by a maintenance box; the rest of the
/// document still renders.
pub fn view(ctx: &RenderContext<'_>) -> String {
    let app = ctx.app;
    let navigation = &ctx.session.navigation;
    let viewport = navigation.viewport();
    let mut screen = layout::create(viewport.mode);
    if !app.settings.ui.show_debug_toggle {
        screen = screen.without_debug_toggle();
    }
    let entry = app.active_entry(ctx.session);

    let request = BodyRequest {
        url: navigation.canonical_url(),
        drilldown: ctx.drilldown.clone(),
    };
    let body = match pages::render_body(entry.kind, ctx.data, &request)
        .map_err(|e| Error::render(&entry.id, e.to_string()))
        .context("Page body replaced by maintenance notice")
    {
        Ok(body) => body,
        Err(e) => MaintenanceBox::new(&entry.label, &e.to_string()).render(),
    };

    let mut out = String::with_capacity(8 * 1024);
    out.push_str(r#"<!DOCTYPE html><html lang="fr"><head><meta charset="utf-8">"#);
    out.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
    out.push_str(&format!(
        "<title>{} - {}</title>",
        escape(&entry.label),
        escape(&app.settings.ui.title)
    ));
    out.push_str("<style>");
    out.push_str(&styles::stylesheet());
    out.push_str("</style></head><body>");
    out.push_str(&format!(
        r#"<div class="app {}">"#,
        if viewport.is_mobile() { "mobile" } else { "desktop" }
    ));

    if screen.tab_strip {
        TabStrip::new(&app.registry, navigation).render_into(&mut out);
    }
    if screen.sidebar {
        Sidebar::new(&app.registry, navigation, &app.settings.ui.title)
            .debug_toggle(screen.debug_toggle)
            .updated_at(ctx.generated_at)
            .render_into(&mut out);
    }

    out.push_str(r#"<main class="content">"#);
    if ctx.show_hint {
        MobileHint.render_into(&mut out);
    }
    let fallbacks = ctx.data.fallbacks();
    if !fallbacks.is_empty() {
        let names: Vec<&str> = fallbacks.iter().map(|id| id.file_name()).collect();
        out.push_str(&format!(
            r#"<div class="notice">Données par défaut utilisées pour : {}</div>"#,
            names.join(", ")
        ));
    }
    PageHeader::new(entry).render_into(&mut out);
    out.push_str(&body);
    out.push_str("</main></div></body></html>");
    out
}
