//! Page bodies, one renderer per [`PageKind`]
//!
//! Bodies read the request's [`DataStore`] and return an error when a
//! dataset is present but shaped unexpectedly; the caller swaps the body for
//! a maintenance box in that case.

mod actions;
mod framework;
mod overview;
mod risk;
mod sections;

pub use actions::ActionsDrilldown;

use crodash_app::PageQuery;
use crodash_core::prelude::*;
use crodash_core::{top_level_fields, Completion, DataStore, PageKind};
use serde_json::Value;

use crate::html::escape;

/// Request inputs a page body reads besides the datasets
#[derive(Debug, Clone, Default)]
pub struct BodyRequest {
    /// Canonical URL of the page, base of in-page links
    pub url: PageQuery,
    pub drilldown: ActionsDrilldown,
}

/// Render the body of a page
pub fn render_body(kind: PageKind, data: &DataStore, request: &BodyRequest) -> Result<String> {
    match kind {
        PageKind::Overview => overview::render(data),
        PageKind::RiskDashboard => risk::render(data),
        PageKind::ActionsDashboard => actions::render(data, &request.drilldown, &request.url),
        PageKind::CroFramework => framework::render(data),
        PageKind::Compliance
        | PageKind::StressTesting
        | PageKind::ForwardLooking
        | PageKind::Integration
        | PageKind::Reporting => Ok(sections::render(kind)),
    }
}

/// `<section>` with a title around already-rendered content
fn section(out: &mut String, title: &str, content: &str) {
    out.push_str(r#"<section class="content-section"><h2 class="section-title">"#);
    out.push_str(&escape(title));
    out.push_str("</h2>");
    out.push_str(content);
    out.push_str("</section>");
}

/// Progress bar with the completed / total line
fn progress(completion: &Completion) -> String {
    let pct = completion.percentage();
    format!(
        r#"<div class="progress"><div class="progress-bar" style="width:{:.0}%"></div></div><p class="muted">{} / {} tâches ({:.0}%)</p>"#,
        pct, completion.completed, completion.total, pct
    )
}

fn empty_note(text: &str) -> String {
    format!(r#"<p class="muted">{}</p>"#, escape(text))
}

/// Two-column table of a document's top-level fields
fn field_listing(data: &Value) -> String {
    let fields = top_level_fields(data);
    if fields.is_empty() {
        return empty_note("Aucune donnée disponible.");
    }
    let mut out = String::from("<table><thead><tr><th>Champ</th><th>Valeur</th></tr></thead><tbody>");
    for (key, value) in fields {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            escape(&key),
            escape(&value)
        ));
    }
    out.push_str("</tbody></table>");
    out
}
