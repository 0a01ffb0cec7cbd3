//! Action-tracking page: pillar cards, per-pillar drill-down and the open
//! high-priority actions
//!
//! The drill-down is selected by `pillar=<key>` in the page URL, with
//! optional `status=` and `priority=` filters.

use crodash_app::PageQuery;
use crodash_core::prelude::*;
use crodash_core::{
    checklist, top_priority_actions, ChecklistPillar, Completion, DataStore, DatasetId, Priority,
    StatusFilter, TaskBreakdown, TaskFilter,
};
use url::form_urlencoded;

use super::{empty_note, progress, section};
use crate::html::escape;

/// Number of open high-priority actions listed
pub const TOP_PRIORITY_COUNT: usize = 3;

const PILLAR_PARAM: &str = "pillar";
const STATUS_PARAM: &str = "status";
const PRIORITY_PARAM: &str = "priority";

/// Drill-down selection read from the page URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionsDrilldown {
    /// Checklist key of the opened pillar
    pub pillar: Option<String>,
    pub filter: TaskFilter,
}

impl ActionsDrilldown {
    /// Parse a raw query string; unknown filter values keep the default
    pub fn parse(query: &str) -> Self {
        let mut drilldown = Self::default();
        let (mut status, mut priority) = (None, None);
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                PILLAR_PARAM if drilldown.pillar.is_none() && !value.is_empty() => {
                    drilldown.pillar = Some(value.into_owned())
                }
                STATUS_PARAM if status.is_none() => status = Some(value.into_owned()),
                PRIORITY_PARAM if priority.is_none() => priority = Some(value.into_owned()),
                _ => {}
            }
        }
        drilldown.filter = TaskFilter {
            status: status
                .as_deref()
                .and_then(StatusFilter::parse)
                .unwrap_or_default(),
            priority: priority.as_deref().and_then(Priority::parse),
        };
        drilldown
    }

    fn open(pillar: &str, filter: TaskFilter) -> Self {
        Self {
            pillar: Some(pillar.to_string()),
            filter,
        }
    }

    /// Link to the page at `base` showing this selection
    pub fn href(&self, base: &PageQuery) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.extend_pairs(base.pairs());
        if let Some(pillar) = &self.pillar {
            serializer.append_pair(PILLAR_PARAM, pillar);
        }
        if self.filter.status != StatusFilter::All {
            serializer.append_pair(STATUS_PARAM, self.filter.status.key());
        }
        if let Some(priority) = self.filter.priority {
            serializer.append_pair(PRIORITY_PARAM, priority.key());
        }
        format!("/?{}", serializer.finish())
    }
}

fn breakdown_line(breakdown: &TaskBreakdown) -> String {
    format!(
        r#"<p class="task-breakdown">✅ {} · 🔄 {} · ⏳ {}</p>"#,
        breakdown.completed, breakdown.in_progress, breakdown.todo
    )
}

fn pillar_card(id: &str, pillar: &ChecklistPillar, base: &PageQuery) -> String {
    let completion = pillar.completion();
    let level = completion.level();
    format!(
        r#"<div class="pillar-card {}"><h3>{} {}</h3>{}{}<a class="drilldown-link" href="{}">Voir les actions</a></div>"#,
        level.css_class(),
        level.icon(),
        escape(pillar.display_title(id)),
        progress(&completion),
        breakdown_line(&pillar.breakdown()),
        escape(&ActionsDrilldown::open(id, TaskFilter::default()).href(base))
    )
}

fn filter_links(id: &str, current: TaskFilter, base: &PageQuery) -> String {
    let link = |filter: TaskFilter, label: &str, active: bool| {
        format!(
            r#"<a class="{}" href="{}">{}</a>"#,
            if active { "filter active" } else { "filter" },
            escape(&ActionsDrilldown::open(id, filter).href(base)),
            escape(label)
        )
    };

    let mut out = String::from(r#"<div class="filters"><span>📊 Statut</span>"#);
    for status in StatusFilter::ALL {
        let filter = TaskFilter { status, ..current };
        out.push_str(&link(filter, status.label(), status == current.status));
    }
    out.push_str("<span>🔥 Priorité</span>");
    out.push_str(&link(
        TaskFilter {
            priority: None,
            ..current
        },
        "Toutes",
        current.priority.is_none(),
    ));
    for priority in Priority::ALL {
        let filter = TaskFilter {
            priority: Some(priority),
            ..current
        };
        out.push_str(&link(filter, priority.label(), current.priority == Some(priority)));
    }
    out.push_str("</div>");
    out
}

fn pillar_detail(id: &str, pillar: &ChecklistPillar, filter: TaskFilter, base: &PageQuery) -> String {
    let mut out = progress(&pillar.completion());
    out.push_str(&breakdown_line(&pillar.breakdown()));
    out.push_str(&filter_links(id, filter, base));

    let tasks = pillar.filtered(&filter);
    out.push_str(&format!("<h3>📋 Actions ({} tâches)</h3>", tasks.len()));
    if tasks.is_empty() {
        out.push_str(&empty_note("Aucune tâche ne correspond aux filtres sélectionnés."));
        return out;
    }
    out.push_str("<table><thead><tr><th>Statut</th><th>Tâche</th><th>Priorité</th><th>Responsable</th></tr></thead><tbody>");
    for task in tasks {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            task.status().label(),
            escape(task.title()),
            task.priority().map_or("", |p| p.label()),
            escape(task.responsible.as_deref().unwrap_or("Non assigné"))
        ));
    }
    out.push_str("</tbody></table>");
    out
}

fn priority_list(data: &DataStore) -> Result<String> {
    let actions = top_priority_actions(data.value(DatasetId::Checklist), TOP_PRIORITY_COUNT)?;
    if actions.is_empty() {
        return Ok(empty_note("Aucune action prioritaire ouverte."));
    }
    let mut out = String::from(r#"<ol class="priority-actions">"#);
    for action in actions {
        out.push_str(&format!(
            r#"<li><strong>{}</strong><br><span class="muted">Pilier : {} · Responsable : {}</span></li>"#,
            escape(action.task.title()),
            escape(&action.pillar_title),
            escape(action.task.responsible.as_deref().unwrap_or("Non assigné"))
        ));
    }
    out.push_str("</ol>");
    Ok(out)
}

/// Render the actions page; `base` is the page's canonical URL
pub(super) fn render(data: &DataStore, drilldown: &ActionsDrilldown, base: &PageQuery) -> Result<String> {
    let pillars = checklist(data.value(DatasetId::Checklist))?;

    let mut out = String::new();
    let mut overall = Completion::default();
    for completion in pillars.values().map(ChecklistPillar::completion) {
        overall.total += completion.total;
        overall.completed += completion.completed;
    }
    section(&mut out, "Avancement des plans d'action", &progress(&overall));

    let cards = if pillars.is_empty() {
        empty_note("Aucune action enregistrée.")
    } else {
        let mut cards = String::from(r#"<div class="pillar-grid">"#);
        for (id, pillar) in &pillars {
            cards.push_str(&pillar_card(id, pillar, base));
        }
        cards.push_str("</div>");
        cards
    };
    section(&mut out, "Actions par pilier", &cards);

    if let Some(id) = &drilldown.pillar {
        match pillars.get(id) {
            Some(pillar) => section(
                &mut out,
                &format!("Actions du pilier {}", pillar.display_title(id)),
                &pillar_detail(id, pillar, drilldown.filter, base),
            ),
            None => section(
                &mut out,
                "Actions du pilier",
                &empty_note(&format!("Pilier inconnu : {}", id)),
            ),
        }
    }

    section(&mut out, "🔥 Top 3 Actions Prioritaires", &priority_list(data)?);
    Ok(out)
}
