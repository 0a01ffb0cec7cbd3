//! Framework page: pillars with their checklist completion

use crodash_core::prelude::*;
use crodash_core::{completion_stats, pillars, DataStore, DatasetId};

use super::{empty_note, progress, section};
use crate::html::escape;

/// Pillars with their checklist completion
pub(super) fn render(data: &DataStore) -> Result<String> {
    let pillar_list = pillars(data.value(DatasetId::Pillars))?;
    let stats = completion_stats(data.value(DatasetId::Checklist))?;

    let mut out = String::new();
    section(&mut out, "Avancement global", &progress(&stats.overall));

    if pillar_list.is_empty() {
        section(&mut out, "Piliers", &empty_note("Aucun pilier défini."));
        return Ok(out);
    }

    for pillar in pillar_list {
        let mut content = String::new();
        if let Some(description) = &pillar.description {
            content.push_str(&format!("<p>{}</p>", escape(description)));
        }
        let completion = stats
            .pillars
            .get(&format!("pillar_{}", pillar.id))
            .or_else(|| stats.pillars.get(&pillar.id));
        match completion {
            Some(completion) => content.push_str(&progress(completion)),
            None => content.push_str(&empty_note("Aucune tâche suivie.")),
        }
        section(&mut out, &pillar.name, &content);
    }
    Ok(out)
}
