use crodash_core::prelude::*;
use crodash_core::{kpi_status_summary, DataStore, DatasetId, KpiStatus};

use super::{empty_note, field_listing, section};

/// Static Basel pillar status rows: (pillar, status, detail)
const PILLAR_STATUS: [(&str, KpiStatus, &str); 3] = [
    ("Pilier 1", KpiStatus::Green, "Exigences de fonds propres respectées"),
    ("Pilier 2", KpiStatus::Orange, "ICAAP en cours de finalisation"),
    ("Pilier 3", KpiStatus::Green, "Publications à jour"),
];

pub(super) fn render(data: &DataStore) -> Result<String> {
    let summary = kpi_status_summary(data.value(DatasetId::Kpi))?;

    let mut out = String::new();

    let kpis = if summary.total() == 0 {
        empty_note("Aucun indicateur disponible.")
    } else {
        let mut cards = String::from(r#"<div class="metrics-grid">"#);
        let mut counts = vec![
            (KpiStatus::Green, summary.green),
            (KpiStatus::Orange, summary.orange),
            (KpiStatus::Red, summary.red),
        ];
        if summary.unknown > 0 {
            counts.push((KpiStatus::Unknown, summary.unknown));
        }
        for (status, count) in counts {
            cards.push_str(&format!(
                r#"<div class="metric-card"><div class="metric-label">{}</div><div class="metric-value {}">{}</div></div>"#,
                status.label(),
                status.css_class(),
                count
            ));
        }
        cards.push_str("</div>");
        cards
    };
    section(&mut out, "📊 Indicateurs Clés de Performance", &kpis);

    let mut pillars = String::from(r#"<div class="metrics-grid">"#);
    for (pillar, status, detail) in PILLAR_STATUS {
        pillars.push_str(&format!(
            r#"<div class="metric-card"><h3>{}</h3><span class="{}">{}</span><p class="muted">{}</p></div>"#,
            pillar,
            status.css_class(),
            status.label(),
            detail
        ));
    }
    pillars.push_str("</div>");
    section(&mut out, "Statut Conformité Réglementaire", &pillars);

    section(
        &mut out,
        "Performance financière",
        &field_listing(data.value(DatasetId::Pnl)),
    );

    Ok(out)
}
