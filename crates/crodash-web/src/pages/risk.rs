use crodash_core::prelude::*;
use crodash_core::{category_label, kpi_rows, DataStore, DatasetId, KPI_CATEGORIES};

use super::{empty_note, field_listing, section};
use crate::html::escape;

pub(super) fn render(data: &DataStore) -> Result<String> {
    let kpi = data.value(DatasetId::Kpi);
    let mut out = String::new();
    let mut any_rows = false;

    for category in KPI_CATEGORIES {
        let rows = kpi_rows(kpi, category)?;
        if rows.is_empty() {
            continue;
        }
        any_rows = true;

        let mut table = String::from(
            "<table><thead><tr><th>Indicateur</th><th>Valeur</th><th>Statut</th></tr></thead><tbody>",
        );
        for row in rows {
            table.push_str(&format!(
                r#"<tr><td>{}</td><td>{}</td><td class="{}">{}</td></tr>"#,
                escape(&row.name),
                escape(&row.value),
                row.status.css_class(),
                row.status.label()
            ));
        }
        table.push_str("</tbody></table>");
        section(&mut out, category_label(category), &table);
    }

    if !any_rows {
        section(
            &mut out,
            "Indicateurs de risque",
            &empty_note("Aucun indicateur disponible."),
        );
    }

    section(
        &mut out,
        "Historique des ratios (36 mois)",
        &field_listing(data.value(DatasetId::HistoricalRatios)),
    );
    section(
        &mut out,
        "Benchmarking",
        &field_listing(data.value(DatasetId::Benchmarking)),
    );

    Ok(out)
}
