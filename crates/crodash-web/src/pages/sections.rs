use crodash_core::PageKind;

use super::section;

/// Descriptive sections of pages that carry no dataset
fn sections_for(kind: PageKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        PageKind::Compliance => &[
            (
                "📊 Pilier 1 - Fonds Propres",
                "Exigences de fonds propres au titre du risque de crédit, de marché et opérationnel.",
            ),
            (
                "🔍 Pilier 2 - Surveillance",
                "Processus ICAAP et ILAAP, dialogue prudentiel avec le superviseur.",
            ),
            (
                "📋 Pilier 3 - Discipline",
                "Publications réglementaires et transparence vis-à-vis du marché.",
            ),
        ],
        PageKind::StressTesting => &[(
            "Scénarios de Stress Testing",
            "Analyse des impacts des scénarios adverses sur les ratios de capital.",
        )],
        PageKind::ForwardLooking => &[(
            "Planification du capital",
            "Trajectoires des ratios de solvabilité et de liquidité sur 12 à 24 mois.",
        )],
        PageKind::Integration => &[(
            "Monitoring Temps Réel",
            "Surveillance des flux de données et intégration des systèmes.",
        )],
        PageKind::Reporting => &[(
            "Templates Réglementaires",
            "COREP, FINREP, LCR et autres rapports automatisés.",
        )],
        PageKind::Overview
        | PageKind::RiskDashboard
        | PageKind::ActionsDashboard
        | PageKind::CroFramework => &[],
    }
}

pub(super) fn render(kind: PageKind) -> String {
    let mut out = String::new();
    for (title, body) in sections_for(kind) {
        section(&mut out, title, &format!("<p>{}</p>", body));
    }
    out
}
