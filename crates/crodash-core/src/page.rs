//! Page taxonomy shared by the router and the view
//!
//! A [`PageKind`] is the tagged variant a registry entry dispatches on when it
//! is rendered. [`NavSection`] groups entries in the desktop sidebar.

use serde::{Deserialize, Serialize};

/// Every page the dashboard knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    /// Landing page with the KPI status summary
    Overview,
    /// KPI tables grouped by category
    RiskDashboard,
    /// Action plan follow-up
    ActionsDashboard,
    /// Governance framework (pillars + checklist progress)
    CroFramework,
    /// Regulatory compliance (Pillar 1/2/3, COREP/FINREP)
    Compliance,
    /// Adverse scenarios on capital ratios
    StressTesting,
    /// 12-24 month capital projections
    ForwardLooking,
    /// Data hub and real-time feed monitoring
    Integration,
    /// Automated regulatory reporting
    Reporting,
}

impl PageKind {
    /// All kinds in default navigation order
    pub const ALL: [PageKind; 9] = [
        PageKind::Overview,
        PageKind::RiskDashboard,
        PageKind::ActionsDashboard,
        PageKind::CroFramework,
        PageKind::Compliance,
        PageKind::StressTesting,
        PageKind::ForwardLooking,
        PageKind::Integration,
        PageKind::Reporting,
    ];
}

/// Sidebar group a page is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavSection {
    /// Listed above every titled section
    #[default]
    TopLevel,
    RiskManagement,
    ComplianceAnalytics,
    SystemsData,
}

impl NavSection {
    /// Section title shown in the sidebar (`None` for top-level links)
    pub fn title(&self) -> Option<&'static str> {
        match self {
            NavSection::TopLevel => None,
            NavSection::RiskManagement => Some("Gestion des Risques"),
            NavSection::ComplianceAnalytics => Some("Conformité & Analytics"),
            NavSection::SystemsData => Some("Systèmes & Données"),
        }
    }

    /// Sidebar order
    pub const ORDER: [NavSection; 4] = [
        NavSection::TopLevel,
        NavSection::RiskManagement,
        NavSection::ComplianceAnalytics,
        NavSection::SystemsData,
    ];
}
