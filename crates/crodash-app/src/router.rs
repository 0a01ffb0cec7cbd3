//! Page registry and router
//!
//! The registry is an ordered list of [`PageEntry`] with a lookup table from
//! identifier to position, built once at startup. Resolution never fails:
//! anything that is not a registered identifier resolves to the default page.

use std::collections::HashMap;

use crodash_core::prelude::*;
use crodash_core::{NavSection, PageKind};

use crate::state::NavigationState;

/// A navigable page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    /// Stable identifier used in the `page` URL parameter
    pub id: String,
    /// Display name (sidebar, tab strip, page title)
    pub label: String,
    /// Glyph shown before the label
    pub icon: String,
    /// Page header subtitle
    pub subtitle: String,
    /// Sidebar group
    pub section: NavSection,
    /// Render action
    pub kind: PageKind,
    /// Fallback page for unknown identifiers
    pub is_default: bool,
}

impl PageEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: PageKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: String::new(),
            subtitle: String::new(),
            section: NavSection::default(),
            kind,
            is_default: false,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn section(mut self, section: NavSection) -> Self {
        self.section = section;
        self
    }

    /// Mark this entry as the fallback page
    pub fn default_page(mut self) -> Self {
        self.is_default = true;
        self
    }
}

/// Ordered, validated set of pages
#[derive(Debug, Clone)]
pub struct PageRegistry {
    entries: Vec<PageEntry>,
    index: HashMap<String, usize>,
    default_index: usize,
}

impl PageRegistry {
    /// Build a registry, checking that identifiers are unique and that
    /// exactly one entry is the default.
    pub fn new(entries: Vec<PageEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if entry.id.is_empty() {
                return Err(Error::registry(format!(
                    "entry '{}' has an empty identifier",
                    entry.label
                )));
            }
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(Error::registry(format!(
                    "duplicate page identifier '{}'",
                    entry.id
                )));
            }
        }

        let defaults: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_default)
            .map(|(i, _)| i)
            .collect();
        let default_index = match defaults.as_slice() {
            [single] => *single,
            [] => return Err(Error::registry("no default page")),
            many => {
                return Err(Error::registry(format!(
                    "{} pages are marked as default",
                    many.len()
                )))
            }
        };

        Ok(Self {
            entries,
            index,
            default_index,
        })
    }

    /// The dashboard's pages in sidebar order, defaulting to `overview`
    pub fn builtin() -> Result<Self> {
        Self::new(vec![
            PageEntry::new("overview", "Vue d'Ensemble", PageKind::Overview)
                .icon("🏠")
                .subtitle("Synthèse des indicateurs clés et du statut des risques")
                .default_page(),
            PageEntry::new("risk", "Tableau de Bord Risques", PageKind::RiskDashboard)
                .icon("📊")
                .subtitle("Suivi des ratios de capital, de liquidité et des métriques de risque")
                .section(NavSection::RiskManagement),
            PageEntry::new("actions", "Pilotage des Actions", PageKind::ActionsDashboard)
                .icon("🧭")
                .subtitle("Suivi des plans d'action et des échéances")
                .section(NavSection::RiskManagement),
            PageEntry::new("framework", "Framework CRO", PageKind::CroFramework)
                .icon("🏗️")
                .subtitle("Architecture de gouvernance et gestion des risques")
                .section(NavSection::RiskManagement),
            PageEntry::new("compliance", "Conformité Réglementaire", PageKind::Compliance)
                .icon("📋")
                .subtitle("Piliers 1, 2 et 3 et reporting COREP/FINREP")
                .section(NavSection::ComplianceAnalytics),
            PageEntry::new("stress", "Tests de Résistance", PageKind::StressTesting)
                .icon("🌪️")
                .subtitle("Impact des scénarios adverses sur les ratios de capital")
                .section(NavSection::ComplianceAnalytics),
            PageEntry::new("forward", "Analyse Prospective", PageKind::ForwardLooking)
                .icon("🔮")
                .subtitle("Projections et planification du capital à 12-24 mois")
                .section(NavSection::ComplianceAnalytics),
            PageEntry::new("integration", "Intégration & Monitoring", PageKind::Integration)
                .icon("🔗")
                .subtitle("Hub de données et surveillance temps réel des flux")
                .section(NavSection::SystemsData),
            PageEntry::new("reporting", "Reporting Automatisé", PageKind::Reporting)
                .icon("📑")
                .subtitle("Génération automatique des rapports réglementaires")
                .section(NavSection::SystemsData),
        ])
    }

    /// Move the default marker to `id`
    ///
    /// Leaves the registry untouched when `id` is not registered.
    pub fn set_default(&mut self, id: &str) -> Result<()> {
        let position = *self.index.get(id).ok_or_else(|| Error::unknown_page(id))?;
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.is_default = i == position;
        }
        self.default_index = position;
        Ok(())
    }

    pub fn default_entry(&self) -> &PageEntry {
        &self.entries[self.default_index]
    }

    pub fn default_id(&self) -> &str {
        &self.default_entry().id
    }

    pub fn get(&self, id: &str) -> Option<&PageEntry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Entries in registration order
    pub fn entries(&self) -> &[PageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries grouped by sidebar section, sections in display order,
    /// empty sections omitted
    pub fn by_section(&self) -> Vec<(NavSection, Vec<&PageEntry>)> {
        NavSection::ORDER
            .iter()
            .filter_map(|&section| {
                let pages: Vec<&PageEntry> = self
                    .entries
                    .iter()
                    .filter(|e| e.section == section)
                    .collect();
                (!pages.is_empty()).then_some((section, pages))
            })
            .collect()
    }

    // ─────────────────────────────────────────────────────────
    // Routing
    // ─────────────────────────────────────────────────────────

    /// Identifier to display for a raw `page` URL parameter
    pub fn resolve_page(&self, url_page_param: Option<&str>) -> &str {
        match url_page_param.and_then(|id| self.get(id)) {
            Some(entry) => &entry.id,
            None => {
                if let Some(unknown) = url_page_param {
                    debug!("Unknown page '{}', falling back to '{}'", unknown, self.default_id());
                }
                self.default_id()
            }
        }
    }

    /// Make `id` the active page and rewrite the URL `page` parameter
    ///
    /// Returns `false` without touching `state` when `id` is not registered.
    pub fn navigate_to(&self, state: &mut NavigationState, id: &str) -> bool {
        if !self.contains(id) {
            debug!("Ignoring navigation to unknown page '{}'", id);
            return false;
        }
        state.set_active_page(id);
        true
    }

    /// Entry of the state's active page
    pub fn active_entry(&self, state: &NavigationState) -> &PageEntry {
        self.get(state.active_page())
            .unwrap_or_else(|| self.default_entry())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::PageQuery;

    fn small_registry() -> PageRegistry {
        PageRegistry::new(vec![
            PageEntry::new("home", "Accueil", PageKind::Overview).default_page(),
            PageEntry::new("risk", "Risques", PageKind::RiskDashboard),
            PageEntry::new("actions", "Actions", PageKind::ActionsDashboard),
        ])
        .unwrap()
    }

    #[test]
    fn test_builtin_registry_is_valid() {
        let registry = PageRegistry::builtin().unwrap();
        assert_eq!(registry.len(), PageKind::ALL.len());
        assert_eq!(registry.default_id(), "overview");
        for kind in PageKind::ALL {
            assert!(registry.entries().iter().any(|e| e.kind == kind));
        }
    }

    #[test]
    fn test_rejects_duplicate_identifier() {
        let err = PageRegistry::new(vec![
            PageEntry::new("home", "A", PageKind::Overview).default_page(),
            PageEntry::new("home", "B", PageKind::RiskDashboard),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_rejects_missing_default() {
        let err = PageRegistry::new(vec![PageEntry::new("home", "A", PageKind::Overview)])
            .unwrap_err();
        assert!(err.to_string().contains("no default"));
    }

    #[test]
    fn test_rejects_multiple_defaults() {
        let err = PageRegistry::new(vec![
            PageEntry::new("a", "A", PageKind::Overview).default_page(),
            PageEntry::new("b", "B", PageKind::Reporting).default_page(),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("2 pages"));
    }

    #[test]
    fn test_rejects_empty_identifier() {
        assert!(PageRegistry::new(vec![
            PageEntry::new("", "Vide", PageKind::Overview).default_page()
        ])
        .is_err());
    }

    #[test]
    fn test_resolve_registered_identifier_unchanged() {
        let registry = small_registry();
        for entry in registry.entries() {
            assert_eq!(registry.resolve_page(Some(&entry.id)), entry.id);
        }
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_default() {
        let registry = small_registry();
        assert_eq!(registry.resolve_page(Some("unknown")), "home");
        assert_eq!(registry.resolve_page(Some("")), "home");
        assert_eq!(registry.resolve_page(Some("RISK")), "home");
        assert_eq!(registry.resolve_page(None), "home");
    }

    #[test]
    fn test_navigate_then_resolve_synced_url() {
        let registry = small_registry();
        for entry in registry.entries() {
            let mut state = NavigationState::from_query(&registry, PageQuery::default());
            assert!(registry.navigate_to(&mut state, &entry.id));
            assert_eq!(state.active_page(), entry.id);
            assert_eq!(registry.resolve_page(state.url().page.as_deref()), entry.id);
        }
    }

    #[test]
    fn test_navigate_unknown_is_noop() {
        let registry = small_registry();
        let mut state = NavigationState::from_query(&registry, PageQuery::new(Some("risk"), None));
        let before = state.clone();

        assert!(!registry.navigate_to(&mut state, "nowhere"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_example_scenario_reload_preserves_page() {
        let registry = small_registry();
        assert_eq!(registry.resolve_page(Some("risk")), "risk");
        assert_eq!(registry.resolve_page(Some("unknown")), "home");

        let mut state = NavigationState::from_query(&registry, PageQuery::default());
        registry.navigate_to(&mut state, "actions");

        // Reload: a fresh state built from the synchronized URL
        let reloaded =
            NavigationState::from_query(&registry, PageQuery::parse(&state.url().to_query_string()));
        assert_eq!(reloaded.active_page(), "actions");
    }

    #[test]
    fn test_set_default_moves_marker() {
        let mut registry = small_registry();
        registry.set_default("risk").unwrap();

        assert_eq!(registry.default_id(), "risk");
        assert_eq!(registry.entries().iter().filter(|e| e.is_default).count(), 1);
        assert_eq!(registry.resolve_page(Some("nope")), "risk");
    }

    #[test]
    fn test_set_default_unknown_keeps_registry() {
        let mut registry = small_registry();
        let err = registry.set_default("ghost").unwrap_err();
        assert!(matches!(err, Error::UnknownPage { .. }));
        assert_eq!(registry.default_id(), "home");
    }

    #[test]
    fn test_by_section_groups_in_order() {
        let registry = PageRegistry::builtin().unwrap();
        let sections = registry.by_section();

        let order: Vec<NavSection> = sections.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, NavSection::ORDER.to_vec());
        assert_eq!(sections[0].1.len(), 1);
        assert_eq!(sections[1].1[0].id, "risk");
        let total: usize = sections.iter().map(|(_, pages)| pages.len()).sum();
        assert_eq!(total, registry.len());
    }

    #[test]
    fn test_by_section_skips_empty_sections() {
        let registry = small_registry();
        let sections = registry.by_section();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].0, NavSection::TopLevel);
    }
}
