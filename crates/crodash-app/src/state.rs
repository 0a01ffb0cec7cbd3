//! Application state (Model in TEA pattern)
//!
//! [`AppState`] is built once at startup and shared read-only between
//! requests. [`SessionState`] is rebuilt for every request from the URL and
//! the hint cookie, mutated by [`crate::handler::update`], then dropped.

use std::path::PathBuf;

use crodash_core::prelude::*;

use crate::config::Settings;
use crate::query::PageQuery;
use crate::router::{PageEntry, PageRegistry};
use crate::viewport::{ResolvedViewport, ViewportMode};

/// Which page is displayed and whether mobile layout is forced
///
/// Both live in the URL: a reload keeps them and a URL without
/// `force_mobile` drops the override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    active_page: String,
    /// URL query kept in sync with `active_page` by navigation
    url: PageQuery,
}

impl NavigationState {
    /// Resolve the active page from the request query
    pub fn from_query(registry: &PageRegistry, url: PageQuery) -> Self {
        let active_page = registry.resolve_page(url.page.as_deref()).to_string();
        Self { active_page, url }
    }

    pub fn active_page(&self) -> &str {
        &self.active_page
    }

    pub fn mobile_override(&self) -> bool {
        self.url.forces_mobile()
    }

    /// The URL query as last synchronized
    pub fn url(&self) -> &PageQuery {
        &self.url
    }

    /// URL query pointing at the active page, preserving both mobile flags
    pub fn canonical_url(&self) -> PageQuery {
        self.url.with_page(&self.active_page)
    }

    /// Viewport decision for this render
    pub fn viewport(&self) -> ResolvedViewport {
        ViewportMode::resolve(self.url.mobile.as_deref(), self.mobile_override())
    }

    /// Only called by [`PageRegistry::navigate_to`] after validation
    pub(crate) fn set_active_page(&mut self, id: &str) {
        self.active_page = id.to_string();
        self.url.page = Some(id.to_string());
    }

    pub(crate) fn set_mobile_override(&mut self, enabled: bool) {
        self.url = self.url.with_force_mobile(enabled);
    }
}

/// Flags persisted in the session cookie
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionFlags {
    /// The mobile navigation hint was already shown
    pub hint_seen: bool,
}

/// Per-request state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub navigation: NavigationState,
    pub hint_seen: bool,
}

impl SessionState {
    pub fn new(registry: &PageRegistry, url: PageQuery, flags: SessionFlags) -> Self {
        Self {
            navigation: NavigationState::from_query(registry, url),
            hint_seen: flags.hint_seen,
        }
    }

    pub fn flags(&self) -> SessionFlags {
        SessionFlags {
            hint_seen: self.hint_seen,
        }
    }
}

/// Shared, immutable application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: PageRegistry,
    pub settings: Settings,
}

impl AppState {
    /// Build the registry and apply the configured default page
    ///
    /// An unknown configured default is reported and ignored.
    pub fn new(settings: Settings) -> Result<Self> {
        let mut registry = PageRegistry::builtin()?;
        if let Some(id) = settings.navigation.default_page.as_deref() {
            match registry.set_default(id) {
                Ok(()) => info!("Default page set to '{}'", id),
                Err(e) => warn!("{}; keeping '{}' as default page", e, registry.default_id()),
            }
        }
        Ok(Self { registry, settings })
    }

    /// Start a request
    pub fn session(&self, url: PageQuery, flags: SessionFlags) -> SessionState {
        SessionState::new(&self.registry, url, flags)
    }

    /// Entry to render for a session
    pub fn active_entry(&self, session: &SessionState) -> &PageEntry {
        self.registry.active_entry(&session.navigation)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.settings.data.dir.clone()
    }
}
