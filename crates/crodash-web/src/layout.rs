//! Screen layout definitions for the dashboard
//!
//! Decides which chrome regions surround the page body for a viewport mode.

use crodash_app::ViewportMode;

/// Chrome regions shown around the page body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Hierarchical sidebar with sections (desktop)
    pub sidebar: bool,

    /// Fixed top tab strip listing every page (mobile)
    pub tab_strip: bool,

    /// "Forcer le mode mobile" form, placed inside the sidebar
    pub debug_toggle: bool,
}

/// Create the layout for a viewport mode
///
/// The debug toggle lives in the sidebar, so it is only available on desktop.
pub fn create(mode: ViewportMode) -> ScreenLayout {
    match mode {
        ViewportMode::Desktop => ScreenLayout {
            sidebar: true,
            tab_strip: false,
            debug_toggle: true,
        },
        ViewportMode::Mobile => ScreenLayout {
            sidebar: false,
            tab_strip: true,
            debug_toggle: false,
        },
    }
}

impl ScreenLayout {
    /// Hide the debug toggle regardless of mode
    pub fn without_debug_toggle(mut self) -> Self {
        self.debug_toggle = false;
        self
    }
}
