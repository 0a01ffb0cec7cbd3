//! Viewport mode selection (mobile tab strip vs desktop sidebar)
//!
//! The mode is resolved once per render from, in precedence order:
//! 1. the session's debug override ("Forcer le mode mobile")
//! 2. the `mobile` URL flag
//! 3. the desktop default

/// The only `mobile` flag value that selects the mobile layout
pub const MOBILE_FLAG_VALUE: &str = "1";

/// Layout family to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportMode {
    /// Hierarchical sidebar navigation
    #[default]
    Desktop,
    /// Fixed top tab strip, no sidebar
    Mobile,
}

/// Which input decided the viewport mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSource {
    DebugOverride,
    UrlFlag,
    Default,
}

/// A viewport mode together with the input that selected it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedViewport {
    pub mode: ViewportMode,
    pub source: ModeSource,
}

impl ViewportMode {
    /// Resolve the mode from its sources
    pub fn resolve(url_mobile_flag: Option<&str>, debug_override: bool) -> ResolvedViewport {
        if debug_override {
            ResolvedViewport {
                mode: ViewportMode::Mobile,
                source: ModeSource::DebugOverride,
            }
        } else if url_mobile_flag == Some(MOBILE_FLAG_VALUE) {
            ResolvedViewport {
                mode: ViewportMode::Mobile,
                source: ModeSource::UrlFlag,
            }
        } else {
            ResolvedViewport {
                mode: ViewportMode::Desktop,
                source: ModeSource::Default,
            }
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, ViewportMode::Mobile)
    }
}

impl ResolvedViewport {
    pub fn is_mobile(&self) -> bool {
        self.mode.is_mobile()
    }
}

/// True when the mobile layout should be rendered
pub fn is_mobile(url_mobile_flag: Option<&str>, debug_override: bool) -> bool {
    ViewportMode::resolve(url_mobile_flag, debug_override)
        .mode
        .is_mobile()
}
