//! Message types for the application (TEA pattern)

/// All user interactions the dashboard reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Sidebar link or tab clicked: show the page with this identifier
    Navigate(String),

    /// Debug checkbox "Forcer le mode mobile" changed
    SetForceMobile(bool),

    /// The one-time mobile navigation hint has been displayed
    DismissMobileHint,
}
