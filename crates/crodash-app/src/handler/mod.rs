//! Handler module - TEA update function
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch

pub(crate) mod update;


use crate::query::PageQuery;
use crate::state::SessionFlags;

// Re-export main entry point
pub use update::update;

/// Actions the HTTP layer should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Rewrite the browser URL to this query (redirect), which re-renders
    /// the selected page
    SyncUrl(PageQuery),

    /// Write the hint cookie
    PersistSession(SessionFlags),
}

/// Result of processing a message
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Optional action for the HTTP layer to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            action: Some(action),
        }
    }
}
