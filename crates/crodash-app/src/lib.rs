//! crodash-app - Navigation state, routing and configuration for the CRO Dashboard
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! navigation model: a page registry and router, the viewport mode selector,
//! per-request session state, messages and the update function, plus
//! configuration loading.

pub mod config;
pub mod handler;
pub mod message;
pub mod query;
pub mod router;
pub mod state;
pub mod viewport;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use message::Message;
pub use query::PageQuery;
pub use router::{PageEntry, PageRegistry};
pub use state::{AppState, NavigationState, SessionFlags, SessionState};
pub use viewport::{is_mobile, ModeSource, ResolvedViewport, ViewportMode};
