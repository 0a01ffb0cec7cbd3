//! crodash-web - HTML view and HTTP server for the CRO Dashboard
//!
//! This crate renders the navigation state into HTML documents (the View in
//! TEA) and exposes them through an axum server. Page chrome follows the
//! resolved viewport: a sectioned sidebar on desktop, a tab strip on mobile.

pub mod html;
pub mod layout;
pub mod pages;
pub mod render;
pub mod server;
pub mod session;
pub mod theme;
pub mod widgets;

pub use render::{view, RenderContext};
pub use server::{router, serve};
