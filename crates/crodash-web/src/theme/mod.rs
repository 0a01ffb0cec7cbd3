//! Centralized theme for the dashboard pages.
//!
//! This module provides:
//! - `palette` - Raw color constants
//! - `styles` - The embedded stylesheet built from the palette

pub mod palette;
pub mod styles;
