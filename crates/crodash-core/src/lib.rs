//! # crodash-core - Core Domain Types
//!
//! Foundation crate for the CRO Dashboard. Provides error handling, logging
//! setup, the page taxonomy and the JSON dataset store.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Pages (`page`)
//! - [`PageKind`] - Tagged variant a registry entry renders as
//! - [`NavSection`] - Sidebar group of a page
//!
//! ### Data (`dataset`, `indicators`)
//! - [`DataStore`] - Every dataset for one render, with fallback to defaults
//! - [`DatasetId`] - Known data files
//! - [`kpi_status_summary()`], [`completion_stats()`], [`top_priority_actions()`] - Read-only reshaping
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use crodash_core::prelude::*;
//! ```

pub mod dataset;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod page;
pub mod prelude;

pub use dataset::{DataStore, Dataset, DatasetId, DatasetOrigin};
pub use error::{Error, Result, ResultExt};
pub use indicators::{
    category_label, checklist, completion_stats, kpi_rows, kpi_status_summary, pillars,
    top_level_fields, top_priority_actions, ChecklistPillar, ChecklistTask, Completion,
    CompletionLevel, CompletionStats, KpiRow, KpiStatus, PillarSummary, Priority, PriorityAction,
    StatusFilter, StatusSummary, TaskBreakdown, TaskFilter, TaskStatus, KPI_CATEGORIES,
};
pub use page::{NavSection, PageKind};
