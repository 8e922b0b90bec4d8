//! # Gable
//!
//! Report query/execution engine for housing portfolio data.
//!
//! ## Architecture
//!
//! Gable turns a structured report definition into filtered, grouped, or
//! aggregated results over an in-memory property snapshot:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        RawReportDefinition (translator wire JSON)        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [validation]
//! ┌─────────────────────────────────────────────────────────┐
//! │          ReportDefinition (typed, invariant-checked)     │
//! └─────────────────────────────────────────────────────────┘
//!                          │        PropertyRecord[]
//!                          │              │
//!                          │              ▼ [projection]
//!                          │   ┌──────────────────────────┐
//!                          │   │  Row (UnitRow | JobRow)  │
//!                          │   └──────────────────────────┘
//!                          ▼              │
//! ┌─────────────────────────────────────────────────────────┐
//! │        [filter] predicate  →  [engine] aggregation       │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │      ReportResult (list | grouped list | KPI scalar)     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The pipeline is synchronous and side-effect-free: every run borrows the
//! snapshot immutably and allocates its rows fresh, so concurrent runs need
//! no coordination.

pub mod engine;
pub mod filter;
pub mod model;
pub mod projection;
pub mod validation;
pub mod widget;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::engine::{execute, run, ReportResult, ReportRun, RowGroup};
    pub use crate::model::{
        DisplayType, EntityType, FilterSet, GroupKey, MetricSpec, NumericField, PropertyRecord,
        RawFilterSet, RawReportDefinition, ReportDefinition, ReportShape,
    };
    pub use crate::projection::{project, MaintenanceJobRow, Row, UnitRow};
    pub use crate::validation::{normalize, DefinitionError};
}

// Also export the pipeline entry points at crate root
pub use engine::{execute, run, ReportResult, ReportRun};
pub use validation::normalize;
