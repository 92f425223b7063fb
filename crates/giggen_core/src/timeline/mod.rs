//! Timeline aggregation building blocks.
//!
//! # Responsibility
//! - Derive chronological sort keys from heterogeneous temporal fields.
//! - Render locale-specific date strings at display granularity.
//! - Resolve event-type tags to display labels and icons.
//!
//! # Invariants
//! - All functions here are pure; no I/O, no shared mutable state.
//! - Bad temporal or type data degrades to empty/fallback values, never to
//!   errors surfaced through rendering paths.

mod date;
pub mod format;
pub mod registry;
pub mod sort;
