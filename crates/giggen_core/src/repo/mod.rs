//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the timeline data-access contract used by aggregation.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Each source kind maps to exactly one backing table; the mapping is
//!   exhaustive by construction of `TimelineSource`.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod timeline_repo;
