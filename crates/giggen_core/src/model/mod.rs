//! Unified domain model for timeline content.
//!
//! # Responsibility
//! - Define the canonical event record shared by project/entity/persona
//!   timelines.
//! - Keep one normalized shape regardless of which backing collection a row
//!   came from.
//!
//! # Invariants
//! - Every timeline event is identified by a stable `EventId`.
//! - Source ownership is a tagged `TimelineSource` variant, never parallel
//!   nullable foreign keys.

pub mod timeline_event;
