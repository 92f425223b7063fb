//! Share-card content models.
//!
//! # Responsibility
//! - Map subject records (project/venue/event) into the normalized card
//!   model consumed by the external image renderer.
//!
//! # Invariants
//! - Builders are pure: no I/O, no validation beyond null-coalescing.
//! - Card values are request-scoped; nothing here is persisted.

pub mod card;
