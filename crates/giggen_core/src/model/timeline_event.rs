//! Timeline event domain model.
//!
//! # Responsibility
//! - Define the normalized `TimelineEvent` record produced by aggregation.
//! - Express source ownership as a tagged variant.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another event.
//! - `date` takes precedence over `year` when both are present, for both
//!   ordering and display.
//! - `date_to`/`year_to` are descriptive range ends; chronological ordering
//!   against the start value is not validated here.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a timeline event within its backing collection.
pub type EventId = Uuid;

/// Audience gate for a single timeline event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Shown to everyone, including anonymous visitors.
    Public,
    /// Shown only to logged-in industry (pro) accounts.
    Pro,
    /// Shown only to the owning profile.
    Private,
}

/// Aggregation-time audience filter.
///
/// `Public` restricts the read to publicly visible rows; `All` trusts the
/// caller and applies no visibility predicate (row-level authorization is the
/// persistence layer's concern, not this crate's).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityMode {
    Public,
    All,
}

impl VisibilityMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::All => "all",
        }
    }
}

/// Media attachment kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

/// Ordered media attachment for a timeline event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub url: String,
}

/// Owner kind for a timeline, used for logging and collection lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Project,
    Entity,
    Persona,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Entity => "entity",
            Self::Persona => "persona",
        }
    }
}

/// Tagged owner reference for a timeline.
///
/// Replaces the legacy three-nullable-foreign-keys union: exactly one owner
/// per event is a type-level fact, and unknown source kinds are
/// unrepresentable at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum TimelineSource {
    Project(Uuid),
    Entity(Uuid),
    Persona(Uuid),
}

impl TimelineSource {
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Project(_) => SourceKind::Project,
            Self::Entity(_) => SourceKind::Entity,
            Self::Persona(_) => SourceKind::Persona,
        }
    }

    pub fn owner_id(&self) -> Uuid {
        match self {
            Self::Project(id) | Self::Entity(id) | Self::Persona(id) => *id,
        }
    }
}

/// Normalized timeline event record.
///
/// `date`/`date_to` are kept as raw `YYYY-MM-DD[Thh:mm[:ss]]` strings so the
/// stored granularity (month-only vs exact day vs day+time) survives
/// round-trips; `year`/`year_to` are the coarse fallback when no exact date
/// is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Stable global ID used for editing, linking and auditing.
    pub uuid: EventId,
    /// Display title, required.
    pub title: String,
    /// Narrative category tag. Resolved to label/icon through the event-type
    /// registry at display time; not validated at the data layer.
    pub event_type: String,
    /// Audience gate applied by public aggregation reads.
    pub visibility: Visibility,
    /// Exact start date (`YYYY-MM-DD`, optionally with `Thh:mm[:ss]`).
    pub date: Option<String>,
    /// Exact end date for ranged events.
    pub date_to: Option<String>,
    /// Coarse start year used when no exact date is known.
    pub year: Option<i32>,
    /// Coarse end year for year-range events.
    pub year_to: Option<i32>,
    /// Free-form venue/location name, never used for ordering.
    pub location_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    /// Narrative body text.
    pub description: Option<String>,
    /// Ordered media attachments.
    pub media: Vec<MediaItem>,
    /// Creation timestamp in epoch milliseconds. Provenance only.
    pub created_at: i64,
    /// Update timestamp in epoch milliseconds. Provenance only.
    pub updated_at: i64,
}

impl TimelineEvent {
    /// Creates a new public event with a generated stable ID.
    pub fn new(title: impl Into<String>, event_type: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, event_type)
    }

    /// Creates a new event with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        uuid: EventId,
        title: impl Into<String>,
        event_type: impl Into<String>,
    ) -> Self {
        let now_ms = Utc::now().timestamp_millis();
        Self {
            uuid,
            title: title.into(),
            event_type: event_type.into(),
            visibility: Visibility::Public,
            date: None,
            date_to: None,
            year: None,
            year_to: None,
            location_name: None,
            city: None,
            country: None,
            description: None,
            media: Vec::new(),
            created_at: now_ms,
            updated_at: now_ms,
        }
    }

    /// Returns whether this event carries any temporal anchor at all.
    pub fn is_dated(&self) -> bool {
        self.date.is_some() || self.date_to.is_some() || self.year.is_some() || self.year_to.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{SourceKind, TimelineEvent, TimelineSource, Visibility};
    use uuid::Uuid;

    #[test]
    fn new_event_defaults_to_public_and_undated() {
        let event = TimelineEvent::new("Debutkonsert", "performance");
        assert_eq!(event.visibility, Visibility::Public);
        assert!(!event.is_dated());
        assert!(event.media.is_empty());
    }

    #[test]
    fn source_exposes_kind_and_owner_id() {
        let owner = Uuid::new_v4();
        let source = TimelineSource::Persona(owner);
        assert_eq!(source.kind(), SourceKind::Persona);
        assert_eq!(source.owner_id(), owner);
        assert_eq!(source.kind().as_str(), "persona");
    }
}
