//! Core domain logic for GIGGEN timelines and share cards.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod share;
pub mod timeline;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::timeline_event::{
    EventId, MediaItem, MediaKind, SourceKind, TimelineEvent, TimelineSource, Visibility,
    VisibilityMode,
};
pub use repo::timeline_repo::{
    RepoError, RepoResult, SqliteTimelineRepository, TimelineRepository,
};
pub use service::timeline_service::TimelineService;
pub use share::card::{
    from_event, from_project, from_venue, EventShareSource, ProjectShareSource, ShareCard,
    VenueShareSource,
};
pub use timeline::format::{format_event, format_single};
pub use timeline::registry::{
    merged_event_types, resolve_event_type, EventTypeInfo, FALLBACK_EVENT_TYPE,
    PERSONA_EVENT_TYPES, VENUE_EVENT_TYPES,
};
pub use timeline::sort::{sort_events, sort_key};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
