//! Timeline aggregation use-case service.
//!
//! # Responsibility
//! - Produce one chronologically ordered event sequence per source.
//! - Provide create/update/delete entry points for editing surfaces.
//!
//! # Invariants
//! - One repository read per aggregation call; no fan-out, no caching,
//!   no shared mutable state between invocations.
//! - The returned sequence is freshly allocated and stably sorted.
//! - Persistence failures propagate unchanged; retry policy is the
//!   caller's concern.

use crate::model::timeline_event::{EventId, TimelineEvent, TimelineSource, VisibilityMode};
use crate::repo::timeline_repo::{RepoResult, TimelineRepository};
use crate::timeline::sort::sort_events;
use log::{error, info};
use std::time::Instant;

/// Use-case service wrapper for timeline aggregation and editing.
pub struct TimelineService<R: TimelineRepository> {
    repo: R,
}

impl<R: TimelineRepository> TimelineService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Fetches one source's timeline, chronologically ascending.
    ///
    /// `VisibilityMode::Public` restricts to publicly visible rows;
    /// `VisibilityMode::All` returns everything the persistence layer
    /// lets this caller see. An unknown source id yields an empty
    /// sequence, not an error.
    ///
    /// # Side effects
    /// - Emits `timeline_fetch` logging events with duration and row count.
    pub fn fetch_timeline(
        &self,
        source: &TimelineSource,
        mode: VisibilityMode,
    ) -> RepoResult<Vec<TimelineEvent>> {
        let started_at = Instant::now();

        match self.repo.fetch_events(source, mode) {
            Ok(mut events) => {
                sort_events(&mut events);
                info!(
                    "event=timeline_fetch module=timeline status=ok source_kind={} visibility={} rows={} duration_ms={}",
                    source.kind().as_str(),
                    mode.as_str(),
                    events.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(events)
            }
            Err(err) => {
                error!(
                    "event=timeline_fetch module=timeline status=error source_kind={} visibility={} duration_ms={} error={err}",
                    source.kind().as_str(),
                    mode.as_str(),
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }

    /// Creates one event under the given source.
    pub fn add_event(&self, source: &TimelineSource, event: &TimelineEvent) -> RepoResult<EventId> {
        self.repo.create_event(source, event)
    }

    /// Replaces all mutable fields of an existing event.
    ///
    /// Returns repository-level not-found errors unchanged.
    pub fn update_event(&self, source: &TimelineSource, event: &TimelineEvent) -> RepoResult<()> {
        self.repo.update_event(source, event)
    }

    /// Gets one event by stable id.
    pub fn get_event(
        &self,
        source: &TimelineSource,
        id: EventId,
    ) -> RepoResult<Option<TimelineEvent>> {
        self.repo.get_event(source, id)
    }

    /// Removes one event permanently.
    pub fn remove_event(&self, source: &TimelineSource, id: EventId) -> RepoResult<()> {
        self.repo.delete_event(source, id)
    }
}
