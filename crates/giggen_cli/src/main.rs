//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `giggen_core` wiring end to end.
//! - Keep output deterministic for quick local sanity checks.

use giggen_core::db::open_db_in_memory;
use giggen_core::{
    format_event, resolve_event_type, SqliteTimelineRepository, TimelineEvent, TimelineService,
    TimelineSource, Visibility, VisibilityMode,
};
use std::error::Error;
use uuid::Uuid;

fn main() -> Result<(), Box<dyn Error>> {
    println!("giggen_core version={}", giggen_core::core_version());

    let conn = open_db_in_memory()?;
    let repo = SqliteTimelineRepository::try_new(&conn)?;
    let service = TimelineService::new(repo);

    let source = TimelineSource::Persona(Uuid::new_v4());
    service.add_event(&source, &sample("Bandet dannes", "formation", None, Some(2018)))?;
    service.add_event(
        &source,
        &sample("Debutkonsert", "performance", Some("2019-06-15T20:00"), None),
    )?;
    let mut draft = sample("Studioinnspilling", "development", Some("2024-03-01"), None);
    draft.visibility = Visibility::Private;
    service.add_event(&source, &draft)?;

    println!("-- public timeline --");
    for event in service.fetch_timeline(&source, VisibilityMode::Public)? {
        print_line(&event);
    }

    println!("-- owner timeline --");
    for event in service.fetch_timeline(&source, VisibilityMode::All)? {
        print_line(&event);
    }

    Ok(())
}

fn sample(
    title: &str,
    event_type: &str,
    date: Option<&str>,
    year: Option<i32>,
) -> TimelineEvent {
    let mut event = TimelineEvent::new(title, event_type);
    event.date = date.map(str::to_string);
    event.year = year;
    event
}

fn print_line(event: &TimelineEvent) {
    let info = resolve_event_type(&event.event_type, None);
    let when = format_event(event).unwrap_or_else(|| "udatert".to_string());
    println!("{when} | {} | {}", info.label, event.title);
}
