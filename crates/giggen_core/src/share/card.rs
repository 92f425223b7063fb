//! Share-card builders for project, venue and event subjects.
//!
//! # Responsibility
//! - Truncate display text to card limits with a trailing ellipsis.
//! - Build call-to-action copy with per-subject degradation rules.
//! - Build absolute canonical URLs from the configured public origin.
//!
//! # Invariants
//! - Title is at most 34 characters including the ellipsis; subtitle at
//!   most 80. Truncation happens at character boundaries with trailing
//!   whitespace trimmed before the ellipsis.
//! - Ticket CTAs degrade: date+venue, then one of the two, then the
//!   generic branded phrase.

use crate::config::CoreConfig;

/// Maximum card title length, ellipsis included.
pub const TITLE_MAX_CHARS: usize = 34;
/// Maximum card subtitle length, ellipsis included.
pub const SUBTITLE_MAX_CHARS: usize = 80;

const TICKET_CTA: &str = "Kjøp billett nå";
const GENERIC_CTA: &str = "Opplev mer på GIGGEN";

/// Normalized content model consumed by the share-image renderer.
///
/// Request-scoped value object; built fresh per render call, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCard {
    pub title: String,
    pub subtitle: Option<String>,
    pub hero_image_url: Option<String>,
    pub call_to_action: String,
    pub canonical_url: String,
    pub brand_logo_url: Option<String>,
    pub subject_logo_url: Option<String>,
}

/// Project fields the card builder consumes.
#[derive(Debug, Clone, Default)]
pub struct ProjectShareSource {
    pub name: String,
    pub tagline: Option<String>,
    pub hero_image_url: Option<String>,
    pub logo_url: Option<String>,
    pub slug: String,
    /// Pre-formatted display date of the next ticketed event, if any.
    pub next_event_date: Option<String>,
    pub next_event_venue: Option<String>,
}

/// Venue fields the card builder consumes.
#[derive(Debug, Clone, Default)]
pub struct VenueShareSource {
    pub name: String,
    pub tagline: Option<String>,
    pub hero_image_url: Option<String>,
    pub logo_url: Option<String>,
    pub slug: String,
}

/// Event fields the card builder consumes.
#[derive(Debug, Clone, Default)]
pub struct EventShareSource {
    pub title: String,
    pub subtitle: Option<String>,
    pub hero_image_url: Option<String>,
    pub slug: String,
    /// Pre-formatted display date, if known.
    pub date: Option<String>,
    pub venue_name: Option<String>,
}

/// Builds a share card for a project profile.
pub fn from_project(config: &CoreConfig, source: &ProjectShareSource) -> ShareCard {
    ShareCard {
        title: truncate_for_card(&source.name, TITLE_MAX_CHARS),
        subtitle: source
            .tagline
            .as_deref()
            .map(|tagline| truncate_for_card(tagline, SUBTITLE_MAX_CHARS)),
        hero_image_url: source.hero_image_url.clone(),
        call_to_action: ticket_call_to_action(
            source.next_event_date.as_deref(),
            source.next_event_venue.as_deref(),
        ),
        canonical_url: canonical_url(config, "project", &source.slug),
        brand_logo_url: config.brand_logo_url.clone(),
        subject_logo_url: source.logo_url.clone(),
    }
}

/// Builds a share card for a venue profile.
pub fn from_venue(config: &CoreConfig, source: &VenueShareSource) -> ShareCard {
    ShareCard {
        title: truncate_for_card(&source.name, TITLE_MAX_CHARS),
        subtitle: source
            .tagline
            .as_deref()
            .map(|tagline| truncate_for_card(tagline, SUBTITLE_MAX_CHARS)),
        hero_image_url: source.hero_image_url.clone(),
        call_to_action: format!("Besøk {} på GIGGEN", source.name),
        canonical_url: canonical_url(config, "venue", &source.slug),
        brand_logo_url: config.brand_logo_url.clone(),
        subject_logo_url: source.logo_url.clone(),
    }
}

/// Builds a share card for a single event.
pub fn from_event(config: &CoreConfig, source: &EventShareSource) -> ShareCard {
    ShareCard {
        title: truncate_for_card(&source.title, TITLE_MAX_CHARS),
        subtitle: source
            .subtitle
            .as_deref()
            .map(|subtitle| truncate_for_card(subtitle, SUBTITLE_MAX_CHARS)),
        hero_image_url: source.hero_image_url.clone(),
        call_to_action: ticket_call_to_action(
            source.date.as_deref(),
            source.venue_name.as_deref(),
        ),
        canonical_url: canonical_url(config, "event", &source.slug),
        brand_logo_url: config.brand_logo_url.clone(),
        subject_logo_url: None,
    }
}

/// Truncates text to `max_chars` characters including the ellipsis.
///
/// Text within the limit is returned unchanged. Truncation keeps the first
/// `max_chars - 1` characters, trims trailing whitespace, then appends `…`.
pub fn truncate_for_card(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }

    let head: String = value.chars().take(max_chars.saturating_sub(1)).collect();
    let mut truncated = head.trim_end().to_string();
    truncated.push('…');
    truncated
}

fn ticket_call_to_action(date: Option<&str>, venue: Option<&str>) -> String {
    match (date, venue) {
        (Some(date), Some(venue)) => format!("{date} · {venue}\n{TICKET_CTA}"),
        (Some(date), None) => format!("{date}\n{TICKET_CTA}"),
        (None, Some(venue)) => format!("{venue}\n{TICKET_CTA}"),
        (None, None) => GENERIC_CTA.to_string(),
    }
}

fn canonical_url(config: &CoreConfig, segment: &str, slug: &str) -> String {
    format!("{}/{segment}/{slug}", config.public_base_url)
}
