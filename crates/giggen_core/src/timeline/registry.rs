//! Static event-type catalog for timeline rendering.
//!
//! # Responsibility
//! - Map event-type tags to display labels and icon names.
//! - Merge the persona and venue vocabularies into one lookup table.
//!
//! # Invariants
//! - The catalogs are fixed at compile time and never mutated.
//! - Persona entries win over venue entries on `value` collision.
//! - Unknown tags resolve to the `milestone` fallback, never to an error.

use once_cell::sync::Lazy;

/// One catalog entry: stored tag, display label, icon name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventTypeInfo {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn entry(value: &'static str, label: &'static str, icon: &'static str) -> EventTypeInfo {
    EventTypeInfo { value, label, icon }
}

/// Narrative categories for artist/persona timelines.
pub const PERSONA_EVENT_TYPES: &[EventTypeInfo] = &[
    entry("formation", "Oppstart", "sprout"),
    entry("development", "Utvikling", "trending-up"),
    entry("collaboration", "Samarbeid", "users"),
    entry("milestone", "Milepæl", "flag"),
    entry("performance", "Konsert", "music"),
    entry("education", "Utdanning", "graduation-cap"),
    entry("award", "Utmerkelse", "trophy"),
    entry("transition", "Overgang", "shuffle"),
    entry("current_focus", "Nåværende fokus", "star"),
];

/// Narrative categories for venue timelines.
///
/// Overlapping values shadow identical persona entries and are dropped by
/// the merge; concept/programming/relaunch are venue-specific phases.
pub const VENUE_EVENT_TYPES: &[EventTypeInfo] = &[
    entry("opening", "Åpning", "door-open"),
    entry("concept", "Konsept", "lightbulb"),
    entry("programming", "Programmering", "calendar"),
    entry("development", "Utvikling", "trending-up"),
    entry("collaboration", "Samarbeid", "users"),
    entry("milestone", "Milepæl", "flag"),
    entry("performance", "Konsert", "music"),
    entry("award", "Utmerkelse", "trophy"),
    entry("relaunch", "Relansering", "refresh-cw"),
];

/// Fallback entry for unknown or missing event-type tags.
pub const FALLBACK_EVENT_TYPE: EventTypeInfo = entry("milestone", "Milepæl", "flag");

/// Returns the merged rendering catalog.
///
/// Persona entries first, then venue entries whose `value` is not already
/// present. Built once, on first use.
pub fn merged_event_types() -> &'static [EventTypeInfo] {
    static MERGED: Lazy<Vec<EventTypeInfo>> = Lazy::new(|| {
        let mut merged = PERSONA_EVENT_TYPES.to_vec();
        for venue_entry in VENUE_EVENT_TYPES {
            if !merged.iter().any(|existing| existing.value == venue_entry.value) {
                merged.push(*venue_entry);
            }
        }
        merged
    });
    &MERGED
}

/// Resolves an event-type tag to its catalog entry.
///
/// Looks up `value` in `candidates` when supplied, otherwise in the merged
/// catalog. Unknown tags map to [`FALLBACK_EVENT_TYPE`].
pub fn resolve_event_type<'a>(
    value: &str,
    candidates: Option<&'a [EventTypeInfo]>,
) -> &'a EventTypeInfo {
    let catalog = candidates.unwrap_or_else(|| merged_event_types());
    catalog
        .iter()
        .find(|candidate| candidate.value == value)
        .unwrap_or(&FALLBACK_EVENT_TYPE)
}

#[cfg(test)]
mod tests {
    use super::{
        merged_event_types, resolve_event_type, FALLBACK_EVENT_TYPE, PERSONA_EVENT_TYPES,
        VENUE_EVENT_TYPES,
    };

    #[test]
    fn known_tags_resolve_from_both_vocabularies() {
        assert_eq!(resolve_event_type("performance", None).label, "Konsert");
        assert_eq!(resolve_event_type("relaunch", None).label, "Relansering");
    }

    #[test]
    fn unknown_tag_resolves_to_milestone_fallback() {
        let resolved = resolve_event_type("nonexistent_type", None);
        assert_eq!(*resolved, FALLBACK_EVENT_TYPE);
        assert_eq!(resolved.value, "milestone");
    }

    #[test]
    fn merged_catalog_deduplicates_on_value_with_persona_precedence() {
        let merged = merged_event_types();

        let development_count = merged
            .iter()
            .filter(|candidate| candidate.value == "development")
            .count();
        assert_eq!(development_count, 1);

        // Persona entries lead, venue-specific entries follow.
        assert_eq!(merged[0].value, PERSONA_EVENT_TYPES[0].value);
        assert!(merged.iter().any(|candidate| candidate.value == "opening"));
        assert!(
            merged.len() < PERSONA_EVENT_TYPES.len() + VENUE_EVENT_TYPES.len(),
            "collisions must be dropped in the merge"
        );
    }

    #[test]
    fn explicit_candidate_list_limits_the_lookup() {
        let resolved = resolve_event_type("opening", Some(PERSONA_EVENT_TYPES));
        assert_eq!(resolved.value, "milestone");

        let resolved = resolve_event_type("opening", Some(VENUE_EVENT_TYPES));
        assert_eq!(resolved.value, "opening");
    }
}
