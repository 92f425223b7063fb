//! Chronological sort key derivation for timeline events.
//!
//! # Responsibility
//! - Map heterogeneous temporal fields (exact date, end date, year, year
//!   range) onto one comparable key.
//! - Order event sequences ascending (oldest first) with a stable sort.
//!
//! # Invariants
//! - The key rules are applied first-match-wins in the documented order.
//! - Year-only keys stay on the bare-year scale and are NOT converted to
//!   epoch milliseconds. Mixed-scale comparison against date-based keys is
//!   therefore only approximately chronological: a bare year like 2024 sorts
//!   before any exact-date key of year >= 1970. This matches the shipped
//!   behavior; changing the scale is a product decision, not a bug fix.

use crate::model::timeline_event::TimelineEvent;
use crate::timeline::date::parse_stamp;

/// Derives the chronological sort key for one event.
///
/// Rules, first applicable wins:
/// 1. valid `date` -> its UTC epoch milliseconds
/// 2. valid `date_to` -> its UTC epoch milliseconds
/// 3. `year` -> the year value itself
/// 4. `year_to` -> the year value itself
/// 5. undated -> `i64::MAX` (sorts last)
pub fn sort_key(event: &TimelineEvent) -> i64 {
    if let Some(stamp) = event.date.as_deref().and_then(parse_stamp) {
        return stamp.epoch_ms;
    }
    if let Some(stamp) = event.date_to.as_deref().and_then(parse_stamp) {
        return stamp.epoch_ms;
    }
    if let Some(year) = event.year {
        return i64::from(year);
    }
    if let Some(year_to) = event.year_to {
        return i64::from(year_to);
    }
    i64::MAX
}

/// Sorts events chronologically ascending, in place.
///
/// The sort is stable: events with equal keys keep their relative input
/// order across repeated sorts.
pub fn sort_events(events: &mut [TimelineEvent]) {
    events.sort_by_key(sort_key);
}

#[cfg(test)]
mod tests {
    use super::{sort_events, sort_key};
    use crate::model::timeline_event::TimelineEvent;

    fn dated(title: &str, date: &str) -> TimelineEvent {
        let mut event = TimelineEvent::new(title, "milestone");
        event.date = Some(date.to_string());
        event
    }

    fn yeared(title: &str, year: i32) -> TimelineEvent {
        let mut event = TimelineEvent::new(title, "milestone");
        event.year = Some(year);
        event
    }

    #[test]
    fn exact_date_wins_over_year_fields() {
        let mut event = dated("both anchors", "2024-05-01");
        event.year = Some(1999);
        assert_eq!(sort_key(&event), 1_714_521_600_000);
    }

    #[test]
    fn invalid_date_falls_through_to_later_rules() {
        let mut event = dated("broken date", "soon(tm)");
        event.date_to = Some("2024-05-01".to_string());
        assert_eq!(sort_key(&event), 1_714_521_600_000);

        event.date_to = None;
        event.year_to = Some(2022);
        assert_eq!(sort_key(&event), 2022);
    }

    #[test]
    fn undated_event_sorts_last() {
        let undated = TimelineEvent::new("no anchor", "milestone");
        assert_eq!(sort_key(&undated), i64::MAX);

        let mut events = vec![undated, dated("show", "2024-05-01")];
        sort_events(&mut events);
        assert_eq!(events[0].title, "show");
        assert_eq!(events[1].title, "no anchor");
    }

    #[test]
    fn mixed_scale_ordering_places_bare_years_before_epoch_keys() {
        // Documented anomaly: bare-year keys (2020, 2022) sort numerically
        // below epoch-millisecond keys, so year-only entries always precede
        // exact-date entries of the epoch era.
        let mut year_range = TimelineEvent::new("year range end", "milestone");
        year_range.year_to = Some(2022);

        let mut events = vec![
            yeared("year only", 2020),
            dated("spring show", "2024-05-01"),
            dated("new year gig", "2019-01-01T20:00"),
            year_range,
        ];
        sort_events(&mut events);

        let titles: Vec<&str> = events.iter().map(|event| event.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["year only", "year range end", "new year gig", "spring show"]
        );
    }

    #[test]
    fn equal_keys_preserve_input_order_across_repeated_sorts() {
        let mut events = vec![
            dated("first", "2024-05-01"),
            dated("second", "2024-05-01"),
            yeared("third", 2020),
            dated("fourth", "2024-05-01"),
        ];

        sort_events(&mut events);
        sort_events(&mut events);

        let titles: Vec<&str> = events.iter().map(|event| event.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "first", "second", "fourth"]);
    }
}
