//! Norwegian Bokmål display formatting for timeline dates.
//!
//! # Responsibility
//! - Render raw date strings at their stored granularity: month-only,
//!   exact day, or exact day + time.
//! - Render an event's combined date/year fields, including ranges.
//!
//! # Invariants
//! - Malformed input renders as empty/`None`, never as an error.
//! - Day-of-month 1 with no time component means month granularity.
//! - Rendering is locale-fixed (nb-NO month names, `kl.` time prefix).

use crate::model::timeline_event::TimelineEvent;
use crate::timeline::date::{parse_stamp, DateStamp};

const MONTHS_FULL: [&str; 12] = [
    "januar",
    "februar",
    "mars",
    "april",
    "mai",
    "juni",
    "juli",
    "august",
    "september",
    "oktober",
    "november",
    "desember",
];

const MONTHS_ABBR: [&str; 12] = [
    "jan", "feb", "mar", "apr", "mai", "jun", "jul", "aug", "sep", "okt", "nov", "des",
];

/// Formats one raw date string for display.
///
/// Returns an empty string when the input does not start with a valid
/// `YYYY-MM-DD` value. Day 1 without a time component renders as
/// `"juni 2024"`; any other day renders as `"15. jun 2024"`; a `Thh:mm`
/// component appends `" kl. HH:MM"`.
pub fn format_single(value: &str) -> String {
    match parse_stamp(value) {
        Some(stamp) => render_stamp(&stamp, false),
        None => String::new(),
    }
}

/// Formats an event's temporal fields for display.
///
/// Precedence:
/// - `date` (falling back to `year` as digits when the date string does not
///   format), rendered as a spaced en-dash range when `date_to` formats to a
///   different value. Range ends are always rendered at day precision, so a
///   range starting on the 1st shows the day instead of collapsing to
///   month granularity.
/// - bare `year`, rendered as `"2019–2022"` (unspaced en-dash) when
///   `year_to` differs.
/// - `None` when no temporal field is usable.
pub fn format_event(event: &TimelineEvent) -> Option<String> {
    if let Some(date) = event.date.as_deref() {
        let Some(start_stamp) = parse_stamp(date) else {
            return event.year.map(|year| year.to_string());
        };

        if let Some(end_stamp) = event.date_to.as_deref().and_then(parse_stamp) {
            let start = render_stamp(&start_stamp, true);
            let end = render_stamp(&end_stamp, true);
            if end != start {
                return Some(format!("{start} – {end}"));
            }
        }

        return Some(render_stamp(&start_stamp, false));
    }

    if let Some(year) = event.year {
        return Some(match event.year_to {
            Some(year_to) if year_to != year => format!("{year}\u{2013}{year_to}"),
            _ => year.to_string(),
        });
    }

    None
}

fn render_stamp(stamp: &DateStamp, force_day: bool) -> String {
    // parse_stamp guarantees month is 1..=12.
    let month_index = (stamp.month - 1) as usize;

    let mut rendered = if stamp.day == 1 && stamp.time.is_none() && !force_day {
        format!("{} {}", MONTHS_FULL[month_index], stamp.year)
    } else {
        format!("{}. {} {}", stamp.day, MONTHS_ABBR[month_index], stamp.year)
    };

    if let Some((hour, minute)) = stamp.time {
        rendered.push_str(&format!(" kl. {hour:02}:{minute:02}"));
    }

    rendered
}
