//! Shared decomposition of raw `YYYY-MM-DD[Thh:mm[:ss]]` date strings.
//!
//! Dates are decomposed into calendar components instead of being interpreted
//! as UTC instants, so a viewer's timezone can never shift the rendered day.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static DATE_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})").expect("valid date prefix regex"));
static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"T(\d{2}):(\d{2})").expect("valid time regex"));

/// Validated calendar components of a raw date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateStamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// `(hour, minute)` when a `Thh:mm` component is present.
    pub time: Option<(u32, u32)>,
    /// UTC epoch milliseconds of the stamp (midnight for date-only values).
    pub epoch_ms: i64,
}

/// Decomposes and validates a raw date string.
///
/// Returns `None` when the first 10 characters do not match `YYYY-MM-DD`,
/// when the calendar components are impossible (month 13, Feb 31), or when a
/// present time component is out of range.
pub(crate) fn parse_stamp(value: &str) -> Option<DateStamp> {
    let caps = DATE_PREFIX_RE.captures(value)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;

    let time = match TIME_RE.captures(value) {
        Some(time_caps) => {
            let hour: u32 = time_caps[1].parse().ok()?;
            let minute: u32 = time_caps[2].parse().ok()?;
            Some((hour, minute))
        }
        None => None,
    };

    let (hour, minute) = time.unwrap_or((0, 0));
    let instant = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)?;

    Some(DateStamp {
        year,
        month,
        day,
        time,
        epoch_ms: instant.and_utc().timestamp_millis(),
    })
}
