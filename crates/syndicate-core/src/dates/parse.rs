use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Parses a feed timestamp such as `2024-03-01 09:30:00`.
///
/// Only the date (first 10 characters) and the clock time (characters 12-19)
/// are read, so a `T` separator, fractional seconds or a trailing zone are
/// tolerated and ignored. A bare date means midnight.
pub fn parse_event_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()?;

    if raw.len() <= 10 {
        return Some(date.and_time(NaiveTime::MIN));
    }

    let time = raw
        .get(11..19)
        .and_then(|t| NaiveTime::parse_from_str(t, "%H:%M:%S").ok())
        .or_else(|| {
            raw.get(11..16)
                .and_then(|t| NaiveTime::parse_from_str(t, "%H:%M").ok())
        })?;

    Some(date.and_time(time))
}
