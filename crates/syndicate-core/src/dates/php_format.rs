//! `date()`-style format strings.
//!
//! Date and time formats arrive as shortcode attributes written for PHP's
//! `date()`, e.g. `F j, Y` or `g:i a`. Strings containing a `%` are treated
//! as strftime patterns and handed to chrono directly.

use std::fmt::Display;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike};

/// Formats `dt` with a PHP `date()` pattern or a strftime pattern.
///
/// Unknown PHP letters are copied through, as PHP does. A strftime pattern
/// chrono cannot parse is returned verbatim instead of panicking.
pub fn format_datetime<Tz>(format: &str, dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if format.contains('%') {
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return format.to_string();
        }
        return dt.format(format).to_string();
    }

    let mut out = String::with_capacity(format.len() * 2);
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
            continue;
        }
        push_token(&mut out, c, dt);
    }

    out
}

fn push_token<Tz>(out: &mut String, token: char, dt: &DateTime<Tz>)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let text = match token {
        // day
        'd' => format!("{:02}", dt.day()),
        'D' => format!("{}", dt.format("%a")),
        'j' => format!("{}", dt.day()),
        'l' => format!("{}", dt.format("%A")),
        'N' => format!("{}", dt.weekday().number_from_monday()),
        'S' => format!("{}", ordinal_suffix(dt.day())),
        'w' => format!("{}", dt.weekday().num_days_from_sunday()),
        'z' => format!("{}", dt.ordinal0()),
        // week
        'W' => format!("{:02}", dt.iso_week().week()),
        // month
        'F' => format!("{}", dt.format("%B")),
        'm' => format!("{:02}", dt.month()),
        'M' => format!("{}", dt.format("%b")),
        'n' => format!("{}", dt.month()),
        't' => format!("{}", days_in_month(dt.year(), dt.month())),
        // year
        'L' => format!("{}", u8::from(is_leap_year(dt.year()))),
        'o' => format!("{}", dt.iso_week().year()),
        'Y' => format!("{}", dt.year()),
        'y' => format!("{:02}", dt.year().rem_euclid(100)),
        // time
        'a' => format!("{}", if dt.hour() < 12 { "am" } else { "pm" }),
        'A' => format!("{}", if dt.hour() < 12 { "AM" } else { "PM" }),
        'g' => format!("{}", dt.hour12().1),
        'G' => format!("{}", dt.hour()),
        'h' => format!("{:02}", dt.hour12().1),
        'H' => format!("{:02}", dt.hour()),
        'i' => format!("{:02}", dt.minute()),
        's' => format!("{:02}", dt.second()),
        'u' => format!("{:06}", dt.nanosecond() / 1_000),
        // zone
        'e' | 'T' => format!("{}", dt.offset()),
        'P' => format!("{}", dt.format("%:z")),
        'O' => format!("{}", dt.format("%z")),
        // full
        'c' => format!("{}", dt.format("%Y-%m-%dT%H:%M:%S%:z")),
        'r' => format!("{}", dt.format("%a, %d %b %Y %H:%M:%S %z")),
        'U' => format!("{}", dt.timestamp()),
        other => other.to_string(),
    };
    out.push_str(&text);
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|day| NaiveDate::from_ymd_opt(year, month, *day).is_some())
        .unwrap_or(28)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 14, 5, 9).unwrap()
    }

    #[test]
    fn test_wordpress_defaults() {
        assert_eq!(format_datetime("F j, Y", &sample()), "March 1, 2024");
        assert_eq!(format_datetime("g:i a", &sample()), "2:05 pm");
    }

    #[test]
    fn test_long_human_format() {
        assert_eq!(format_datetime("l j F Y", &sample()), "Friday 1 March 2024");
    }

    #[test]
    fn test_numeric_tokens() {
        assert_eq!(format_datetime("d/m/y H:i:s", &sample()), "01/03/24 14:05:09");
        assert_eq!(format_datetime("N w z t L", &sample()), "5 5 60 31 1");
        assert_eq!(format_datetime("jS", &sample()), "1st");
    }

    #[test]
    fn test_backslash_escapes() {
        assert_eq!(format_datetime("\\T\\o\\d\\a\\y: j", &sample()), "Today: 1");
    }

    #[test]
    fn test_offsets() {
        let offset = FixedOffset::east_opt(-5 * 3600).unwrap();
        let dt = offset.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();

        assert_eq!(format_datetime("c", &dt), "2024-03-01T09:00:00-05:00");
        assert_eq!(format_datetime("O", &dt), "-0500");
    }

    #[test]
    fn test_strftime_passthrough() {
        assert_eq!(format_datetime("%Y-%m-%d", &sample()), "2024-03-01");
        assert_eq!(format_datetime("%Q broken", &sample()), "%Q broken");
    }

    #[test]
    fn test_every_token_lands_in_output() {
        assert_eq!(
            format_datetime("D, d M Y G:i A u U", &sample()),
            "Fri, 01 Mar 2024 14:05 PM 000000 1709301909"
        );
    }

    #[test]
    fn test_ordinal_suffix_teens() {
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(23), "rd");
        assert_eq!(ordinal_suffix(31), "st");
    }
}
