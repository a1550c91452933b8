use chrono::{DateTime, Days, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};

use super::php_format::format_datetime;
use crate::html::escape;

/// Format used for the `data-start`/`data-end` attributes.
pub const HUMAN_DATE_FORMAT: &str = "l j F Y";

/// Renders an event's start/end pair as a small markup fragment.
///
/// Day comparisons are calendar based in local time. `today` is captured at
/// construction so one render sees a single consistent "now".
#[derive(Debug, Clone)]
pub struct DateRangeFormatter {
    date_format: String,
    time_format: String,
    today: NaiveDate,
}

impl DateRangeFormatter {
    pub fn new(date_format: impl Into<String>, time_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
            time_format: time_format.into(),
            today: Local::now().date_naive(),
        }
    }

    /// Pins the reference day used by [`Self::human_date`].
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    /// "Today", "Tomorrow" or "Yesterday" when `at` falls on one of those
    /// days, otherwise `at` rendered with `format`.
    pub fn human_date(&self, at: NaiveDateTime, format: &str) -> String {
        let day = at.date();
        if day == self.today {
            return "Today".to_string();
        }
        if self.today.checked_add_days(Days::new(1)) == Some(day) {
            return "Tomorrow".to_string();
        }
        if self.today.checked_sub_days(Days::new(1)) == Some(day) {
            return "Yesterday".to_string();
        }
        format_datetime(format, &localize(at))
    }

    /// Formats a start/end pair. Returns an empty string when either bound
    /// is missing.
    pub fn format(&self, start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> String {
        let (Some(start), Some(end)) = (start, end) else {
            return String::new();
        };

        let mut out = format!(
            "<div class=\"event_date\" data-start=\"{}\" data-end=\"{}\">",
            escape(&self.human_date(start, HUMAN_DATE_FORMAT)),
            escape(&self.human_date(end, HUMAN_DATE_FORMAT)),
        );

        if start.date() == end.date() {
            self.push_same_day(&mut out, start, end);
        } else {
            self.push_multi_day(&mut out, start, end);
        }

        out.push_str("</div>");
        out
    }

    fn push_same_day(&self, out: &mut String, start: NaiveDateTime, end: NaiveDateTime) {
        out.push_str(&format!(
            "<time itemprop=\"dtstart\" datetime=\"{}\"><span class=\"date date-single\">{}</span>",
            iso(start),
            escape(&self.human_date(end, &self.date_format)),
        ));

        let (start_hm, end_hm) = (hour_minute(start), hour_minute(end));
        if start_hm != end_hm && start_hm != (0, 0) && end_hm != (0, 0) {
            out.push_str(&format!(
                " <span class=\"linking_word linking_word-from\">from</span> \
                 <span class=\"time time-start\">{}</span> \
                 <span class=\"linking_word linking_word-to\">to</span> \
                 <span class=\"time time-end\">{}</span>",
                escape(&self.time(start)),
                escape(&self.time(end)),
            ));
        } else if start_hm != (0, 0) {
            out.push_str(&format!(
                " <span class=\"linking_word\">at</span> \
                 <time class=\"time time-single\" itemprop=\"dtstart\" datetime=\"{}\">{}</time>",
                iso(start),
                escape(&self.time(start)),
            ));
        }

        out.push_str("</time>");
    }

    fn push_multi_day(&self, out: &mut String, start: NaiveDateTime, end: NaiveDateTime) {
        let with_time = start.time() != NaiveTime::MIN || end.time() != NaiveTime::MIN;

        let bound = |at: NaiveDateTime| {
            let mut text = self.human_date(at, &self.date_format);
            if with_time {
                text.push_str(", ");
                text.push_str(&self.time(at));
            }
            escape(&text)
        };

        out.push_str(&format!(
            "<span class=\"linking_word linking_word-from\">from</span> \
             <time class=\"date date-start\" itemprop=\"dtstart\" datetime=\"{}\">{}</time> \
             <span class=\"linking_word linking_word-to\">to</span> \
             <time class=\"date date-end\" itemprop=\"dtend\" datetime=\"{}\">{}</time>",
            iso(start),
            bound(start),
            iso(end),
            bound(end),
        ));
    }

    fn time(&self, at: NaiveDateTime) -> String {
        format_datetime(&self.time_format, &localize(at))
    }
}

fn hour_minute(at: NaiveDateTime) -> (u32, u32) {
    (at.hour(), at.minute())
}

/// Attaches the local offset. Times skipped by a DST gap are read as UTC.
fn localize(at: NaiveDateTime) -> DateTime<FixedOffset> {
    Local
        .from_local_datetime(&at)
        .earliest()
        .map(|dt| dt.fixed_offset())
        .unwrap_or_else(|| at.and_utc().fixed_offset())
}

fn iso(at: NaiveDateTime) -> String {
    format_datetime("c", &localize(at))
}
