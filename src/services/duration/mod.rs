//! Duration arithmetic for planner events.
//!
//! The add/edit event form works with free-text duration labels such as
//! `"1h 30m"`, while events store a fractional `duration_hours`. This module
//! converts between the two and derives the wall-clock end time shown next to
//! the start time.
//!
//! Two lenient policies are part of the contract:
//!
//! - a label with no readable `h` or `m` component (or one that sums to zero)
//!   is treated as [`DEFAULT_DURATION_HOURS`];
//! - end times past midnight wrap the clock and say nothing about the date, so
//!   `23:00` plus three hours ends at `02:00` on the same calendar day.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::time_of_day::{pad_clock_field, ClockTime};

/// Duration used when a label cannot be read.
pub const DEFAULT_DURATION_HOURS: f64 = 1.0;

/// Label pre-selected by the add-event form.
pub const DEFAULT_DURATION_LABEL: &str = "1h 45m";

/// Labels offered by the duration dropdown, shortest first.
pub const DURATION_PRESETS: [&str; 9] = [
    "30m", "45m", "1h", "1h 30m", "1h 45m", "2h", "2h 30m", "3h", "4h",
];

static HOURS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)h").expect("valid hours regex"));
static MINUTES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)m").expect("valid minutes regex"));

/// Parse a duration label into fractional hours.
///
/// The first `<N>h` and the first `<N>m` anywhere in the token are summed,
/// in either order and with or without whitespace between them.
///
/// # Examples
/// ```
/// use planner_layout::services::duration::parse_duration_token;
///
/// assert_eq!(parse_duration_token("1h 30m"), 1.5);
/// assert_eq!(parse_duration_token("45m"), 0.75);
/// assert_eq!(parse_duration_token("garbage"), 1.0);
/// ```
pub fn parse_duration_token(token: &str) -> f64 {
    let hours = first_number(&HOURS_RE, token).unwrap_or(0.0);
    let minutes = first_number(&MINUTES_RE, token).unwrap_or(0.0);
    let total = hours + minutes / 60.0;

    if total == 0.0 {
        log::debug!(
            "Duration '{}' has no usable h/m component, defaulting to {}h",
            token,
            DEFAULT_DURATION_HOURS
        );
        return DEFAULT_DURATION_HOURS;
    }

    total
}

fn first_number(pattern: &Regex, token: &str) -> Option<f64> {
    pattern
        .captures(token)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<f64>().ok())
}

/// Derive the `HH:MM` end time of an event from its start and duration.
///
/// The hour wraps modulo 24 without touching the event's date. A malformed
/// start time produces `"NaN:NaN"` rather than an error.
pub fn compute_end_time(start_time: &str, duration_hours: f64) -> String {
    let start = ClockTime::parse(start_time);
    let total_minutes = start.minutes_since_midnight() + duration_hours * 60.0;

    let end_hour = (total_minutes / 60.0).floor() % 24.0;
    let end_minute = (total_minutes % 60.0).floor();

    format!("{}:{}", pad_clock_field(end_hour), pad_clock_field(end_minute))
}

/// Format stored hours back into an editable label: `"2h"`, `"30m"` or
/// `"1h 45m"`.
///
/// Minutes are rounded half-up and not carried into the hour, so `1.999`
/// becomes `"1h 60m"`. A zero hour component always yields the minute form,
/// including `"0m"` for zero.
pub fn hours_to_duration_label(hours: f64) -> String {
    let whole_hours = hours.floor();
    let minutes = ((hours - whole_hours) * 60.0 + 0.5).floor();

    if whole_hours == 0.0 {
        return format!("{}m", whole_number(minutes));
    }
    if minutes == 0.0 {
        return format!("{}h", whole_number(whole_hours));
    }
    format!("{}h {}m", whole_number(whole_hours), whole_number(minutes))
}

/// Caption shown on event cards, e.g. `"1.75 hrs"`.
pub fn format_duration_hours(hours: f64) -> String {
    format!("{:.2} hrs", hours)
}

fn whole_number(value: f64) -> String {
    if value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
