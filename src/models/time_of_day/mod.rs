// Time-of-day module
// Wall-clock `HH:MM` values as stored on planner events

use chrono::NaiveTime;
use std::fmt;

/// A timezone-naive wall-clock reading taken from an event's `HH:MM` text.
///
/// Parsing is lenient on purpose: each component that cannot be read becomes
/// `NaN`, and the NaN flows through every computation built on top of it.
/// Upstream forms are responsible for rejecting bad input; use
/// [`ClockTime::parse_strict`] when a hard check is wanted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockTime {
    pub hour: f64,
    pub minute: f64,
}

impl ClockTime {
    pub fn new(hour: f64, minute: f64) -> Self {
        Self { hour, minute }
    }

    /// Read `HH:MM` leniently.
    ///
    /// * `"09:30"` -> 9, 30
    /// * `"9:5"` -> 9, 5
    /// * `"09:30:15"` -> 9, 30 (extra components ignored)
    /// * `"0930"` -> 930, NaN
    /// * `"ab:cd"` -> NaN, NaN
    pub fn parse(text: &str) -> Self {
        let mut parts = text.split(':');
        let hour = parts.next().map(read_component).unwrap_or(f64::NAN);
        let minute = parts.next().map(read_component).unwrap_or(f64::NAN);
        Self { hour, minute }
    }

    /// Strict `HH:MM` check used by opt-in validation.
    pub fn parse_strict(text: &str) -> Option<NaiveTime> {
        let text = text.trim();
        // chrono accepts single-digit fields; the form always zero-pads
        if text.len() != 5 {
            return None;
        }
        NaiveTime::parse_from_str(text, "%H:%M").ok()
    }

    /// Minutes since midnight; `NaN` if either component is unreadable.
    pub fn minutes_since_midnight(&self) -> f64 {
        self.hour * 60.0 + self.minute
    }

    pub fn is_finite(&self) -> bool {
        self.hour.is_finite() && self.minute.is_finite()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            pad_clock_field(self.hour),
            pad_clock_field(self.minute)
        )
    }
}

/// Zero-pad a clock field to two digits. Non-finite values print as-is.
pub(crate) fn pad_clock_field(value: f64) -> String {
    if value.is_finite() {
        format!("{:02}", value as i64)
    } else {
        format!("{}", value)
    }
}

// Blank reads as zero and anything unparseable as NaN, the same way the
// form's numeric coercion treats a clock field.
fn read_component(part: &str) -> f64 {
    let part = part.trim();
    if part.is_empty() {
        return 0.0;
    }
    part.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(f64::NAN)
}
