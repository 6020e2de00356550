// Event module
// Planner event model as exchanged with the event store

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::models::time_of_day::ClockTime;
use crate::services::duration::{
    compute_end_time, hours_to_duration_label, parse_duration_token, DEFAULT_DURATION_LABEL,
};

/// Start time pre-filled by the add-event form.
pub const DEFAULT_START_TIME: &str = "14:00";

/// Pipeline stage an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Research,
    Reviews,
    Meeting,
    #[default]
    Task,
}

/// Card colour tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    #[default]
    Green,
    Lime,
    Cyan,
    Purple,
}

impl EventStatus {
    pub const ALL: [EventStatus; 4] = [
        EventStatus::Research,
        EventStatus::Reviews,
        EventStatus::Meeting,
        EventStatus::Task,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Research => "research",
            EventStatus::Reviews => "reviews",
            EventStatus::Meeting => "meeting",
            EventStatus::Task => "task",
        }
    }
}

impl EventColor {
    pub const ALL: [EventColor; 4] = [
        EventColor::Green,
        EventColor::Lime,
        EventColor::Cyan,
        EventColor::Purple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventColor::Green => "green",
            EventColor::Lime => "lime",
            EventColor::Cyan => "cyan",
            EventColor::Purple => "purple",
        }
    }
}

/// An unrecognised status or colour tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event {kind} '{value}'")]
pub struct ParseTagError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for EventStatus {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseTagError {
                kind: "status",
                value: s.to_string(),
            })
    }
}

impl FromStr for EventColor {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventColor::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| ParseTagError {
                kind: "color",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Planner event scheduled on a single calendar day.
///
/// The end time is never stored; it is always derived from `start_time` and
/// `duration_hours` so the two cannot drift apart. An incoming `endTime` key
/// is accepted and dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// `HH:MM`, 24-hour, timezone-naive. Kept as text; see [`ClockTime::parse`].
    pub start_time: String,
    #[serde(rename = "duration")]
    pub duration_hours: f64,
    #[serde(default)]
    pub color: EventColor,
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_call_link: Option<String>,
}

/// Reasons an event fails the opt-in strict check.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EventValidationError {
    #[error("Event {0} is required")]
    MissingField(&'static str),

    #[error("Event title cannot be empty")]
    EmptyTitle,

    #[error("Start time '{0}' is not a valid HH:MM time")]
    InvalidStartTime(String),

    #[error("Duration must be a positive number of hours, got {0}")]
    InvalidDuration(f64),
}

impl Event {
    /// Create an event with the form's defaults for everything optional.
    ///
    /// No validation happens here; see [`Event::validate`].
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: NaiveDate,
        start_time: impl Into<String>,
        duration_hours: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date,
            start_time: start_time.into(),
            duration_hours,
            color: EventColor::default(),
            attendees: Vec::new(),
            status: Some(EventStatus::default()),
            description: None,
            comments: None,
            video_call_link: None,
        }
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Strict check for callers that want one.
    ///
    /// Layout never calls this: malformed events are laid out anyway and
    /// carry `NaN` into their placement.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }

        if ClockTime::parse_strict(&self.start_time).is_none() {
            return Err(EventValidationError::InvalidStartTime(
                self.start_time.clone(),
            ));
        }

        if !self.duration_hours.is_finite() || self.duration_hours <= 0.0 {
            return Err(EventValidationError::InvalidDuration(self.duration_hours));
        }

        Ok(())
    }

    pub fn clock_start(&self) -> ClockTime {
        ClockTime::parse(&self.start_time)
    }

    /// Start as minutes since midnight.
    pub fn start_minutes(&self) -> f64 {
        self.clock_start().minutes_since_midnight()
    }

    /// Exclusive end as minutes since midnight. May exceed 1440.
    pub fn end_minutes(&self) -> f64 {
        self.start_minutes() + self.duration_hours * 60.0
    }

    /// Derived `HH:MM` end time, wrapping past midnight.
    pub fn end_time(&self) -> String {
        compute_end_time(&self.start_time, self.duration_hours)
    }

    /// Editable duration label, e.g. `"1h 45m"`.
    pub fn duration_label(&self) -> String {
        hours_to_duration_label(self.duration_hours)
    }

    /// `"09:00 - 10:30"`, as shown in the event detail popup.
    pub fn time_range_label(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time())
    }

    /// Exact date-key match; an event never spills onto the next day.
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    /// Half-open interval intersection in minutes. Touching events do not
    /// overlap, and any `NaN` bound makes the result false.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start_minutes() < other.end_minutes() && self.end_minutes() > other.start_minutes()
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    date: Option<NaiveDate>,
    start_time: String,
    duration_hours: f64,
    color: EventColor,
    attendees: Vec<String>,
    status: Option<EventStatus>,
    description: Option<String>,
    comments: Option<String>,
    video_call_link: Option<String>,
}

impl EventBuilder {
    /// Create a new event builder seeded with the add-event form defaults
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            date: None,
            start_time: DEFAULT_START_TIME.to_string(),
            duration_hours: parse_duration_token(DEFAULT_DURATION_LABEL),
            color: EventColor::default(),
            attendees: Vec::new(),
            status: Some(EventStatus::default()),
            description: None,
            comments: None,
            video_call_link: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the start time (`HH:MM`)
    pub fn start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = start_time.into();
        self
    }

    pub fn duration_hours(mut self, hours: f64) -> Self {
        self.duration_hours = hours;
        self
    }

    /// Set the duration from a form label such as `"1h 30m"`.
    /// Unreadable labels fall back to one hour.
    pub fn duration_label(mut self, label: &str) -> Self {
        self.duration_hours = parse_duration_token(label);
        self
    }

    pub fn color(mut self, color: EventColor) -> Self {
        self.color = color;
        self
    }

    pub fn attendee(mut self, avatar: impl Into<String>) -> Self {
        self.attendees.push(avatar.into());
        self
    }

    pub fn status(mut self, status: EventStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    pub fn video_call_link(mut self, link: impl Into<String>) -> Self {
        self.video_call_link = Some(link.into());
        self
    }

    /// Build and validate the event
    pub fn build(self) -> Result<Event, EventValidationError> {
        let id = self.id.ok_or(EventValidationError::MissingField("id"))?;
        let title = self
            .title
            .ok_or(EventValidationError::MissingField("title"))?;
        let date = self.date.ok_or(EventValidationError::MissingField("date"))?;

        let event = Event {
            id,
            title,
            date,
            start_time: self.start_time,
            duration_hours: self.duration_hours,
            color: self.color,
            attendees: self.attendees,
            status: self.status,
            description: self.description,
            comments: self.comments,
            video_call_link: self.video_call_link,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
