//! # planner-layout
//!
//! Layout engine for the recruiting planner's day and week calendars.
//!
//! Given the events scheduled on one day, it works out where each event's box
//! goes on a fixed-hour time grid: how far down and how tall (from the start
//! time and duration) and which side-by-side column it takes when events
//! overlap. It also owns the duration arithmetic the event form relies on.
//!
//! Everything is synchronous and side-effect free. Events are plain values
//! handed in by the caller; nothing is stored.
//!
//! ## Modules
//!
//! - [`models`] - events, clock times and grid settings
//! - [`services::duration`] - duration labels and derived end times
//! - [`services::layout`] - grid scale, overlap resolution and placement
//! - [`services::settings`] - loading and saving grid settings
//! - [`utils`] - week date helpers

pub mod models;
pub mod services;
pub mod utils;

pub use models::event::{
    Event, EventBuilder, EventColor, EventStatus, EventValidationError, ParseTagError,
};
pub use models::settings::{GridSettings, GridSettingsError};
pub use models::time_of_day::ClockTime;
pub use services::duration::{
    compute_end_time, format_duration_hours, hours_to_duration_label, parse_duration_token,
    DEFAULT_DURATION_HOURS, DEFAULT_DURATION_LABEL, DURATION_PRESETS,
};
pub use services::layout::{
    layout, resolve_overlap, ClusteredOverlap, DayLayout, LayoutEngine, OverlapGroup,
    OverlapPolicy, PairwiseOverlap, Placement, PositionedEvent, TimeGridScale,
};
