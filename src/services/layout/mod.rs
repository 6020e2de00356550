//! Calendar event layout.
//!
//! - [`scale`] - start time and duration to vertical grid units
//! - [`overlap`] - same-day overlap groups and column assignment
//! - [`engine`] - final placement per event, for the day and week planners

pub mod engine;
pub mod overlap;
pub mod scale;

pub use engine::{layout, DayLayout, LayoutEngine, Placement, PositionedEvent};
pub use overlap::{
    column_order, resolve_overlap, ClusteredOverlap, OverlapGroup, OverlapPolicy, PairwiseOverlap,
};
pub use scale::{hour_label, TimeGridScale, VerticalSpan};
