//! Vertical scale of the planner time grid.
//!
//! Maps a wall-clock start and a duration onto the grid's layout units. The
//! visible window is a display hint only: events outside it get offsets above
//! zero or below the grid's total extent and are never clipped here.

use std::ops::Range;

use crate::models::settings::GridSettings;
use crate::models::time_of_day::ClockTime;

/// Vertical position and height of an event box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalSpan {
    pub top_offset: f64,
    pub extent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGridScale {
    settings: GridSettings,
}

impl TimeGridScale {
    pub fn new(settings: GridSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    /// Offset of `start_time` below the first visible hour, and the box
    /// height for `duration_hours`.
    ///
    /// Height is `duration * unit_height - gap_padding`, raised to
    /// `minimum_extent`. A `NaN` anywhere in the input stays `NaN` in the
    /// output (`f64::max` would swallow it, so the clamp is explicit).
    pub fn map_to_offset(&self, start_time: &str, duration_hours: f64) -> VerticalSpan {
        let start = ClockTime::parse(start_time);
        let unit = self.settings.unit_height;

        let top_offset = (start.hour - f64::from(self.settings.visible_hour_start)) * unit
            + (start.minute / 60.0) * unit;

        let raw_extent = duration_hours * unit - self.settings.gap_padding;
        let extent = if raw_extent < self.settings.minimum_extent {
            self.settings.minimum_extent
        } else {
            raw_extent
        };

        VerticalSpan { top_offset, extent }
    }

    /// Hours that get a row, e.g. `7..19`.
    pub fn visible_hours(&self) -> Range<u32> {
        self.settings.visible_hour_start..self.settings.visible_hour_end
    }

    pub fn row_count(&self) -> u32 {
        self.settings
            .visible_hour_end
            .saturating_sub(self.settings.visible_hour_start)
    }

    /// Height of the whole visible grid.
    pub fn total_extent(&self) -> f64 {
        f64::from(self.row_count()) * self.settings.unit_height
    }

    /// Gutter labels for the visible rows.
    pub fn hour_labels(&self) -> Vec<String> {
        self.visible_hours().map(hour_label).collect()
    }
}

/// 12-hour gutter label: `"7:00 AM"`, `"12:00 PM"`, `"1:00 PM"`.
pub fn hour_label(hour: u32) -> String {
    match hour % 24 {
        0 => "12:00 AM".to_string(),
        h @ 1..=11 => format!("{}:00 AM", h),
        12 => "12:00 PM".to_string(),
        h => format!("{}:00 PM", h - 12),
    }
}
