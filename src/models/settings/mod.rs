// Settings module
// Time grid configuration shared by the day and week planners

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration of the visible time grid.
///
/// Passed explicitly into the layout engine; nothing reads it from global
/// state. Missing keys in a config file fall back to the defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// First hour shown at the top of the grid (inclusive).
    pub visible_hour_start: u32,
    /// Hour at which the grid stops (exclusive).
    pub visible_hour_end: u32,
    /// Layout units per hour row.
    pub unit_height: f64,
    /// Units trimmed from the bottom of each event box.
    pub gap_padding: f64,
    /// Smallest box height, so short events stay clickable.
    pub minimum_extent: f64,
    /// Stack order of the first column.
    pub base_z: i32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible_hour_start: 7,
            visible_hour_end: 19,
            unit_height: 80.0,
            gap_padding: 4.0,
            minimum_extent: 40.0,
            base_z: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridSettingsError {
    #[error("Visible hours must lie within 0-24, got {start}-{end}")]
    HourOutOfRange { start: u32, end: u32 },

    #[error("Visible hour end ({end}) must be after start ({start})")]
    EmptyWindow { start: u32, end: u32 },

    #[error("Unit height must be positive, got {0}")]
    InvalidUnitHeight(f64),

    #[error("Gap padding and minimum extent must be non-negative")]
    NegativeSpacing,
}

impl GridSettings {
    /// Settings for an explicit hour window, other fields at their defaults.
    pub fn with_hours(visible_hour_start: u32, visible_hour_end: u32) -> Self {
        Self {
            visible_hour_start,
            visible_hour_end,
            ..Self::default()
        }
    }

    /// Check the settings before they are saved.
    ///
    /// The layout engine accepts any values; this only guards config files.
    pub fn validate(&self) -> Result<(), GridSettingsError> {
        let (start, end) = (self.visible_hour_start, self.visible_hour_end);
        if start > 24 || end > 24 {
            return Err(GridSettingsError::HourOutOfRange { start, end });
        }
        if end <= start {
            return Err(GridSettingsError::EmptyWindow { start, end });
        }
        if !(self.unit_height.is_finite() && self.unit_height > 0.0) {
            return Err(GridSettingsError::InvalidUnitHeight(self.unit_height));
        }
        if !(self.gap_padding >= 0.0 && self.minimum_extent >= 0.0) {
            return Err(GridSettingsError::NegativeSpacing);
        }
        Ok(())
    }
}
