//! Placement of planner events on the time grid.
//!
//! One engine serves both the day and the week planner. Each event's box is
//! computed from the event, the full set of events on its date and the grid
//! settings, and nothing else: the same inputs always give the same
//! placement, whatever order the day's events arrive in.
//!
//! Input is not validated. A malformed start time or duration yields a
//! placement carrying `NaN`, and it is the renderer's call what to do with it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::overlap::{OverlapPolicy, PairwiseOverlap};
use super::scale::TimeGridScale;
use crate::models::event::Event;
use crate::models::settings::GridSettings;
use crate::utils::date::work_week_dates;

/// Bounding box of one event, in grid units vertically and fractions of the
/// day column horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub top_offset: f64,
    pub extent: f64,
    pub left_fraction: f64,
    pub width_fraction: f64,
    /// Later columns paint above earlier ones.
    pub stack_order: i32,
}

impl Placement {
    pub fn left_percent(&self) -> f64 {
        self.left_fraction * 100.0
    }

    pub fn width_percent(&self) -> f64 {
        self.width_fraction * 100.0
    }

    /// Bottom edge, `top_offset + extent`.
    pub fn bottom(&self) -> f64 {
        self.top_offset + self.extent
    }
}

/// An event together with where it is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedEvent {
    pub event: Event,
    pub placement: Placement,
}

/// Every event on one date, placed.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub events: Vec<PositionedEvent>,
}

impl DayLayout {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Look up the event behind a clicked box.
    pub fn find(&self, id: &str) -> Option<&PositionedEvent> {
        self.events.iter().find(|positioned| positioned.event.id == id)
    }
}

/// Place one event with the default pairwise overlap policy.
///
/// `same_day` must be the complete set of events on `event.date`; laying out
/// a day's events against different sets gives inconsistent columns.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use planner_layout::{layout, Event, GridSettings};
///
/// let day = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// let events = vec![
///     Event::new("a", "Intro call", day, "09:00", 1.0),
///     Event::new("b", "Tech screen", day, "09:30", 1.0),
/// ];
/// let placement = layout(&events[1], &events, &GridSettings::default());
/// assert_eq!(placement.top_offset, 200.0);
/// assert_eq!(placement.left_fraction, 0.5);
/// ```
pub fn layout(event: &Event, same_day: &[Event], settings: &GridSettings) -> Placement {
    LayoutEngine::new(*settings).place(event, same_day)
}

#[derive(Debug, Clone)]
pub struct LayoutEngine<P: OverlapPolicy = PairwiseOverlap> {
    scale: TimeGridScale,
    policy: P,
}

impl LayoutEngine {
    pub fn new(settings: GridSettings) -> Self {
        Self::with_policy(settings, PairwiseOverlap)
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(GridSettings::default())
    }
}

impl<P: OverlapPolicy> LayoutEngine<P> {
    pub fn with_policy(settings: GridSettings, policy: P) -> Self {
        Self {
            scale: TimeGridScale::new(settings),
            policy,
        }
    }

    pub fn scale(&self) -> &TimeGridScale {
        &self.scale
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Place `event` among `same_day`.
    pub fn place(&self, event: &Event, same_day: &[Event]) -> Placement {
        let span = self
            .scale
            .map_to_offset(&event.start_time, event.duration_hours);
        let group = self.policy.resolve(event, same_day);

        let width_fraction = 1.0 / group.column_count as f64;
        let placement = Placement {
            top_offset: span.top_offset,
            extent: span.extent,
            left_fraction: group.column_index as f64 * width_fraction,
            width_fraction,
            stack_order: self
                .scale
                .settings()
                .base_z
                .saturating_add(i32::try_from(group.column_index).unwrap_or(i32::MAX)),
        };

        log::trace!(
            "Placed event {} at column {}/{}: {:?}",
            event.id,
            group.column_index,
            group.column_count,
            placement
        );
        placement
    }

    /// Day planner: place every event whose date equals `date`, keeping the
    /// input order.
    pub fn layout_day(&self, date: NaiveDate, events: &[Event]) -> DayLayout {
        let same_day: Vec<Event> = events.iter().filter(|e| e.is_on(date)).cloned().collect();
        self.layout_bucket(date, same_day)
    }

    /// Week planner: one [`DayLayout`] per requested date, in the order given.
    /// Events on dates not requested are ignored.
    pub fn layout_days(&self, dates: &[NaiveDate], events: &[Event]) -> Vec<DayLayout> {
        let mut by_date: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
        for event in events {
            by_date.entry(event.date).or_default().push(event.clone());
        }

        dates
            .iter()
            .map(|date| {
                let same_day = by_date.get(date).cloned().unwrap_or_default();
                self.layout_bucket(*date, same_day)
            })
            .collect()
    }

    /// Monday-to-Friday planner for the week starting at `week_start`.
    pub fn layout_work_week(&self, week_start: NaiveDate, events: &[Event]) -> Vec<DayLayout> {
        self.layout_days(&work_week_dates(week_start), events)
    }

    fn layout_bucket(&self, date: NaiveDate, same_day: Vec<Event>) -> DayLayout {
        let placements: Vec<Placement> = same_day
            .iter()
            .map(|event| self.place(event, &same_day))
            .collect();

        log::debug!("Laid out {} events on {}", same_day.len(), date);

        DayLayout {
            date,
            events: same_day
                .into_iter()
                .zip(placements)
                .map(|(event, placement)| PositionedEvent { event, placement })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::layout::overlap::ClusteredOverlap;
    use pretty_assertions::assert_eq;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    fn engine() -> LayoutEngine {
        LayoutEngine::new(GridSettings::default())
    }

    fn event_on(date: NaiveDate, id: &str, start: &str, hours: f64) -> Event {
        Event::new(id, format!("Event {}", id), date, start, hours)
    }

    #[test]
    fn test_single_event_fills_column() {
        let events = vec![event_on(monday(), "a", "10:00", 2.0)];
        let placement = layout(&events[0], &events, &GridSettings::default());

        assert_eq!(
            placement,
            Placement {
                top_offset: 240.0,
                extent: 156.0,
                left_fraction: 0.0,
                width_fraction: 1.0,
                stack_order: 10,
            }
        );
    }

    #[test]
    fn test_overlapping_pair_side_by_side() {
        let events = vec![
            event_on(monday(), "a", "09:00", 1.0),
            event_on(monday(), "b", "09:30", 1.0),
        ];
        let settings = GridSettings::default();
        let a = layout(&events[0], &events, &settings);
        let b = layout(&events[1], &events, &settings);

        assert_eq!(a.width_fraction, 0.5);
        assert_eq!(a.left_fraction, 0.0);
        assert_eq!(b.left_fraction, 0.5);
        assert_eq!(a.stack_order, 10);
        assert_eq!(b.stack_order, 11);
        assert_eq!(b.left_percent(), 50.0);
        assert_eq!(b.width_percent(), 50.0);
    }

    #[test]
    fn test_base_z_from_settings() {
        let mut settings = GridSettings::default();
        settings.base_z = 100;
        let events = vec![event_on(monday(), "a", "09:00", 1.0)];
        assert_eq!(layout(&events[0], &events, &settings).stack_order, 100);
    }

    #[test]
    fn test_base_z_near_limit_saturates() {
        let mut settings = GridSettings::default();
        settings.base_z = i32::MAX;
        let events = vec![
            event_on(monday(), "a", "09:00", 1.0),
            event_on(monday(), "b", "09:30", 1.0),
        ];

        assert_eq!(layout(&events[0], &events, &settings).stack_order, i32::MAX);
        assert_eq!(layout(&events[1], &events, &settings).stack_order, i32::MAX);
    }

    #[test]
    fn test_short_event_clamped() {
        let events = vec![event_on(monday(), "a", "09:00", 0.1)];
        let placement = layout(&events[0], &events, &GridSettings::default());
        assert_eq!(placement.extent, 40.0);
        assert_eq!(placement.bottom(), 160.0 + 40.0);
    }

    #[test]
    fn test_malformed_event_is_laid_out_with_nan() {
        let events = vec![event_on(monday(), "bad", "whenever", 1.0)];
        let placement = layout(&events[0], &events, &GridSettings::default());

        assert!(placement.top_offset.is_nan());
        assert_eq!(placement.width_fraction, 1.0);
        assert_eq!(placement.left_fraction, 0.0);
    }

    #[test]
    fn test_layout_day_filters_by_exact_date() {
        let tuesday = monday().succ_opt().unwrap();
        let events = vec![
            event_on(monday(), "a", "09:00", 1.0),
            event_on(tuesday, "b", "09:30", 1.0),
            event_on(monday(), "c", "09:30", 1.0),
        ];

        let day = engine().layout_day(monday(), &events);
        let ids: Vec<&str> = day.events.iter().map(|p| p.event.id.as_str()).collect();

        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(day.find("c").unwrap().placement.left_fraction, 0.5);
        assert!(day.find("b").is_none());
    }

    #[test]
    fn test_late_event_on_previous_day_does_not_spill() {
        let tuesday = monday().succ_opt().unwrap();
        let events = vec![
            event_on(monday(), "late", "23:00", 3.0),
            event_on(tuesday, "early", "00:30", 1.0),
        ];

        let day = engine().layout_day(tuesday, &events);
        assert_eq!(day.events.len(), 1);
        assert_eq!(day.events[0].placement.width_fraction, 1.0);
    }

    #[test]
    fn test_layout_days_keeps_requested_order() {
        let tuesday = monday().succ_opt().unwrap();
        let events = vec![
            event_on(tuesday, "t", "10:00", 1.0),
            event_on(monday(), "m", "10:00", 1.0),
        ];

        let days = engine().layout_days(&[tuesday, monday()], &events);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, tuesday);
        assert_eq!(days[0].events[0].event.id, "t");
        assert_eq!(days[1].events[0].event.id, "m");
    }

    #[test]
    fn test_layout_days_empty_date() {
        let days = engine().layout_days(&[monday()], &[]);
        assert_eq!(days.len(), 1);
        assert!(days[0].is_empty());
    }

    #[test]
    fn test_work_week_has_five_days() {
        let friday = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();
        let saturday = NaiveDate::from_ymd_opt(2025, 6, 7).unwrap();
        let events = vec![
            event_on(friday, "f", "09:00", 1.0),
            event_on(saturday, "s", "09:00", 1.0),
        ];

        let week = engine().layout_work_week(monday(), &events);
        assert_eq!(week.len(), 5);
        assert_eq!(week[4].date, friday);
        assert_eq!(week[4].events.len(), 1);
        assert!(week.iter().all(|day| day.find("s").is_none()));
    }

    #[test]
    fn test_day_and_week_views_agree() {
        let events = vec![
            event_on(monday(), "a", "09:00", 1.0),
            event_on(monday(), "b", "09:30", 1.0),
            event_on(monday(), "c", "10:15", 1.0),
        ];
        let engine = engine();

        let day = engine.layout_day(monday(), &events);
        let week = engine.layout_work_week(monday(), &events);
        assert_eq!(day, week[0]);
    }

    #[test]
    fn test_clustered_engine() {
        let events = vec![
            event_on(monday(), "a", "09:00", 1.0),
            event_on(monday(), "b", "09:30", 1.0),
            event_on(monday(), "c", "10:15", 1.0),
        ];
        let engine = LayoutEngine::with_policy(GridSettings::default(), ClusteredOverlap);
        let day = engine.layout_day(monday(), &events);

        let widths: Vec<f64> = day.events.iter().map(|p| p.placement.width_fraction).collect();
        assert_eq!(widths, vec![0.5, 0.5, 0.5]);
        assert_eq!(day.find("c").unwrap().placement.left_fraction, 0.0);
    }
}
