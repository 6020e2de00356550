// Date utility functions
// Week bucketing for the week planner

use chrono::{Datelike, Duration, NaiveDate};

/// Days shown by the work-week planner.
pub const WORK_WEEK_DAYS: i64 = 5;

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}

/// The five consecutive days starting at `week_start`.
pub fn work_week_dates(week_start: NaiveDate) -> Vec<NaiveDate> {
    (0..WORK_WEEK_DAYS)
        .map(|offset| week_start + Duration::days(offset))
        .collect()
}
