// Test fixtures - reusable test data
// Provides consistent planner events across all test files

use chrono::NaiveDate;
use planner_layout::Event;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, June 2, 2025
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    /// Tuesday, June 3, 2025
    pub fn tuesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 3).unwrap()
    }

    /// Friday, June 6, 2025
    pub fn friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 6).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn at(date: NaiveDate, id: &str, start: &str, hours: f64) -> Event {
        Event::new(id, format!("Event {}", id), date, start, hours)
    }

    /// A 09:00, B 09:30, C 10:15, one hour each: A-B and B-C overlap, A-C do not.
    pub fn chain() -> Vec<Event> {
        vec![
            at(dates::monday(), "a", "09:00", 1.0),
            at(dates::monday(), "b", "09:30", 1.0),
            at(dates::monday(), "c", "10:15", 1.0),
        ]
    }

    /// Payload in the shape the planner front end exchanges, `endTime`
    /// included (and stale on purpose).
    pub const WEEK_JSON: &str = r#"[
        {
            "id": "evt-1",
            "title": "Intro call",
            "date": "2025-06-02",
            "startTime": "09:00",
            "endTime": "23:59",
            "duration": 1.5,
            "color": "cyan",
            "attendees": ["https://avatars.example.com/sarah.svg"],
            "status": "meeting",
            "videoCallLink": "https://meet.example.com/intro"
        },
        {
            "id": "evt-2",
            "title": "Portfolio review",
            "date": "2025-06-02",
            "startTime": "10:00",
            "endTime": "11:45",
            "duration": 1.75,
            "color": "purple",
            "attendees": [],
            "status": "reviews"
        },
        {
            "id": "evt-3",
            "title": "Market research",
            "date": "2025-06-03",
            "startTime": "14:00",
            "endTime": "15:00",
            "duration": 1,
            "color": "lime",
            "attendees": [],
            "description": "Salary bands for backend roles"
        },
        {
            "id": "evt-4",
            "title": "Late debrief",
            "date": "2025-06-06",
            "startTime": "20:00",
            "endTime": "21:00",
            "duration": 1,
            "color": "green",
            "attendees": []
        }
    ]"#;

    pub fn week() -> Vec<Event> {
        serde_json::from_str(WEEK_JSON).expect("fixture JSON parses")
    }
}

