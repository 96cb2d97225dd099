//! Events and the client-side availability computation.
//!
//! The register control is gated on three independently computed conditions
//! (already started, registration deadline passed, at capacity). These checks
//! come from timestamps fetched at render time, so a stale page can still
//! offer a registration the backend will reject — callers must surface that
//! rejection message rather than trust the local check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{default_pages, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// "workshop", "hackathon", "social", "seminar", ...
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub registration_deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub max_attendees: Option<u32>,
    #[serde(default)]
    pub attendees_count: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub creator_id: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Whether registration is currently possible, as far as the client can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAvailability {
    Open,
    Started,
    DeadlinePassed,
    Full,
}

impl EventAvailability {
    /// Why the register control is disabled, or `None` when it is not.
    pub fn blocked_reason(&self) -> Option<&'static str> {
        match self {
            EventAvailability::Open => None,
            EventAvailability::Started => Some("This event has already started"),
            EventAvailability::DeadlinePassed => Some("The registration deadline has passed"),
            EventAvailability::Full => Some("This event is full"),
        }
    }
}

impl Event {
    pub fn availability(&self, now: DateTime<Utc>) -> EventAvailability {
        if self.start_time <= now {
            return EventAvailability::Started;
        }
        if let Some(deadline) = self.registration_deadline {
            if deadline <= now {
                return EventAvailability::DeadlinePassed;
            }
        }
        if let Some(max) = self.max_attendees {
            if self.attendees_count >= max {
                return EventAvailability::Full;
            }
        }
        EventAvailability::Open
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventPage {
    pub events: Vec<Event>,
    #[serde(default = "default_pages")]
    pub pages: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttendeeList {
    pub attendees: Vec<User>,
}

/// Body for `POST /events`. Times are passed through as the
/// `datetime-local` input strings; the backend parses and validates them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub event_type: String,
    pub location: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub registration_deadline: Option<String>,
    pub max_attendees: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(start_offset_hours: i64) -> Event {
        let start = Utc.with_ymd_and_hms(2026, 9, 1, 18, 0, 0).unwrap()
            + chrono::Duration::hours(start_offset_hours);
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Rust Workshop",
            "start_time": start.to_rfc3339(),
        }))
        .unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 1, 18, 0, 0).unwrap()
    }

    #[test]
    fn upcoming_event_is_open() {
        assert_eq!(event(2).availability(now()), EventAvailability::Open);
    }

    #[test]
    fn started_event_cannot_be_registered() {
        assert_eq!(event(0).availability(now()), EventAvailability::Started);
        assert_eq!(event(-1).availability(now()), EventAvailability::Started);
    }

    #[test]
    fn passed_deadline_closes_registration() {
        let mut ev = event(5);
        ev.registration_deadline = Some(now() - chrono::Duration::minutes(1));
        assert_eq!(ev.availability(now()), EventAvailability::DeadlinePassed);
    }

    #[test]
    fn capacity_reached_is_full() {
        let mut ev = event(5);
        ev.max_attendees = Some(30);
        ev.attendees_count = 30;
        assert_eq!(ev.availability(now()), EventAvailability::Full);
        assert_eq!(
            ev.availability(now()).blocked_reason(),
            Some("This event is full")
        );
    }

    #[test]
    fn no_max_means_never_full() {
        let mut ev = event(5);
        ev.attendees_count = 10_000;
        assert_eq!(ev.availability(now()), EventAvailability::Open);
        assert!(ev.availability(now()).blocked_reason().is_none());
    }
}
