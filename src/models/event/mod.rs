// Event module
// In-memory calendar event model

use chrono::{DateTime, Local, NaiveDate};
use uuid::Uuid;

/// Opaque unique identifier for a calendar event.
///
/// Minted exactly once, when a draft is first committed. The string form
/// happens to be a UUID v4, but callers must not parse it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventId(String);

impl EventId {
    /// Mint a fresh unique identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A committed calendar event.
///
/// Events committed through the form always satisfy `start < end`. The
/// drag-reschedule path replaces the bounds without re-checking them, so
/// the struct itself carries no ordering guarantee.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub location: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl Event {
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }

    /// Whether any part of the event falls on the given calendar day.
    /// Tolerates inverted bounds, which a drag can produce.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        let start_day = self.start.date_naive();
        let end_day = self.end.date_naive();
        let first = start_day.min(end_day);
        let last = start_day.max(end_day);
        first <= date && date <= last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample_event() -> Event {
        let start = Local.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap();
        Event {
            id: EventId::new(),
            title: "Standup".to_string(),
            location: "Room A".to_string(),
            start,
            end: start + Duration::hours(1),
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let a = EventId::new();
        let b = EventId::new();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_id_display_matches_as_str() {
        let id = EventId::new();
        assert_eq!(id.to_string(), id.as_str());
    }

    #[test]
    fn test_duration() {
        let event = sample_event();
        assert_eq!(event.duration(), Duration::hours(1));
    }

    #[test]
    fn test_occurs_on_event_day() {
        let event = sample_event();
        assert!(event.occurs_on(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()));
        assert!(!event.occurs_on(NaiveDate::from_ymd_opt(2025, 1, 11).unwrap()));
    }

    #[test]
    fn test_occurs_on_multi_day_span() {
        let mut event = sample_event();
        event.end = event.start + Duration::days(2);
        assert!(event.occurs_on(NaiveDate::from_ymd_opt(2025, 1, 11).unwrap()));
        assert!(event.occurs_on(NaiveDate::from_ymd_opt(2025, 1, 12).unwrap()));
        assert!(!event.occurs_on(NaiveDate::from_ymd_opt(2025, 1, 13).unwrap()));
    }

    #[test]
    fn test_occurs_on_inverted_bounds() {
        let mut event = sample_event();
        event.end = event.start - Duration::days(1);
        assert!(event.occurs_on(NaiveDate::from_ymd_opt(2025, 1, 9).unwrap()));
        assert!(event.occurs_on(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()));
    }
}
