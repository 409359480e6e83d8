use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveTime};

use crate::models::draft::EventDraft;
use crate::models::event::{Event, EventId};
use crate::workflow::Slot;

/// State for the event editing dialog.
///
/// Built fresh from the workflow's selection context on every opening, so
/// no draft data survives from one session to the next. The dates start
/// unset when no slot was picked; submission treats an unset date as a
/// missing field.
pub struct EventDialogState {
    /// Identifier of the event being edited (`None` while creating)
    pub event_id: Option<EventId>,
    /// Window caption: the event's title in edit mode
    pub caption: String,

    // Draft fields
    pub title: String,
    pub location: String,
    pub start_date: Option<NaiveDate>,
    pub start_time: NaiveTime,
    pub end_date: Option<NaiveDate>,
    pub end_time: NaiveTime,

    /// One validation message per failed submission attempt
    pub error_message: Option<String>,
}

impl EventDialogState {
    /// Dialog state for creating a new event, optionally prefilled from
    /// a grid slot.
    pub fn new_event(slot: Option<Slot>) -> Self {
        let default_start = NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN);
        let default_end = NaiveTime::from_hms_opt(10, 0, 0).unwrap_or(NaiveTime::MIN);

        Self {
            event_id: None,
            caption: "Add New Event".to_string(),
            title: String::new(),
            location: String::new(),
            start_date: slot.map(|s| s.start.date_naive()),
            start_time: slot.map(|s| s.start.time()).unwrap_or(default_start),
            end_date: slot.map(|s| s.end.date_naive()),
            end_time: slot.map(|s| s.end.time()).unwrap_or(default_end),
            error_message: None,
        }
    }

    /// Dialog state for editing an existing event, prefilled with its
    /// exact field values.
    pub fn from_event(event: &Event) -> Self {
        Self {
            event_id: Some(event.id.clone()),
            caption: event.title.clone(),
            title: event.title.clone(),
            location: event.location.clone(),
            start_date: Some(event.start.date_naive()),
            start_time: event.start.time(),
            end_date: Some(event.end.date_naive()),
            end_time: event.end.time(),
            error_message: None,
        }
    }

    /// Snapshot the current buffers as a draft for submission.
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            location: self.location.clone(),
            start: compose(self.start_date, self.start_time),
            end: compose(self.end_date, self.end_time),
        }
    }
}

/// Resolve a picked day-and-time to a local instant. An unresolvable
/// wall-clock time (DST gap) stays unset and surfaces as a missing
/// field.
fn compose(date: Option<NaiveDate>, time: NaiveTime) -> Option<DateTime<Local>> {
    let date = date?;
    match date.and_time(time).and_local_timezone(Local) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(dt, _) => Some(dt),
        LocalResult::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample_slot() -> Slot {
        let start = Local.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap();
        Slot::new(start, start + Duration::hours(1))
    }

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
    fn test_new_event_from_slot_prefills_bounds() {
        let slot = sample_slot();
        let state = EventDialogState::new_event(Some(slot));

        assert!(state.event_id.is_none());
        assert!(state.title.is_empty());
        assert!(state.location.is_empty());
        assert_eq!(state.start_date, Some(slot.start.date_naive()));
        assert_eq!(state.start_time, slot.start.time());
        assert_eq!(state.end_date, Some(slot.end.date_naive()));
        assert_eq!(state.end_time, slot.end.time());
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_new_event_without_slot_leaves_dates_unset() {
        let state = EventDialogState::new_event(None);
        assert!(state.start_date.is_none());
        assert!(state.end_date.is_none());

        let draft = state.to_draft();
        assert!(draft.start.is_none());
        assert!(draft.end.is_none());
    }

    #[test]
    fn test_from_event_prefills_all_fields() {
        let event = sample_event();
        let state = EventDialogState::from_event(&event);

        assert_eq!(state.event_id, Some(event.id.clone()));
        assert_eq!(state.caption, "Standup");
        assert_eq!(state.title, "Standup");
        assert_eq!(state.location, "Room A");

        let draft = state.to_draft();
        assert_eq!(draft.start, Some(event.start));
        assert_eq!(draft.end, Some(event.end));
    }

    #[test]
    fn test_to_draft_composes_date_and_time() {
        let state = EventDialogState::new_event(Some(sample_slot()));
        let draft = state.to_draft();
        assert_eq!(draft.start, Some(sample_slot().start));
        assert_eq!(draft.end, Some(sample_slot().end));
    }
}
