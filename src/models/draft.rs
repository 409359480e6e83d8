// Draft module
// Uncommitted form data and its validation

use chrono::{DateTime, Local};
use thiserror::Error;

use super::event::{Event, EventId};

/// Validation failure for a submitted draft.
///
/// Exactly one error is reported per submission attempt, chosen by the
/// fixed check order in [`EventDraft::finalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please make sure you have entered all the required fields")]
    MissingFields,
    #[error("Start and end time cannot be identical")]
    IdenticalTimes,
    #[error("End time cannot be before the start time")]
    EndBeforeStart,
}

/// Form data collected while the event editor is open. Not an [`Event`]
/// until it passes validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub location: String,
    pub start: Option<DateTime<Local>>,
    pub end: Option<DateTime<Local>>,
}

impl EventDraft {
    /// An entirely empty draft, for the "New Event" action with no
    /// preset slot.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Draft for a slot picked on the calendar grid: bounds prefilled,
    /// text fields blank.
    pub fn from_slot(start: DateTime<Local>, end: DateTime<Local>) -> Self {
        Self {
            title: String::new(),
            location: String::new(),
            start: Some(start),
            end: Some(end),
        }
    }

    /// Draft preloaded from an existing event for editing.
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            location: event.location.clone(),
            start: Some(event.start),
            end: Some(event.end),
        }
    }

    /// Run the validation checks without committing.
    pub fn validate(&self) -> Result<(), DraftError> {
        self.checked_bounds().map(|_| ())
    }

    /// Validate and produce a committed event under `id`.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// missing fields, then identical instants, then inverted order.
    pub fn finalize(&self, id: EventId) -> Result<Event, DraftError> {
        let (start, end) = self.checked_bounds()?;
        Ok(Event {
            id,
            title: self.title.clone(),
            location: self.location.clone(),
            start,
            end,
        })
    }

    fn checked_bounds(&self) -> Result<(DateTime<Local>, DateTime<Local>), DraftError> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(DraftError::MissingFields);
        };
        if self.title.trim().is_empty() || self.location.trim().is_empty() {
            return Err(DraftError::MissingFields);
        }
        if start == end {
            return Err(DraftError::IdenticalTimes);
        }
        if end < start {
            return Err(DraftError::EndBeforeStart);
        }
        Ok((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use test_case::test_case;

    fn sample_start() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap()
    }

    fn valid_draft() -> EventDraft {
        EventDraft {
            title: "Standup".to_string(),
            location: "Room A".to_string(),
            start: Some(sample_start()),
            end: Some(sample_start() + Duration::hours(1)),
        }
    }

    #[test]
    fn test_finalize_valid_draft() {
        let id = EventId::new();
        let event = valid_draft().finalize(id.clone()).unwrap();
        assert_eq!(event.id, id);
        assert_eq!(event.title, "Standup");
        assert_eq!(event.location, "Room A");
        assert!(event.start < event.end);
    }

    #[test_case(|d: &mut EventDraft| d.title.clear(); "empty title")]
    #[test_case(|d: &mut EventDraft| d.title = "   ".to_string(); "whitespace title")]
    #[test_case(|d: &mut EventDraft| d.location.clear(); "empty location")]
    #[test_case(|d: &mut EventDraft| d.start = None; "unset start")]
    #[test_case(|d: &mut EventDraft| d.end = None; "unset end")]
    fn test_missing_fields(mutate: fn(&mut EventDraft)) {
        let mut draft = valid_draft();
        mutate(&mut draft);
        assert_eq!(draft.validate(), Err(DraftError::MissingFields));
    }

    #[test]
    fn test_identical_times() {
        let mut draft = valid_draft();
        draft.end = draft.start;
        assert_eq!(draft.validate(), Err(DraftError::IdenticalTimes));
    }

    #[test]
    fn test_end_before_start() {
        let mut draft = valid_draft();
        draft.end = Some(sample_start() - Duration::minutes(30));
        assert_eq!(draft.validate(), Err(DraftError::EndBeforeStart));
    }

    #[test]
    fn test_missing_field_reported_before_time_checks() {
        // An unset end and an empty title at once: the missing-field
        // check runs first, so that is the one error reported.
        let mut draft = valid_draft();
        draft.title.clear();
        draft.end = draft.start;
        assert_eq!(draft.validate(), Err(DraftError::MissingFields));
    }

    #[test]
    fn test_identical_reported_before_ordering() {
        let mut draft = valid_draft();
        draft.end = draft.start;
        // Equal instants are not "end before start"; the equality check
        // owns this case.
        assert_eq!(draft.validate(), Err(DraftError::IdenticalTimes));
    }

    #[test]
    fn test_from_slot_prefills_bounds_only() {
        let start = sample_start();
        let end = start + Duration::hours(1);
        let draft = EventDraft::from_slot(start, end);
        assert!(draft.title.is_empty());
        assert!(draft.location.is_empty());
        assert_eq!(draft.start, Some(start));
        assert_eq!(draft.end, Some(end));
    }

    #[test]
    fn test_from_event_prefills_everything() {
        let event = valid_draft().finalize(EventId::new()).unwrap();
        let draft = EventDraft::from_event(&event);
        assert_eq!(draft.title, event.title);
        assert_eq!(draft.location, event.location);
        assert_eq!(draft.start, Some(event.start));
        assert_eq!(draft.end, Some(event.end));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DraftError::MissingFields.to_string(),
            "Please make sure you have entered all the required fields"
        );
        assert_eq!(
            DraftError::IdenticalTimes.to_string(),
            "Start and end time cannot be identical"
        );
        assert_eq!(
            DraftError::EndBeforeStart.to_string(),
            "End time cannot be before the start time"
        );
    }
}
