//! Event editing workflow.
//!
//! A small state machine owning the editor modal's lifecycle: an accepted
//! slot selection opens it in create mode, clicking an event opens it in
//! edit mode, and commit/cancel/delete all return to `Closed`. The
//! workflow is the single writer of the [`EventStore`].

use chrono::{DateTime, Local};

use crate::models::draft::{DraftError, EventDraft};
use crate::models::event::{Event, EventId};
use crate::store::EventStore;

/// A (start, end) range picked directly on the calendar grid, not tied
/// to an existing event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl Slot {
    pub fn new(start: DateTime<Local>, end: DateTime<Local>) -> Self {
        Self { start, end }
    }

    /// Whether the slot begins before the given instant.
    pub fn starts_before(&self, instant: DateTime<Local>) -> bool {
        self.start < instant
    }
}

/// Editor state. At most one selection context is active while open;
/// closing discards it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState {
    /// No modal, no selection context.
    #[default]
    Closed,
    /// Creating a new event, optionally prefilled from a grid slot.
    OpenCreate(Option<Slot>),
    /// Editing the given existing event.
    OpenEdit(Event),
}

/// Outcome of offering a grid slot to the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOutcome {
    /// The editor opened in create mode with the slot bounds.
    Opened,
    /// The slot starts in the past; nothing changed.
    RejectedPast,
}

/// Orchestrates the editor modal and dispatches validated drafts to the
/// store.
#[derive(Debug, Default)]
pub struct EditingWorkflow {
    state: EditorState,
}

impl EditingWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, EditorState::Closed)
    }

    /// The event being edited, when the editor is in edit mode.
    pub fn editing_event(&self) -> Option<&Event> {
        match &self.state {
            EditorState::OpenEdit(event) => Some(event),
            _ => None,
        }
    }

    /// Offer a slot selection from the calendar surface. Slots starting
    /// before `now` are rejected with no state change; `now` is a
    /// parameter so tests control the clock.
    pub fn select_slot(&mut self, slot: Slot, now: DateTime<Local>) -> SlotOutcome {
        if slot.starts_before(now) {
            log::warn!("Rejected slot selection starting in the past: {}", slot.start);
            return SlotOutcome::RejectedPast;
        }
        self.state = EditorState::OpenCreate(Some(slot));
        SlotOutcome::Opened
    }

    /// Open the editor for a new event with no preset slot.
    pub fn open_blank(&mut self) {
        self.state = EditorState::OpenCreate(None);
    }

    /// Open the editor preloaded from an existing event.
    pub fn select_event(&mut self, event: Event) {
        self.state = EditorState::OpenEdit(event);
    }

    /// Close the editor, discarding the active selection context.
    pub fn close(&mut self) {
        self.state = EditorState::Closed;
    }

    /// The draft the editor presents on entry to the current state.
    /// Rebuilt on every opening; nothing leaks from a previous session.
    pub fn entry_draft(&self) -> EventDraft {
        match &self.state {
            EditorState::Closed | EditorState::OpenCreate(None) => EventDraft::blank(),
            EditorState::OpenCreate(Some(slot)) => EventDraft::from_slot(slot.start, slot.end),
            EditorState::OpenEdit(event) => EventDraft::from_event(event),
        }
    }

    /// Submit a draft. On success the committed event is upserted into
    /// the store and the editor closes; on failure nothing changes and
    /// the single validation error is returned for display.
    pub fn commit(
        &mut self,
        draft: &EventDraft,
        store: &mut EventStore,
    ) -> Result<Event, DraftError> {
        let id = match &self.state {
            EditorState::OpenEdit(event) => event.id.clone(),
            _ => EventId::new(),
        };
        let event = draft.finalize(id)?;
        log::info!("Committed event \"{}\" ({})", event.title, event.id);
        store.upsert(event.clone());
        self.state = EditorState::Closed;
        Ok(event)
    }

    /// Delete the event being edited, after the user confirmed. Returns
    /// the removed event, or `None` when the editor was not in edit
    /// mode.
    pub fn delete_confirmed(&mut self, store: &mut EventStore) -> Option<Event> {
        let EditorState::OpenEdit(event) = &self.state else {
            return None;
        };
        let event = event.clone();
        store.remove(&event.id);
        log::info!("Deleted event \"{}\" ({})", event.title, event.id);
        self.state = EditorState::Closed;
        Some(event)
    }

    /// Forward a drag gesture to the store. Drags never touch the
    /// editor and apply no validation.
    pub fn drag_reschedule(
        &self,
        store: &mut EventStore,
        id: &EventId,
        new_start: DateTime<Local>,
        new_end: DateTime<Local>,
    ) {
        log::info!("Rescheduled event {} to {} - {}", id, new_start, new_end);
        store.drag_reschedule(id, new_start, new_end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 10, 8, 0, 0).unwrap()
    }

    fn future_slot() -> Slot {
        Slot::new(now() + Duration::hours(1), now() + Duration::hours(2))
    }

    fn stored_event(store: &mut EventStore) -> Event {
        let draft = EventDraft {
            title: "Planning".to_string(),
            location: "Room B".to_string(),
            start: Some(now() + Duration::hours(3)),
            end: Some(now() + Duration::hours(4)),
        };
        let event = draft.finalize(EventId::new()).unwrap();
        store.add(event.clone());
        event
    }

    #[test]
    fn test_future_slot_opens_create() {
        let mut workflow = EditingWorkflow::new();
        let slot = future_slot();

        assert_eq!(workflow.select_slot(slot, now()), SlotOutcome::Opened);
        assert_eq!(workflow.state(), &EditorState::OpenCreate(Some(slot)));
    }

    #[test]
    fn test_past_slot_rejected_without_state_change() {
        let mut workflow = EditingWorkflow::new();
        let slot = Slot::new(now() - Duration::minutes(1), now() + Duration::hours(1));

        assert_eq!(workflow.select_slot(slot, now()), SlotOutcome::RejectedPast);
        assert_eq!(workflow.state(), &EditorState::Closed);
    }

    #[test]
    fn test_entry_draft_for_slot_has_blank_text_fields() {
        let mut workflow = EditingWorkflow::new();
        let slot = future_slot();
        workflow.select_slot(slot, now());

        let draft = workflow.entry_draft();
        assert!(draft.title.is_empty());
        assert!(draft.location.is_empty());
        assert_eq!(draft.start, Some(slot.start));
        assert_eq!(draft.end, Some(slot.end));
    }

    #[test]
    fn test_entry_draft_resets_between_sessions() {
        let mut store = EventStore::new();
        let event = stored_event(&mut store);
        let mut workflow = EditingWorkflow::new();

        workflow.select_event(event.clone());
        assert_eq!(workflow.entry_draft().title, "Planning");

        workflow.close();
        workflow.open_blank();

        // Nothing from the edit session survives into the new one.
        assert_eq!(workflow.entry_draft(), EventDraft::blank());
    }

    #[test]
    fn test_commit_create_mints_fresh_id() {
        let mut store = EventStore::new();
        let mut workflow = EditingWorkflow::new();
        workflow.select_slot(future_slot(), now());

        let mut draft = workflow.entry_draft();
        draft.title = "Standup".to_string();
        draft.location = "Room A".to_string();

        let event = workflow.commit(&draft, &mut store).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&event.id).unwrap().title, "Standup");
        assert_eq!(workflow.state(), &EditorState::Closed);
    }

    #[test]
    fn test_commit_edit_reuses_id() {
        let mut store = EventStore::new();
        let event = stored_event(&mut store);
        let mut workflow = EditingWorkflow::new();
        workflow.select_event(event.clone());

        let mut draft = workflow.entry_draft();
        draft.title = "Planning (moved)".to_string();

        let committed = workflow.commit(&draft, &mut store).unwrap();
        assert_eq!(committed.id, event.id);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&event.id).unwrap().title, "Planning (moved)");
    }

    #[test]
    fn test_failed_commit_keeps_editor_open_and_store_untouched() {
        let mut store = EventStore::new();
        let mut workflow = EditingWorkflow::new();
        workflow.select_slot(future_slot(), now());

        let draft = workflow.entry_draft(); // title/location still blank
        let err = workflow.commit(&draft, &mut store).unwrap_err();

        assert_eq!(err, DraftError::MissingFields);
        assert!(store.is_empty());
        assert!(workflow.is_open());
    }

    #[test]
    fn test_delete_confirmed_removes_and_closes() {
        let mut store = EventStore::new();
        let event = stored_event(&mut store);
        let mut workflow = EditingWorkflow::new();
        workflow.select_event(event.clone());

        let deleted = workflow.delete_confirmed(&mut store).unwrap();
        assert_eq!(deleted.id, event.id);
        assert!(store.is_empty());
        assert_eq!(workflow.state(), &EditorState::Closed);
    }

    #[test]
    fn test_delete_outside_edit_mode_is_noop() {
        let mut store = EventStore::new();
        stored_event(&mut store);
        let mut workflow = EditingWorkflow::new();
        workflow.open_blank();

        assert!(workflow.delete_confirmed(&mut store).is_none());
        assert_eq!(store.len(), 1);
        assert!(workflow.is_open());
    }

    #[test]
    fn test_drag_passthrough_ignores_editor_state() {
        let mut store = EventStore::new();
        let event = stored_event(&mut store);
        let workflow = EditingWorkflow::new();

        let new_start = now() + Duration::days(1);
        let new_end = new_start + Duration::hours(1);
        workflow.drag_reschedule(&mut store, &event.id, new_start, new_end);

        let moved = store.get(&event.id).unwrap();
        assert_eq!(moved.start, new_start);
        assert_eq!(moved.end, new_end);
        assert_eq!(moved.title, event.title);
    }
}
