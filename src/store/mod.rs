//! In-memory event store.
//!
//! Owns the ordered event collection exclusively; mutations arrive only
//! through the editing workflow. Operations on identifiers that match
//! nothing are silent no-ops.

use chrono::{DateTime, Local, NaiveDate};

use crate::models::event::{Event, EventId};

/// Ordered collection of committed events.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events, in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// Events with any part on the given calendar day, in store order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.occurs_on(date)).collect()
    }

    /// Append a new event. Identifiers are minted uniquely at creation
    /// time, so no duplicate check is made here.
    pub fn add(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Replace the event whose identifier matches `id`.
    pub fn update(&mut self, id: &EventId, event: Event) {
        if let Some(existing) = self.events.iter_mut().find(|e| &e.id == id) {
            *existing = event;
        }
    }

    /// Update in place when the identifier is already present, append
    /// otherwise. This is the commit path for the event form.
    pub fn upsert(&mut self, event: Event) {
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => *existing = event,
            None => self.events.push(event),
        }
    }

    /// Delete the event whose identifier matches `id`.
    pub fn remove(&mut self, id: &EventId) {
        self.events.retain(|e| &e.id != id);
    }

    /// Move an event to new bounds, keeping its identifier, title and
    /// location. Drag gestures skip the form's ordering checks, so the
    /// range is applied as-is.
    pub fn drag_reschedule(
        &mut self,
        id: &EventId,
        new_start: DateTime<Local>,
        new_end: DateTime<Local>,
    ) {
        if let Some(event) = self.events.iter_mut().find(|e| &e.id == id) {
            event.start = new_start;
            event.end = new_end;
        }
    }
}
