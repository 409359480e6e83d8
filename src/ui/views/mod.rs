//! Calendar view rendering.
//!
//! Views are read-only over the store; user interactions come back as
//! [`CalendarGesture`] values that the app routes into the workflow.

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveTime};
use egui::Color32;

use crate::models::event::EventId;

pub mod agenda_view;
pub mod month_view;
pub mod week_view;

/// Fill color for event chips and blocks.
pub(crate) const EVENT_COLOR: Color32 = Color32::from_rgb(59, 130, 246);

/// A user gesture on the calendar surface.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarGesture {
    /// An empty range was picked on the grid
    SlotSelected {
        start: DateTime<Local>,
        end: DateTime<Local>,
    },
    /// An existing event was clicked
    EventSelected(EventId),
    /// An event was dropped on new bounds
    EventDragged {
        id: EventId,
        new_start: DateTime<Local>,
        new_end: DateTime<Local>,
    },
}

/// Gestures collected while rendering a view.
#[derive(Default)]
pub struct ViewResponse {
    pub gestures: Vec<CalendarGesture>,
}

impl ViewResponse {
    pub fn push(&mut self, gesture: CalendarGesture) {
        self.gestures.push(gesture);
    }
}

/// Resolve a day-and-time to a local instant, taking the earlier wall
/// clock on DST ambiguity.
pub(crate) fn to_local(date: NaiveDate, time: NaiveTime) -> Option<DateTime<Local>> {
    match date.and_time(time).and_local_timezone(Local) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(dt, _) => Some(dt),
        LocalResult::None => None,
    }
}
