//! Drag-and-drop state for rescheduling events on the calendar grid.
//!
//! The active drag lives in egui memory so every cell rendered during the
//! frame can see it: event chips begin a drag, grid cells update the
//! hovered target, and the release site resolves the drop into new event
//! bounds.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime};
use egui::{Context, Id};

use crate::models::event::{Event, EventId};

/// Which calendar surface the drag started on. Drops only resolve on the
/// surface that owns the drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragView {
    Month,
    Week,
}

/// In-flight drag of a single event. The hovered fields start at the
/// event's own position, so a drop without a recognized target is a
/// move to where the event already was.
#[derive(Clone, Debug)]
pub struct DragContext {
    pub event_id: EventId,
    pub duration: Duration,
    pub hovered_date: Option<NaiveDate>,
    pub hovered_time: Option<NaiveTime>,
    pub view: DragView,
}

impl DragContext {
    pub fn from_event(event: &Event, view: DragView) -> Self {
        Self {
            event_id: event.id.clone(),
            duration: event.end - event.start,
            hovered_date: Some(event.start.date_naive()),
            hovered_time: Some(event.start.time()),
            view,
        }
    }

    /// The start instant the drop currently points at.
    pub fn hovered_start(&self) -> Option<DateTime<Local>> {
        match (self.hovered_date, self.hovered_time) {
            (Some(date), Some(time)) => date.and_time(time).and_local_timezone(Local).single(),
            _ => None,
        }
    }
}

pub struct DragManager;

impl DragManager {
    fn storage_id() -> Id {
        Id::new("calendar_event_drag_state")
    }

    pub fn begin(ctx: &Context, context: DragContext) {
        ctx.memory_mut(|mem| {
            mem.data.insert_temp(Self::storage_id(), context);
        });
    }

    pub fn active_for_view(ctx: &Context, view: DragView) -> Option<DragContext> {
        ctx.memory_mut(|mem| mem.data.get_temp::<DragContext>(Self::storage_id()))
            .filter(|drag| drag.view == view)
    }

    pub fn is_active_for_view(ctx: &Context, view: DragView) -> bool {
        Self::active_for_view(ctx, view).is_some()
    }

    /// Point the drag at a day-and-time slot (week grid cells).
    pub fn update_hover(ctx: &Context, date: NaiveDate, time: NaiveTime) {
        let id = Self::storage_id();
        ctx.memory_mut(|mem| {
            if let Some(mut state) = mem.data.get_temp::<DragContext>(id) {
                state.hovered_date = Some(date);
                state.hovered_time = Some(time);
                mem.data.insert_temp(id, state);
            }
        });
    }

    /// Point the drag at a whole day, keeping the original time of day
    /// (month grid cells).
    pub fn update_hover_date(ctx: &Context, date: NaiveDate) {
        let id = Self::storage_id();
        ctx.memory_mut(|mem| {
            if let Some(mut state) = mem.data.get_temp::<DragContext>(id) {
                state.hovered_date = Some(date);
                mem.data.insert_temp(id, state);
            }
        });
    }

    /// Take the drag if it belongs to `view`, ending it.
    pub fn finish_for_view(ctx: &Context, view: DragView) -> Option<DragContext> {
        let id = Self::storage_id();
        let mut result = None;
        ctx.memory_mut(|mem| {
            if let Some(current) = mem.data.get_temp::<DragContext>(id) {
                if current.view == view {
                    result = Some(current);
                    mem.data.remove::<DragContext>(id);
                }
            }
        });
        result
    }
}
