//! Event editing dialog: create, edit and delete events via a modal
//! window over the calendar.

mod render;
mod state;
mod widgets;

pub use render::{render_event_dialog, EventDeleteRequest, EventDialogResult};
pub use state::EventDialogState;
