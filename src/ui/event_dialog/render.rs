use chrono::Local;
use egui::{Color32, RichText};

use crate::models::event::{Event, EventId};
use crate::store::EventStore;
use crate::workflow::EditingWorkflow;

use super::state::EventDialogState;
use super::widgets::render_date_time_field;

/// Request for delete confirmation from the event dialog.
#[derive(Clone)]
pub struct EventDeleteRequest {
    pub event_id: EventId,
    pub event_title: String,
}

#[derive(Default)]
pub struct EventDialogResult {
    pub saved_event: Option<Event>,
    /// Request to show the delete confirmation dialog
    pub delete_request: Option<EventDeleteRequest>,
}

/// Render the event dialog. Save submits the draft through the workflow;
/// Cancel and the window close button both discard it.
pub fn render_event_dialog(
    ctx: &egui::Context,
    state: &mut EventDialogState,
    workflow: &mut EditingWorkflow,
    store: &mut EventStore,
) -> EventDialogResult {
    let mut result = EventDialogResult::default();
    let mut dialog_open = true;

    egui::Window::new(state.caption.clone())
        .id(egui::Id::new("event_dialog"))
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            render_error_banner(ui, state);
            render_fields(ui, state);

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            render_action_buttons(ui, state, workflow, store, &mut result);
        });

    // The window chrome close button behaves like Cancel
    if !dialog_open {
        workflow.close();
    }

    result
}

fn render_error_banner(ui: &mut egui::Ui, state: &EventDialogState) {
    if let Some(error) = &state.error_message {
        ui.colored_label(Color32::RED, RichText::new(error).strong());
        ui.add_space(8.0);
    }
}

fn render_fields(ui: &mut egui::Ui, state: &mut EventDialogState) {
    ui.horizontal(|ui| {
        ui.label("Title:");
        ui.text_edit_singleline(&mut state.title);
    });

    ui.horizontal(|ui| {
        ui.label("Location:");
        ui.text_edit_singleline(&mut state.location);
    });

    ui.add_space(8.0);

    let today = Local::now().date_naive();
    render_date_time_field(
        ui,
        "Start",
        "event_start",
        &mut state.start_date,
        &mut state.start_time,
        today,
    );
    let end_fallback = state.start_date.unwrap_or(today);
    render_date_time_field(
        ui,
        "End",
        "event_end",
        &mut state.end_date,
        &mut state.end_time,
        end_fallback,
    );
}

fn render_action_buttons(
    ui: &mut egui::Ui,
    state: &mut EventDialogState,
    workflow: &mut EditingWorkflow,
    store: &mut EventStore,
    result: &mut EventDialogResult,
) {
    ui.horizontal(|ui| {
        if ui.button("Save").clicked() {
            match workflow.commit(&state.to_draft(), store) {
                Ok(event) => {
                    state.error_message = None;
                    result.saved_event = Some(event);
                }
                Err(err) => {
                    state.error_message = Some(err.to_string());
                }
            }
        }

        if ui.button("Cancel").clicked() {
            workflow.close();
        }

        if let Some(event_id) = &state.event_id {
            ui.add_space(20.0);
            if ui
                .button(RichText::new("Delete").color(Color32::RED))
                .clicked()
            {
                result.delete_request = Some(EventDeleteRequest {
                    event_id: event_id.clone(),
                    event_title: state.caption.clone(),
                });
            }
        }
    });
}
