//! Confirmation dialog for destructive actions.
//!
//! Deleting an event requires an explicit second step: the dialog can be
//! cancelled (button or Escape) with no state change.

use egui::{Context, RichText};

use crate::models::event::EventId;

/// Actions that require confirmation before they run.
#[derive(Debug, Clone)]
pub enum ConfirmAction {
    /// Delete an event by identifier
    DeleteEvent {
        event_id: EventId,
        event_title: String,
    },
}

impl ConfirmAction {
    fn title(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteEvent { .. } => "Delete Event",
        }
    }

    fn message(&self) -> String {
        match self {
            ConfirmAction::DeleteEvent { event_title, .. } => format!(
                "Are you sure you want to delete \"{}\"?\n\nThis cannot be undone!",
                event_title
            ),
        }
    }

    fn confirm_text(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteEvent { .. } => "Delete",
        }
    }
}

/// Result of rendering the confirmation dialog for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    Confirmed,
    Cancelled,
    /// Dialog still open (or not open at all)
    Pending,
}

/// State for the confirmation dialog.
#[derive(Debug, Default)]
pub struct ConfirmDialogState {
    pending_action: Option<ConfirmAction>,
}

impl ConfirmDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request confirmation for an action.
    pub fn request(&mut self, action: ConfirmAction) {
        self.pending_action = Some(action);
    }

    pub fn is_open(&self) -> bool {
        self.pending_action.is_some()
    }

    /// Take the pending action, consuming it.
    pub fn take_action(&mut self) -> Option<ConfirmAction> {
        self.pending_action.take()
    }

    /// Render the dialog and report the user's choice.
    pub fn render(&mut self, ctx: &Context) -> ConfirmResult {
        let Some(action) = &self.pending_action else {
            return ConfirmResult::Pending;
        };

        let mut result = ConfirmResult::Pending;

        egui::Window::new(action.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);
                ui.set_max_width(400.0);

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("⚠")
                            .size(24.0)
                            .color(egui::Color32::from_rgb(220, 150, 50)),
                    );
                    ui.label(action.message());
                });

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let confirm_button = egui::Button::new(
                        RichText::new(action.confirm_text()).color(egui::Color32::WHITE),
                    )
                    .fill(egui::Color32::from_rgb(180, 60, 60));

                    if ui.add(confirm_button).clicked() {
                        result = ConfirmResult::Confirmed;
                    }

                    ui.add_space(10.0);

                    if ui.button("Cancel").clicked() {
                        result = ConfirmResult::Cancelled;
                    }
                });

                ui.add_space(5.0);
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            result = ConfirmResult::Cancelled;
        }

        if result == ConfirmResult::Cancelled {
            self.pending_action = None;
        }

        result
    }
}
