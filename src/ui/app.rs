mod navigation;

use chrono::{Local, NaiveDate};
use egui_extras::DatePickerButton;

use super::confirm::{ConfirmAction, ConfirmDialogState, ConfirmResult};
use super::event_dialog::{render_event_dialog, EventDialogState};
use super::toast::ToastManager;
use super::views::agenda_view::AgendaView;
use super::views::month_view::MonthView;
use super::views::week_view::WeekView;
use super::views::{CalendarGesture, ViewResponse};
use super::ViewType;
use crate::store::EventStore;
use crate::workflow::{EditingWorkflow, EditorState, Slot, SlotOutcome};

/// Top-level application: the event store, the editing workflow, and the
/// chrome around them.
pub struct CalendarApp {
    store: EventStore,
    workflow: EditingWorkflow,
    current_view: ViewType,
    current_date: NaiveDate,
    /// Editor buffers; `Some` exactly while the workflow is open
    dialog: Option<EventDialogState>,
    confirm_dialog: ConfirmDialogState,
    toast_manager: ToastManager,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_toolbar(ctx);
        self.render_active_view(ctx);
        self.render_event_dialog(ctx);
        self.render_confirm_dialog(ctx);
        self.toast_manager.render(ctx);
    }
}

impl Default for CalendarApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarApp {
    pub fn new() -> Self {
        Self {
            store: EventStore::new(),
            workflow: EditingWorkflow::new(),
            current_view: ViewType::Month,
            current_date: Local::now().date_naive(),
            dialog: None,
            confirm_dialog: ConfirmDialogState::new(),
            toast_manager: ToastManager::new(),
        }
    }

    fn render_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("◀").clicked() {
                    self.navigate_previous();
                }
                if ui.button("Today").clicked() {
                    self.jump_to_today();
                }
                if ui.button("▶").clicked() {
                    self.navigate_next();
                }
                ui.add(DatePickerButton::new(&mut self.current_date).id_source("toolbar_date"));

                ui.separator();

                for view in ViewType::ALL {
                    if ui
                        .selectable_label(self.current_view == view, view.label())
                        .clicked()
                    {
                        self.current_view = view;
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Add Event").clicked() {
                        self.workflow.open_blank();
                        self.open_dialog();
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    fn render_active_view(&mut self, ctx: &egui::Context) {
        let response = egui::CentralPanel::default()
            .show(ctx, |ui| match self.current_view {
                ViewType::Month => MonthView::show(ui, self.current_date, &self.store),
                ViewType::Week => WeekView::show(ui, self.current_date, &self.store),
                ViewType::Agenda => AgendaView::show(ui, self.current_date, &self.store),
            })
            .inner;
        self.apply_gestures(response);
    }

    fn apply_gestures(&mut self, response: ViewResponse) {
        for gesture in response.gestures {
            match gesture {
                CalendarGesture::SlotSelected { start, end } => {
                    match self
                        .workflow
                        .select_slot(Slot::new(start, end), Local::now())
                    {
                        SlotOutcome::Opened => self.open_dialog(),
                        SlotOutcome::RejectedPast => {
                            self.toast_manager.warning("You cannot select past dates.");
                        }
                    }
                }
                CalendarGesture::EventSelected(id) => {
                    if let Some(event) = self.store.get(&id).cloned() {
                        self.workflow.select_event(event);
                        self.open_dialog();
                    }
                }
                CalendarGesture::EventDragged {
                    id,
                    new_start,
                    new_end,
                } => {
                    self.workflow
                        .drag_reschedule(&mut self.store, &id, new_start, new_end);
                }
            }
        }
    }

    /// Build fresh editor buffers from the workflow's selection context.
    fn open_dialog(&mut self) {
        self.dialog = match self.workflow.state() {
            EditorState::OpenCreate(slot) => Some(EventDialogState::new_event(*slot)),
            EditorState::OpenEdit(event) => Some(EventDialogState::from_event(event)),
            EditorState::Closed => None,
        };
    }

    fn render_event_dialog(&mut self, ctx: &egui::Context) {
        let Some(state) = self.dialog.as_mut() else {
            return;
        };
        let result = render_event_dialog(ctx, state, &mut self.workflow, &mut self.store);

        if let Some(event) = result.saved_event {
            self.toast_manager.success(format!("Saved \"{}\"", event.title));
        }
        if let Some(request) = result.delete_request {
            self.confirm_dialog.request(ConfirmAction::DeleteEvent {
                event_id: request.event_id,
                event_title: request.event_title,
            });
        }

        // Buffers live only while the workflow holds a selection context
        if !self.workflow.is_open() {
            self.dialog = None;
        }
    }

    fn render_confirm_dialog(&mut self, ctx: &egui::Context) {
        if self.confirm_dialog.render(ctx) == ConfirmResult::Confirmed {
            if let Some(ConfirmAction::DeleteEvent { .. }) = self.confirm_dialog.take_action() {
                if let Some(deleted) = self.workflow.delete_confirmed(&mut self.store) {
                    self.toast_manager
                        .success(format!("Deleted \"{}\"", deleted.title));
                }
                if !self.workflow.is_open() {
                    self.dialog = None;
                }
            }
        }
    }
}
