//! Agenda list view.
//!
//! A chronological listing of upcoming events, grouped by day. Rows open
//! the editor on click; the agenda has no slot selection and no drag.

use chrono::{Duration, NaiveDate};
use egui::{Color32, CursorIcon, RichText, Sense, Vec2};

use super::{CalendarGesture, ViewResponse, EVENT_COLOR};
use crate::models::event::Event;
use crate::store::EventStore;

/// Days covered by the agenda, starting at the current date. Navigation
/// steps the agenda by this span.
pub const AGENDA_SPAN_DAYS: i64 = 30;

pub struct AgendaView;

impl AgendaView {
    pub fn show(ui: &mut egui::Ui, current_date: NaiveDate, store: &EventStore) -> ViewResponse {
        let mut response = ViewResponse::default();
        let range_end = current_date + Duration::days(AGENDA_SPAN_DAYS);

        let mut upcoming: Vec<&Event> = store
            .events()
            .iter()
            .filter(|e| {
                let day = e.start.date_naive();
                day >= current_date && day < range_end
            })
            .collect();
        upcoming.sort_by_key(|e| e.start);

        ui.label(
            RichText::new(format!(
                "{} – {}",
                current_date.format("%B %-d, %Y"),
                (range_end - Duration::days(1)).format("%B %-d, %Y")
            ))
            .strong(),
        );
        ui.separator();

        if upcoming.is_empty() {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("There are no events in this range.").weak());
            });
            return response;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            let mut last_day: Option<NaiveDate> = None;
            for event in upcoming {
                let day = event.start.date_naive();
                if last_day != Some(day) {
                    ui.add_space(10.0);
                    ui.label(RichText::new(day.format("%A, %B %-d").to_string()).strong());
                    last_day = Some(day);
                }
                Self::event_row(ui, event, &mut response);
            }
            ui.add_space(10.0);
        });

        response
    }

    fn event_row(ui: &mut egui::Ui, event: &Event, response: &mut ViewResponse) {
        let row = ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!(
                    "{} – {}",
                    event.start.format("%H:%M"),
                    event.end.format("%H:%M")
                ))
                .monospace()
                .weak(),
            );
            let (dot, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter().circle_filled(dot.center(), 4.0, EVENT_COLOR);
            ui.label(RichText::new(&event.title).strong());
            ui.label(RichText::new(&event.location).weak());
        });

        let row_id = egui::Id::new(("agenda_row", event.id.as_str()));
        let row_response = ui.interact(row.response.rect, row_id, Sense::click());

        if row_response.hovered() {
            ui.output_mut(|out| out.cursor_icon = CursorIcon::PointingHand);
            ui.painter().rect_stroke(
                row.response.rect.expand(2.0),
                3.0,
                egui::Stroke::new(1.0, Color32::from_gray(128)),
            );
        }

        if row_response.clicked() {
            response.push(CalendarGesture::EventSelected(event.id.clone()));
        }
    }
}
