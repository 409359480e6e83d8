//! Month grid view.
//!
//! A 6×7 day grid. Clicking an empty day cell selects the whole day as a
//! slot; event chips open the editor on click and can be dragged to
//! another day (time of day and duration preserved).

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime};
use egui::{Align2, Color32, CursorIcon, FontId, Rect, Sense, Stroke, Vec2};

use super::{to_local, CalendarGesture, ViewResponse, EVENT_COLOR};
use crate::models::event::Event;
use crate::store::EventStore;
use crate::ui::drag::{DragContext, DragManager, DragView};

const HEADER_HEIGHT: f32 = 24.0;
const CHIP_HEIGHT: f32 = 18.0;
const CELL_SPACING: f32 = 2.0;

/// Event chips painted per day cell before eliding into "+N more".
const MAX_CHIPS: usize = 3;

pub struct MonthView;

impl MonthView {
    pub fn show(ui: &mut egui::Ui, current_date: NaiveDate, store: &EventStore) -> ViewResponse {
        let mut response = ViewResponse::default();
        let today = Local::now().date_naive();

        let first_of_month = current_date.with_day(1).unwrap_or(current_date);
        let grid_start = start_of_week(first_of_month);

        let col_width = (ui.available_width() - CELL_SPACING * 6.0) / 7.0;

        // Weekday header, Sunday first to match the week layout
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = CELL_SPACING;
            for name in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
                let (rect, _) =
                    ui.allocate_exact_size(Vec2::new(col_width, HEADER_HEIGHT), Sense::hover());
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    name,
                    FontId::proportional(13.0),
                    ui.visuals().strong_text_color(),
                );
            }
        });
        ui.add_space(CELL_SPACING);

        let row_height = ((ui.available_height() - CELL_SPACING * 5.0) / 6.0).max(72.0);

        for week in 0..6 {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = CELL_SPACING;
                for weekday in 0..7 {
                    let date = grid_start + Duration::days(week * 7 + weekday);
                    Self::day_cell(
                        ui,
                        date,
                        current_date,
                        today,
                        store,
                        Vec2::new(col_width, row_height),
                        &mut response,
                    );
                }
            });
            ui.add_space(CELL_SPACING);
        }

        response
    }

    fn day_cell(
        ui: &mut egui::Ui,
        date: NaiveDate,
        current_date: NaiveDate,
        today: NaiveDate,
        store: &EventStore,
        size: Vec2,
        response: &mut ViewResponse,
    ) {
        let (rect, cell_response) = ui.allocate_exact_size(size, Sense::click());
        let in_month =
            date.month() == current_date.month() && date.year() == current_date.year();

        let fill = if in_month {
            ui.visuals().extreme_bg_color
        } else {
            ui.visuals().faint_bg_color
        };
        ui.painter().rect_filled(rect, 4.0, fill);

        let stroke = if date == today {
            Stroke::new(2.0, EVENT_COLOR)
        } else {
            Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color)
        };
        ui.painter().rect_stroke(rect, 4.0, stroke);

        let day_color = if in_month {
            ui.visuals().strong_text_color()
        } else {
            ui.visuals().weak_text_color()
        };
        ui.painter().text(
            rect.left_top() + Vec2::new(6.0, 4.0),
            Align2::LEFT_TOP,
            date.day().to_string(),
            FontId::proportional(12.0),
            day_color,
        );

        // Event chips, eliding past MAX_CHIPS
        let events = store.events_on(date);
        let shown = events.len().min(MAX_CHIPS);
        let mut chip_top = rect.top() + 22.0;
        for &event in &events[..shown] {
            let chip_rect = Rect::from_min_size(
                egui::pos2(rect.left() + 4.0, chip_top),
                Vec2::new(rect.width() - 8.0, CHIP_HEIGHT),
            );
            if chip_rect.bottom() > rect.bottom() - 2.0 {
                break;
            }
            Self::event_chip(ui, chip_rect, event, date, response);
            chip_top += CHIP_HEIGHT + 2.0;
        }
        if events.len() > shown {
            ui.painter().text(
                egui::pos2(rect.left() + 6.0, chip_top),
                Align2::LEFT_TOP,
                format!("+{} more", events.len() - shown),
                FontId::proportional(11.0),
                ui.visuals().weak_text_color(),
            );
        }

        // Track this cell as the drop target while a month drag is live
        if DragManager::is_active_for_view(ui.ctx(), DragView::Month) {
            let pointer = ui.input(|i| i.pointer.hover_pos());
            if pointer.is_some_and(|pos| rect.contains(pos)) {
                DragManager::update_hover_date(ui.ctx(), date);
                ui.painter().rect_stroke(rect, 4.0, Stroke::new(2.0, EVENT_COLOR));
            }
        }

        // Click on empty cell space selects the whole day as a slot
        if cell_response.clicked() {
            let next_day = date + Duration::days(1);
            if let (Some(start), Some(end)) =
                (to_local(date, NaiveTime::MIN), to_local(next_day, NaiveTime::MIN))
            {
                response.push(CalendarGesture::SlotSelected { start, end });
            }
        }
    }

    fn event_chip(
        ui: &mut egui::Ui,
        chip_rect: Rect,
        event: &Event,
        date: NaiveDate,
        response: &mut ViewResponse,
    ) {
        let chip_id = egui::Id::new(("month_chip", event.id.as_str(), date));
        let chip_response = ui.interact(chip_rect, chip_id, Sense::click_and_drag());

        ui.painter().rect_filled(chip_rect, 3.0, EVENT_COLOR);
        ui.painter().with_clip_rect(chip_rect.shrink(2.0)).text(
            chip_rect.left_center() + Vec2::new(4.0, 0.0),
            Align2::LEFT_CENTER,
            &event.title,
            FontId::proportional(11.0),
            Color32::WHITE,
        );

        if chip_response.hovered() {
            ui.output_mut(|out| out.cursor_icon = CursorIcon::PointingHand);
        }

        if chip_response.clicked() {
            response.push(CalendarGesture::EventSelected(event.id.clone()));
        }

        if chip_response.drag_started() {
            DragManager::begin(ui.ctx(), DragContext::from_event(event, DragView::Month));
            ui.output_mut(|out| out.cursor_icon = CursorIcon::Grabbing);
        }

        if chip_response.drag_stopped() {
            if let Some(drag) = DragManager::finish_for_view(ui.ctx(), DragView::Month) {
                if let Some(new_start) = drag.hovered_start() {
                    response.push(CalendarGesture::EventDragged {
                        id: drag.event_id,
                        new_start,
                        new_end: new_start + drag.duration,
                    });
                }
            }
        }
    }
}

/// The Sunday on or before `date`.
fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}
