//! Week time-grid view.
//!
//! Seven day columns over 48 half-hour rows. Clicking an empty slot
//! selects (slot start, slot start + 30 min); event blocks open the
//! editor on click and can be dragged to any other slot.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use egui::{Align2, Color32, CursorIcon, FontId, Rect, Sense, Stroke, Vec2};

use super::{to_local, CalendarGesture, ViewResponse, EVENT_COLOR};
use crate::models::event::Event;
use crate::store::EventStore;
use crate::ui::drag::{DragContext, DragManager, DragView};

const SLOT_HEIGHT: f32 = 22.0;
const SLOT_MINUTES: u32 = 30;
const TIME_LABEL_WIDTH: f32 = 48.0;
const COLUMN_SPACING: f32 = 2.0;

pub struct WeekView;

impl WeekView {
    pub fn show(ui: &mut egui::Ui, current_date: NaiveDate, store: &EventStore) -> ViewResponse {
        let mut response = ViewResponse::default();
        let dates = week_dates(current_date);
        let today = Local::now().date_naive();

        let col_width =
            (ui.available_width() - TIME_LABEL_WIDTH - COLUMN_SPACING * 7.0 - 16.0) / 7.0;

        // Day header strip
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = COLUMN_SPACING;
            ui.add_space(TIME_LABEL_WIDTH);
            for date in &dates {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(col_width, 28.0), Sense::hover());
                let color = if *date == today {
                    EVENT_COLOR
                } else {
                    ui.visuals().strong_text_color()
                };
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    format!("{} {}", date.weekday(), date.day()),
                    FontId::proportional(13.0),
                    color,
                );
            }
        });
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 0.0;

            for hour in 0..24u32 {
                for half in 0..2u32 {
                    let time = NaiveTime::from_hms_opt(hour, half * SLOT_MINUTES, 0)
                        .unwrap_or(NaiveTime::MIN);

                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;

                        let (label_rect, _) = ui.allocate_exact_size(
                            Vec2::new(TIME_LABEL_WIDTH, SLOT_HEIGHT),
                            Sense::hover(),
                        );
                        if half == 0 {
                            ui.painter().text(
                                label_rect.right_center() - Vec2::new(5.0, 0.0),
                                Align2::RIGHT_CENTER,
                                format!("{:02}:00", hour),
                                FontId::proportional(11.0),
                                Color32::GRAY,
                            );
                        }
                        ui.add_space(COLUMN_SPACING);

                        for date in &dates {
                            Self::slot_cell(ui, *date, time, today, store, col_width, &mut response);
                            ui.add_space(COLUMN_SPACING);
                        }
                    });
                }
            }
        });

        response
    }

    fn slot_cell(
        ui: &mut egui::Ui,
        date: NaiveDate,
        time: NaiveTime,
        today: NaiveDate,
        store: &EventStore,
        col_width: f32,
        response: &mut ViewResponse,
    ) {
        let (rect, cell_response) =
            ui.allocate_exact_size(Vec2::new(col_width, SLOT_HEIGHT), Sense::click());

        ui.painter().rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);
        let border = if time.minute() == 0 {
            ui.visuals().widgets.noninteractive.bg_stroke.color
        } else {
            ui.visuals().faint_bg_color
        };
        ui.painter()
            .line_segment([rect.left_top(), rect.right_top()], Stroke::new(1.0, border));

        let slot_start = date.and_time(time);
        let slot_end = slot_start + Duration::minutes(SLOT_MINUTES as i64);

        // Events starting in this slot render as interactive blocks;
        // slots they merely pass through get a continuation bar.
        let mut continuing = false;
        let mut block_index = 0usize;
        for event in store.events_on(date) {
            match event_slot_role(event, slot_start, slot_end) {
                SlotRole::Starts => {
                    let block_rect = Rect::from_min_size(
                        egui::pos2(
                            rect.left() + 2.0 + (block_index as f32) * 14.0,
                            rect.top() + 1.0,
                        ),
                        Vec2::new((rect.width() - 4.0 - (block_index as f32) * 14.0).max(20.0), SLOT_HEIGHT - 2.0),
                    );
                    Self::event_block(ui, block_rect, event, date, time, response);
                    block_index += 1;
                }
                SlotRole::Continues => continuing = true,
                SlotRole::Outside => {}
            }
        }
        if continuing {
            let bar = Rect::from_min_size(
                rect.left_top() + Vec2::new(2.0, 0.0),
                Vec2::new(3.0, SLOT_HEIGHT),
            );
            ui.painter().rect_filled(bar, 0.0, EVENT_COLOR);
        }

        // Current time indicator across today's column
        if date == today {
            let now = Local::now().time();
            if now >= time && now < time + Duration::minutes(SLOT_MINUTES as i64) {
                let frac = (now.num_seconds_from_midnight()
                    - time.num_seconds_from_midnight()) as f32
                    / (SLOT_MINUTES * 60) as f32;
                let y = rect.top() + frac * SLOT_HEIGHT;
                ui.painter().line_segment(
                    [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                    Stroke::new(2.0, Color32::from_rgb(255, 100, 100)),
                );
            }
        }

        // Track this slot as the drop target while a week drag is live
        if DragManager::is_active_for_view(ui.ctx(), DragView::Week) {
            let pointer = ui.input(|i| i.pointer.hover_pos());
            if pointer.is_some_and(|pos| rect.contains(pos)) {
                DragManager::update_hover(ui.ctx(), date, time);
                ui.painter()
                    .rect_stroke(rect, 0.0, Stroke::new(2.0, EVENT_COLOR));
            }
        }

        // Click on empty slot space selects a half-hour slot
        if cell_response.clicked() {
            if let (Some(start), Some(end)) = (
                to_local(date, time),
                to_local(slot_end.date(), slot_end.time()),
            ) {
                response.push(CalendarGesture::SlotSelected { start, end });
            }
        }
    }

    fn event_block(
        ui: &mut egui::Ui,
        block_rect: Rect,
        event: &Event,
        date: NaiveDate,
        time: NaiveTime,
        response: &mut ViewResponse,
    ) {
        let block_id = egui::Id::new(("week_block", event.id.as_str(), date, time));
        let block_response = ui.interact(block_rect, block_id, Sense::click_and_drag());

        ui.painter().rect_filled(block_rect, 3.0, EVENT_COLOR);
        ui.painter().with_clip_rect(block_rect.shrink(1.0)).text(
            block_rect.left_center() + Vec2::new(4.0, 0.0),
            Align2::LEFT_CENTER,
            format!("{} {}", event.start.format("%H:%M"), event.title),
            FontId::proportional(11.0),
            Color32::WHITE,
        );

        if block_response.hovered() {
            ui.output_mut(|out| out.cursor_icon = CursorIcon::PointingHand);
        }

        if block_response.clicked() {
            response.push(CalendarGesture::EventSelected(event.id.clone()));
        }

        if block_response.drag_started() {
            DragManager::begin(ui.ctx(), DragContext::from_event(event, DragView::Week));
            ui.output_mut(|out| out.cursor_icon = CursorIcon::Grabbing);
        }

        if block_response.drag_stopped() {
            if let Some(drag) = DragManager::finish_for_view(ui.ctx(), DragView::Week) {
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

enum SlotRole {
    Starts,
    Continues,
    Outside,
}

/// How an event relates to a half-hour slot. Inverted bounds (possible
/// after a drag) are normalized for display.
fn event_slot_role(event: &Event, slot_start: NaiveDateTime, slot_end: NaiveDateTime) -> SlotRole {
    let a = event.start.naive_local();
    let b = event.end.naive_local();
    let (lo, hi) = if b < a { (b, a) } else { (a, b) };

    if lo >= slot_end || hi <= slot_start {
        return SlotRole::Outside;
    }
    if lo >= slot_start && lo < slot_end {
        SlotRole::Starts
    } else {
        SlotRole::Continues
    }
}

/// The Sunday-to-Saturday week containing `date`.
fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let start = date - Duration::days(date.weekday().num_days_from_sunday() as i64);
    core::array::from_fn(|i| start + Duration::days(i as i64))
}
