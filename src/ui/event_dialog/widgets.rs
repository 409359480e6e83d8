//! Small form widgets for the event dialog.

use chrono::{NaiveDate, NaiveTime, Timelike};
use egui_extras::DatePickerButton;

/// A labelled date-and-time row whose date may start unset. Until the
/// user picks a date the row shows a placeholder button; clicking it
/// seeds the field with `fallback`.
pub fn render_date_time_field(
    ui: &mut egui::Ui,
    label: &str,
    id_source: &str,
    date: &mut Option<NaiveDate>,
    time: &mut NaiveTime,
    fallback: NaiveDate,
) {
    ui.horizontal(|ui| {
        ui.label(format!("{label}:"));
        match date {
            Some(picked) => {
                ui.add(DatePickerButton::new(picked).id_source(id_source));
                render_time_picker(ui, time, id_source);
            }
            None => {
                if ui.button("Pick a date…").clicked() {
                    *date = Some(fallback);
                }
            }
        }
    });
}

/// Hour and minute picker using two dropdowns.
pub fn render_time_picker(ui: &mut egui::Ui, time: &mut NaiveTime, id_source: &str) {
    let mut hour = time.hour();
    let mut minute = time.minute();

    egui::ComboBox::from_id_source((id_source, "hour"))
        .width(60.0)
        .selected_text(format!("{:02}", hour))
        .show_ui(ui, |ui| {
            for h in 0..24u32 {
                ui.selectable_value(&mut hour, h, format!("{:02}", h));
            }
        });

    ui.label(":");

    egui::ComboBox::from_id_source((id_source, "minute"))
        .width(60.0)
        .selected_text(format!("{:02}", minute))
        .show_ui(ui, |ui| {
            for m in (0..60u32).step_by(15) {
                ui.selectable_value(&mut minute, m, format!("{:02}", m));
            }
        });

    if let Some(new_time) = NaiveTime::from_hms_opt(hour, minute, 0) {
        *time = new_time;
    }
}
