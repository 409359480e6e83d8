// DnD Calendar Application
// Main entry point

use dnd_calendar::ui::CalendarApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting DnD Calendar");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "DnD Calendar",
        options,
        Box::new(|_cc| Ok(Box::new(CalendarApp::new()))),
    )
}
