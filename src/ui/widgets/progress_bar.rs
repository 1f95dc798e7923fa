//! Workout progress bar.

use egui::Ui;

use crate::ui::theme::Brand;

/// Convert a 0-100 percentage into a 0.0-1.0 fill fraction.
pub fn progress_fill(percent: u8) -> f32 {
    f32::from(percent.min(100)) / 100.0
}

/// Render the dashboard progress bar.
pub fn show_progress(ui: &mut Ui, percent: u8) {
    let bar = egui::ProgressBar::new(progress_fill(percent))
        .desired_width(ui.available_width())
        .fill(Brand::ACCENT)
        .text(format!("{}%", percent.min(100)));
    ui.add(bar);
}
