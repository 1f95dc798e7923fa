//! Gold badge chip.

use egui::{RichText, Ui};

use crate::tracker::Badge;
use crate::ui::theme::Brand;

/// Render one badge as a gold rounded chip.
pub fn show_badge_chip(ui: &mut Ui, badge: &Badge) {
    egui::Frame::new()
        .fill(Brand::GOLD)
        .inner_margin(10.0)
        .corner_radius(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(badge.label()).strong().color(Brand::ON_GOLD))
                .on_hover_text(format!(
                    "Awarded {}",
                    badge.awarded_at.format("%Y-%m-%d %H:%M")
                ));
        });
}
