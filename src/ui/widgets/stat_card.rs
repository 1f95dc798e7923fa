//! Stat card widget for dashboard counts.

use egui::{Align, Color32, Layout, RichText, Shadow, Stroke, Ui, Vec2};

/// A card showing one large number over a label.
pub struct StatCard<'a> {
    /// The value to display
    value: String,
    /// The stat name
    label: &'a str,
    /// Card background
    fill: Color32,
    /// Text color
    text_color: Color32,
    /// Outline color
    border: Color32,
}

impl<'a> StatCard<'a> {
    /// Create a new stat card.
    pub fn new(value: impl Into<String>, label: &'a str) -> Self {
        Self {
            value: value.into(),
            label,
            fill: Color32::WHITE,
            text_color: Color32::from_rgb(17, 17, 17),
            border: Color32::from_rgb(204, 204, 204),
        }
    }

    /// Create a card for a count.
    pub fn count(count: usize, label: &'a str) -> Self {
        Self::new(count.to_string(), label)
    }

    /// Set the card colors.
    pub fn with_colors(mut self, fill: Color32, text_color: Color32, border: Color32) -> Self {
        self.fill = fill;
        self.text_color = text_color;
        self.border = border;
        self
    }

    /// Render the card.
    pub fn show(self, ui: &mut Ui) {
        egui::Frame::new()
            .fill(self.fill)
            .inner_margin(22.0)
            .corner_radius(12.0)
            .stroke(Stroke::new(1.0, self.border))
            .shadow(Shadow {
                offset: [0, 2],
                blur: 8,
                spread: 0,
                color: Color32::from_black_alpha(25),
            })
            .show(ui, |ui| {
                ui.set_min_size(Vec2::new(136.0, 60.0));

                ui.with_layout(Layout::top_down(Align::Center), |ui| {
                    ui.label(
                        RichText::new(&self.value)
                            .size(32.0)
                            .strong()
                            .color(self.text_color),
                    );
                    ui.add_space(4.0);
                    ui.label(RichText::new(self.label).size(14.0).color(self.text_color));
                });
            });
    }
}
