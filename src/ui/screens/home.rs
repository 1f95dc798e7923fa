//! Home screen implementation.

use egui::{Color32, RichText, Ui, Vec2};

use super::Screen;
use crate::ui::theme::Brand;

/// Home screen UI.
pub struct HomeScreen;

impl HomeScreen {
    /// Headline shown in the hero card.
    pub const HEADLINE: &'static str = "Track • Train • Transform";
    /// Tagline under the headline.
    pub const TAGLINE: &'static str = "Your personal fitness tracker — simple, clean, and powerful.";

    /// Render the home screen and return the next screen if navigation requested.
    pub fn show(ui: &mut Ui) -> Option<Screen> {
        let mut next_screen = None;

        ui.add_space(24.0);

        egui::Frame::new()
            .fill(Brand::HERO_BG)
            .inner_margin(40.0)
            .corner_radius(12.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.label(
                    RichText::new(Self::HEADLINE)
                        .size(40.0)
                        .strong()
                        .color(Color32::WHITE),
                );
                ui.add_space(8.0);
                ui.label(
                    RichText::new(Self::TAGLINE)
                        .size(16.0)
                        .color(Color32::from_white_alpha(204)),
                );

                ui.add_space(24.0);

                if ui
                    .add_sized(
                        Vec2::new(160.0, 40.0),
                        egui::Button::new(
                            RichText::new("Get Started")
                                .size(16.0)
                                .strong()
                                .color(Color32::WHITE),
                        )
                        .fill(Brand::ACCENT),
                    )
                    .clicked()
                {
                    next_screen = Some(Screen::Dashboard);
                }
            });

        next_screen
    }
}
