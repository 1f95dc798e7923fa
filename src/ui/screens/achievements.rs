//! Achievements screen.

use egui::{RichText, Ui};

use crate::tracker::Badge;
use crate::ui::widgets::show_badge_chip;

/// What the achievements screen shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AchievementsContent<'a> {
    /// Nothing earned yet
    Placeholder(&'static str),
    /// Earned badges in award order
    Badges(&'a [Badge]),
}

/// Achievements screen UI.
pub struct AchievementsScreen;

impl AchievementsScreen {
    /// Message shown before the first badge.
    pub const EMPTY_MESSAGE: &'static str = "No badges yet — keep training!";

    /// Decide what to render for the given badges.
    pub fn content(badges: &[Badge]) -> AchievementsContent<'_> {
        if badges.is_empty() {
            AchievementsContent::Placeholder(Self::EMPTY_MESSAGE)
        } else {
            AchievementsContent::Badges(badges)
        }
    }

    /// Render the achievements screen.
    pub fn show(ui: &mut Ui, badges: &[Badge]) {
        ui.heading("Achievements");
        ui.add_space(12.0);

        match Self::content(badges) {
            AchievementsContent::Placeholder(message) => {
                ui.label(RichText::new(message).size(15.0));
            }
            AchievementsContent::Badges(badges) => {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);
                    for badge in badges {
                        show_badge_chip(ui, badge);
                    }
                });
            }
        }
    }
}
