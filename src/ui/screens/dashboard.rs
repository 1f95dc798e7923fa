//! Dashboard screen: counts and workout progress.

use egui::{RichText, Ui};

use crate::tracker::Tracker;
use crate::ui::theme::Theme;
use crate::ui::widgets::{show_progress, StatCard};

/// Dashboard screen UI.
pub struct DashboardScreen;

impl DashboardScreen {
    /// Render the dashboard.
    pub fn show(ui: &mut Ui, tracker: &Tracker, theme: Theme) {
        let stats = tracker.stats();

        ui.heading("Dashboard");
        ui.add_space(16.0);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 20.0;

            let fill = theme.card_fill();
            let text = theme.card_text();
            let border = theme.card_border();
            StatCard::count(stats.workouts, "Workouts")
                .with_colors(fill, text, border)
                .show(ui);
            StatCard::count(stats.meals, "Meals Logged")
                .with_colors(fill, text, border)
                .show(ui);
            StatCard::count(stats.goals_done, "Goals Done")
                .with_colors(fill, text, border)
                .show(ui);
        });

        ui.add_space(30.0);

        ui.label(RichText::new("Progress").size(18.0).strong());
        ui.add_space(8.0);
        show_progress(ui, tracker.progress_percent());
    }
}
