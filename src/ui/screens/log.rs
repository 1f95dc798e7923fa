//! Workout and diet log screens.
//!
//! Both screens share one layout: an input row on top and the logged entries
//! below, oldest first.

use egui::{RichText, Ui};

use crate::tracker::LogEntry;
use crate::ui::widgets::EntryInput;

/// Log screen state.
#[derive(Debug, Clone)]
pub struct LogScreen {
    /// Screen heading
    heading: &'static str,
    /// Text shown when nothing is logged yet
    empty_text: &'static str,
    /// Entry input row
    input: EntryInput,
}

impl LogScreen {
    /// Workout log screen.
    pub fn workouts() -> Self {
        Self {
            heading: "Workouts",
            empty_text: "No workouts logged yet",
            input: EntryInput::new("e.g. Pushups - 20 reps", "Add"),
        }
    }

    /// Diet log screen.
    pub fn diet() -> Self {
        Self {
            heading: "Diet Log",
            empty_text: "No meals logged yet",
            input: EntryInput::new("e.g. Chicken + Rice - 500 cal", "Log"),
        }
    }

    /// Screen heading.
    pub fn heading(&self) -> &'static str {
        self.heading
    }

    /// Input row state.
    pub fn input(&self) -> &EntryInput {
        &self.input
    }

    /// Mutable input row state.
    pub fn input_mut(&mut self) -> &mut EntryInput {
        &mut self.input
    }

    /// Render the screen. Returns submitted text for the caller to log.
    pub fn show<E: LogEntry>(&mut self, ui: &mut Ui, entries: &[E]) -> Option<String> {
        ui.heading(self.heading);
        ui.add_space(12.0);

        let submitted = self.input.show(ui);

        ui.add_space(20.0);

        if entries.is_empty() {
            ui.label(RichText::new(self.empty_text).italics().weak());
            return submitted;
        }

        egui::ScrollArea::vertical()
            .id_salt(self.heading)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for entry in entries {
                    ui.horizontal(|ui| {
                        ui.label("•");
                        ui.label(entry.text());
                        ui.label(
                            RichText::new(
                                entry
                                    .logged_at()
                                    .with_timezone(&chrono::Local)
                                    .format("%H:%M")
                                    .to_string(),
                            )
                            .small()
                            .weak(),
                        );
                    });
                    ui.add_space(6.0);
                }
            });

        submitted
    }
}
