//! Goals screen.
//!
//! Lists goals with a checkbox each. Completed goals are struck through.

use egui::{RichText, Ui};

use crate::tracker::Goal;
use crate::ui::widgets::EntryInput;

/// Goals screen actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalsAction {
    /// Add a goal with this text.
    Add(String),
    /// Toggle the goal at this index.
    Toggle(usize),
}

/// Goals screen state.
#[derive(Debug, Clone)]
pub struct GoalsScreen {
    /// New goal input row
    input: EntryInput,
}

impl Default for GoalsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalsScreen {
    /// Create a new goals screen.
    pub fn new() -> Self {
        Self {
            input: EntryInput::new("e.g. Run 5km daily", "Add"),
        }
    }

    /// Input row state.
    pub fn input(&self) -> &EntryInput {
        &self.input
    }

    /// Mutable input row state.
    pub fn input_mut(&mut self) -> &mut EntryInput {
        &mut self.input
    }

    /// Render the goals screen.
    pub fn show(&mut self, ui: &mut Ui, goals: &[Goal]) -> Option<GoalsAction> {
        let mut action = None;

        ui.heading("Goals");
        ui.add_space(12.0);

        if let Some(text) = self.input.show(ui) {
            action = Some(GoalsAction::Add(text));
        }

        ui.add_space(20.0);

        if goals.is_empty() {
            ui.label(RichText::new("No goals yet").italics().weak());
            return action;
        }

        egui::ScrollArea::vertical()
            .id_salt("goals_list")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, goal) in goals.iter().enumerate() {
                    let mut done = goal.done;
                    let text = if goal.done {
                        RichText::new(&goal.text).strikethrough().weak()
                    } else {
                        RichText::new(&goal.text)
                    };

                    if ui.checkbox(&mut done, text).changed() {
                        action = Some(GoalsAction::Toggle(index));
                    }
                    ui.add_space(6.0);
                }
            });

        action
    }
}
