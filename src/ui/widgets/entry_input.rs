//! Single-line text entry with a submit button.

use egui::{Button, Color32, RichText, TextEdit, Ui};

use crate::ui::theme::Brand;

/// Input row used by the workout, diet and goal screens.
#[derive(Debug, Clone)]
pub struct EntryInput {
    /// Current text buffer
    buffer: String,
    /// Placeholder shown while empty
    hint: &'static str,
    /// Submit button label
    action_label: &'static str,
    /// Focus the text field on the next frame
    focus_requested: bool,
}

impl EntryInput {
    /// Create an empty input row.
    pub fn new(hint: &'static str, action_label: &'static str) -> Self {
        Self {
            buffer: String::new(),
            hint,
            action_label,
            focus_requested: false,
        }
    }

    /// Current buffer contents.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Replace the buffer contents.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Placeholder text.
    pub fn hint(&self) -> &'static str {
        self.hint
    }

    /// Submit button label.
    pub fn action_label(&self) -> &'static str {
        self.action_label
    }

    /// Move keyboard focus to the text field when it is next shown.
    pub fn request_focus(&mut self) {
        self.focus_requested = true;
    }

    /// Take the buffer for submission.
    ///
    /// Blank buffers are left untouched and yield `None`.
    pub fn take_submission(&mut self) -> Option<String> {
        if self.buffer.trim().is_empty() {
            tracing::debug!("Ignoring blank submission");
            return None;
        }
        Some(std::mem::take(&mut self.buffer))
    }

    /// Render the input row. Returns the submitted text, if any.
    pub fn show(&mut self, ui: &mut Ui) -> Option<String> {
        let mut submitted = false;

        ui.horizontal(|ui| {
            let response = ui.add(
                TextEdit::singleline(&mut self.buffer)
                    .hint_text(self.hint)
                    .desired_width(ui.available_width() - 80.0),
            );
            if std::mem::take(&mut self.focus_requested) {
                response.request_focus();
            }

            let clicked = ui
                .add(
                    Button::new(
                        RichText::new(self.action_label)
                            .strong()
                            .color(Color32::WHITE),
                    )
                    .fill(Brand::ACCENT),
                )
                .clicked();
            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            submitted = clicked || enter_pressed;
        });

        if submitted {
            self.take_submission()
        } else {
            None
        }
    }
}
