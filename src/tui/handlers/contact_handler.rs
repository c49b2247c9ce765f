use crate::tui::app_state::AppState;
use crate::tui::handler_result::KeyHandlerResult;
use crate::tui::input_handler::InputHandler;
use crossterm::event::{Event, KeyCode, KeyModifiers};

/// Focuses the contact form and routes keystrokes into the draft while a
/// field has focus. Each keystroke mutates exactly the focused field.
pub struct ContactFormHandler;

impl Default for ContactFormHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormHandler {
    pub fn new() -> Self {
        Self
    }
}

impl InputHandler for ContactFormHandler {
    fn handle_event(&mut self, event: &Event, app: &mut AppState) -> KeyHandlerResult {
        let Event::Key(key) = event else {
            return KeyHandlerResult::NotHandled;
        };

        let Some(field) = app.contact_focus else {
            return match key.code {
                KeyCode::Char('c') if key.modifiers.is_empty() => {
                    app.focus_contact();
                    KeyHandlerResult::Handled
                }
                KeyCode::Char('e') if key.modifiers.is_empty() => {
                    app.copy_contact_email();
                    KeyHandlerResult::Handled
                }
                _ => KeyHandlerResult::NotHandled,
            };
        };

        match key.code {
            KeyCode::Esc => {
                app.blur_contact();
                KeyHandlerResult::Handled
            }
            KeyCode::Tab => {
                app.focus_next_field();
                KeyHandlerResult::Handled
            }
            KeyCode::BackTab => {
                app.focus_prev_field();
                KeyHandlerResult::Handled
            }
            KeyCode::Enter => {
                app.submit_contact();
                KeyHandlerResult::Handled
            }
            KeyCode::Backspace => {
                app.draft.pop_char(field);
                KeyHandlerResult::Handled
            }
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                app.draft.push_char(field, c);
                KeyHandlerResult::Handled
            }
            _ => KeyHandlerResult::NotHandled,
        }
    }
}
