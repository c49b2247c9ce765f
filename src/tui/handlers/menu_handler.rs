use crate::tui::app_state::AppState;
use crate::tui::handler_result::KeyHandlerResult;
use crate::tui::input_handler::InputHandler;
use crossterm::event::{Event, KeyCode, KeyModifiers};

/// Drawer toggle and, while the drawer is open, modal link navigation.
pub struct MenuHandler;

impl Default for MenuHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuHandler {
    pub fn new() -> Self {
        Self
    }
}

impl InputHandler for MenuHandler {
    fn handle_event(&mut self, event: &Event, app: &mut AppState) -> KeyHandlerResult {
        let Event::Key(key) = event else {
            return KeyHandlerResult::NotHandled;
        };

        if !app.menu.is_open() {
            return match key.code {
                // Tab belongs to the form's field cycle while a field
                // has focus
                KeyCode::Tab if !app.is_editing_contact() => {
                    app.menu.toggle();
                    KeyHandlerResult::Handled
                }
                _ => KeyHandlerResult::NotHandled,
            };
        }

        // Ctrl+C still quits while the drawer is up
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyHandlerResult::NotHandled;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Esc => {
                app.menu.close();
                KeyHandlerResult::Handled
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.menu.select_prev();
                KeyHandlerResult::Handled
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.menu.select_next();
                KeyHandlerResult::Handled
            }
            KeyCode::Enter => {
                app.activate_menu_link();
                KeyHandlerResult::Handled
            }
            // The open drawer is modal; swallow everything else
            _ => KeyHandlerResult::Handled,
        }
    }
}
