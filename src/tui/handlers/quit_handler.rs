use crate::tui::app_state::AppState;
use crate::tui::handler_result::KeyHandlerResult;
use crate::tui::input_handler::InputHandler;
use crossterm::event::{Event, KeyCode, KeyModifiers};

pub struct QuitHandler;

impl Default for QuitHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl QuitHandler {
    pub fn new() -> Self {
        Self
    }
}

impl InputHandler for QuitHandler {
    fn handle_event(&mut self, event: &Event, _app: &mut AppState) -> KeyHandlerResult {
        let Event::Key(key) = event else {
            return KeyHandlerResult::NotHandled;
        };
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => KeyHandlerResult::ShouldQuit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyHandlerResult::ShouldQuit
            }
            _ => KeyHandlerResult::NotHandled,
        }
    }
}
