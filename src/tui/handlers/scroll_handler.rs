use crate::tui::app_state::AppState;
use crate::tui::handler_result::KeyHandlerResult;
use crate::tui::input_handler::InputHandler;
use crossterm::event::{Event, KeyCode, KeyModifiers, MouseEvent, MouseEventKind};

/// Vertical page scrolling. Feeds the scroll threshold state that the
/// navbar and the back-to-top affordance read.
pub struct PageScrollHandler;

impl Default for PageScrollHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl PageScrollHandler {
    pub fn new() -> Self {
        Self
    }
}

impl InputHandler for PageScrollHandler {
    fn handle_event(&mut self, event: &Event, app: &mut AppState) -> KeyHandlerResult {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    app.scroll.scroll_down(1);
                    KeyHandlerResult::Handled
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    app.scroll.scroll_up(1);
                    KeyHandlerResult::Handled
                }
                KeyCode::PageDown => {
                    app.scroll.page_down();
                    KeyHandlerResult::Handled
                }
                KeyCode::PageUp => {
                    app.scroll.page_up();
                    KeyHandlerResult::Handled
                }
                KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    let half_page = app.scroll.viewport_height / 2;
                    app.scroll.scroll_down(half_page);
                    KeyHandlerResult::Handled
                }
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    let half_page = app.scroll.viewport_height / 2;
                    app.scroll.scroll_up(half_page);
                    KeyHandlerResult::Handled
                }
                KeyCode::Home | KeyCode::Char('g') => {
                    app.back_to_top();
                    KeyHandlerResult::Handled
                }
                KeyCode::End | KeyCode::Char('G') => {
                    app.scroll.scroll_to_bottom();
                    KeyHandlerResult::Handled
                }
                _ => KeyHandlerResult::NotHandled,
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::ScrollUp,
                ..
            }) => {
                app.scroll.scroll_up(3);
                KeyHandlerResult::Handled
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::ScrollDown,
                ..
            }) => {
                app.scroll.scroll_down(3);
                KeyHandlerResult::Handled
            }
            _ => KeyHandlerResult::NotHandled,
        }
    }
}
