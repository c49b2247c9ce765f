use crate::tui::app_state::AppState;
use crate::tui::handler_result::KeyHandlerResult;
use crate::tui::input_handler::InputHandler;
use crossterm::event::{Event, KeyCode, MouseEvent, MouseEventKind};

/// Project strip navigation: continuous scrolling with arrows, discrete
/// dot activation with brackets and digits, link copying.
pub struct CarouselHandler;

impl Default for CarouselHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselHandler {
    pub fn new() -> Self {
        Self
    }

    fn manual_step(app: &AppState) -> i32 {
        (app.carousel.geometry().stride() / 4).max(1) as i32
    }
}

impl InputHandler for CarouselHandler {
    fn handle_event(&mut self, event: &Event, app: &mut AppState) -> KeyHandlerResult {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    let step = Self::manual_step(app);
                    app.carousel.scroll_by(-step);
                    KeyHandlerResult::Handled
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    let step = Self::manual_step(app);
                    app.carousel.scroll_by(step);
                    KeyHandlerResult::Handled
                }
                KeyCode::Char('[') => {
                    app.carousel.prev_card();
                    KeyHandlerResult::Handled
                }
                KeyCode::Char(']') => {
                    app.carousel.next_card();
                    KeyHandlerResult::Handled
                }
                KeyCode::Char(c @ '1'..='9') => {
                    // Dot activation: the index update arrives via the
                    // animated scroll, not from this key
                    let index = (c as usize) - ('1' as usize);
                    app.carousel.scroll_to(index);
                    KeyHandlerResult::Handled
                }
                KeyCode::Char('y') => {
                    app.copy_project_link();
                    KeyHandlerResult::Handled
                }
                _ => KeyHandlerResult::NotHandled,
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::ScrollLeft,
                ..
            }) => {
                let step = Self::manual_step(app);
                app.carousel.scroll_by(-step);
                KeyHandlerResult::Handled
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::ScrollRight,
                ..
            }) => {
                let step = Self::manual_step(app);
                app.carousel.scroll_by(step);
                KeyHandlerResult::Handled
            }
            _ => KeyHandlerResult::NotHandled,
        }
    }
}
