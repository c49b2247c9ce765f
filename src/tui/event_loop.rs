use anyhow::Result;
use crossterm::event;
use std::time::Duration;

use super::app_state::AppState;
use super::handler_result::KeyHandlerResult;
use super::handlers::{
    CarouselHandler, ContactFormHandler, MenuHandler, PageScrollHandler, QuitHandler,
};
use super::input_handler::InputHandler;
use super::terminal::FolioTerminal;
use super::ui;

/// Priority order: the drawer is modal, the form captures typing,
/// then global keys, then the widgets underneath.
pub fn default_handlers() -> Vec<Box<dyn InputHandler>> {
    vec![
        Box::new(MenuHandler::new()),
        Box::new(ContactFormHandler::new()),
        Box::new(QuitHandler::new()),
        Box::new(CarouselHandler::new()),
        Box::new(PageScrollHandler::new()),
    ]
}

pub async fn run_event_loop(
    terminal: &mut FolioTerminal,
    app: &mut AppState,
    tick_rate: Duration,
) -> Result<()> {
    let mut handlers = default_handlers();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        app.tick();

        if event::poll(tick_rate)? {
            let ev = event::read()?;
            for handler in handlers.iter_mut() {
                match handler.handle_event(&ev, app) {
                    KeyHandlerResult::NotHandled => continue,
                    KeyHandlerResult::Handled => break,
                    KeyHandlerResult::ShouldQuit => {
                        app.should_quit = true;
                        break;
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
