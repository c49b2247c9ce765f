pub mod app_state;
pub mod carousel_state;
pub mod clipboard;
pub mod colors;
pub mod component;
pub mod components;
pub mod contact_draft;
pub mod event_loop;
pub mod handler_result;
pub mod handlers;
pub mod input_handler;
pub mod menu_state;
pub mod scroll_state;
pub mod section;
pub mod terminal;
pub mod ui;

use crate::config::AppConfig;
use crate::content::PortfolioContent;
use anyhow::Result;
use std::time::Duration;

/// Runs the viewer fullscreen. The terminal is restored even when the
/// event loop errors.
pub async fn run(content: PortfolioContent, config: &AppConfig) -> Result<()> {
    let mut terminal = terminal::init_terminal()?;
    let mut app = app_state::AppState::new(content);

    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let result = event_loop::run_event_loop(&mut terminal, &mut app, tick_rate).await;

    restore_and_report(&mut terminal);
    result
}

fn restore_and_report(terminal: &mut terminal::FolioTerminal) {
    if let Err(err) = terminal::restore_terminal(terminal) {
        eprintln!("Failed to restore terminal: {}", err);
    }
}
