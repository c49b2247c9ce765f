use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use folio::content::PortfolioContent;
use folio::tui::app_state::AppState;
use folio::tui::contact_draft::ContactField;
use folio::tui::event_loop::default_handlers;
use folio::tui::handler_result::KeyHandlerResult;
use folio::tui::input_handler::InputHandler;

fn app() -> AppState {
    AppState::new(PortfolioContent::default())
}

/// Runs one event through the handlers in event-loop priority order.
fn dispatch(app: &mut AppState, handlers: &mut [Box<dyn InputHandler>], code: KeyCode) {
    let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
    for handler in handlers.iter_mut() {
        match handler.handle_event(&event, app) {
            KeyHandlerResult::NotHandled => continue,
            KeyHandlerResult::Handled => break,
            KeyHandlerResult::ShouldQuit => {
                app.should_quit = true;
                break;
            }
        }
    }
}

#[test]
fn test_tab_cycles_fields_while_form_is_focused() {
    let mut app = app();
    let mut handlers = default_handlers();
    app.focus_contact();

    dispatch(&mut app, &mut handlers, KeyCode::Tab);

    assert!(!app.menu.is_open());
    assert_eq!(app.contact_focus, Some(ContactField::Email));

    dispatch(&mut app, &mut handlers, KeyCode::Tab);
    assert_eq!(app.contact_focus, Some(ContactField::Message));
}

#[test]
fn test_tab_opens_drawer_when_form_is_blurred() {
    let mut app = app();
    let mut handlers = default_handlers();

    dispatch(&mut app, &mut handlers, KeyCode::Tab);
    assert!(app.menu.is_open());

    dispatch(&mut app, &mut handlers, KeyCode::Tab);
    assert!(!app.menu.is_open());
}

#[test]
fn test_typing_lands_in_the_focused_field() {
    let mut app = app();
    let mut handlers = default_handlers();

    dispatch(&mut app, &mut handlers, KeyCode::Char('c'));
    assert_eq!(app.contact_focus, Some(ContactField::Name));

    dispatch(&mut app, &mut handlers, KeyCode::Char('J'));
    dispatch(&mut app, &mut handlers, KeyCode::Char('o'));
    assert_eq!(app.draft.name, "Jo");
    // 'j' scrolls the page only when nothing has focus
    assert_eq!(app.scroll.offset, 0);
}

#[test]
fn test_esc_blurs_form_before_quitting() {
    let mut app = app();
    let mut handlers = default_handlers();
    app.focus_contact();

    dispatch(&mut app, &mut handlers, KeyCode::Esc);
    assert!(app.contact_focus.is_none());
    assert!(!app.should_quit);

    dispatch(&mut app, &mut handlers, KeyCode::Esc);
    assert!(app.should_quit);
}
