use folio::tui::menu_state::MenuState;
use folio::tui::section::Section;

#[test]
fn test_starts_closed() {
    let state = MenuState::default();
    assert!(!state.is_open());
}

#[test]
fn test_toggle_twice_returns_to_closed() {
    let mut state = MenuState::default();

    state.toggle();
    assert!(state.is_open());

    state.toggle();
    assert!(!state.is_open());
}

#[test]
fn test_close_is_idempotent() {
    let mut state = MenuState::default();
    state.toggle();

    state.close();
    assert!(!state.is_open());

    state.close();
    assert!(!state.is_open());
}

#[test]
fn test_open_resets_cursor() {
    let mut state = MenuState::default();
    state.toggle();
    state.select_next();
    state.select_next();
    state.close();

    state.toggle();
    assert_eq!(state.selected_section(), Section::Home);
}

#[test]
fn test_cursor_wraps_both_ways() {
    let mut state = MenuState::default();
    state.toggle();

    state.select_prev();
    assert_eq!(state.selected_section(), Section::Contact);

    state.select_next();
    assert_eq!(state.selected_section(), Section::Home);
}

#[test]
fn test_cursor_walks_all_sections() {
    let mut state = MenuState::default();
    state.toggle();

    for expected in Section::ALL {
        assert_eq!(state.selected_section(), expected);
        state.select_next();
    }
    assert_eq!(state.selected_section(), Section::Home);
}
