use super::*;

fn app() -> AppState {
    AppState::new(PortfolioContent::default())
}

#[test]
fn status_message_expires_after_ticks() {
    let mut app = app();
    app.set_status("Copied");
    assert_eq!(app.status_message.as_deref(), Some("Copied"));

    for _ in 0..59 {
        app.tick();
    }
    assert!(app.status_message.is_some());

    app.tick();
    assert!(app.status_message.is_none());
}

#[test]
fn activating_menu_link_jumps_and_closes_drawer() {
    let mut app = app();
    app.section_rows = vec![
        (Section::Home, 0),
        (Section::About, 120),
        (Section::Contact, 400),
    ];
    app.scroll.update_content_height(500);
    app.scroll.update_viewport_height(40);

    app.menu.toggle();
    app.menu.select_next(); // About
    app.activate_menu_link();

    assert!(!app.menu.is_open());
    assert_eq!(app.scroll.offset, 120);
}

#[test]
fn jump_to_unrecorded_section_is_a_no_op() {
    let mut app = app();
    app.scroll.update_content_height(500);
    app.scroll.update_viewport_height(40);
    app.scroll.scroll_down(30);

    app.jump_to_section(Section::Education);
    assert_eq!(app.scroll.offset, 30);
}

#[test]
fn submit_with_complete_draft_acknowledges_and_resets() {
    let mut app = app();
    app.draft.set_field(ContactField::Name, "A".to_string());
    app.draft.set_field(ContactField::Email, "a@x.com".to_string());
    app.draft.set_field(ContactField::Message, "hi".to_string());

    app.submit_contact();

    assert_eq!(app.status_message.as_deref(), Some("Message sent successfully!"));
    assert_eq!(app.draft, ContactDraft::default());
    assert_eq!(app.contact_focus, Some(ContactField::Name));
}

#[test]
fn submit_with_missing_field_keeps_draft() {
    let mut app = app();
    app.draft.set_field(ContactField::Name, "A".to_string());

    app.submit_contact();

    assert_eq!(app.status_message.as_deref(), Some("All fields are required"));
    assert_eq!(app.draft.name, "A");
}

#[test]
fn contact_focus_cycles_through_fields() {
    let mut app = app();
    app.focus_contact();
    assert_eq!(app.contact_focus, Some(ContactField::Name));

    app.focus_next_field();
    assert_eq!(app.contact_focus, Some(ContactField::Email));
    app.focus_next_field();
    assert_eq!(app.contact_focus, Some(ContactField::Message));
    app.focus_next_field();
    assert_eq!(app.contact_focus, Some(ContactField::Name));

    app.focus_prev_field();
    assert_eq!(app.contact_focus, Some(ContactField::Message));

    app.blur_contact();
    assert!(app.contact_focus.is_none());
}

#[test]
fn back_to_top_resets_offset() {
    let mut app = app();
    app.scroll.update_content_height(300);
    app.scroll.update_viewport_height(40);
    app.scroll.scroll_down(100);
    assert!(app.scroll.is_past_threshold());

    app.back_to_top();
    assert_eq!(app.scroll.offset, 0);
    assert!(!app.scroll.is_past_threshold());
}
