use folio::tui::contact_draft::{ContactDraft, ContactField};

#[test]
fn test_set_field_is_shallow_merge() {
    let mut draft = ContactDraft::default();
    draft.set_field(ContactField::Name, "A".to_string());
    draft.set_field(ContactField::Email, "a@x.com".to_string());

    draft.set_field(ContactField::Message, "hi".to_string());
    assert_eq!(draft.name, "A");
    assert_eq!(draft.email, "a@x.com");
    assert_eq!(draft.message, "hi");
}

#[test]
fn test_push_and_pop_chars() {
    let mut draft = ContactDraft::default();
    draft.push_char(ContactField::Name, 'J');
    draft.push_char(ContactField::Name, 'o');
    assert_eq!(draft.field(ContactField::Name), "Jo");

    draft.pop_char(ContactField::Name);
    assert_eq!(draft.field(ContactField::Name), "J");

    // Popping an empty field is a no-op
    draft.pop_char(ContactField::Email);
    assert_eq!(draft.field(ContactField::Email), "");
}

#[test]
fn test_submit_complete_draft_resets_fields() {
    let mut draft = ContactDraft {
        name: "A".to_string(),
        email: "a@x.com".to_string(),
        message: "hi".to_string(),
    };

    let sent = draft.submit();
    assert!(sent.is_some());

    let sent = sent.unwrap();
    assert_eq!(sent.name, "A");
    assert_eq!(sent.email, "a@x.com");
    assert_eq!(sent.message, "hi");

    assert_eq!(draft, ContactDraft::default());
}

#[test]
fn test_submit_incomplete_draft_is_rejected() {
    let mut draft = ContactDraft {
        name: "A".to_string(),
        email: String::new(),
        message: "hi".to_string(),
    };

    assert!(draft.submit().is_none());
    assert_eq!(draft.name, "A");
    assert_eq!(draft.message, "hi");
}

#[test]
fn test_is_complete_requires_all_three() {
    let mut draft = ContactDraft::default();
    assert!(!draft.is_complete());

    draft.set_field(ContactField::Name, "A".to_string());
    draft.set_field(ContactField::Email, "a@x.com".to_string());
    assert!(!draft.is_complete());

    draft.set_field(ContactField::Message, "hi".to_string());
    assert!(draft.is_complete());
}

#[test]
fn test_focus_order_cycles() {
    assert_eq!(ContactField::Name.next(), ContactField::Email);
    assert_eq!(ContactField::Email.next(), ContactField::Message);
    assert_eq!(ContactField::Message.next(), ContactField::Name);

    for field in ContactField::ALL {
        assert_eq!(field.next().prev(), field);
    }
}
