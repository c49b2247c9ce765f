/// Fields of the contact form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Your Email",
            ContactField::Message => "Your Message",
        }
    }

    pub fn next(&self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    pub fn prev(&self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        }
    }
}

/// Transient, unsaved form input. Lives for the page lifetime; submission
/// acknowledges locally and resets, nothing is ever sent anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Shallow merge: replaces exactly one field, leaving the others alone.
    pub fn set_field(&mut self, field: ContactField, value: String) {
        *self.field_mut(field) = value;
    }

    pub fn push_char(&mut self, field: ContactField, c: char) {
        self.field_mut(field).push(c);
    }

    pub fn pop_char(&mut self, field: ContactField) {
        self.field_mut(field).pop();
    }

    /// The required-field rule: all three fields must be non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }

    /// Local-only submission. Returns the sent snapshot and resets the
    /// draft to empty strings, or `None` when a required field is missing
    /// (the draft is left untouched in that case).
    pub fn submit(&mut self) -> Option<ContactDraft> {
        if !self.is_complete() {
            return None;
        }
        Some(std::mem::take(self))
    }
}
