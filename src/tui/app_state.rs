use super::carousel_state::CarouselState;
use super::clipboard::ClipboardManager;
use super::contact_draft::{ContactDraft, ContactField};
use super::menu_state::MenuState;
use super::scroll_state::ScrollState;
use super::section::Section;
use crate::content::PortfolioContent;

/// How many ticks a transient status line stays visible.
const STATUS_TICKS: u32 = 60;

pub struct AppState {
    pub content: PortfolioContent,
    pub scroll: ScrollState,
    pub menu: MenuState,
    pub carousel: CarouselState,
    pub draft: ContactDraft,
    pub contact_focus: Option<ContactField>,
    pub status_message: Option<String>,
    status_ticks: u32,
    /// Row where each section starts in the virtual page, recorded on render
    pub section_rows: Vec<(Section, usize)>,
    pub clipboard: ClipboardManager,
    pub should_quit: bool,
    pub animation_frame: usize,
}

impl AppState {
    pub fn new(content: PortfolioContent) -> Self {
        let carousel = CarouselState::new(content.projects.len());
        Self {
            content,
            scroll: ScrollState::new(0),
            menu: MenuState::default(),
            carousel,
            draft: ContactDraft::default(),
            contact_focus: None,
            status_message: None,
            status_ticks: 0,
            section_rows: Vec::new(),
            clipboard: ClipboardManager::new(),
            should_quit: false,
            animation_frame: 0,
        }
    }

    /// Advances animation state: smooth carousel scrolling and status
    /// message expiry both ride the event-loop tick.
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.carousel.tick();
        if self.status_ticks > 0 {
            self.status_ticks -= 1;
            if self.status_ticks == 0 {
                self.status_message = None;
            }
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks = STATUS_TICKS;
    }

    pub fn section_row(&self, section: Section) -> Option<usize> {
        self.section_rows
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, row)| *row)
    }

    pub fn jump_to_section(&mut self, section: Section) {
        if let Some(row) = self.section_row(section) {
            self.scroll.scroll_to(row);
        }
    }

    /// Drawer link activation: jump to the section, then collapse the
    /// drawer so a selection on a small viewport closes it automatically.
    pub fn activate_menu_link(&mut self) {
        let section = self.menu.selected_section();
        self.jump_to_section(section);
        self.menu.close();
    }

    pub fn back_to_top(&mut self) {
        self.scroll.scroll_to_top();
    }

    pub fn is_editing_contact(&self) -> bool {
        self.contact_focus.is_some()
    }

    pub fn focus_contact(&mut self) {
        self.contact_focus = Some(ContactField::Name);
        self.jump_to_section(Section::Contact);
    }

    pub fn blur_contact(&mut self) {
        self.contact_focus = None;
    }

    pub fn focus_next_field(&mut self) {
        if let Some(field) = self.contact_focus {
            self.contact_focus = Some(field.next());
        }
    }

    pub fn focus_prev_field(&mut self) {
        if let Some(field) = self.contact_focus {
            self.contact_focus = Some(field.prev());
        }
    }

    /// Local-only submission: acknowledge and reset, or surface the
    /// required-field rule. Nothing leaves the process either way.
    pub fn submit_contact(&mut self) {
        match self.draft.submit() {
            Some(_sent) => {
                self.set_status("Message sent successfully!");
                self.contact_focus = Some(ContactField::Name);
            }
            None => {
                self.set_status("All fields are required");
            }
        }
    }

    pub fn copy_contact_email(&mut self) {
        let email = self.content.profile.email.clone();
        if email.is_empty() {
            return;
        }
        match self.clipboard.set_text(&email) {
            Ok(()) => self.set_status(format!("Copied {}", email)),
            Err(_) => self.set_status("Clipboard unavailable"),
        }
    }

    pub fn copy_project_link(&mut self) {
        let Some(project) = self.content.projects.get(self.carousel.current_index) else {
            return;
        };
        let Some(url) = project.github.as_ref().or(project.link.as_ref()) else {
            self.set_status("No link for this project");
            return;
        };
        let url = url.clone();
        let name = project.name.clone();
        match self.clipboard.set_text(&url) {
            Ok(()) => self.set_status(format!("Copied {} link", name)),
            Err(_) => self.set_status("Clipboard unavailable"),
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
