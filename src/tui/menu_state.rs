use super::section::Section;

/// Navigation drawer state. On narrow viewports the navbar collapses its
/// link row into this drawer; the toggle works on wide viewports too.
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    open: bool,
    pub selected: usize,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.selected = 0;
        }
    }

    /// Forces the drawer closed. Idempotent.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Section::ALL.len();
    }

    pub fn select_prev(&mut self) {
        if self.selected == 0 {
            self.selected = Section::ALL.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn selected_section(&self) -> Section {
        Section::ALL[self.selected % Section::ALL.len()]
    }
}
