use super::{about, contact, education, footer, hero, projects, skills};
use crate::tui::app_state::AppState;
use crate::tui::section::Section;
use ratatui::text::Line;

/// One frame's worth of page: the full virtual column of lines plus the
/// row where each section starts (for drawer link jumps).
pub struct PageLayout {
    pub lines: Vec<Line<'static>>,
    pub section_rows: Vec<(Section, usize)>,
}

pub fn build(app: &AppState, width: u16) -> PageLayout {
    let content = &app.content;
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut section_rows = Vec::with_capacity(Section::ALL.len());

    section_rows.push((Section::Home, lines.len()));
    lines.extend(hero::lines(content, width));

    section_rows.push((Section::About, lines.len()));
    lines.extend(about::lines(content, width));

    section_rows.push((Section::Skills, lines.len()));
    lines.extend(skills::lines(content, width));

    section_rows.push((Section::Projects, lines.len()));
    lines.extend(projects::lines(app, width));

    section_rows.push((Section::Education, lines.len()));
    lines.extend(education::lines(content, width));

    section_rows.push((Section::Contact, lines.len()));
    lines.extend(contact::lines(app, width));

    lines.extend(footer::lines(content, width));

    PageLayout {
        lines,
        section_rows,
    }
}
