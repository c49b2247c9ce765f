pub mod about;
pub mod contact;
pub mod drawer;
pub mod education;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod page;
pub mod projects;
pub mod skills;
pub mod status_bar;

use crate::tui::colors::palette;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Shared section heading used by every page section.
pub(crate) fn section_title(title: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("  {}", title),
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", "─".repeat(title.chars().count().max(8))),
            Style::default().fg(palette::SUBDUED_TEXT),
        )),
        Line::from(""),
    ]
}
