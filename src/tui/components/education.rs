use super::section_title;
use crate::content::PortfolioContent;
use crate::tui::colors::palette;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

pub fn lines(content: &PortfolioContent, _width: u16) -> Vec<Line<'static>> {
    let mut lines = section_title("Education");

    for education in &content.education {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}  ", education.year),
                Style::default().fg(palette::ACCENT),
            ),
            Span::styled("┃ ", Style::default().fg(palette::SUBDUED_TEXT)),
            Span::styled(
                education.institution.clone(),
                Style::default().fg(palette::PRIMARY_TEXT),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("        "),
            Span::styled("┃   ", Style::default().fg(palette::SUBDUED_TEXT)),
            Span::styled(
                format!("{} in {}", education.degree, education.field),
                Style::default().fg(palette::SECONDARY_TEXT),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            "        ┃",
            Style::default().fg(palette::SUBDUED_TEXT),
        )));
    }
    lines.push(Line::from(""));
    lines
}
