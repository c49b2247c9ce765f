use super::section_title;
use crate::content::PortfolioContent;
use crate::tui::colors::palette;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

pub fn lines(content: &PortfolioContent, width: u16) -> Vec<Line<'static>> {
    let wrap_width = (width.saturating_sub(4) as usize).max(20);
    let mut lines = section_title("About Me");

    for paragraph in &content.profile.about {
        for wrapped in textwrap::wrap(paragraph, wrap_width) {
            lines.push(Line::from(Span::styled(
                format!("  {}", wrapped),
                Style::default().fg(palette::SECONDARY_TEXT),
            )));
        }
        lines.push(Line::from(""));
    }
    lines
}
