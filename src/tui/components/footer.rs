use crate::content::PortfolioContent;
use crate::tui::colors::palette;
use chrono::Datelike;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

pub fn lines(content: &PortfolioContent, width: u16) -> Vec<Line<'static>> {
    let rule_width = (width.saturating_sub(4) as usize).max(8);
    vec![
        Line::from(Span::styled(
            format!("  {}", "─".repeat(rule_width)),
            Style::default().fg(palette::SUBDUED_TEXT),
        )),
        Line::from(Span::styled(
            format!(
                "  © {} {}. All rights reserved.",
                chrono::Utc::now().year(),
                content.profile.name
            ),
            Style::default().fg(palette::DIMMED_TEXT),
        )),
        Line::from(""),
    ]
}
