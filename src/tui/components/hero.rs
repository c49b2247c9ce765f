use crate::content::PortfolioContent;
use crate::tui::colors::palette;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub fn lines(content: &PortfolioContent, width: u16) -> Vec<Line<'static>> {
    let profile = &content.profile;
    let wrap_width = (width.saturating_sub(4) as usize).max(20);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", profile.name),
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", profile.headline),
            Style::default()
                .fg(palette::PRIMARY_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for wrapped in textwrap::wrap(&profile.tagline, wrap_width) {
        lines.push(Line::from(Span::styled(
            format!("  {}", wrapped),
            Style::default().fg(palette::SECONDARY_TEXT),
        )));
    }
    lines.push(Line::from(""));

    let mut cta = vec![Span::styled(
        "  ↓ View My Work",
        Style::default().fg(palette::ACCENT),
    )];
    if let Some(resume) = &profile.resume {
        cta.push(Span::styled(
            format!("   ·   Resume: {}", resume),
            Style::default().fg(palette::DIMMED_TEXT),
        ));
    }
    lines.push(Line::from(cta));
    lines.push(Line::from(""));
    lines
}
