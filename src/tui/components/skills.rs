use super::section_title;
use crate::content::PortfolioContent;
use crate::tui::colors::palette;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub fn lines(content: &PortfolioContent, width: u16) -> Vec<Line<'static>> {
    let skills = &content.skills;
    let mut lines = section_title("My Skills");

    // Two columns on wide viewports, stacked on narrow ones
    let column_width = (width.saturating_sub(6) / 2) as usize;
    if column_width >= 20 {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<column_width$}", "Technical Skills"),
                Style::default()
                    .fg(palette::PRIMARY_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Soft Skills".to_string(),
                Style::default()
                    .fg(palette::PRIMARY_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        let rows = skills.technical.len().max(skills.soft.len());
        for i in 0..rows {
            let technical = skills
                .technical
                .get(i)
                .map(|s| format!("• {}", s))
                .unwrap_or_default();
            let soft = skills
                .soft
                .get(i)
                .map(|s| format!("• {}", s))
                .unwrap_or_default();
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<column_width$}", technical),
                    Style::default().fg(palette::SECONDARY_TEXT),
                ),
                Span::styled(soft, Style::default().fg(palette::SECONDARY_TEXT)),
            ]));
        }
    } else {
        for (heading, items) in [
            ("Technical Skills", &skills.technical),
            ("Soft Skills", &skills.soft),
        ] {
            lines.push(Line::from(Span::styled(
                format!("  {}", heading),
                Style::default()
                    .fg(palette::PRIMARY_TEXT)
                    .add_modifier(Modifier::BOLD),
            )));
            for skill in items {
                lines.push(Line::from(Span::styled(
                    format!("  • {}", skill),
                    Style::default().fg(palette::SECONDARY_TEXT),
                )));
            }
            lines.push(Line::from(""));
        }
    }
    lines.push(Line::from(""));
    lines
}
