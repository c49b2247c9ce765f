use super::section_title;
use crate::tui::app_state::AppState;
use crate::tui::colors::palette;
use crate::tui::contact_draft::ContactField;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub fn lines(app: &AppState, width: u16) -> Vec<Line<'static>> {
    let profile = &app.content.profile;
    let mut lines = section_title("Get In Touch");

    lines.push(Line::from(Span::styled(
        "  How To Reach Me",
        Style::default()
            .fg(palette::PRIMARY_TEXT)
            .add_modifier(Modifier::BOLD),
    )));
    for (icon, value) in [
        ("✉", profile.email.as_str()),
        ("☎", profile.phone.as_str()),
        ("⚑", profile.location.as_str()),
    ] {
        if value.is_empty() {
            continue;
        }
        lines.push(Line::from(Span::styled(
            format!("  {} {}", icon, value),
            Style::default().fg(palette::SECONDARY_TEXT),
        )));
    }
    lines.push(Line::from(""));

    for social in &app.content.socials {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<10}", social.label),
                Style::default().fg(palette::SECONDARY_TEXT),
            ),
            Span::styled(
                social.url.clone(),
                Style::default().fg(palette::DIMMED_TEXT),
            ),
        ]));
    }
    lines.push(Line::from(""));

    let field_width = (width.saturating_sub(6) as usize).clamp(20, 60);
    for field in ContactField::ALL {
        lines.extend(field_lines(app, field, field_width));
    }

    let hint = if app.is_editing_contact() {
        "  [Enter] send · [Tab] next field · [Esc] done"
    } else {
        "  press c to write a message · e to copy the email"
    };
    lines.push(Line::from(Span::styled(
        hint.to_string(),
        Style::default().fg(palette::DIMMED_TEXT),
    )));
    lines.push(Line::from(""));
    lines
}

fn field_lines(app: &AppState, field: ContactField, width: usize) -> Vec<Line<'static>> {
    let focused = app.contact_focus == Some(field);
    let bar_color = if focused {
        palette::FIELD_FOCUSED
    } else {
        palette::FIELD_BLURRED
    };

    let value = app.draft.field(field);
    let (text, text_color) = if value.is_empty() && !focused {
        (field.label().to_string(), palette::PLACEHOLDER)
    } else {
        // Keep the tail visible once the value outgrows the field
        let tail: String = value
            .chars()
            .rev()
            .take(width)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        (tail, palette::PRIMARY_TEXT)
    };

    let mut spans = vec![
        Span::styled("  ▌ ", Style::default().fg(bar_color)),
        Span::styled(text, Style::default().fg(text_color)),
    ];
    if focused {
        spans.push(Span::styled(
            "▏",
            Style::default().fg(palette::FIELD_FOCUSED),
        ));
    }

    vec![
        Line::from(Span::styled(
            format!("  {}", field.label()),
            Style::default().fg(palette::SECONDARY_TEXT),
        )),
        Line::from(spans),
        Line::from(""),
    ]
}
