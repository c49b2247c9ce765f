use crate::tui::app_state::AppState;
use crate::tui::colors::palette;
use crate::tui::component::Component;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct StatusBar;

impl Component for StatusBar {
    type State = AppState;

    fn render(&self, state: &Self::State, area: Rect, buf: &mut Buffer) {
        let (status_text, status_color): (String, Color) =
            if let Some(message) = &state.status_message {
                (format!(" ⎿  {}", message), palette::SUCCESS)
            } else if state.is_editing_contact() {
                (
                    " editing message · Enter sends, Esc leaves the form".to_string(),
                    palette::WARNING,
                )
            } else {
                (
                    " q quit · Tab menu · ↑/↓ scroll · ←/→ projects · c contact".to_string(),
                    palette::SUBDUED_TEXT,
                )
            };

        let areas = Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).split(area);

        let status_line = Line::from(Span::styled(status_text, Style::default().fg(status_color)));
        Paragraph::new(status_line).render(areas[0], buf);

        // Back-to-top affordance appears with the scrolled state
        let right_line = if state.scroll.is_past_threshold() {
            Line::from(Span::styled(
                "↑ g top ",
                Style::default().fg(palette::ACCENT),
            ))
        } else {
            let max = state
                .scroll
                .content_height
                .saturating_sub(state.scroll.viewport_height);
            let percent = if max == 0 {
                0
            } else {
                state.scroll.offset * 100 / max
            };
            Line::from(Span::styled(
                format!("{}% ", percent),
                Style::default().fg(palette::SUBDUED_TEXT),
            ))
        };
        Paragraph::new(right_line).right_aligned().render(areas[1], buf);
    }
}
