use crate::tui::app_state::AppState;
use crate::tui::colors::palette;
use crate::tui::component::Component;
use crate::tui::section::Section;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Below this width the inline link row collapses into the drawer toggle.
pub const NARROW_BREAKPOINT: u16 = 70;

pub struct Navbar;

impl Component for Navbar {
    type State = AppState;

    fn render(&self, state: &Self::State, area: Rect, buf: &mut Buffer) {
        // The "scrolled" visual state: border lights up past the threshold
        let border_color = if state.scroll.is_past_threshold() {
            palette::NAV_BORDER_SCROLLED
        } else {
            palette::NAV_BORDER
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        let areas = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(2)]).split(inner);

        let logo = Line::from(Span::styled(
            format!(" {}", state.content.profile.name),
            Style::default()
                .fg(palette::NAV_LOGO)
                .add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(logo).render(areas[0], buf);

        let right = if area.width < NARROW_BREAKPOINT {
            // Two distinct icons reflect the drawer state
            let icon = if state.menu.is_open() {
                "✕ close [Tab] "
            } else {
                "☰ menu [Tab] "
            };
            Line::from(Span::styled(
                icon.to_string(),
                Style::default().fg(palette::NAV_LINK),
            ))
        } else {
            let links = Section::ALL
                .iter()
                .map(|s| s.label())
                .collect::<Vec<_>>()
                .join("  ");
            Line::from(Span::styled(
                format!("{} ", links),
                Style::default().fg(palette::NAV_LINK),
            ))
        };
        Paragraph::new(right).right_aligned().render(areas[1], buf);
    }
}
