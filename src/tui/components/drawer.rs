use crate::tui::app_state::AppState;
use crate::tui::colors::palette;
use crate::tui::component::Component;
use crate::tui::section::Section;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// The mobile-style navigation drawer. Rendered as an overlay; every link
/// activation closes it again.
pub struct MenuDrawer;

impl Component for MenuDrawer {
    type State = AppState;

    fn render(&self, state: &Self::State, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette::ACCENT))
            .title(" menu ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::with_capacity(Section::ALL.len());
        for (index, section) in Section::ALL.iter().enumerate() {
            let selected = index == state.menu.selected;
            let style = if selected {
                Style::default()
                    .bg(palette::SELECTED_BG)
                    .fg(palette::SELECTED_FG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette::SECONDARY_TEXT)
            };
            let marker = if selected { "› " } else { "  " };
            lines.push(Line::from(Span::styled(
                format!("{}{}", marker, section.label()),
                style,
            )));
        }
        Paragraph::new(lines).render(inner, buf);
    }
}
