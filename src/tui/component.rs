use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Chrome widgets drawn over the scrolling page (navbar, drawer, status
/// bar). Unlike the page sections, which build lines, these render
/// straight into the frame buffer from a read-only view of [`AppState`].
///
/// [`AppState`]: crate::tui::app_state::AppState
pub trait Component: Send + Sync {
    type State;
    fn render(&self, state: &Self::State, area: Rect, buf: &mut Buffer);
}
