use super::app_state::AppState;
use super::component::Component;
use super::components::{drawer::MenuDrawer, navbar::Navbar, page, projects, status_bar::StatusBar};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::{Clear, Paragraph},
};

pub fn render(frame: &mut Frame, app: &mut AppState) {
    let areas = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(frame.area());
    let (nav_area, body_area, status_area) = (areas[0], areas[1], areas[2]);

    // Measured geometry replaces the static fallback once cards can render
    if app.carousel.item_count > 0 && body_area.width > 0 {
        app.carousel
            .set_geometry(projects::measure_geometry(body_area.width));
    }

    let layout = page::build(app, body_area.width);
    app.section_rows = layout.section_rows;
    app.scroll.update_content_height(layout.lines.len());
    app.scroll.update_viewport_height(body_area.height as usize);

    let body = Paragraph::new(layout.lines).scroll((app.scroll.offset as u16, 0));
    frame.render_widget(body, body_area);

    Navbar.render(app, nav_area, frame.buffer_mut());
    StatusBar.render(app, status_area, frame.buffer_mut());

    if app.menu.is_open() {
        let drawer_area = drawer_rect(body_area);
        frame.render_widget(Clear, drawer_area);
        MenuDrawer.render(app, drawer_area, frame.buffer_mut());
    }
}

/// Drawer overlay hangs off the top-right corner, under the navbar.
fn drawer_rect(body: Rect) -> Rect {
    let width = 22.min(body.width);
    let height = (super::section::Section::ALL.len() as u16 + 2).min(body.height);
    Rect {
        x: body.right().saturating_sub(width),
        y: body.y,
        width,
        height,
    }
}
