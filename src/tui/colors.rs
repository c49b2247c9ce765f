use ratatui::style::Color;

pub mod palette {
    use super::*;

    // Primary colors
    pub const ACCENT: Color = Color::Rgb(142, 240, 204);
    pub const SELECTED_BG: Color = Color::Cyan;
    pub const SELECTED_FG: Color = Color::Black;

    // Semantic colors
    pub const WARNING: Color = Color::Yellow;
    pub const SUCCESS: Color = Color::Green;

    // Text colors
    pub const PRIMARY_TEXT: Color = Color::White;
    pub const SECONDARY_TEXT: Color = Color::Gray;
    pub const DIMMED_TEXT: Color = Color::DarkGray;
    pub const SUBDUED_TEXT: Color = Color::Rgb(100, 100, 100);

    // Navigation bar
    pub const NAV_LOGO: Color = ACCENT;
    pub const NAV_LINK: Color = Color::Rgb(150, 150, 150);
    pub const NAV_BORDER: Color = Color::Rgb(100, 100, 100);
    pub const NAV_BORDER_SCROLLED: Color = ACCENT;

    // Carousel
    pub const DOT_ACTIVE: Color = ACCENT;
    pub const DOT_INACTIVE: Color = Color::Rgb(100, 100, 100);

    // Contact form
    pub const FIELD_FOCUSED: Color = ACCENT;
    pub const FIELD_BLURRED: Color = Color::Rgb(100, 100, 100);
    pub const PLACEHOLDER: Color = Color::Gray;
}
