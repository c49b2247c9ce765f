use super::section_title;
use crate::content::Project;
use crate::tui::app_state::AppState;
use crate::tui::carousel_state::CarouselGeometry;
use crate::tui::colors::palette;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Gap between cards in terminal columns.
const GAP_COLS: u32 = 4;
/// Rows a card occupies, borders included.
const CARD_HEIGHT: usize = 9;

/// Measured geometry for the current viewport. Only called once a card is
/// actually rendered; otherwise the carousel keeps its default fallback.
pub fn measure_geometry(width: u16) -> CarouselGeometry {
    let card_width = (width.saturating_sub(6) as u32).clamp(24, 44);
    CarouselGeometry {
        card_width,
        gap: GAP_COLS,
    }
}

pub fn lines(app: &AppState, width: u16) -> Vec<Line<'static>> {
    let mut lines = section_title("My Projects");
    let projects = &app.content.projects;

    if projects.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No projects yet.",
            Style::default().fg(palette::DIMMED_TEXT),
        )));
        lines.push(Line::from(""));
        return lines;
    }

    lines.extend(strip_lines(projects, app, width));
    lines.extend(dot_lines(app));
    lines.push(Line::from(Span::styled(
        "  ←/→ scroll · [ ] switch card · y copy link",
        Style::default().fg(palette::DIMMED_TEXT),
    )));
    lines.push(Line::from(""));
    lines
}

/// Renders the horizontal strip: all cards laid out side by side, then
/// clipped to the viewport at the carousel's current offset.
fn strip_lines(projects: &[Project], app: &AppState, width: u16) -> Vec<Line<'static>> {
    let geometry = app.carousel.geometry();
    let card_width = geometry.card_width as usize;
    let gap = " ".repeat(geometry.gap as usize);
    let viewport = (width.saturating_sub(4) as usize).max(1);
    let skip = app.carousel.offset as usize;

    let cards: Vec<Vec<String>> = projects.iter().map(|p| card_rows(p, card_width)).collect();

    let mut lines = Vec::with_capacity(CARD_HEIGHT);
    for row in 0..CARD_HEIGHT {
        let full = cards
            .iter()
            .map(|card| card[row].as_str())
            .collect::<Vec<_>>()
            .join(&gap);
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                clip(&full, skip, viewport),
                Style::default().fg(palette::SECONDARY_TEXT),
            ),
        ]));
    }
    lines
}

/// One dot per card; hidden for empty or single-item lists so the row
/// never implies a navigation that does not exist.
fn dot_lines(app: &AppState) -> Vec<Line<'static>> {
    if app.carousel.item_count <= 1 {
        return Vec::new();
    }
    let mut spans = vec![Span::raw("  ")];
    for index in 0..app.carousel.item_count {
        let (dot, color) = if index == app.carousel.current_index {
            ("● ", palette::DOT_ACTIVE)
        } else {
            ("○ ", palette::DOT_INACTIVE)
        };
        spans.push(Span::styled(dot, Style::default().fg(color)));
    }
    vec![Line::from(spans), Line::from("")]
}

fn card_rows(project: &Project, width: usize) -> Vec<String> {
    let inner = width.saturating_sub(2);
    let body = inner.saturating_sub(1);

    let mut rows = Vec::with_capacity(CARD_HEIGHT);
    rows.push(format!("┌{}┐", "─".repeat(inner)));
    rows.push(format!("│ {}│", pad(&project.name, body)));
    rows.push(format!("│{}│", pad("", inner)));

    let description = textwrap::wrap(&project.description, body.saturating_sub(1).max(1));
    for row in 0..3 {
        let text = description.get(row).map(|c| c.as_ref()).unwrap_or("");
        rows.push(format!("│ {}│", pad(text, body)));
    }

    let tags = project.technologies.join(" · ");
    rows.push(format!("│ {}│", pad(&tags, body)));

    let links = match (&project.link, &project.github) {
        (Some(_), Some(_)) => "Live Demo · GitHub",
        (Some(_), None) => "Live Demo",
        (None, Some(_)) => "GitHub",
        (None, None) => "",
    };
    rows.push(format!("│ {}│", pad(links, body)));
    rows.push(format!("└{}┘", "─".repeat(inner)));
    rows
}

/// Truncates to `width` display columns and pads with spaces.
fn pad(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

/// Horizontal window over a strip row: skip `skip` columns, keep `width`.
fn clip(row: &str, skip: usize, width: usize) -> String {
    let mut out = String::new();
    let mut position = 0;
    for c in row.chars() {
        let w = c.width().unwrap_or(0);
        if position + w <= skip {
            position += w;
            continue;
        }
        if position < skip {
            // Wide char straddling the left edge; keep columns aligned
            position += w;
            out.push(' ');
            continue;
        }
        if position + w > skip + width {
            break;
        }
        out.push(c);
        position += w;
    }
    out
}
