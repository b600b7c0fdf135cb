//! Header chrome above the form

use crate::ui::layout::HEADER_HEIGHT;
use crate::ui::theme::{ColorResolver, ColorRole, HEADER_BACKGROUND, HEADER_ICON};
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

/// Document icon, drawn offset toward the bottom-left of the band
const ICON: [&str; 6] = [
    "    ┌───────╮",
    "    │ ═════ ╰╮",
    "    │ ═════  │",
    "    │ ══════ │",
    "    │ ═══    │",
    "    └────────┘",
];

/// Draw the header band. A band shorter than `HEADER_HEIGHT` has been
/// scrolled; its top rows slide out first.
pub fn draw_header(frame: &mut Frame, area: Rect, resolver: &dyn ColorResolver) {
    if area.height == 0 {
        return;
    }
    let background = resolver.resolve_color(ColorRole::Background, Some(HEADER_BACKGROUND));

    let mut lines = vec![Line::from("")];
    lines.extend(ICON.iter().map(|row| Line::from(*row)));
    let hidden = HEADER_HEIGHT.saturating_sub(area.height);

    let header = Paragraph::new(lines)
        .style(Style::default().fg(HEADER_ICON).bg(background))
        .scroll((hidden, 0))
        .block(Block::default().style(Style::default().bg(background)));
    frame.render_widget(header, area);
}
