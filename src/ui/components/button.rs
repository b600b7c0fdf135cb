//! Button component for TUI

use crate::ui::theme::BUTTON_LABEL;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Render a filled, rounded button
///
/// `fill` is the button color; a pressed button is drawn dimmed.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    fill: Color,
    is_focused: bool,
    is_pressed: bool,
) {
    // White label on a white fill would vanish
    let label_color = if fill == BUTTON_LABEL {
        Color::Black
    } else {
        BUTTON_LABEL
    };

    let mut text_style = Style::default()
        .fg(label_color)
        .bg(fill)
        .add_modifier(Modifier::BOLD);
    if is_pressed {
        text_style = text_style.add_modifier(Modifier::DIM);
    }

    let border_type = if is_focused {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };

    let content = if is_focused {
        format!("▸ {label} ◂")
    } else {
        label.to_string()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(fill))
        .style(Style::default().bg(fill));

    frame.render_widget(
        Paragraph::new(content)
            .style(text_style)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
