//! Field rendering utilities for forms

use crate::state::{Category, FieldId, InputHint};
use crate::ui::layout::category_option_areas;
use crate::ui::theme::{Styles, SWITCH_THUMB_OFF, SWITCH_THUMB_ON, SWITCH_TRACK_OFF};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Width of the switch glyph including brackets
const SWITCH_WIDTH: u16 = 10;

fn input_block<'a>(label: &'a str, is_focused: bool, styles: &Styles) -> Block<'a> {
    Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles.border(is_focused))
        .style(styles.base())
}

/// Draw a single-line text input with placeholder and cursor
pub fn draw_text_input(
    frame: &mut Frame,
    area: Rect,
    field: FieldId,
    value: &str,
    is_focused: bool,
    styles: &Styles,
) {
    let mut block = input_block(field.label(), is_focused, styles);
    if field.input_hint() == Some(InputHint::Email) {
        block = block.title(
            Line::from(Span::styled(" @ email ", styles.placeholder())).right_aligned(),
        );
    }

    // Keep the tail of long values visible, leaving a column for the cursor
    let inner_width = usize::from(area.width.saturating_sub(2));
    let visible = visible_tail(value, inner_width.saturating_sub(usize::from(is_focused)));

    let mut spans = Vec::new();
    if value.is_empty() {
        if let Some(placeholder) = field.placeholder() {
            spans.push(Span::styled(placeholder, styles.placeholder()));
        }
    } else {
        spans.push(Span::styled(visible, styles.base()));
    }
    if is_focused {
        // Cursor sits after the value, or before the placeholder
        let cursor = Span::styled("▌", styles.base().fg(styles.tint));
        if value.is_empty() {
            spans.insert(0, cursor);
        } else {
            spans.push(cursor);
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Longest suffix of `value` that fits in `width` terminal columns
fn visible_tail(value: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = value.len();
    for (index, c) in value.char_indices().rev() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > width {
            break;
        }
        used += char_width;
        start = index;
    }
    &value[start..]
}

/// Draw the single-choice category selector
pub fn draw_category_selector(
    frame: &mut Frame,
    area: Rect,
    selected: Category,
    is_focused: bool,
    styles: &Styles,
) {
    let block = input_block(FieldId::Category.label(), is_focused, styles);
    frame.render_widget(block, area);

    for (cell, category) in category_option_areas(area).into_iter().zip(Category::ALL) {
        let is_selected = category == selected;
        let (text, style) = if is_selected {
            let marker_style = if is_focused {
                styles.base().fg(styles.tint).add_modifier(Modifier::BOLD)
            } else {
                styles.subtitle()
            };
            (format!("◀ {} ▶", category.label()), marker_style)
        } else {
            (category.label().to_string(), styles.placeholder())
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, style)).alignment(Alignment::Center),
            cell,
        );
    }
}

/// Draw a labelled on/off switch
pub fn draw_switch(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: bool,
    is_focused: bool,
    styles: &Styles,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SWITCH_WIDTH)])
        .split(area);

    let label_style = if is_focused {
        styles.subtitle().fg(styles.tint)
    } else {
        styles.subtitle()
    };
    let marker = if is_focused { "▸ " } else { "  " };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(label, label_style),
        ]))
        .style(styles.base()),
        chunks[0],
    );

    let (track, thumb, text) = if value {
        (styles.tint, SWITCH_THUMB_ON, " ON ")
    } else {
        (SWITCH_TRACK_OFF, SWITCH_THUMB_OFF, "OFF ")
    };
    let thumb_span = Span::styled("●", Style::default().fg(thumb).bg(track));
    let text_span = Span::styled(text, Style::default().fg(styles.background).bg(track));
    let switch = if value {
        Line::from(vec![Span::raw(" "), text_span, thumb_span, Span::raw(" ")])
    } else {
        Line::from(vec![Span::raw(" "), thumb_span, text_span, Span::raw(" ")])
    };
    frame.render_widget(
        Paragraph::new(switch)
            .alignment(Alignment::Right)
            .style(styles.base()),
        chunks[1],
    );
}
