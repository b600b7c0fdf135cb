//! UI module for rendering the TUI

mod components;
mod forms;
mod header;
mod layout;
mod theme;

pub use layout::{ScreenLayout, HEADER_HEIGHT};
pub use theme::{ColorResolver, ColorScheme, Theme};

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use theme::Styles;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let styles = Styles::from_resolver(app.theme());
    let layout = ScreenLayout::new(area, app.state.scroll_offset);

    frame.render_widget(Block::default().style(styles.base()), area);

    header::draw_header(frame, layout.header, app.theme());
    forms::draw_sample_form(frame, &layout, &app.state, &styles);
    draw_help(frame, &layout, &styles);

    if let Some(message) = app.state.alerts.current() {
        let queued = app.state.alerts.len().saturating_sub(1);
        components::render_alert_dialog(frame, message, queued, &styles);
    }
}

fn draw_help(frame: &mut Frame, layout: &ScreenLayout, styles: &Styles) {
    let key = styles.subtitle();
    let text = styles.placeholder();
    let help = Line::from(vec![
        Span::styled(" Tab", key),
        Span::styled(" next  ", text),
        Span::styled("←/→", key),
        Span::styled(" category  ", text),
        Span::styled("Space", key),
        Span::styled(" toggle  ", text),
        Span::styled(SUBMIT_SHORTCUT, key),
        Span::styled(" submit  ", text),
        Span::styled("Esc", key),
        Span::styled(" quit", text),
    ]);
    frame.render_widget(Paragraph::new(help), layout.help);
}
