//! Acknowledgment dialog component

use super::base::{render_dialog, DialogConfig};
use crate::ui::theme::Styles;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
    Frame,
};

/// Render the pending acknowledgment centered on the screen
///
/// `queued` counts alerts waiting behind this one.
pub fn render_alert_dialog(frame: &mut Frame, message: &str, queued: usize, styles: &Styles) {
    let key_style = Style::default()
        .fg(styles.tint)
        .add_modifier(Modifier::BOLD);
    let mut hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" to dismiss"),
    ];
    if queued > 0 {
        hint.push(Span::styled(format!(" ({queued} more)"), styles.placeholder()));
    }

    render_dialog(
        frame,
        DialogConfig {
            title: "Alert",
            message,
            hint: Some(hint),
            accent: styles.tint,
            foreground: styles.text,
            background: styles.background,
            max_width: 50,
        },
    );
}
