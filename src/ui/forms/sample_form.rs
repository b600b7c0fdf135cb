//! Sample form rendering

use super::field_renderer::{draw_category_selector, draw_switch, draw_text_input};
use crate::state::{AppState, FieldId};
use crate::ui::components::render_button;
use crate::ui::layout::ScreenLayout;
use crate::ui::theme::Styles;
use ratatui::{
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the title and every form control
pub fn draw_sample_form(frame: &mut Frame, layout: &ScreenLayout, state: &AppState, styles: &Styles) {
    let form = &state.form;
    let focused = form.focused();

    let title = Paragraph::new(Line::from(Span::styled(
        "Sample Form",
        styles.subtitle().add_modifier(Modifier::UNDERLINED),
    )));
    frame.render_widget(title, layout.title);

    for field in [FieldId::Name, FieldId::Email] {
        draw_text_input(
            frame,
            layout.field_area(field),
            field,
            form.text_value(field),
            focused == field,
            styles,
        );
    }

    draw_category_selector(
        frame,
        layout.category,
        form.category(),
        focused == FieldId::Category,
        styles,
    );

    draw_switch(
        frame,
        layout.notifications,
        FieldId::Notifications.label(),
        form.notifications(),
        focused == FieldId::Notifications,
        styles,
    );

    render_button(
        frame,
        layout.submit,
        FieldId::Submit.label(),
        styles.tint,
        focused == FieldId::Submit,
        state.is_button_pressed(),
    );
}
