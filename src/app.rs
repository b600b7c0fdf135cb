//! Application state and core logic

use crate::platform::SUBMIT_MODIFIER;
use crate::state::{AppState, ButtonPressState, FieldId, Form};
use crate::submit::{SubmissionLog, SubmitHandler, TracingLog};
use crate::ui::{ColorResolver, ScreenLayout, HEADER_HEIGHT};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Submit handler for the form
    submit_handler: SubmitHandler<Box<dyn SubmissionLog>>,
    /// Injected color lookup used by every widget
    theme: Box<dyn ColorResolver>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for layout hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Set by anything that changes the screen besides field values
    dirty: bool,
    /// Form revision at the last draw
    drawn_revision: Option<u64>,
}

impl App {
    /// Create a new App that logs submissions through `tracing`
    pub fn new(theme: Box<dyn ColorResolver>) -> Self {
        Self::with_log(theme, Box::new(TracingLog))
    }

    /// Create a new App with an explicit submission log
    pub fn with_log(theme: Box<dyn ColorResolver>, log: Box<dyn SubmissionLog>) -> Self {
        Self {
            state: AppState::default(),
            submit_handler: SubmitHandler::new(log),
            theme,
            quit: false,
            terminal_size: None,
            dirty: true,
            drawn_revision: None,
        }
    }

    pub fn theme(&self) -> &dyn ColorResolver {
        self.theme.as_ref()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True when the screen is stale: a field changed or something else moved
    pub fn needs_redraw(&self) -> bool {
        self.dirty
            || self.state.button_press.is_some()
            || self.drawn_revision != Some(self.state.form.revision())
    }

    /// Record that the current state has been drawn
    pub fn mark_drawn(&mut self) {
        self.dirty = false;
        self.drawn_revision = Some(self.state.form.revision());
    }

    /// Force a redraw, e.g. after a resize
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Update button press animation state.
    /// Clears the animation if it has expired.
    pub fn update_button_press(&mut self) {
        if let Some(ref press) = self.state.button_press {
            if press.is_expired() {
                self.state.button_press = None;
                self.dirty = true;
            }
        }
    }

    /// Read the snapshot and hand it to the submit handler
    pub fn submit(&mut self) {
        let snapshot = self.state.form.snapshot();
        self.state.button_press = Some(ButtonPressState::new());
        self.submit_handler.submit(&snapshot, &mut self.state.alerts);
        self.dirty = true;
    }

    fn layout(&self) -> ScreenLayout {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        ScreenLayout::new(Rect::new(0, 0, width, height), self.state.scroll_offset)
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // The acknowledgment is modal: it swallows input until dismissed
        if self.state.alerts.is_showing() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.alerts.dismiss();
                self.dirty = true;
            }
            return;
        }

        let submit_chord = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(SUBMIT_MODIFIER);
        if key.code == KeyCode::Char('s') && submit_chord {
            self.submit();
            return;
        }

        let focused = self.state.form.focused();
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(false),
            KeyCode::PageDown => {
                self.state.scroll_down_page(HEADER_HEIGHT);
                self.dirty = true;
            }
            KeyCode::PageUp => {
                self.state.scroll_up_page();
                self.dirty = true;
            }
            KeyCode::Char(c) if focused.is_text_input() => {
                if !key.modifiers.contains(KeyModifiers::CONTROL) {
                    self.state.form.push_char(c);
                }
            }
            KeyCode::Backspace if focused.is_text_input() => self.state.form.pop_char(),
            KeyCode::Left if focused == FieldId::Category => {
                self.state.form.select_prev_category()
            }
            KeyCode::Right | KeyCode::Char(' ') if focused == FieldId::Category => {
                self.state.form.select_next_category()
            }
            KeyCode::Char(' ') | KeyCode::Enter if focused == FieldId::Notifications => {
                self.state.form.toggle_notifications()
            }
            KeyCode::Enter | KeyCode::Char(' ') if focused == FieldId::Submit => self.submit(),
            // Enter on a text input moves on, like a Next key
            KeyCode::Enter if focused.is_text_input() => self.move_focus(true),
            _ => {}
        }
    }

    fn move_focus(&mut self, forward: bool) {
        if forward {
            self.state.form.next_field();
        } else {
            self.state.form.prev_field();
        }
        tracing::debug!(field = ?self.state.form.focused(), "focus moved");
        self.dirty = true;
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.state.alerts.is_showing() {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.state.scroll_down(HEADER_HEIGHT);
                self.dirty = true;
            }
            MouseEventKind::ScrollUp => {
                self.state.scroll_up();
                self.dirty = true;
            }
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let layout = self.layout();
        let Some(field) = layout.field_at(column, row) else {
            return;
        };
        self.state.form.focus(field);
        self.dirty = true;
        match field {
            FieldId::Category => {
                if let Some(category) = layout.category_at(column, row) {
                    self.state.form.set_category(category);
                }
            }
            FieldId::Notifications => self.state.form.toggle_notifications(),
            FieldId::Submit => self.submit(),
            FieldId::Name | FieldId::Email => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Category, FormFields};
    use crate::ui::{ColorScheme, Theme};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Submission log whose records stay readable after the app takes it
    #[derive(Clone, Default)]
    struct SharedLog(Rc<RefCell<Vec<FormFields>>>);

    impl SubmissionLog for SharedLog {
        fn record(&self, fields: &FormFields) {
            self.0.borrow_mut().push(fields.clone());
        }
    }

    fn app() -> App {
        app_with_log(SharedLog::default())
    }

    fn app_with_log(log: SharedLog) -> App {
        let mut app = App::with_log(
            Box::new(Theme::new(ColorScheme::Dark)),
            Box::new(log),
        );
        app.terminal_size = Some((40, 60));
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    mod keyboard {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_fill_form_with_keys() {
            let log = SharedLog::default();
            let mut app = app_with_log(log.clone());
            type_text(&mut app, "Ada");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "ada@x.com");
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Char(' '));
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Enter);

            let expected = FormFields {
                name: "Ada".to_string(),
                email: "ada@x.com".to_string(),
                category: Category::Business,
                notifications: true,
            };
            assert_eq!(app.state.form.snapshot(), expected);
            assert_eq!(*log.0.borrow(), vec![expected]);
            assert_eq!(app.state.alerts.current(), Some("Form submitted!"));
        }

        #[test]
        fn test_backspace_edits_focused_text() {
            let mut app = app();
            type_text(&mut app, "Adx");
            press(&mut app, KeyCode::Backspace);
            type_text(&mut app, "a");
            assert_eq!(app.state.form.name(), "Ada");
        }

        #[test]
        fn test_space_is_text_in_text_inputs() {
            let mut app = app();
            type_text(&mut app, "Ada Lovelace");
            assert_eq!(app.state.form.name(), "Ada Lovelace");
        }

        #[test]
        fn test_left_cycles_category_backwards() {
            let mut app = app();
            app.state.form.focus(FieldId::Category);
            press(&mut app, KeyCode::Left);
            assert_eq!(app.state.form.category(), Category::Other);
        }

        #[test]
        fn test_enter_on_text_input_advances_focus() {
            let mut app = app();
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.form.focused(), FieldId::Email);
        }

        #[test]
        fn test_up_from_name_wraps_to_submit() {
            let mut app = app();
            press(&mut app, KeyCode::Up);
            assert_eq!(app.state.form.focused(), FieldId::Submit);
        }

        #[test]
        fn test_esc_quits() {
            let mut app = app();
            assert!(!app.should_quit());
            press(&mut app, KeyCode::Esc);
            assert!(app.should_quit());
        }

        #[test]
        fn test_ctrl_chars_are_not_typed() {
            let mut app = app();
            app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
            assert_eq!(app.state.form.name(), "");
        }
    }

    mod submitting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_enter_on_submit_shows_acknowledgment() {
            let mut app = app();
            app.state.form.focus(FieldId::Submit);
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.alerts.current(), Some("Form submitted!"));
            assert!(app.state.is_button_pressed());
        }

        #[test]
        fn test_ctrl_s_submits_from_any_field() {
            let mut app = app();
            type_text(&mut app, "Ada");
            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
            assert!(app.state.alerts.is_showing());
            assert_eq!(app.state.form.name(), "Ada");
        }

        #[test]
        fn test_submit_leaves_fields_untouched() {
            let mut app = app();
            type_text(&mut app, "Ada");
            let before = app.state.form.snapshot();
            let revision = app.state.form.revision();
            app.submit();
            assert_eq!(app.state.form.snapshot(), before);
            assert_eq!(app.state.form.revision(), revision);
        }

        #[test]
        fn test_alert_swallows_input_until_dismissed() {
            let mut app = app();
            app.submit();
            type_text(&mut app, "Ada");
            assert_eq!(app.state.form.name(), "");

            press(&mut app, KeyCode::Esc);
            assert!(!app.state.alerts.is_showing());
            assert!(!app.should_quit());

            type_text(&mut app, "Ada");
            assert_eq!(app.state.form.name(), "Ada");
        }

        #[test]
        fn test_repeated_submits_queue_acknowledgments() {
            let mut app = app();
            app.submit();
            app.submit();
            assert_eq!(app.state.alerts.len(), 2);
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.alerts.len(), 1);
        }
    }

    mod mouse {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_click_focuses_field() {
            let mut app = app();
            let area = app.layout().email;
            click(&mut app, area.x + 2, area.y + 1);
            assert_eq!(app.state.form.focused(), FieldId::Email);
        }

        #[test]
        fn test_click_toggle_flips_notifications() {
            let mut app = app();
            let area = app.layout().notifications;
            click(&mut app, area.x + 1, area.y);
            assert!(app.state.form.notifications());
            click(&mut app, area.x + 1, area.y);
            assert!(!app.state.form.notifications());
        }

        #[test]
        fn test_click_category_option_selects_it() {
            let mut app = app();
            let layout = app.layout();
            let row = layout.category.y + 1;
            let column = (layout.category.x..layout.category.right())
                .find(|column| layout.category_at(*column, row) == Some(Category::Other))
                .unwrap();
            click(&mut app, column, row);
            assert_eq!(app.state.form.category(), Category::Other);
        }

        #[test]
        fn test_click_submit_submits() {
            let mut app = app();
            let area = app.layout().submit;
            click(&mut app, area.x + 1, area.y + 1);
            assert!(app.state.alerts.is_showing());
        }

        #[test]
        fn test_click_ignored_while_alert_showing() {
            let mut app = app();
            app.submit();
            let area = app.layout().notifications;
            click(&mut app, area.x + 1, area.y);
            assert!(!app.state.form.notifications());
        }

        #[test]
        fn test_wheel_collapses_header() {
            let mut app = app();
            for _ in 0..20 {
                app.handle_mouse(MouseEvent {
                    kind: MouseEventKind::ScrollDown,
                    column: 0,
                    row: 0,
                    modifiers: KeyModifiers::NONE,
                });
            }
            assert_eq!(app.state.scroll_offset, HEADER_HEIGHT);
            assert_eq!(app.layout().header.height, 0);
        }
    }

    mod redraw {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_app_needs_redraw() {
            let app = app();
            assert!(app.needs_redraw());
        }

        #[test]
        fn test_drawn_app_is_clean() {
            let mut app = app();
            app.mark_drawn();
            assert!(!app.needs_redraw());
        }

        #[test]
        fn test_field_update_requests_redraw() {
            let mut app = app();
            app.mark_drawn();
            app.state.form.set_name("Ada".to_string());
            assert!(app.needs_redraw());
        }

        #[test]
        fn test_toggle_three_times_is_three_updates() {
            let mut app = app();
            app.state.form.focus(FieldId::Notifications);
            let start = app.state.form.revision();
            for _ in 0..3 {
                press(&mut app, KeyCode::Char(' '));
            }
            assert!(app.state.form.notifications());
            assert_eq!(app.state.form.revision() - start, 3);
        }

        #[test]
        fn test_invalidate_requests_redraw() {
            let mut app = app();
            app.mark_drawn();
            app.invalidate();
            assert!(app.needs_redraw());
        }
    }
}
