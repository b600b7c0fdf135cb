//! Application state definitions

use super::alerts::AlertQueue;
use super::forms::SampleForm;
use std::time::{Duration, Instant};

/// How long the Submit button is drawn in its pressed state
pub const BUTTON_PRESS_DURATION: Duration = Duration::from_millis(150);

/// Short-lived pressed state of the Submit button
#[derive(Debug, Clone, Copy)]
pub struct ButtonPressState {
    pub pressed_at: Instant,
}

impl ButtonPressState {
    pub fn new() -> Self {
        Self {
            pressed_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.pressed_at.elapsed() >= BUTTON_PRESS_DURATION
    }
}

impl Default for ButtonPressState {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the screen owns between mount and unmount
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: SampleForm,
    pub alerts: AlertQueue,
    /// Rows the header has been scrolled away by
    pub scroll_offset: u16,
    pub button_press: Option<ButtonPressState>,
}

impl AppState {
    /// Scroll down, never past `max`
    pub fn scroll_down(&mut self, max: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(1).min(max);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down a page (5 lines), never past `max`
    pub fn scroll_down_page(&mut self, max: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(5).min(max);
    }

    /// Scroll up a page (5 lines)
    pub fn scroll_up_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(5);
    }

    pub fn is_button_pressed(&self) -> bool {
        self.button_press.is_some_and(|press| !press.is_expired())
    }
}
