//! Reusable UI components

mod button;
mod dialog;

pub use button::render_button;
pub use dialog::render_alert_dialog;
