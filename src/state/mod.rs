//! Application state module

mod alerts;
mod app_state;
mod forms;

pub use app_state::*;
pub use forms::*;
