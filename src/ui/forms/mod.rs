//! Form rendering module
//!
//! - `field_renderer`: text input, selector and switch widgets
//! - `sample_form`: the sample form composed from those widgets

mod field_renderer;
mod sample_form;

pub use sample_form::draw_sample_form;
