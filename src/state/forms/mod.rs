//! Form domain layer
//!
//! Field values, the closed category set and focus handling for the
//! sample form.

mod field;
mod form_state;

pub use field::{Category, FieldId, InputHint};
pub use form_state::{Form, FormFields, SampleForm};
