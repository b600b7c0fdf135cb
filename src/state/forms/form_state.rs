//! Form state management and form structs

use super::field::{Category, FieldId};
use serde::{Deserialize, Serialize};

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Snapshot of the four user-editable values
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub category: Category,
    pub notifications: bool,
}

/// The sample form: field values plus focus
#[derive(Debug, Clone, Default)]
pub struct SampleForm {
    fields: FormFields,
    /// Number of render-triggering field updates since mount
    revision: u64,
    pub active_field_index: usize,
}

impl SampleForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn email(&self) -> &str {
        &self.fields.email
    }

    pub fn category(&self) -> Category {
        self.fields.category
    }

    pub fn notifications(&self) -> bool {
        self.fields.notifications
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_name(&mut self, value: String) {
        self.fields.name = value;
        self.touch("name");
    }

    pub fn set_email(&mut self, value: String) {
        self.fields.email = value;
        self.touch("email");
    }

    pub fn set_category(&mut self, value: Category) {
        self.fields.category = value;
        self.touch("category");
    }

    pub fn set_notifications(&mut self, value: bool) {
        self.fields.notifications = value;
        self.touch("notifications");
    }

    fn touch(&mut self, field: &str) {
        self.revision += 1;
        tracing::debug!(field, revision = self.revision, "form field updated");
    }

    /// Atomic copy of all four values
    pub fn snapshot(&self) -> FormFields {
        self.fields.clone()
    }

    pub fn focused(&self) -> FieldId {
        FieldId::from_index(self.active_field_index)
    }

    pub fn focus(&mut self, field: FieldId) {
        self.set_active_field(field.index());
    }

    /// Append a character to the focused text input
    pub fn push_char(&mut self, c: char) {
        match self.focused() {
            FieldId::Name => {
                let mut value = self.fields.name.clone();
                value.push(c);
                self.set_name(value);
            }
            FieldId::Email => {
                let mut value = self.fields.email.clone();
                value.push(c);
                self.set_email(value);
            }
            _ => {}
        }
    }

    /// Remove the last character from the focused text input
    pub fn pop_char(&mut self) {
        match self.focused() {
            FieldId::Name => {
                let mut value = self.fields.name.clone();
                if value.pop().is_some() {
                    self.set_name(value);
                }
            }
            FieldId::Email => {
                let mut value = self.fields.email.clone();
                if value.pop().is_some() {
                    self.set_email(value);
                }
            }
            _ => {}
        }
    }

    pub fn select_next_category(&mut self) {
        self.set_category(self.fields.category.next());
    }

    pub fn select_prev_category(&mut self) {
        self.set_category(self.fields.category.prev());
    }

    pub fn toggle_notifications(&mut self) {
        self.set_notifications(!self.fields.notifications);
    }

    /// Display value for a text input
    pub fn text_value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.fields.name,
            FieldId::Email => &self.fields.email,
            _ => "",
        }
    }
}

impl Form for SampleForm {
    fn field_count(&self) -> usize {
        FieldId::ALL.len() // name, email, category, notifications, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
}
