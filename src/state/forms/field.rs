//! Form field value objects

use serde::{Deserialize, Serialize};

/// The closed set of categories offered by the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Personal,
    Business,
    Other,
}

impl Category {
    /// All options, in display order
    pub const ALL: [Category; 3] = [Category::Personal, Category::Business, Category::Other];

    pub fn next(&self) -> Self {
        match self {
            Self::Personal => Self::Business,
            Self::Business => Self::Other,
            Self::Other => Self::Personal,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Personal => Self::Other,
            Self::Business => Self::Personal,
            Self::Other => Self::Business,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Business => "Business",
            Self::Other => "Other",
        }
    }

    /// Serialized tag ("personal", "business", "other")
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Business => "business",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Keyboard hint attached to a text input. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputHint {
    Plain,
    Email,
}

/// Focus stops on the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldId {
    #[default]
    Name,
    Email,
    Category,
    Notifications,
    Submit,
}

impl FieldId {
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Category,
        FieldId::Notifications,
        FieldId::Submit,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Category => 2,
            Self::Notifications => 3,
            Self::Submit => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Category => "Category",
            Self::Notifications => "Enable Notifications",
            Self::Submit => "Submit",
        }
    }

    /// Placeholder shown while a text input is empty
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Name => Some("Enter your name"),
            Self::Email => Some("Enter your email"),
            _ => None,
        }
    }

    pub fn input_hint(&self) -> Option<InputHint> {
        match self {
            Self::Name => Some(InputHint::Plain),
            Self::Email => Some(InputHint::Email),
            _ => None,
        }
    }

    pub fn is_text_input(&self) -> bool {
        self.input_hint().is_some()
    }
}
