//! Screen layout shared by drawing and mouse hit-testing

use crate::platform::SELECTOR_INSET;
use crate::state::{Category, FieldId};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Full height of the header band before any scrolling
pub const HEADER_HEIGHT: u16 = 8;
/// Height of a bordered input (top border + content + bottom border)
pub const INPUT_HEIGHT: u16 = 3;

/// Where every part of the screen lands for a given area and scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub title: Rect,
    pub name: Rect,
    pub email: Rect,
    pub category: Rect,
    pub notifications: Rect,
    pub submit: Rect,
    pub help: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect, scroll_offset: u16) -> Self {
        let header_height = HEADER_HEIGHT.saturating_sub(scroll_offset);

        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height), // Header chrome
                Constraint::Min(0),                // Form body
                Constraint::Length(1),             // Help line
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(2)
            .constraints([
                Constraint::Length(2),            // Title + gap
                Constraint::Length(INPUT_HEIGHT), // Name
                Constraint::Length(1),
                Constraint::Length(INPUT_HEIGHT), // Email
                Constraint::Length(1),
                Constraint::Length(INPUT_HEIGHT), // Category
                Constraint::Length(1),
                Constraint::Length(1), // Notifications switch
                Constraint::Length(1),
                Constraint::Length(INPUT_HEIGHT), // Submit
                Constraint::Min(0),
            ])
            .split(outer[1]);

        Self {
            header: outer[0],
            title: body[0],
            name: body[1],
            email: body[3],
            category: body[5],
            notifications: body[7],
            submit: body[9],
            help: outer[2],
        }
    }

    pub fn field_area(&self, field: FieldId) -> Rect {
        match field {
            FieldId::Name => self.name,
            FieldId::Email => self.email,
            FieldId::Category => self.category,
            FieldId::Notifications => self.notifications,
            FieldId::Submit => self.submit,
        }
    }

    /// Focus stop under a screen position
    pub fn field_at(&self, column: u16, row: u16) -> Option<FieldId> {
        let position = Position::new(column, row);
        FieldId::ALL
            .into_iter()
            .find(|field| self.field_area(*field).contains(position))
    }

    /// Category option under a screen position
    pub fn category_at(&self, column: u16, row: u16) -> Option<Category> {
        let position = Position::new(column, row);
        category_option_areas(self.category)
            .into_iter()
            .zip(Category::ALL)
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, category)| category)
    }
}

/// One cell per category option, inside the selector border
pub fn category_option_areas(area: Rect) -> [Rect; 3] {
    let inner = Rect {
        x: area.x.saturating_add(1 + SELECTOR_INSET),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2 + 2 * SELECTOR_INSET),
        height: area.height.saturating_sub(2),
    };
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);
    [cells[0], cells[1], cells[2]]
}
