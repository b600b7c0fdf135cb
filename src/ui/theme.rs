//! Color resolution for light and dark schemes

use ratatui::style::{Color, Modifier, Style};

/// Active color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
}

/// Logical color roles looked up through the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Text,
    Background,
    Tint,
    Icon,
}

/// Explicit per-scheme colors that take precedence over the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorOverrides {
    pub light: Option<Color>,
    pub dark: Option<Color>,
}

impl ColorOverrides {
    fn for_scheme(&self, scheme: ColorScheme) -> Option<Color> {
        match scheme {
            ColorScheme::Light => self.light,
            ColorScheme::Dark => self.dark,
        }
    }
}

/// Theming capability consumed by the view
pub trait ColorResolver {
    fn resolve_color(&self, role: ColorRole, overrides: Option<ColorOverrides>) -> Color;
}

/// Build a color from a 0xRRGGBB literal
pub const fn hex(rgb: u32) -> Color {
    Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Header band behind the icon
pub const HEADER_BACKGROUND: ColorOverrides = ColorOverrides {
    light: Some(hex(0xE8D0F5)),
    dark: Some(hex(0x2D1B33)),
};
/// Header icon
pub const HEADER_ICON: Color = hex(0x9370DB);
/// Switch track while off
pub const SWITCH_TRACK_OFF: Color = hex(0x767577);
pub const SWITCH_THUMB_ON: Color = hex(0xFFFFFF);
pub const SWITCH_THUMB_OFF: Color = hex(0xF4F3F4);
pub const BUTTON_LABEL: Color = hex(0xFFFFFF);

/// Palette-backed theme for one scheme
#[derive(Debug, Clone, Copy, Default)]
pub struct Theme {
    pub scheme: ColorScheme,
}

impl Theme {
    pub fn new(scheme: ColorScheme) -> Self {
        Self { scheme }
    }

    fn palette(&self, role: ColorRole) -> Color {
        match (self.scheme, role) {
            (ColorScheme::Light, ColorRole::Text) => hex(0x11181C),
            (ColorScheme::Light, ColorRole::Background) => hex(0xFFFFFF),
            (ColorScheme::Light, ColorRole::Tint) => hex(0x0A7EA4),
            (ColorScheme::Light, ColorRole::Icon) => hex(0x687076),
            (ColorScheme::Dark, ColorRole::Text) => hex(0xECEDEE),
            (ColorScheme::Dark, ColorRole::Background) => hex(0x151718),
            (ColorScheme::Dark, ColorRole::Tint) => hex(0xFFFFFF),
            (ColorScheme::Dark, ColorRole::Icon) => hex(0x9BA1A6),
        }
    }
}

impl ColorResolver for Theme {
    fn resolve_color(&self, role: ColorRole, overrides: Option<ColorOverrides>) -> Color {
        overrides
            .and_then(|o| o.for_scheme(self.scheme))
            .unwrap_or_else(|| self.palette(role))
    }
}

/// Styles shared by the form widgets, all derived from a resolver
pub struct Styles {
    pub text: Color,
    pub background: Color,
    pub tint: Color,
    pub muted: Color,
}

impl Styles {
    pub fn from_resolver(resolver: &dyn ColorResolver) -> Self {
        Self {
            text: resolver.resolve_color(ColorRole::Text, None),
            background: resolver.resolve_color(ColorRole::Background, None),
            tint: resolver.resolve_color(ColorRole::Tint, None),
            muted: resolver.resolve_color(ColorRole::Icon, None),
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn placeholder(&self) -> Style {
        self.base().fg(self.muted).add_modifier(Modifier::ITALIC)
    }

    pub fn subtitle(&self) -> Style {
        self.base().add_modifier(Modifier::BOLD)
    }

    pub fn border(&self, is_focused: bool) -> Style {
        if is_focused {
            self.base().fg(self.tint).add_modifier(Modifier::BOLD)
        } else {
            self.base()
        }
    }
}
