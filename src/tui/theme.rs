//! Colour palettes for the light and dark themes

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeMode;

/// Colours used to draw the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // Base colours
    pub background: Color,
    pub text: Color,
    pub text_muted: Color,

    // Input fields
    pub input_background: Color,
    pub input_text: Color,

    // Buttons and focus
    pub accent: Color,
    pub accent_text: Color,

    // Semantic colours
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
}

impl Palette {
    /// Palette for the given mode
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(0xf1, 0xf1, 0xf1),
            text: Color::Rgb(0x33, 0x33, 0x33),
            text_muted: Color::Rgb(0x77, 0x77, 0x77),
            input_background: Color::Rgb(0xff, 0xff, 0xff),
            input_text: Color::Rgb(0x33, 0x33, 0x33),
            accent: Color::Rgb(0x34, 0x98, 0xdb),
            accent_text: Color::White,
            positive: Color::Rgb(0x27, 0xae, 0x60),
            negative: Color::Rgb(0xc0, 0x39, 0x2b),
            warning: Color::Rgb(0xd3, 0x54, 0x00),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(0x2c, 0x3e, 0x50),
            text: Color::Rgb(0xec, 0xf0, 0xf1),
            text_muted: Color::Rgb(0x95, 0xa5, 0xa6),
            input_background: Color::Rgb(0x34, 0x49, 0x5e),
            input_text: Color::Rgb(0xec, 0xf0, 0xf1),
            accent: Color::Rgb(0x34, 0x98, 0xdb),
            accent_text: Color::White,
            positive: Color::Rgb(0x2e, 0xcc, 0x71),
            negative: Color::Rgb(0xe7, 0x4c, 0x3c),
            warning: Color::Rgb(0xf1, 0xc4, 0x0f),
        }
    }

    /// Plain text on the window background
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Dimmed text on the window background
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted).bg(self.background)
    }

    /// Text inside an input field
    pub fn input(&self) -> Style {
        Style::default()
            .fg(self.input_text)
            .bg(self.input_background)
    }

    /// A button or the focused element
    pub fn button(&self) -> Style {
        Style::default()
            .fg(self.accent_text)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Border of the focused element
    pub fn focus_border(&self) -> Style {
        Style::default().fg(self.accent).bg(self.background)
    }
}
