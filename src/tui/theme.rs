use ratatui::style::Color;

use crate::model::{Settings, ThemePref};

/// Color palette for the TUI. The persisted `theme` setting picks the
/// dark or light variant on startup; toggling swaps it in place.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub selection_bg: Color,
    pub green: Color,
    pub red: Color,
    pub yellow: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x12, 0x12, 0x1A),
            text: Color::Rgb(0xC8, 0xC8, 0xD8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6A, 0x6A, 0x80),
            highlight: Color::Rgb(0x4D, 0xA6, 0xFF),
            selection_bg: Color::Rgb(0x2A, 0x3A, 0x55),
            green: Color::Rgb(0x44, 0xDD, 0x88),
            red: Color::Rgb(0xFF, 0x55, 0x55),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
        }
    }

    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xF5, 0xF5, 0xF0),
            text: Color::Rgb(0x30, 0x30, 0x38),
            text_bright: Color::Rgb(0x00, 0x00, 0x00),
            dim: Color::Rgb(0x90, 0x90, 0xA0),
            highlight: Color::Rgb(0x0A, 0x5A, 0xC2),
            selection_bg: Color::Rgb(0xD0, 0xDC, 0xEE),
            green: Color::Rgb(0x1A, 0x8A, 0x4A),
            red: Color::Rgb(0xC0, 0x20, 0x20),
            yellow: Color::Rgb(0xB0, 0x80, 0x00),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        match settings.theme {
            ThemePref::Dark => Theme::dark(),
            ThemePref::Light => Theme::light(),
        }
    }
}
