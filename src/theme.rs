use ratatui::style::Color;
use thiserror::Error;

// Palette of the chat surface. `color`, `font_color` and `icon_color` mirror
// the three host-provided theme overrides; anything unset falls back to the
// defaults below.

pub const ACCENT_RGB: (u8, u8, u8) = (200, 100, 0);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("invalid color `{0}`: expected #rrggbb")]
    InvalidColor(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    pub color: Option<Color>,
    pub font_color: Option<Color>,
    pub icon_color: Option<Color>,
}

impl Theme {
    pub fn accent(&self) -> Color {
        self.color.unwrap_or(Color::Rgb(ACCENT_RGB.0, ACCENT_RGB.1, ACCENT_RGB.2))
    }

    pub fn header_fg(&self) -> Color {
        self.font_color.unwrap_or(Color::White)
    }

    pub fn icon(&self) -> Color {
        self.icon_color.unwrap_or(Color::White)
    }
}

/// Parse `#rrggbb` (leading `#` optional).
pub fn parse_hex_color(value: &str) -> Result<Color, ThemeError> {
    let hex = value.trim().trim_start_matches('#');
    let invalid = || ThemeError::InvalidColor(value.to_string());
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };
    Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

// Fixed roles
pub fn surface_bg() -> Color {
    Color::Black
}
pub fn surface_fg() -> Color {
    Color::Gray
}
pub fn focus_bg() -> Color {
    Color::Gray
}
pub fn focus_fg() -> Color {
    Color::Black
}
pub fn muted_fg() -> Color {
    Color::DarkGray
}
pub fn badge_bg() -> Color {
    Color::Red
}
