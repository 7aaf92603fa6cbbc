//! Light and dark color palettes.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color theme for the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

/// Colors used to draw one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Background fill.
    pub background: Color,
    /// Default text.
    pub text: Color,
    /// Titles and headings.
    pub accent: Color,
    /// Grid lines, empty cells, help text.
    pub muted: Color,
    /// X marks.
    pub x: Color,
    /// O marks.
    pub o: Color,
    /// Cursor cell background.
    pub cursor: Color,
    /// Winning line background.
    pub highlight: Color,
}

impl Theme {
    /// Switches between light and dark.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Returns the palette for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Color::White,
                text: Color::Black,
                accent: Color::Blue,
                muted: Color::Gray,
                x: Color::Blue,
                o: Color::Red,
                cursor: Color::LightYellow,
                highlight: Color::LightGreen,
            },
            Theme::Dark => Palette {
                background: Color::Black,
                text: Color::White,
                accent: Color::Cyan,
                muted: Color::DarkGray,
                x: Color::LightBlue,
                o: Color::LightRed,
                cursor: Color::DarkGray,
                highlight: Color::Green,
            },
        }
    }
}
