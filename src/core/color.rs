//! Color-name resolution for color-argument commands.
//!
//! Two entry points: [`resolve_color_strict`] reports "no match" with `None`,
//! [`resolve_color`] always yields a color and falls back to green.

use bevy::color::Color;

use super::ConsoleError;

/// The color substituted for unknown names by [`resolve_color`].
pub const FALLBACK_COLOR: ColorToken = ColorToken::Green;

/// A named console color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Black,
    Blue,
    Brown,
    Cyan,
    DarkGray,
    DarkText,
    Gray,
    Green,
    LightGray,
    LightText,
    Magenta,
    Orange,
    Purple,
    Red,
    White,
    Yellow,
}

impl ColorToken {
    /// Every token, in vocabulary order.
    pub const ALL: [ColorToken; 16] = [
        ColorToken::Black,
        ColorToken::Blue,
        ColorToken::Brown,
        ColorToken::Cyan,
        ColorToken::DarkGray,
        ColorToken::DarkText,
        ColorToken::Gray,
        ColorToken::Green,
        ColorToken::LightGray,
        ColorToken::LightText,
        ColorToken::Magenta,
        ColorToken::Orange,
        ColorToken::Purple,
        ColorToken::Red,
        ColorToken::White,
        ColorToken::Yellow,
    ];

    /// The command-line name of this token.
    pub fn name(&self) -> &'static str {
        match self {
            ColorToken::Black => "black",
            ColorToken::Blue => "blue",
            ColorToken::Brown => "brown",
            ColorToken::Cyan => "cyan",
            ColorToken::DarkGray => "darkgray",
            ColorToken::DarkText => "darktext",
            ColorToken::Gray => "gray",
            ColorToken::Green => "green",
            ColorToken::LightGray => "lightgray",
            ColorToken::LightText => "lighttext",
            ColorToken::Magenta => "magenta",
            ColorToken::Orange => "orange",
            ColorToken::Purple => "purple",
            ColorToken::Red => "red",
            ColorToken::White => "white",
            ColorToken::Yellow => "yellow",
        }
    }

    /// The sRGB value drawn for this token.
    pub fn color(&self) -> Color {
        match self {
            ColorToken::Black => Color::srgb(0.0, 0.0, 0.0),
            ColorToken::Blue => Color::srgb(0.0, 0.0, 1.0),
            ColorToken::Brown => Color::srgb(0.6, 0.4, 0.2),
            ColorToken::Cyan => Color::srgb(0.0, 1.0, 1.0),
            ColorToken::DarkGray => Color::srgb(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0),
            ColorToken::DarkText => Color::srgb(0.0, 0.0, 0.0),
            ColorToken::Gray => Color::srgb(0.5, 0.5, 0.5),
            ColorToken::Green => Color::srgb(0.0, 1.0, 0.0),
            ColorToken::LightGray => Color::srgb(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0),
            ColorToken::LightText => Color::srgba(1.0, 1.0, 1.0, 0.6),
            ColorToken::Magenta => Color::srgb(1.0, 0.0, 1.0),
            ColorToken::Orange => Color::srgb(1.0, 0.5, 0.0),
            ColorToken::Purple => Color::srgb(0.5, 0.0, 0.5),
            ColorToken::Red => Color::srgb(1.0, 0.0, 0.0),
            ColorToken::White => Color::srgb(1.0, 1.0, 1.0),
            ColorToken::Yellow => Color::srgb(1.0, 1.0, 0.0),
        }
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ColorToken> for Color {
    fn from(token: ColorToken) -> Self {
        token.color()
    }
}

/// Look up a color name, case-insensitively. `None` when nothing matches.
pub fn resolve_color_strict(name: &str) -> Option<ColorToken> {
    ColorToken::ALL
        .into_iter()
        .find(|token| token.name().eq_ignore_ascii_case(name))
}

/// Result of a fallback-mode lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedColor {
    /// The color to apply.
    pub token: ColorToken,
    /// Set when the name was unknown and [`FALLBACK_COLOR`] was substituted.
    pub error: Option<ConsoleError>,
}

/// Look up a color name, substituting [`FALLBACK_COLOR`] for unknown names.
///
/// A missing argument resolves like an unknown empty name.
pub fn resolve_color(name: Option<&str>) -> ResolvedColor {
    let name = name.unwrap_or("");
    match resolve_color_strict(name) {
        Some(token) => ResolvedColor { token, error: None },
        None => ResolvedColor {
            token: FALLBACK_COLOR,
            error: Some(ConsoleError::UnresolvedColor {
                token: name.to_string(),
                fallback: FALLBACK_COLOR,
            }),
        },
    }
}
