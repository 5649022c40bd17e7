//! Appearance and layout overrides for the console panel.

use bevy::color::Color;
use bevy::math::Vec2;

use super::ColorToken;

/// Appearance and layout overrides.
///
/// Every field has a documented default; [`ConsoleSettings::reset`] restores
/// them all except [`live_environment`](Self::live_environment).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "persist", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "persist", serde(default))]
pub struct ConsoleSettings {
    /// Panel background. Default black.
    pub background_color: Color,
    /// Log text. Default green.
    pub text_color: Color,
    /// Input field border and text. Default white.
    pub text_field_color: Color,
    /// Warning lines. Default yellow.
    pub warning_color: Color,
    /// Error lines. Default red.
    pub error_color: Color,
    /// Background while diagnostic mode is on. Default light gray.
    pub diag_background_color: Color,
    /// Text while diagnostic mode is on. Default black.
    pub diag_text_color: Color,
    /// Diagnostic display mode.
    pub diagnostic_mode: bool,
    /// Fixed panel width; `None` lets the layout decide.
    pub width: Option<f32>,
    /// Fixed panel height; `None` lets the layout decide.
    pub height: Option<f32>,
    /// Fixed top-left corner; `None` docks to the orientation edge.
    pub position: Option<Vec2>,
    /// Allow dragging the panel around.
    pub move_enabled: bool,
    /// Show the fullscreen button.
    pub fullscreen_enabled: bool,
    /// Swipe gestures on the popover.
    pub gestures_enabled: bool,
    /// Show the clear button.
    pub clear_button_enabled: bool,
    /// Refuse setup entirely, for shipped builds.
    pub live_environment: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            background_color: ColorToken::Black.color(),
            text_color: ColorToken::Green.color(),
            text_field_color: ColorToken::White.color(),
            warning_color: ColorToken::Yellow.color(),
            error_color: ColorToken::Red.color(),
            diag_background_color: ColorToken::LightGray.color(),
            diag_text_color: ColorToken::Black.color(),
            diagnostic_mode: false,
            width: None,
            height: None,
            position: None,
            move_enabled: false,
            fullscreen_enabled: true,
            gestures_enabled: true,
            clear_button_enabled: true,
            live_environment: false,
        }
    }
}

impl ConsoleSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every default except the live-environment flag.
    pub fn reset(&mut self) {
        let live = self.live_environment;
        *self = Self {
            live_environment: live,
            ..Self::default()
        };
    }

    /// Background currently drawn, honoring diagnostic mode.
    pub fn effective_background(&self) -> Color {
        if self.diagnostic_mode {
            self.diag_background_color
        } else {
            self.background_color
        }
    }

    /// Text color currently drawn, honoring diagnostic mode.
    pub fn effective_text(&self) -> Color {
        if self.diagnostic_mode {
            self.diag_text_color
        } else {
            self.text_color
        }
    }

    /// Pin the panel to a rectangle.
    pub fn set_frame(&mut self, position: Vec2, size: Vec2) {
        self.position = Some(position);
        self.width = Some(size.x);
        self.height = Some(size.y);
    }

    /// Whether any size or position override is active.
    pub fn has_layout_override(&self) -> bool {
        self.width.is_some() || self.height.is_some() || self.position.is_some()
    }
}
