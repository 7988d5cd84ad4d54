//! Colour themes for the selector chrome.
//!
//! A [`Theme`] is a plain value carried by the selector's configuration;
//! there is no process-global theme. Hosts that already have a palette can
//! build a `Theme` from it instead of using the built-in pairs.

use serde::{Deserialize, Serialize};

use crate::colour::Colour;

/// Built-in theme choices, as stored in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Get the display name for this theme.
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
        }
    }
}

/// A complete colour palette for the selector chrome.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Dialog background.
    pub background: Colour,
    /// Panel background behind the picker surfaces.
    pub surface: Colour,
    /// Entry field background.
    pub input_bg: Colour,
    /// Entry field background when focused.
    pub input_bg_focused: Colour,
    /// Default border colour.
    pub border: Colour,
    /// Border colour of the focused field.
    pub border_focused: Colour,
    /// Primary text colour (host-rendered labels and field text).
    pub text_primary: Colour,
    /// Secondary text colour (unit suffixes).
    pub text_secondary: Colour,
    /// Button background.
    pub button_bg: Colour,
    /// Button background on hover.
    pub button_hover: Colour,
    /// Button background when pressed.
    pub button_active: Colour,
}

impl Theme {
    /// The dark palette.
    pub fn dark() -> Self {
        Self {
            background: Colour::new(30, 30, 34),
            surface: Colour::new(38, 38, 43),
            input_bg: Colour::new(38, 38, 43),
            input_bg_focused: Colour::new(46, 46, 51),
            border: Colour::new(64, 64, 70),
            border_focused: Colour::new(86, 156, 214),
            text_primary: Colour::new(230, 230, 230),
            text_secondary: Colour::new(160, 160, 160),
            button_bg: Colour::new(51, 51, 61),
            button_hover: Colour::new(71, 71, 82),
            button_active: Colour::new(86, 156, 214),
        }
    }

    /// The light palette.
    pub fn light() -> Self {
        Self {
            background: Colour::new(240, 240, 242),
            surface: Colour::new(250, 250, 252),
            input_bg: Colour::new(255, 255, 255),
            input_bg_focused: Colour::new(255, 255, 255),
            border: Colour::new(180, 180, 186),
            border_focused: Colour::new(0, 110, 200),
            text_primary: Colour::new(20, 20, 20),
            text_secondary: Colour::new(100, 100, 100),
            button_bg: Colour::new(225, 225, 229),
            button_hover: Colour::new(210, 210, 216),
            button_active: Colour::new(0, 110, 200),
        }
    }

    /// Resolve a stored theme choice into a palette.
    pub fn from_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Self::dark(),
            ThemeKind::Light => Self::light(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
