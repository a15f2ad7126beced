//! Navigation menu color vocabulary: color modes, item states and semantic tokens.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::RgbaColor;

/// Which derivation algorithm the menu palette uses.
///
/// The configured default lives in
/// [`crate::config::NavigationConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Fixed light chrome; the brand color is used for accents only
    Light,
    /// Whole chrome derived from the brand color
    Theme,
}

impl ColorMode {
    /// All modes, in display order.
    pub const ALL: [Self; 2] = [Self::Light, Self::Theme];

    /// Lowercase identifier used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Theme => "theme",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "theme" => Ok(Self::Theme),
            other => anyhow::bail!("Unknown color style '{other}'. Expected 'light' or 'theme'"),
        }
    }
}

/// Interaction state of a menu item, used when picking its text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemState {
    /// Inactive item, not hovered
    #[default]
    Default,
    /// Selected or hovered item
    Active,
}

/// Semantic color tokens resolved by the host design system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    /// Subtle neutral background used for hovered items on light chrome
    BackgroundSubtle,
}

impl ColorToken {
    /// CSS custom property name of the token.
    #[must_use]
    pub const fn css_variable(self) -> &'static str {
        match self {
            Self::BackgroundSubtle => "--ads-v2-color-bg-subtle",
        }
    }

    /// Concrete color used when the host does not define the token.
    #[must_use]
    pub const fn fallback(self) -> RgbaColor {
        match self {
            Self::BackgroundSubtle => RgbaColor::new(0xF8, 0xFA, 0xFC),
        }
    }
}

/// Fixed palette constants shared by the menu chrome.
pub mod colors {
    use crate::models::RgbaColor;

    /// Pure white
    pub const WHITE: RgbaColor = RgbaColor::WHITE;
    /// Pure black
    pub const BLACK: RgbaColor = RgbaColor::BLACK;
    /// Very light gray used for neutral hover states
    pub const GRAY_100: RgbaColor = RgbaColor::new(0xF3, 0xF4, 0xF6);
    /// Near-black neutral used for text on light chrome
    pub const GREY_9: RgbaColor = RgbaColor::new(0x19, 0x19, 0x19);
}

/// A derived menu color: either a concrete value or a design-system token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuColor {
    /// Concrete color
    Rgba(RgbaColor),
    /// Token resolved by the host at render time
    Token(ColorToken),
}

impl MenuColor {
    /// Returns the concrete color, substituting the token fallback if needed.
    #[must_use]
    pub const fn resolve(self) -> RgbaColor {
        match self {
            Self::Rgba(color) => color,
            Self::Token(token) => token.fallback(),
        }
    }

    /// Returns the concrete color if this is not a token.
    #[must_use]
    pub const fn as_rgba(self) -> Option<RgbaColor> {
        match self {
            Self::Rgba(color) => Some(color),
            Self::Token(_) => None,
        }
    }

    /// CSS value: a hex color or a `var(...)` reference with its fallback.
    #[must_use]
    pub fn to_css(self) -> String {
        match self {
            Self::Rgba(color) => color.to_css(),
            Self::Token(token) => format!(
                "var({}, {})",
                token.css_variable(),
                token.fallback().to_css()
            ),
        }
    }
}

impl From<RgbaColor> for MenuColor {
    fn from(color: RgbaColor) -> Self {
        Self::Rgba(color)
    }
}

impl From<ColorToken> for MenuColor {
    fn from(token: ColorToken) -> Self {
        Self::Token(token)
    }
}

impl fmt::Display for MenuColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Serialize for MenuColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}
