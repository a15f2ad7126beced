//! RGBA color handling with hex parsing, HSL conversion and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hue/saturation/lightness view of a color, with alpha.
///
/// - `h`: 0.0-360.0 degrees (0.0 for grayscale)
/// - `s`, `l`, `a`: 0.0-1.0
///
/// Values produced by arithmetic on an `Hsla` may fall outside these ranges;
/// [`RgbaColor::from_hsl`] clamps them back when converting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    /// Hue in degrees
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Lightness
    pub l: f64,
    /// Alpha (opacity)
    pub a: f64,
}

impl Hsla {
    /// Creates a new `Hsla` value.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }
}

/// RGBA color value with hex string representation.
///
/// Represents a color using red, green, blue and alpha channels (0-255 each).
/// Supports parsing from hex strings (#RGB, #RRGGBB, #RRGGBBAA) and serializes
/// as a CSS hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbaColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0-255, 255 = opaque)
    pub a: u8,
}

impl RgbaColor {
    /// Pure white (#FFFFFF).
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Pure black (#000000).
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Creates a new opaque `RgbaColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a new `RgbaColor` with an explicit alpha channel.
    #[must_use]
    pub const fn with_channels(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses an `RgbaColor` from a hex string.
    ///
    /// Supports formats: "#RGB", "#RRGGBB", "#RRGGBBAA" (the leading '#' is optional)
    ///
    /// # Examples
    ///
    /// ```
    /// use navmenu::models::RgbaColor;
    ///
    /// let color = RgbaColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbaColor::new(255, 0, 0));
    ///
    /// let color = RgbaColor::from_hex("0f0").unwrap();
    /// assert_eq!(color, RgbaColor::new(0, 255, 0));
    ///
    /// let color = RgbaColor::from_hex("#0000FF80").unwrap();
    /// assert_eq!(color.a, 0x80);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected hex digits only");
        }

        let channel = |range: std::ops::Range<usize>, name: &str| -> Result<u8> {
            u8::from_str_radix(&hex[range], 16)
                .context(format!("Invalid {name} channel in hex color '{hex}'"))
        };

        match hex.len() {
            3 => {
                // Each shorthand digit expands to a doubled pair (e.g. "f" -> "ff")
                let expand = |idx: usize, name: &str| -> Result<u8> {
                    let digit = channel(idx..idx + 1, name)?;
                    Ok(digit * 17)
                };
                Ok(Self::new(
                    expand(0, "red")?,
                    expand(1, "green")?,
                    expand(2, "blue")?,
                ))
            }
            6 => Ok(Self::new(
                channel(0..2, "red")?,
                channel(2..4, "green")?,
                channel(4..6, "blue")?,
            )),
            8 => Ok(Self::with_channels(
                channel(0..2, "red")?,
                channel(2..4, "green")?,
                channel(4..6, "blue")?,
                channel(6..8, "alpha")?,
            )),
            _ => anyhow::bail!(
                "Invalid hex color format '{hex}'. Expected 3, 6 or 8 hex digits (RGB, RRGGBB or RRGGBBAA)"
            ),
        }
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// The alpha channel is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use navmenu::models::RgbaColor;
    ///
    /// let color = RgbaColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to a hex string in the format "#RRGGBBAA" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use navmenu::models::RgbaColor;
    ///
    /// let color = RgbaColor::with_channels(255, 0, 0, 128);
    /// assert_eq!(color.to_hex8(), "#FF000080");
    /// ```
    #[must_use]
    pub fn to_hex8(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            self.r, self.g, self.b, self.a
        )
    }

    /// Returns the CSS representation: "#RRGGBB" when opaque, "#RRGGBBAA" otherwise.
    #[must_use]
    pub fn to_css(&self) -> String {
        if self.is_opaque() {
            self.to_hex()
        } else {
            self.to_hex8()
        }
    }

    /// Returns the alpha channel as a fraction (0.0-1.0).
    #[must_use]
    pub fn alpha(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Returns true if the alpha channel is fully opaque.
    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Returns the same color with the alpha channel set to the given fraction.
    ///
    /// The fraction is clamped to 0.0-1.0.
    #[must_use]
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..*self
        }
    }

    /// Returns the same color, fully opaque.
    #[must_use]
    pub const fn opaque(&self) -> Self {
        Self::new(self.r, self.g, self.b)
    }

    /// Converts the color to HSL (Hue, Saturation, Lightness) plus alpha.
    ///
    /// # Examples
    ///
    /// ```
    /// use navmenu::models::RgbaColor;
    ///
    /// let red = RgbaColor::new(255, 0, 0);
    /// let hsl = red.to_hsl();
    /// assert!((hsl.h - 0.0).abs() < 0.01);
    /// assert!((hsl.s - 1.0).abs() < 0.01);
    /// assert!((hsl.l - 0.5).abs() < 0.01);
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> Hsla {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic
            return Hsla::new(0.0, 0.0, l, self.alpha());
        }

        let delta = max - min;
        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let h = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsla::new(h * 60.0, s, l, self.alpha())
    }

    /// Creates an `RgbaColor` from HSL plus alpha.
    ///
    /// Saturation, lightness and alpha are clamped to 0.0-1.0 and the hue is
    /// wrapped into 0.0-360.0, so lightness arithmetic that overshoots
    /// saturates at black or white.
    ///
    /// # Examples
    ///
    /// ```
    /// use navmenu::models::{Hsla, RgbaColor};
    ///
    /// let green = RgbaColor::from_hsl(Hsla::new(120.0, 1.0, 0.5, 1.0));
    /// assert_eq!(green, RgbaColor::new(0, 255, 0));
    ///
    /// let white = RgbaColor::from_hsl(Hsla::new(0.0, 0.0, 1.4, 1.0));
    /// assert_eq!(white, RgbaColor::WHITE);
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn from_hsl(hsla: Hsla) -> Self {
        let h = hsla.h.rem_euclid(360.0) / 360.0;
        let s = hsla.s.clamp(0.0, 1.0);
        let l = hsla.l.clamp(0.0, 1.0);

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        let to_byte = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::with_channels(to_byte(r), to_byte(g), to_byte(b), to_byte(hsla.a.clamp(0.0, 1.0)))
    }

    /// Returns a color with lightness increased by `amount` (0.0-1.0 scale).
    ///
    /// # Examples
    ///
    /// ```
    /// use navmenu::models::RgbaColor;
    ///
    /// let gray = RgbaColor::new(128, 128, 128);
    /// assert!(gray.lighten(0.1).to_hsl().l > gray.to_hsl().l);
    /// ```
    #[must_use]
    pub fn lighten(&self, amount: f64) -> Self {
        let mut hsl = self.to_hsl();
        hsl.l += amount;
        Self::from_hsl(hsl)
    }

    /// Returns a color with lightness decreased by `amount` (0.0-1.0 scale).
    #[must_use]
    pub fn darken(&self, amount: f64) -> Self {
        self.lighten(-amount)
    }

    /// Perceived brightness using the HSP model (0.0-255.0).
    ///
    /// `sqrt(0.299 r² + 0.587 g² + 0.114 b²)`
    #[must_use]
    pub fn perceived_brightness(&self) -> f64 {
        let r = f64::from(self.r);
        let g = f64::from(self.g);
        let b = f64::from(self.b);
        (0.299 * r * r + 0.587 * g * g + 0.114 * b * b).sqrt()
    }

    /// YIQ brightness (0.0-255.0).
    ///
    /// `(299 r + 587 g + 114 b) / 1000`
    #[must_use]
    pub fn yiq_brightness(&self) -> f64 {
        (f64::from(self.r) * 299.0 + f64::from(self.g) * 587.0 + f64::from(self.b) * 114.0)
            / 1000.0
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

impl FromStr for RgbaColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for RgbaColor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<RgbaColor> for String {
    fn from(color: RgbaColor) -> Self {
        color.to_css()
    }
}

impl From<Hsla> for RgbaColor {
    fn from(hsla: Hsla) -> Self {
        Self::from_hsl(hsla)
    }
}

impl Default for RgbaColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::WHITE
    }
}
