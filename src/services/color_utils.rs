//! Contrast and hover primitives shared by menu color derivation.

use crate::models::{colors, RgbaColor};

/// HSP brightness above which a color counts as light (midpoint of 0-255).
const LIGHT_COLOR_THRESHOLD: f64 = 127.5;

/// YIQ brightness above which black text reads better than white.
const GRAYSCALE_CONTRAST_THRESHOLD: f64 = 125.0;

/// Lightness step applied when darkening a color for its hover state.
const HOVER_DARKEN_AMOUNT: f64 = 0.1;

/// Lightness of the pastel tint used on light backgrounds.
pub const PASTEL_LIGHTNESS: f64 = 0.93;

/// Returns true if the color is perceived as light.
///
/// # Examples
///
/// ```
/// use navmenu::models::RgbaColor;
/// use navmenu::services::color_utils::is_light_color;
///
/// assert!(is_light_color(RgbaColor::new(255, 255, 0)));
/// assert!(!is_light_color(RgbaColor::new(0, 0, 128)));
/// ```
#[must_use]
pub fn is_light_color(color: RgbaColor) -> bool {
    color.perceived_brightness() > LIGHT_COLOR_THRESHOLD
}

/// Black or white, whichever contrasts with `color`.
///
/// The YIQ brightness is rounded to the nearest integer before it is compared
/// with the threshold.
///
/// # Examples
///
/// ```
/// use navmenu::models::{colors, RgbaColor};
/// use navmenu::services::color_utils::complementary_grayscale;
///
/// assert_eq!(complementary_grayscale(RgbaColor::new(250, 250, 210)), colors::BLACK);
/// assert_eq!(complementary_grayscale(RgbaColor::new(30, 30, 90)), colors::WHITE);
/// ```
#[must_use]
pub fn complementary_grayscale(color: RgbaColor) -> RgbaColor {
    if color.yiq_brightness().round() > GRAYSCALE_CONTRAST_THRESHOLD {
        colors::BLACK
    } else {
        colors::WHITE
    }
}

/// Keeps hue and saturation and replaces lightness, producing a tint.
#[must_use]
pub fn lighten_color(color: RgbaColor, lightness: f64) -> RgbaColor {
    let mut hsl = color.to_hsl();
    hsl.l = lightness;
    RgbaColor::from_hsl(hsl)
}

/// Hover-state variant of a color.
///
/// `light_background = Some(true)` yields a pastel tint of the color, for
/// controls drawn on light surfaces. `None` and `Some(false)` darken the
/// color by a fixed lightness step. Alpha is preserved.
#[must_use]
pub fn hover_color(color: RgbaColor, light_background: Option<bool>) -> RgbaColor {
    match light_background {
        Some(true) => lighten_color(color, PASTEL_LIGHTNESS),
        Some(false) | None => color.darken(HOVER_DARKEN_AMOUNT),
    }
}
