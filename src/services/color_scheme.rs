//! Adaptive color scheme for the application navigation menu.
//!
//! Every derived color is a pure function of a brand color and a
//! [`ColorMode`]:
//!
//! - [`ColorMode::Light`] keeps the chrome light and neutral. Several fields are
//!   fixed tokens, and the rest branch on whether the brand color is light or
//!   dark so that items stay legible on the white container.
//! - [`ColorMode::Theme`] paints the chrome with the brand color and relies on
//!   [`complementary_grayscale`] for contrast.
//!
//! [`MenuColorScheme::derive`] assembles the whole palette; the individual
//! functions are public for callers that only need one field.

use serde::Serialize;

use crate::models::{colors, ColorMode, ColorToken, ItemState, MenuColor, RgbaColor};
use crate::services::color_utils::{complementary_grayscale, hover_color, is_light_color};

/// Lightness removed from a light brand color for the active item background.
const ACTIVE_DARKEN_AMOUNT: f64 = 0.1;

/// Lightness added to a dark brand color for the active item background and
/// for active text on light brand colors.
const ACTIVE_LIGHTEN_AMOUNT: f64 = 0.35;

/// Opacity of the active background for dark brand colors.
const ACTIVE_DARK_ALPHA: f64 = 0.3;

/// Lightness removed from a dark brand color for active item text.
const TEXT_DARKEN_AMOUNT: f64 = 0.1;

/// Upper lightness bound (inclusive) of near-black brand colors.
const NEAR_BLACK_MAX_LIGHTNESS: f64 = 0.05;

/// Upper lightness bound (inclusive) of very dark brand colors.
const VERY_DARK_MAX_LIGHTNESS: f64 = 0.15;

/// Lightness band of a dark brand color, used to pick active text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DarkShade {
    /// Active background is nearly transparent black; only black text works
    NearBlack,
    /// Too dark to darken further; fall back to black/white
    VeryDark,
    /// Dark enough for a darkened variant of itself
    Dark,
}

fn dark_shade(lightness: f64) -> DarkShade {
    if lightness <= NEAR_BLACK_MAX_LIGHTNESS {
        DarkShade::NearBlack
    } else if lightness <= VERY_DARK_MAX_LIGHTNESS {
        DarkShade::VeryDark
    } else {
        DarkShade::Dark
    }
}

/// Background of the selected menu item.
#[must_use]
pub fn menu_item_background_active(color: RgbaColor, mode: ColorMode) -> MenuColor {
    match mode {
        ColorMode::Light => {
            if is_light_color(color) {
                color.darken(ACTIVE_DARKEN_AMOUNT).opaque().into()
            } else {
                let mut hsl = color.to_hsl();
                hsl.l += ACTIVE_LIGHTEN_AMOUNT;
                hsl.a = ACTIVE_DARK_ALPHA;
                RgbaColor::from_hsl(hsl).into()
            }
        }
        ColorMode::Theme => hover_color(color, None).into(),
    }
}

/// Background of a hovered menu item.
#[must_use]
pub fn menu_item_background_hover(color: RgbaColor, mode: ColorMode) -> MenuColor {
    match mode {
        ColorMode::Light => ColorToken::BackgroundSubtle.into(),
        ColorMode::Theme => hover_color(color, None).opaque().into(),
    }
}

/// Text color of a menu item in the given state.
#[must_use]
pub fn menu_item_text_color(color: RgbaColor, mode: ColorMode, state: ItemState) -> MenuColor {
    match (mode, state) {
        (ColorMode::Theme, _) => complementary_grayscale(color).into(),
        (ColorMode::Light, ItemState::Default) => colors::GREY_9.into(),
        (ColorMode::Light, ItemState::Active) => light_mode_active_text(color).into(),
    }
}

fn light_mode_active_text(color: RgbaColor) -> RgbaColor {
    if is_light_color(color) {
        return color.lighten(ACTIVE_LIGHTEN_AMOUNT).opaque();
    }

    match dark_shade(color.to_hsl().l) {
        DarkShade::NearBlack => colors::BLACK,
        DarkShade::VeryDark => complementary_grayscale(color),
        DarkShade::Dark => color.darken(TEXT_DARKEN_AMOUNT).opaque(),
    }
}

/// Background of the menu container.
#[must_use]
pub fn menu_container_background(color: RgbaColor, mode: ColorMode) -> MenuColor {
    match mode {
        ColorMode::Light => colors::WHITE.into(),
        ColorMode::Theme => color.into(),
    }
}

/// Color of the application name shown in the menu header.
#[must_use]
pub fn application_name_text_color(color: RgbaColor, mode: ColorMode) -> MenuColor {
    match mode {
        ColorMode::Light => colors::GREY_9.into(),
        ColorMode::Theme => complementary_grayscale(color).into(),
    }
}

/// Colors of the sign-in button shown in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInStyles {
    /// Button background
    pub background: RgbaColor,
    /// Button background while hovered
    pub background_hover: RgbaColor,
    /// Button label color
    pub text_color: RgbaColor,
}

impl Default for SignInStyles {
    fn default() -> Self {
        Self {
            background: colors::WHITE,
            background_hover: colors::GRAY_100,
            text_color: colors::BLACK,
        }
    }
}

/// Sign-in button colors for the given brand color and mode.
#[must_use]
pub fn sign_in_button_styles(color: RgbaColor, mode: ColorMode) -> SignInStyles {
    let mut styles = SignInStyles::default();

    match mode {
        ColorMode::Light => {
            styles.background = color;
            styles.text_color = complementary_grayscale(color);
        }
        ColorMode::Theme => {
            styles.background = complementary_grayscale(color);
            styles.text_color = if is_light_color(color) {
                colors::WHITE
            } else {
                color
            };
        }
    }

    styles.background_hover = hover_color(styles.background, Some(false));
    styles
}

/// The full derived palette of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuColorScheme {
    /// Background of the selected item
    pub background_active: MenuColor,
    /// Background of a hovered item
    pub background_hover: MenuColor,
    /// Text of the selected or hovered item
    pub text_color: MenuColor,
    /// Text of inactive items
    pub text_color_inactive: MenuColor,
    /// Menu container background
    pub container_background: MenuColor,
    /// Application name in the header
    pub app_name_text_color: MenuColor,
    /// Sign-in button
    pub sign_in: SignInStyles,
}

impl MenuColorScheme {
    /// Derives every menu color from a brand color and mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use navmenu::models::{ColorMode, MenuColor, RgbaColor};
    /// use navmenu::services::MenuColorScheme;
    ///
    /// let brand = RgbaColor::from_hex("#553DE9").unwrap();
    /// let scheme = MenuColorScheme::derive(brand, ColorMode::Theme);
    /// assert_eq!(scheme.container_background, MenuColor::Rgba(brand));
    /// ```
    #[must_use]
    pub fn derive(color: RgbaColor, mode: ColorMode) -> Self {
        Self {
            background_active: menu_item_background_active(color, mode),
            background_hover: menu_item_background_hover(color, mode),
            text_color: menu_item_text_color(color, mode, ItemState::Active),
            text_color_inactive: menu_item_text_color(color, mode, ItemState::Default),
            container_background: menu_container_background(color, mode),
            app_name_text_color: application_name_text_color(color, mode),
            sign_in: sign_in_button_styles(color, mode),
        }
    }

    /// The palette as CSS custom properties, `--{prefix}-…` names with values.
    #[must_use]
    pub fn css_variables(&self, prefix: &str) -> Vec<(String, String)> {
        let entries: [(&str, String); 9] = [
            ("background-active", self.background_active.to_css()),
            ("background-hover", self.background_hover.to_css()),
            ("text-color", self.text_color.to_css()),
            ("text-color-inactive", self.text_color_inactive.to_css()),
            ("container-background", self.container_background.to_css()),
            ("app-name-text-color", self.app_name_text_color.to_css()),
            ("sign-in-background", self.sign_in.background.to_css()),
            ("sign-in-background-hover", self.sign_in.background_hover.to_css()),
            ("sign-in-text-color", self.sign_in.text_color.to_css()),
        ];

        entries
            .into_iter()
            .map(|(name, value)| (format!("--{prefix}-{name}"), value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Light brand color (orange)
    fn light_brand() -> RgbaColor {
        RgbaColor::new(0xF5, 0xA6, 0x23)
    }

    /// Dark brand color (purple), lightness ~0.58
    fn dark_brand() -> RgbaColor {
        RgbaColor::new(0x55, 0x3D, 0xE9)
    }

    fn rgba(color: MenuColor) -> RgbaColor {
        color.as_rgba().expect("expected a concrete color")
    }

    #[test]
    fn test_fixture_classification() {
        assert!(is_light_color(light_brand()));
        assert!(!is_light_color(dark_brand()));
    }

    #[test]
    fn test_dark_shade_boundaries() {
        assert_eq!(dark_shade(0.0), DarkShade::NearBlack);
        assert_eq!(dark_shade(0.05), DarkShade::NearBlack);
        assert_eq!(dark_shade(0.050_001), DarkShade::VeryDark);
        assert_eq!(dark_shade(0.06), DarkShade::VeryDark);
        assert_eq!(dark_shade(0.15), DarkShade::VeryDark);
        assert_eq!(dark_shade(0.150_001), DarkShade::Dark);
    }

    #[test]
    fn test_active_background_light_mode_light_color() {
        let base = light_brand();
        let active = rgba(menu_item_background_active(base, ColorMode::Light));

        assert!(active.is_opaque());
        assert!((active.to_hsl().l - (base.to_hsl().l - 0.1)).abs() < 0.01);
    }

    #[test]
    fn test_active_background_light_mode_dark_color() {
        let base = dark_brand();
        let active = rgba(menu_item_background_active(base, ColorMode::Light));

        assert!((active.alpha() - 0.3).abs() < 0.01);
        assert!((active.to_hsl().l - (base.to_hsl().l + 0.35)).abs() < 0.01);
    }

    #[test]
    fn test_active_and_hover_collapse_in_theme_mode() {
        let base = dark_brand();
        assert_eq!(
            menu_item_background_active(base, ColorMode::Theme),
            menu_item_background_hover(base, ColorMode::Theme)
        );
    }

    #[test]
    fn test_hover_background_light_mode_is_token() {
        for base in [light_brand(), dark_brand(), colors::BLACK] {
            assert_eq!(
                menu_item_background_hover(base, ColorMode::Light),
                MenuColor::Token(ColorToken::BackgroundSubtle)
            );
        }
    }

    #[test]
    fn test_text_color_light_mode_default_state() {
        for base in [light_brand(), dark_brand()] {
            assert_eq!(
                menu_item_text_color(base, ColorMode::Light, ItemState::Default),
                MenuColor::Rgba(colors::GREY_9)
            );
        }
    }

    #[test]
    fn test_text_color_light_mode_active_light_color() {
        let base = light_brand();
        let text = rgba(menu_item_text_color(base, ColorMode::Light, ItemState::Active));
        assert!(text.is_opaque());
        assert!((text.to_hsl().l - (base.to_hsl().l + 0.35).min(1.0)).abs() < 0.01);
    }

    #[test]
    fn test_text_color_light_mode_dark_bands() {
        // l = 25/510 ~ 0.049
        let near_black = RgbaColor::new(20, 5, 5);
        assert_eq!(
            menu_item_text_color(near_black, ColorMode::Light, ItemState::Active),
            MenuColor::Rgba(colors::BLACK)
        );

        // l = 50/510 ~ 0.098
        let very_dark = RgbaColor::new(40, 20, 10);
        assert_eq!(
            menu_item_text_color(very_dark, ColorMode::Light, ItemState::Active),
            MenuColor::Rgba(complementary_grayscale(very_dark))
        );
        assert_eq!(complementary_grayscale(very_dark), colors::WHITE);

        let base = dark_brand();
        let text = rgba(menu_item_text_color(base, ColorMode::Light, ItemState::Active));
        assert!((text.to_hsl().l - (base.to_hsl().l - 0.1)).abs() < 0.01);
    }

    #[test]
    fn test_text_color_theme_mode_ignores_state() {
        let base = light_brand();
        let expected = MenuColor::Rgba(complementary_grayscale(base));
        assert_eq!(menu_item_text_color(base, ColorMode::Theme, ItemState::Default), expected);
        assert_eq!(menu_item_text_color(base, ColorMode::Theme, ItemState::Active), expected);
    }

    #[test]
    fn test_container_background() {
        for base in [light_brand(), dark_brand(), RgbaColor::with_channels(1, 2, 3, 4)] {
            assert_eq!(
                menu_container_background(base, ColorMode::Light),
                MenuColor::Rgba(colors::WHITE)
            );
            assert_eq!(
                menu_container_background(base, ColorMode::Theme),
                MenuColor::Rgba(base)
            );
        }
    }

    #[test]
    fn test_application_name_text_color() {
        let base = dark_brand();
        assert_eq!(
            application_name_text_color(base, ColorMode::Light),
            MenuColor::Rgba(colors::GREY_9)
        );
        assert_eq!(
            application_name_text_color(base, ColorMode::Theme),
            MenuColor::Rgba(colors::WHITE)
        );
    }

    #[test]
    fn test_sign_in_light_mode() {
        let base = dark_brand();
        let styles = sign_in_button_styles(base, ColorMode::Light);

        assert_eq!(styles.background, base);
        assert_eq!(styles.text_color, colors::WHITE);
        assert_eq!(styles.background_hover, hover_color(base, Some(false)));
    }

    #[test]
    fn test_sign_in_theme_mode() {
        let light = light_brand();
        let styles = sign_in_button_styles(light, ColorMode::Theme);
        assert_eq!(styles.background, colors::BLACK);
        assert_eq!(styles.text_color, colors::WHITE);
        assert_eq!(styles.background_hover, colors::BLACK);

        let dark = dark_brand();
        let styles = sign_in_button_styles(dark, ColorMode::Theme);
        assert_eq!(styles.background, colors::WHITE);
        assert_eq!(styles.text_color, dark);
        assert_eq!(styles.background_hover, colors::WHITE.darken(0.1));
    }

    #[test]
    fn test_derive_is_deterministic() {
        for mode in ColorMode::ALL {
            assert_eq!(
                MenuColorScheme::derive(dark_brand(), mode),
                MenuColorScheme::derive(dark_brand(), mode)
            );
        }
    }

    #[test]
    fn test_scheme_serializes_camel_case() {
        let scheme = MenuColorScheme::derive(dark_brand(), ColorMode::Light);
        let json = serde_json::to_value(scheme).unwrap();

        assert_eq!(json["containerBackground"], "#FFFFFF");
        assert_eq!(json["appNameTextColor"], "#191919");
        assert_eq!(json["signIn"]["background"], "#553DE9");
        assert!(json["backgroundHover"].as_str().unwrap().starts_with("var("));
    }

    #[test]
    fn test_css_variables() {
        let scheme = MenuColorScheme::derive(dark_brand(), ColorMode::Theme);
        let vars = scheme.css_variables("nav");

        assert_eq!(vars.len(), 9);
        assert!(vars
            .iter()
            .any(|(name, value)| name == "--nav-container-background" && value == "#553DE9"));
    }
}
