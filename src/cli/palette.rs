//! Palette command: derives the navigation menu colors from a brand color.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::{ColorMode, RgbaColor};
use crate::services::color_utils::is_light_color;
use crate::services::MenuColorScheme;
use clap::Args;
use serde::Serialize;

/// Derive the navigation menu palette for a brand color
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Brand color as hex (#RGB, #RRGGBB or #RRGGBBAA). Defaults to the configured brand color
    #[arg(short, long, value_name = "HEX")]
    pub color: Option<String>,

    /// Color mode (light or theme). Defaults to the configured color style
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Prefix for CSS custom property names
    #[arg(long, value_name = "PREFIX", default_value = "menu")]
    pub prefix: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PaletteOutput {
    color: RgbaColor,
    mode: ColorMode,
    is_light: bool,
    scheme: MenuColorScheme,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        let (color, mode) = self.resolve_inputs()?;
        let scheme = MenuColorScheme::derive(color, mode);

        if self.json {
            return print_json(&PaletteOutput {
                color,
                mode,
                is_light: is_light_color(color),
                scheme,
            });
        }

        println!("Brand color: {color} ({mode})");
        println!();
        for (name, value) in scheme.css_variables(&self.prefix) {
            println!("{name}: {value};");
        }

        Ok(())
    }

    /// Explicit arguments win over the configuration file.
    fn resolve_inputs(&self) -> CliResult<(RgbaColor, ColorMode)> {
        let needs_config = self.color.is_none() || self.mode.is_none();
        let config = if needs_config {
            Config::load()
                .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?
        } else {
            Config::default()
        };

        let color = match &self.color {
            Some(hex) => RgbaColor::from_hex(hex)
                .map_err(|e| CliError::validation(format!("Invalid color: {e}")))?,
            None => config.navigation.brand_color,
        };

        let mode = match &self.mode {
            Some(mode) => mode
                .parse::<ColorMode>()
                .map_err(|e| CliError::validation(e.to_string()))?,
            None => config.navigation.color_style,
        };

        Ok((color, mode))
    }
}
