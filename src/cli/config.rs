//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{validate_app_slug, Config};
use crate::constants::{APP_BINARY_NAME, APP_NAME};
use crate::models::{ColorMode, RgbaColor};
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the configuration file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default color style (light or theme)
    #[arg(long, value_name = "MODE")]
    color_style: Option<String>,

    /// Default brand color as hex
    #[arg(long, value_name = "HEX")]
    brand_color: Option<String>,

    /// Application slug used in page paths
    #[arg(long, value_name = "SLUG")]
    app_slug: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => print_config_path(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.color_style.is_none() && self.brand_color.is_none() && self.app_slug.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --color-style, --brand-color, or --app-slug",
            ));
        }

        // An unreadable file is reported, never replaced with defaults
        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(style) = &self.color_style {
            config.navigation.color_style = style
                .parse::<ColorMode>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(hex) = &self.brand_color {
            config.navigation.brand_color = RgbaColor::from_hex(hex)
                .map_err(|e| CliError::validation(format!("Invalid brand color: {e}")))?;
        }

        if let Some(slug) = &self.app_slug {
            validate_app_slug(slug).map_err(|e| CliError::validation(e.to_string()))?;
            config.routes.app_slug.clone_from(slug);
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn print_config_path() -> CliResult<()> {
    let path = Config::config_file_path()
        .map_err(|e| CliError::io(format!("Failed to resolve configuration path: {e:#}")))?;
    println!("{}", path.display());
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("{APP_NAME} Configuration");
    println!("=====================");
    println!();

    println!("Navigation:");
    println!("  Color Style: {}", config.navigation.color_style);
    println!("  Brand Color: {}", config.navigation.brand_color);
    println!();

    println!("Routes:");
    println!("  App Slug: {}", config.routes.app_slug);
    println!();

    if !Config::exists() {
        println!("No configuration file yet. Save one with `{APP_BINARY_NAME} config set`.");
    }
}
