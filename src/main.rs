//! Navmenu - navigation menu palette and route tree tool
//!
//! Derives navigation menu colors from a brand color and builds the route
//! tree of an application document, reporting hidden and orphaned pages.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use navmenu::cli::{CliError, ConfigArgs, ExitCode, PaletteArgs, RoutesArgs};

/// Navmenu - navigation menu palette and route tree tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Derive the navigation menu palette for a brand color
    Palette(PaletteArgs),
    /// Build the navigation route tree of an application document
    Routes(RoutesArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Commands::Palette(args) => args.execute(),
        Commands::Routes(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    match result {
        Ok(()) => ExitCode::Success.into(),
        Err(CliError { kind, message }) => {
            eprintln!("Error: {message}");
            kind.into()
        }
    }
}
