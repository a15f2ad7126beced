//! Routes command: builds the navigation route tree of an application document.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{validate_app_slug, Config};
use crate::models::RouteNode;
use crate::parser::load_app_document;
use crate::services::{build_route_tree, ViewerUrl};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Build the navigation route tree of an application document
#[derive(Debug, Clone, Args)]
pub struct RoutesArgs {
    /// Application document (.json, .json5, .yaml or .yml)
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Application slug used in page paths. Defaults to the configured slug
    #[arg(long, value_name = "SLUG")]
    pub app_slug: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero when pages are orphaned or hierarchy titles are unresolved
    #[arg(long)]
    pub strict: bool,
}

#[derive(Serialize, Debug)]
struct RoutesOutput<'a> {
    routes: &'a [RouteNode],
    unresolved: &'a [String],
    orphans: Vec<&'a str>,
}

impl RoutesArgs {
    /// Execute the routes command
    pub fn execute(&self) -> CliResult<()> {
        let document = load_app_document(&self.file).map_err(|e| CliError::io(format!("{e:#}")))?;

        let app_slug = match &self.app_slug {
            Some(slug) => slug.clone(),
            None => {
                Config::load()
                    .map_err(|e| {
                        CliError::validation(format!("Failed to load configuration: {e:#}"))
                    })?
                    .routes
                    .app_slug
            }
        };
        validate_app_slug(&app_slug).map_err(|e| CliError::validation(e.to_string()))?;

        let mut pages = document.page_index();
        let hidden = document.hidden_set();
        let build = build_route_tree(
            &document.hierarchy,
            &mut pages,
            &hidden,
            &ViewerUrl::new(app_slug),
        );
        let orphans = pages.orphans();

        if self.json {
            print_json(&RoutesOutput {
                routes: &build.routes,
                unresolved: &build.unresolved,
                orphans: orphans.clone(),
            })?;
        } else {
            print!("{}", render_tree(&build.routes));
            if !build.unresolved.is_empty() {
                println!();
                println!("Unresolved ({}):", build.unresolved.len());
                for title in &build.unresolved {
                    println!("  {title}");
                }
            }
            if !orphans.is_empty() {
                println!();
                println!("Orphaned pages ({}):", orphans.len());
                for title in &orphans {
                    println!("  {title}");
                }
            }
        }

        if self.strict && (!orphans.is_empty() || !build.unresolved.is_empty()) {
            return Err(CliError::validation(format!(
                "{} orphaned page(s), {} unresolved title(s) in strict mode",
                orphans.len(),
                build.unresolved.len()
            )));
        }

        Ok(())
    }
}

/// Draws routes as an indented tree, one node per line.
fn render_tree(routes: &[RouteNode]) -> String {
    let mut out = String::new();
    if routes.is_empty() {
        out.push_str("(no routes)\n");
        return out;
    }
    render_level(routes, "", &mut out);
    out
}

fn render_level(routes: &[RouteNode], prefix: &str, out: &mut String) {
    for (i, route) in routes.iter().enumerate() {
        let last = i + 1 == routes.len();
        let branch = if last { "└── " } else { "├── " };

        out.push_str(prefix);
        out.push_str(branch);
        out.push_str(&route.name);
        if let Some(icon) = &route.icon {
            out.push_str(&format!(" [{icon}]"));
        }
        if !route.is_folder() {
            out.push_str(&format!("  {}", route.path));
        }
        out.push('\n');

        if let Some(children) = &route.routes {
            let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
            render_level(children, &child_prefix, out);
        }
    }
}
