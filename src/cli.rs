//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// chemsite content and interaction CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: site.toml)
    #[arg(short = 'C', long, default_value = "site.toml")]
    pub config: PathBuf,

    /// Dictionary directory holding `<locale>.json` (relative to project root)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Locale to load
    #[arg(short, long)]
    pub locale: Option<String>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve a dotted path to a string (falls back to the path itself)
    Get {
        /// e.g. `footer.contact.email`
        path: String,
    },

    /// Resolve a dotted path to a list (falls back to an empty list)
    List {
        /// e.g. `products.items`
        path: String,
    },

    /// Print the view model of a route as JSON
    Page {
        /// `/`, `/products`, `/product/<id>` or `/contact`
        route: String,
    },

    /// Build every page and report dictionary paths that failed to resolve
    Check,

    /// Simulate scrolling through a page and report when each section reveals
    Reveal {
        /// Route to lay out
        #[arg(default_value = "/")]
        route: String,

        /// Viewport height in pixels
        #[arg(long, default_value_t = 800.0)]
        viewport: f64,

        /// Scroll distance per step in pixels
        #[arg(long, default_value_t = 120.0)]
        step: f64,

        /// Override `[reveal.threshold]`
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// Play the loading animation in the terminal
    Loader {
        /// Override `[loader.duration_ms]`
        #[arg(long)]
        duration: Option<u64>,

        /// Skip the animation as if reduced motion were requested
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        reduced_motion: Option<bool>,
    },

    /// Watch the dictionary and hot-swap it on change
    Watch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get() {
        let cli = Cli::parse_from(["chemsite", "get", "hero.title"]);
        assert!(matches!(cli.command, Commands::Get { ref path } if path == "hero.title"));
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }

    #[test]
    fn test_parse_reveal_defaults() {
        let cli = Cli::parse_from(["chemsite", "reveal"]);
        match cli.command {
            Commands::Reveal {
                route,
                viewport,
                step,
                threshold,
            } => {
                assert_eq!(route, "/");
                assert_eq!(viewport, 800.0);
                assert_eq!(step, 120.0);
                assert_eq!(threshold, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_reduced_motion_flag() {
        let cli = Cli::parse_from(["chemsite", "loader", "--reduced-motion"]);
        assert!(matches!(
            cli.command,
            Commands::Loader {
                reduced_motion: Some(true),
                ..
            }
        ));
    }

    #[test]
    fn test_global_options() {
        let cli = Cli::parse_from(["chemsite", "-l", "en", "--dir", "i18n", "watch"]);
        assert!(matches!(cli.command, Commands::Watch));
        assert_eq!(cli.locale.as_deref(), Some("en"));
        assert_eq!(cli.dir, Some(PathBuf::from("i18n")));
    }
}
