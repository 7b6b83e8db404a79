//! Site configuration management for `site.toml`.
//!
//! # Sections
//!
//! | Section        | Purpose                                       |
//! |----------------|-----------------------------------------------|
//! | `[content]`    | Dictionary directory and active locale        |
//! | `[reveal]`     | Scroll reveal threshold and list stagger      |
//! | `[loader]`     | Loading animation timing, reduced motion      |
//! | `[navigation]` | Navigation bar behaviour                      |
//!
//! # Example
//!
//! ```toml
//! [content]
//! dir = "i18n"
//! locale = "en"
//!
//! [reveal]
//! threshold = 0.1
//!
//! [loader]
//! duration_ms = 2500
//! reduced_motion = false
//! ```
//!
//! Every section is optional. A missing `site.toml` is the same as an empty
//! one: bundled dictionary, default timings.

mod content;
pub mod defaults;
mod error;
mod loader;
mod navigation;
mod reveal;

pub use content::ContentConfig;
pub use error::ConfigError;
pub use loader::LoaderConfig;
pub use navigation::NavigationConfig;
pub use reveal::RevealConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Dictionary source
    #[serde(default)]
    pub content: ContentConfig,

    /// Scroll reveal settings
    #[serde(default)]
    pub reveal: RevealConfig,

    /// Loading animation settings
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Navigation bar settings
    #[serde(default)]
    pub navigation: NavigationConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load, apply CLI overrides and validate.
    ///
    /// A missing config file falls back to defaults; a present but broken one
    /// is an error.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.config_path = Self::normalize_path(&config_path);
        config.update_with_cli(cli, root);
        config.validate()?;

        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli, root: &Path) {
        Self::update_option(&mut self.content.locale, cli.locale.as_ref());
        if let Some(dir) = &cli.dir {
            self.content.dir = Some(dir.clone());
        }

        // Dictionary directory is relative to the project root, tilde expanded
        if let Some(dir) = &self.content.dir {
            let expanded = shellexpand::tilde(&dir.to_string_lossy()).into_owned();
            let path = PathBuf::from(expanded);
            self.content.dir = Some(if path.is_relative() {
                Self::normalize_path(&root.join(path))
            } else {
                Self::normalize_path(&path)
            });
        }

        match &cli.command {
            Commands::Loader {
                duration,
                reduced_motion,
            } => {
                Self::update_option(&mut self.loader.duration_ms, duration.as_ref());
                Self::update_option(&mut self.loader.reduced_motion, reduced_motion.as_ref());
            }
            Commands::Reveal {
                threshold: Some(threshold),
                ..
            } => {
                self.reveal.threshold = *threshold;
            }
            _ => {}
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            bail!(ConfigError::Threshold(self.reveal.threshold));
        }

        if self.loader.frame_ms == 0 {
            bail!(ConfigError::Validation(
                "[loader.frame_ms] must be greater than 0".into()
            ));
        }

        let locale = &self.content.locale;
        if locale.is_empty() || locale.contains(['/', '\\', '.']) {
            bail!(ConfigError::Locale(locale.clone()));
        }

        if let Some(dir) = &self.content.dir {
            let reason = if !dir.exists() {
                Some("not found")
            } else if !dir.is_dir() {
                Some("is not a directory")
            } else {
                None
            };
            if let Some(reason) = reason {
                bail!(ConfigError::ContentDir {
                    path: dir.clone(),
                    reason
                });
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
