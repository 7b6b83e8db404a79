//! Process-wide state built once from the command line.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::config::SiteConfig;
use crate::content::{ContentStore, DiagnosticSink, LogSink, Resolver};

/// Validated config plus the live dictionary.
pub struct AppContext {
    pub config: SiteConfig,
    pub content: ContentStore,
}

impl AppContext {
    pub fn new(config: SiteConfig, sink: Arc<dyn DiagnosticSink>) -> Result<Self> {
        let content = ContentStore::from_config(&config.content, sink).with_context(|| {
            format!(
                "Failed to load dictionary for locale `{}`",
                config.content.locale
            )
        })?;
        Ok(Self { config, content })
    }

    /// Load config and dictionary for `cli`, logging content misses.
    pub fn load(cli: &Cli) -> Result<Self> {
        Self::new(SiteConfig::load(cli)?, Arc::new(LogSink))
    }

    pub fn resolver(&self) -> Resolver {
        self.content.resolver()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::RecordingSink;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_use_bundled_dictionary() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_string_lossy().into_owned();
        let cli = Cli::parse_from(["chemsite", "--root", &root, "check"]);

        let ctx = AppContext::load(&cli).unwrap();
        assert_eq!(ctx.content.locale(), "en");
        assert_eq!(ctx.resolver().resolve_string("productDetail.notFound"), "Product not found");
    }

    #[test]
    fn test_dictionary_dir_from_config() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("i18n")).unwrap();
        fs::write(dir.path().join("i18n/de.json"), r#"{"hero":{"title":"Reinheit"}}"#).unwrap();
        fs::write(
            dir.path().join("site.toml"),
            "[content]\ndir = \"i18n\"\nlocale = \"de\"\n",
        )
        .unwrap();

        let root = dir.path().to_string_lossy().into_owned();
        let cli = Cli::parse_from(["chemsite", "--root", &root, "get", "hero.title"]);
        let config = SiteConfig::load(&cli).unwrap();
        let sink = Arc::new(RecordingSink::new());

        let ctx = AppContext::new(config, sink.clone()).unwrap();
        assert_eq!(ctx.resolver().resolve_string("hero.title"), "Reinheit");
        assert_eq!(ctx.resolver().resolve_string("hero.titleBreak"), "hero.titleBreak");
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_missing_locale_file_is_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("i18n")).unwrap();

        let root = dir.path().to_string_lossy().into_owned();
        let cli = Cli::parse_from(["chemsite", "--root", &root, "-d", "i18n", "-l", "fr", "check"]);

        let err = AppContext::load(&cli).err().unwrap();
        assert!(format!("{err:#}").contains("`fr`"));
    }
}
