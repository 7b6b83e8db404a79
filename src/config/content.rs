//! `[content]` section configuration.
//!
//! Where the translation dictionary comes from and which locale is active.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[content]` section in site.toml - dictionary source.
///
/// # Example
/// ```toml
/// [content]
/// dir = "i18n"     # reads i18n/<locale>.json
/// locale = "en"
/// ```
///
/// Without `dir` the bundled dictionary compiled into the binary is used.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Directory holding `<locale>.json` dictionaries.
    #[serde(default = "defaults::content::dir")]
    #[educe(Default = defaults::content::dir())]
    pub dir: Option<PathBuf>,

    /// Locale loaded at startup.
    #[serde(default = "defaults::content::locale")]
    #[educe(Default = defaults::content::locale())]
    pub locale: String,
}

impl ContentConfig {
    /// Path of the dictionary file for `locale`, if a directory is configured.
    pub fn dictionary_path(&self, locale: &str) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(format!("{locale}.json")))
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_content_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.content.dir, None);
        assert_eq!(config.content.locale, "en");
        assert_eq!(config.content.dictionary_path("en"), None);
    }

    #[test]
    fn test_content_config_dir() {
        let config = r#"
            [content]
            dir = "i18n"
            locale = "en"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.content.dir, Some(PathBuf::from("i18n")));
        assert_eq!(
            config.content.dictionary_path("en"),
            Some(PathBuf::from("i18n/en.json"))
        );
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [content]
            fallback = "de"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
    }
}
