//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Problems with `site.toml` or the values it sets.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read site config `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid site config")]
    Toml(#[from] toml::de::Error),

    #[error("[reveal.threshold] {0} is outside 0.0..=1.0")]
    Threshold(f64),

    /// Empty, or would escape the dictionary directory.
    #[error("[content.locale] `{0}` is not a locale code")]
    Locale(String),

    #[error("[content.dir] `{}` {reason}", path.display())]
    ContentDir { path: PathBuf, reason: &'static str },

    #[error("Config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("site.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        assert_eq!(io_err.to_string(), "cannot read site config `site.toml`");

        let err = ConfigError::Locale("../etc".into());
        assert_eq!(err.to_string(), "[content.locale] `../etc` is not a locale code");

        let err = ConfigError::ContentDir {
            path: PathBuf::from("i18n"),
            reason: "not found",
        };
        assert_eq!(err.to_string(), "[content.dir] `i18n` not found");

        assert_eq!(
            ConfigError::Threshold(1.5).to_string(),
            "[reveal.threshold] 1.5 is outside 0.0..=1.0"
        );
    }

    #[test]
    fn test_toml_error_converts() {
        let err = toml::from_str::<toml::Value>("[content").unwrap_err();
        let err: ConfigError = err.into();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
