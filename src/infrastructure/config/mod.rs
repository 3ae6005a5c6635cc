use std::path::Path;

use encoding_rs::Encoding;
use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};
use crate::infrastructure::encoding;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "tabkit.toml";

/// Prefix of environment overrides, e.g. `TABKIT_ENCODING=latin1`
pub const ENV_PREFIX: &str = "TABKIT_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolkitConfig {
    /// Default text encoding label for CSV input and output
    pub encoding: String,
    /// CSV field delimiter
    pub delimiter: char,
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Show a progress bar while splitting
    pub progress: bool,
    /// Infer integer/float/boolean CSV columns
    pub infer_types: bool,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            encoding: "utf-8".to_string(),
            delimiter: ',',
            log_filter: "info".to_string(),
            progress: true,
            infer_types: true,
        }
    }
}

impl ToolkitConfig {
    /// Defaults, then the TOML file (if it exists), then `TABKIT_*` env vars
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        if config_path.is_some() && !path.exists() {
            return Err(AppError::FileNotFound(path.display().to_string()));
        }

        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() || self.delimiter == '\n' || self.delimiter == '"' {
            return Err(AppError::ValidationError(format!(
                "delimiter must be a single ASCII character other than newline or quote, got {:?}",
                self.delimiter
            )));
        }
        self.text_encoding()?;
        Ok(())
    }

    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }

    pub fn text_encoding(&self) -> Result<&'static Encoding> {
        encoding::resolve(&self.encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = Figment::new()
            .merge(Serialized::defaults(ToolkitConfig::default()))
            .extract::<ToolkitConfig>()
            .unwrap();
        assert_eq!(config, ToolkitConfig::default());
        assert_eq!(config.delimiter_byte(), b',');
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("tabkit_{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "encoding = \"latin1\"\ndelimiter = \";\"\nprogress = false\n")
            .unwrap();

        let config = ToolkitConfig::load(Some(&path)).unwrap();
        assert_eq!(config.encoding, "latin1");
        assert_eq!(config.delimiter, ';');
        assert!(!config.progress);
        assert!(config.infer_types);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = ToolkitConfig::load(Some(Path::new("/nonexistent/tabkit.toml"))).unwrap_err();
        assert!(matches!(err, AppError::FileNotFound(_)));
    }

    #[test]
    fn test_invalid_delimiter_rejected() {
        let config = ToolkitConfig {
            delimiter: 'é',
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AppError::ValidationError(_))
        ));
    }
}
