//! # App preferences — `glucojourney.toml`
//!
//! Defines the TOML file that holds the shell's display preferences
//! (filename: [`AppConfig::filename`] = `"glucojourney.toml"`). The mobile
//! shell keeps it in the platform data directory; the web shell starts from
//! the defaults.
//!
//! ## Structure
//!
//! ```toml
//! [display]
//! theme = "auto"        # light | dark | auto
//! color = "teal"        # teal | blue | purple | rose
//! language = "fa"       # fa | en
//!
//! [summary]
//! timeframe = "daily"   # daily | weekly | monthly | quarterly
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config with TOML (de)serialisation, file helpers and the canonical filename. |
//! | [`DisplayConfig`] | Display theme, accent color and UI language. |
//! | [`SummaryConfig`] | Timeframe of the summary cards. |
//!
//! All structs derive `Default`, so a missing or empty file is equivalent to
//! the default configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locale::Language;
use crate::settings::{ColorTheme, DisplayTheme, SummaryTimeFrame};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not encode config: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("config file: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level configuration stored in `glucojourney.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub theme: DisplayTheme,
    #[serde(default)]
    pub color: ColorTheme,
    #[serde(default)]
    pub language: Language,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    #[serde(default)]
    pub timeframe: SummaryTimeFrame,
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "glucojourney.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read `<dir>/glucojourney.toml`. A missing file yields the defaults.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(Self::filename());
        match std::fs::read_to_string(&path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write `<dir>/glucojourney.toml`, creating `dir` if needed.
    pub fn save(&self, dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(dir)?;
        std::fs::write(dir.join(Self::filename()), self.to_toml()?)?;
        tracing::debug!("saved preferences to {}", dir.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
        let config = AppConfig::default();
        assert_eq!(config.display.theme, DisplayTheme::Auto);
        assert_eq!(config.display.language, Language::Fa);
        assert_eq!(config.summary.timeframe, SummaryTimeFrame::Daily);
    }

    #[test]
    fn test_partial_file() {
        let config = AppConfig::from_toml("[display]\ntheme = \"dark\"\n").unwrap();
        assert_eq!(config.display.theme, DisplayTheme::Dark);
        assert_eq!(config.display.color, ColorTheme::Teal);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = AppConfig::default();
        config.display.language = Language::En;
        config.summary.timeframe = SummaryTimeFrame::Quarterly;
        let text = config.to_toml().unwrap();
        assert!(text.contains("timeframe = \"quarterly\""));
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_unknown_theme() {
        let err = AppConfig::from_toml("[display]\ntheme = \"sepia\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_and_save() {
        let dir = std::env::temp_dir().join(format!("glucojourney-config-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        assert_eq!(AppConfig::load(&dir).unwrap(), AppConfig::default());

        let mut config = AppConfig::default();
        config.display.color = ColorTheme::Rose;
        config.save(&dir).unwrap();
        assert_eq!(AppConfig::load(&dir).unwrap(), config);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
