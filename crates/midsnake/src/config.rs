//! Configuration file support

use crate::render::OutputFormat;
use anyhow::{Context, Result};
use midsnake_core::DiffEngine;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings read from `config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Per middle-move search budget in milliseconds
    pub timeout_ms: Option<u64>,
    pub transpose: bool,
    pub parallel: bool,
    pub format: OutputFormat,
}

impl Config {
    pub const FILENAME: &'static str = "config.toml";

    /// `~/.config/midsnake/config.toml` (or the platform equivalent)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("midsnake").join(Self::FILENAME))
    }

    /// Load config from an explicit path, or from the default location when
    /// one exists. A missing default file is not an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Fold command-line flags over the file settings. Flags win; boolean
    /// flags can only switch a setting on.
    pub fn merge(mut self, overrides: &Overrides) -> Self {
        if overrides.timeout_ms.is_some() {
            self.timeout_ms = overrides.timeout_ms;
        }
        self.transpose |= overrides.transpose;
        self.parallel |= overrides.parallel;
        if let Some(format) = overrides.format {
            self.format = format;
        }
        self
    }

    pub fn engine(&self) -> DiffEngine {
        DiffEngine::new()
            .with_time_budget(self.timeout_ms.map(Duration::from_millis))
            .with_transpose(self.transpose)
            .with_parallel(self.parallel)
    }
}

/// The subset of command-line arguments that override [`Config`]
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub timeout_ms: Option<u64>,
    pub transpose: bool,
    pub parallel: bool,
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_partial_config() {
        let config = Config::parse("timeout_ms = 250\nparallel = true\n").unwrap();
        assert_eq!(
            config,
            Config {
                timeout_ms: Some(250),
                transpose: false,
                parallel: true,
                format: OutputFormat::Text,
            }
        );
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_format() {
        let config = Config::parse("format = \"json\"").unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(Config::parse("format = \"xml\"").is_err());
    }

    #[test]
    fn test_flags_win_over_file() {
        let file = Config {
            timeout_ms: Some(1000),
            transpose: true,
            parallel: false,
            format: OutputFormat::Json,
        };
        let merged = file.merge(&Overrides {
            timeout_ms: Some(5),
            transpose: false,
            parallel: true,
            format: Some(OutputFormat::Text),
        });

        assert_eq!(merged.timeout_ms, Some(5));
        assert!(merged.transpose);
        assert!(merged.parallel);
        assert_eq!(merged.format, OutputFormat::Text);
    }

    #[test]
    fn test_empty_overrides_keep_file() {
        let file = Config {
            timeout_ms: Some(40),
            ..Config::default()
        };
        assert_eq!(file.clone().merge(&Overrides::default()), file);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(Config::FILENAME);
        std::fs::write(&path, "timeout_ms = \"soon\"\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_load_explicit_missing_path() {
        let err = Config::load(Some(Path::new("/nonexistent/midsnake.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(Config::FILENAME);
        std::fs::write(&path, "transpose = true\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();

        assert!(config.transpose);
        assert_eq!(config.timeout_ms, None);
    }
}
