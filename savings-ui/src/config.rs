//! Calculator configuration loaded from a TOML file.
//!
//! ```toml
//! [defaults]
//! current_balance = "$10,000"
//! saving_goal = "$50,000"
//! frequency = "monthly"
//! interest_rate = "6%"
//! saving_term = "10 year"
//!
//! [chart]
//! width = 48
//! ```
//!
//! Every key is optional; missing keys keep the built-in defaults.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Raw text values the form starts with and resets to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub current_balance: String,
    pub saving_goal: String,
    pub frequency: String,
    pub interest_rate: String,
    pub saving_term: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            current_balance: "$10,000".to_string(),
            saving_goal: "$50,000".to_string(),
            frequency: "monthly".to_string(),
            interest_rate: "6%".to_string(),
            saving_term: "10 year".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Character width of the longest bar.
    pub width: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self { width: 48 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub defaults: FormDefaults,
    pub chart: ChartConfig,
}

impl CalculatorConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid calculator configuration")
    }

    /// Loads configuration from `path`, or the built-in defaults when `path`
    /// is `None` or does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("no config file given, using built-in defaults");
            return Ok(Self::default());
        };
        if !path.exists() {
            info!(path = %path.display(), "config file not found, using built-in defaults");
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file '{}'", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("in config file '{}'", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = CalculatorConfig::from_toml_str("").unwrap();

        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_given_keys() {
        let config = CalculatorConfig::from_toml_str(
            r#"
            [defaults]
            interest_rate = "4.5%"

            [chart]
            width = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.defaults.interest_rate, "4.5%");
        assert_eq!(config.defaults.saving_goal, "$50,000");
        assert_eq!(config.chart.width, 30);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(CalculatorConfig::from_toml_str("[chart]\nwidth = \"wide\"").is_err());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nfrequency = \"weekly\"").unwrap();

        let config = CalculatorConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.defaults.frequency, "weekly");
    }

    #[test]
    fn load_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = CalculatorConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();

        assert_eq!(config, CalculatorConfig::default());
    }
}
