//! Rate file locations.
//!
//! The defaults are baked into the binary from `config/default.toml` via
//! [`include_str!`]; a TOML file on disk can override any of them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Configuration embedded at compile time.
const DEFAULT_TOML: &str = include_str!("../config/default.toml");

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_address_ranges() -> String {
    "State.txt".to_string()
}

fn default_tax_rates() -> String {
    "Rates.csv".to_string()
}

fn default_short_zips() -> String {
    "Zip4.csv".to_string()
}

/// Where to find the three rate files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatesConfig {
    /// Directory holding the rate files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Address-range file name within [`Self::data_dir`].
    #[serde(default = "default_address_ranges")]
    pub address_ranges: String,
    /// Tax-rate file name within [`Self::data_dir`].
    #[serde(default = "default_tax_rates")]
    pub tax_rates: String,
    /// Short ZIP file name within [`Self::data_dir`].
    #[serde(default = "default_short_zips")]
    pub short_zips: String,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            address_ranges: default_address_ranges(),
            tax_rates: default_tax_rates(),
            short_zips: default_short_zips(),
        }
    }
}

/// Parses a TOML string into a [`RatesConfig`].
///
/// # Errors
///
/// Returns an error if the TOML is malformed or a field has the wrong type.
pub fn parse_config_toml(toml_str: &str) -> Result<RatesConfig, ConfigError> {
    Ok(toml::de::from_str(toml_str)?)
}

impl RatesConfig {
    /// The configuration shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded TOML does not parse.
    pub fn embedded() -> Result<Self, ConfigError> {
        parse_config_toml(DEFAULT_TOML)
    }

    /// Loads a configuration file. Fields it omits keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        parse_config_toml(&text)
    }

    /// Replaces the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    #[must_use]
    pub fn address_ranges_path(&self) -> PathBuf {
        self.data_dir.join(&self.address_ranges)
    }

    #[must_use]
    pub fn tax_rates_path(&self) -> PathBuf {
        self.data_dir.join(&self.tax_rates)
    }

    #[must_use]
    pub fn short_zips_path(&self) -> PathBuf {
        self.data_dir.join(&self.short_zips)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        assert_eq!(RatesConfig::embedded().unwrap(), RatesConfig::default());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = parse_config_toml("data_dir = \"/srv/dor\"\ntax_rates = \"Rates_24Q1.csv\"\n")
            .unwrap();
        assert_eq!(config.tax_rates_path(), PathBuf::from("/srv/dor/Rates_24Q1.csv"));
        assert_eq!(config.short_zips_path(), PathBuf::from("/srv/dor/Zip4.csv"));
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(parse_config_toml("data_dir = 5").is_err());
    }

    #[test]
    fn data_dir_override() {
        let config = RatesConfig::default().with_data_dir("/tmp/rates");
        assert_eq!(
            config.address_ranges_path(),
            PathBuf::from("/tmp/rates/State.txt")
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = RatesConfig::from_path(Path::new("/nonexistent/wa_sales_tax.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
