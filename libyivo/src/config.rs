//! YIVO-specific configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All resource options from `yiddish_core::Config` (flattened via serde)
//! - The respeller's homograph list (keys never respelled)
//! - The respeller's second-variant list
//!
//! # Example
//!
//! ```rust
//! use libyivo::YivoConfig;
//!
//! let config = YivoConfig::default();
//! assert!(config.homographs.iter().any(|h| h == "צו"));
//! let base = config.into_base();
//! assert_eq!(base.fetch_retries, 2);
//! ```
use serde::{Deserialize, Serialize};

use crate::respell::{DEFAULT_HOMOGRAPHS, DEFAULT_PREFER_SECOND};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct YivoConfig {
    /// Base configuration fields (sources, snapshot, retries)
    #[serde(flatten)]
    pub base: yiddish_core::Config,

    /// Lexicon keys skipped by the respeller
    pub homographs: Vec<String>,

    /// Preferred variants for which the second variant is used instead
    pub prefer_second_variant: Vec<String>,
}

impl Default for YivoConfig {
    fn default() -> Self {
        Self {
            base: yiddish_core::Config::default(),
            homographs: DEFAULT_HOMOGRAPHS.iter().map(|s| s.to_string()).collect(),
            prefer_second_variant: DEFAULT_PREFER_SECOND.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl YivoConfig {
    /// Convert this config into the base config for resource loading.
    pub fn into_base(self) -> yiddish_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &yiddish_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut yiddish_core::Config {
        &mut self.base
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> yiddish_core::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
