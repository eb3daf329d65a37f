//! Generic configuration for resource acquisition.
//!
//! Only language-convention-agnostic fields live here. Options specific to
//! one pipeline (the respeller's homograph list, for example) belong in
//! `YivoConfig` in `libyivo`, which flattens this struct.
//!
//! A location beginning with `http://` or `https://` is fetched over HTTP;
//! anything else names a local directory.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::lexicon::LOANWORD_FILE;

/// Upstream home of the loshn-koydesh pronunciation list.
pub const DEFAULT_LOANWORD_SOURCE: &str =
    "https://raw.githubusercontent.com/ibleaman/loshn-koydesh-pronunciation/master";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Location (URL or directory) holding the loanword list
    pub loanword_source: String,
    /// File name of the loanword list inside `loanword_source`
    pub loanword_file: String,
    /// Location (URL or directory) holding the Hasidic rule tables
    pub hasidic_source: String,
    /// Optional bincode snapshot of the parsed resources
    pub snapshot: Option<PathBuf>,
    /// Per-request timeout for HTTP sources
    pub fetch_timeout_ms: u64,
    /// Additional attempts after a failed fetch
    pub fetch_retries: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            loanword_source: DEFAULT_LOANWORD_SOURCE.to_string(),
            loanword_file: LOANWORD_FILE.to_string(),
            hasidic_source: "data/hasidic".to_string(),
            snapshot: None,
            fetch_timeout_ms: 10_000,
            fetch_retries: 2,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn fetch_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.fetch_timeout_ms)
    }
}
