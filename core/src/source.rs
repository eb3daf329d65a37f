//! Where lexical resources come from.
//!
//! A [`ResourceSource`] fetches a named resource file as text. Three sources
//! exist: HTTP (blocking `reqwest`, no async runtime needed), a local
//! directory, and an in-memory map used as a test fixture.

use ahash::AHashMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ConfigLoadError, Result};

/// A location that can produce resource files by name.
pub trait ResourceSource: Send + Sync {
    /// Human-readable location, used in errors and logs.
    fn location(&self) -> String;

    /// Fetch one resource file as UTF-8 text.
    fn fetch(&self, name: &str) -> Result<String>;
}

fn fetch_error(location: String, name: &str, reason: impl ToString) -> ConfigLoadError {
    ConfigLoadError::Fetch {
        location,
        resource: name.to_string(),
        reason: reason.to_string(),
    }
}

/// Resources served over HTTP(S) below a base URL.
pub struct HttpSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| fetch_error(base_url.to_string(), "<client>", e))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url_for(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }
}

impl ResourceSource for HttpSource {
    fn location(&self) -> String {
        self.base_url.clone()
    }

    fn fetch(&self, name: &str) -> Result<String> {
        let response = self
            .client
            .get(self.url_for(name))
            .send()
            .map_err(|e| fetch_error(self.location(), name, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(self.location(), name, format!("HTTP {status}")));
        }
        response
            .text()
            .map_err(|e| fetch_error(self.location(), name, e))
    }
}

/// Resources stored as files in a local directory.
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }
}

impl ResourceSource for DirSource {
    fn location(&self) -> String {
        self.dir.display().to_string()
    }

    fn fetch(&self, name: &str) -> Result<String> {
        std::fs::read_to_string(self.dir.join(name)).map_err(|e| fetch_error(self.location(), name, e))
    }
}

/// In-memory resources; a missing name behaves like an unreachable file.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: AHashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: &str, text: &str) -> Self {
        self.insert(name, text);
        self
    }

    pub fn insert(&mut self, name: &str, text: &str) {
        self.files.insert(name.to_string(), text.to_string());
    }
}

impl ResourceSource for MemorySource {
    fn location(&self) -> String {
        "memory".to_string()
    }

    fn fetch(&self, name: &str) -> Result<String> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| fetch_error(self.location(), name, "no such resource"))
    }
}

/// True when the location should be fetched over HTTP.
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Pick a source for a configured location: URL or directory.
pub fn source_for(location: &str, timeout: Duration) -> Result<Box<dyn ResourceSource>> {
    if is_remote(location) {
        Ok(Box::new(HttpSource::new(location, timeout)?))
    } else {
        Ok(Box::new(DirSource::new(location)))
    }
}
