//! Hasidic orthography engine

use std::sync::Arc;

use yiddish_core::{Config, ResourceLoader, Resources, Result};

use crate::converter::Converter;

/// Public engine for libhasidic.
///
/// Holds the shared resources and the converter compiled from their Hasidic
/// tables. Cloning is cheap.
#[derive(Clone)]
pub struct Engine {
    resources: Arc<Resources>,
    converter: Arc<Converter>,
}

impl Engine {
    /// Compile the Hasidic tables in `resources`.
    pub fn new(resources: Arc<Resources>) -> Result<Self> {
        let converter = Converter::new(&resources.hasidic)?;
        Ok(Self {
            resources,
            converter: Arc::new(converter),
        })
    }

    /// Acquire resources as configured and build the engine.
    ///
    /// Only the Hasidic tables are needed. A snapshot without them gets them
    /// fetched and added.
    pub fn from_config(config: &Config) -> Result<Self> {
        let loader = ResourceLoader::from_config(config)?.without_loanwords();
        let resources = match &config.snapshot {
            Some(path) => loader.load_or_snapshot(path)?,
            None => loader.load()?,
        };
        Self::new(resources)
    }

    pub fn resources(&self) -> &Arc<Resources> {
        &self.resources
    }

    /// Convert YIVO-orthography text to Hasidic orthography.
    pub fn hasidify(&self, text: &str) -> String {
        self.converter.hasidify(text)
    }
}
