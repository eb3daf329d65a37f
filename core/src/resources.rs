//! Resource acquisition and the immutable resource bundle.
//!
//! [`ResourceLoader`] fetches, parses and validates the loanword list and the
//! Hasidic rule tables, retrying failed fetches with a linear backoff. The
//! result is a [`Resources`] value behind an `Arc`; engines are built from
//! that value only, so nothing can transform text before acquisition has
//! succeeded.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{ConfigLoadError, Result};
use crate::lexicon::{LoanwordLexicon, LOANWORD_FILE};
use crate::source::{source_for, ResourceSource};
use crate::tables::HasidicTables;

/// Bumped whenever the serialized layout of [`Resources`] changes.
const SNAPSHOT_VERSION: u32 = 2;

/// Which parts of a [`Resources`] bundle were acquired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedParts {
    pub loanwords: bool,
    pub hasidic: bool,
}

impl LoadedParts {
    pub const ALL: Self = Self {
        loanwords: true,
        hasidic: true,
    };

    /// Parts required by `self` that `other` lacks.
    fn missing_from(self, other: Self) -> Self {
        Self {
            loanwords: self.loanwords && !other.loanwords,
            hasidic: self.hasidic && !other.hasidic,
        }
    }

    fn is_empty(self) -> bool {
        !self.loanwords && !self.hasidic
    }
}

/// Everything the transform pipelines read, loaded once and never mutated.
///
/// An empty lexicon or empty tables are ambiguous on their own, so the bundle
/// also records which parts were actually loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resources {
    pub loanwords: LoanwordLexicon,
    pub hasidic: HasidicTables,
    pub parts: LoadedParts,
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    resources: Resources,
}

impl Resources {
    pub fn new(loanwords: LoanwordLexicon, hasidic: HasidicTables) -> Self {
        Self {
            loanwords,
            hasidic,
            parts: LoadedParts::ALL,
        }
    }

    /// Demo resources, no I/O.
    pub fn load_demo() -> Self {
        Self::new(LoanwordLexicon::load_demo(), HasidicTables::load_demo())
    }

    /// Write the parsed bundle as a bincode snapshot.
    pub fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            resources: self.clone(),
        };
        bincode::serialize_into(writer, &snapshot)?;
        Ok(())
    }

    /// Read a snapshot written by [`Resources::save_snapshot`].
    ///
    /// Pattern tables are validated again since the snapshot file may have
    /// been produced by another build.
    pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let snapshot: Snapshot = bincode::deserialize_from(reader)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(ConfigLoadError::Snapshot(Box::new(bincode::ErrorKind::Custom(
                format!(
                    "snapshot version {} (expected {})",
                    snapshot.version, SNAPSHOT_VERSION
                ),
            ))));
        }
        snapshot.resources.hasidic.validate()?;
        Ok(snapshot.resources)
    }
}

/// Fetches and validates [`Resources`].
///
/// A loader without a loanword or Hasidic source yields an empty lexicon or
/// empty tables for that part.
pub struct ResourceLoader {
    loanword_source: Option<Box<dyn ResourceSource>>,
    loanword_file: String,
    hasidic_source: Option<Box<dyn ResourceSource>>,
    retries: u32,
    backoff: Duration,
}

impl Default for ResourceLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceLoader {
    pub fn new() -> Self {
        Self {
            loanword_source: None,
            loanword_file: LOANWORD_FILE.to_string(),
            hasidic_source: None,
            retries: 0,
            backoff: Duration::from_millis(500),
        }
    }

    /// Loader for both parts as described by the configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new()
            .with_loanword_source(source_for(&config.loanword_source, config.fetch_timeout())?)
            .with_loanword_file(&config.loanword_file)
            .with_hasidic_source(source_for(&config.hasidic_source, config.fetch_timeout())?)
            .with_retries(config.fetch_retries, Duration::from_millis(500)))
    }

    pub fn with_loanword_source(mut self, source: Box<dyn ResourceSource>) -> Self {
        self.loanword_source = Some(source);
        self
    }

    pub fn with_loanword_file(mut self, name: &str) -> Self {
        self.loanword_file = name.to_string();
        self
    }

    pub fn with_hasidic_source(mut self, source: Box<dyn ResourceSource>) -> Self {
        self.hasidic_source = Some(source);
        self
    }

    /// Drop the Hasidic part (for callers that only need the lexicon).
    pub fn without_hasidic(mut self) -> Self {
        self.hasidic_source = None;
        self
    }

    /// Drop the loanword part (for callers that only need the Hasidic tables).
    pub fn without_loanwords(mut self) -> Self {
        self.loanword_source = None;
        self
    }

    /// Retry a failed fetch `retries` more times, sleeping `backoff * attempt` in between.
    pub fn with_retries(mut self, retries: u32, backoff: Duration) -> Self {
        self.retries = retries;
        self.backoff = backoff;
        self
    }

    /// Parts this loader has a source for.
    pub fn parts(&self) -> LoadedParts {
        LoadedParts {
            loanwords: self.loanword_source.is_some(),
            hasidic: self.hasidic_source.is_some(),
        }
    }

    fn fetch(&self, source: &dyn ResourceSource, name: &str) -> Result<String> {
        let mut attempt = 0;
        loop {
            match source.fetch(name) {
                Ok(text) => {
                    debug!(location = %source.location(), resource = name, bytes = text.len(), "fetched resource");
                    return Ok(text);
                }
                Err(err @ ConfigLoadError::Fetch { .. }) if attempt < self.retries => {
                    attempt += 1;
                    warn!(
                        location = %source.location(),
                        resource = name,
                        attempt,
                        error = %err,
                        "fetch failed, retrying"
                    );
                    std::thread::sleep(self.backoff * attempt);
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Fetch and parse the loanword list.
    pub fn load_loanwords(&self) -> Result<LoanwordLexicon> {
        let Some(source) = &self.loanword_source else {
            return Ok(LoanwordLexicon::new());
        };
        let text = self.fetch(source.as_ref(), &self.loanword_file)?;
        LoanwordLexicon::from_tsv(&text)
    }

    /// Fetch, parse and validate every Hasidic table.
    pub fn load_hasidic(&self) -> Result<HasidicTables> {
        let Some(source) = &self.hasidic_source else {
            return Ok(HasidicTables::default());
        };
        HasidicTables::parse_with(|table| self.fetch(source.as_ref(), table.file_name()))
    }

    /// Acquire every configured resource.
    pub fn load(&self) -> Result<Arc<Resources>> {
        let mut resources = Resources::default();
        self.fill(&mut resources, self.parts())?;
        Ok(Arc::new(resources))
    }

    fn fill(&self, resources: &mut Resources, parts: LoadedParts) -> Result<()> {
        if parts.loanwords {
            resources.loanwords = self.load_loanwords()?;
            resources.parts.loanwords = true;
            info!(entries = resources.loanwords.len(), "loanword lexicon loaded");
        }
        if parts.hasidic {
            resources.hasidic = self.load_hasidic()?;
            resources.parts.hasidic = true;
            for (table, count) in resources.hasidic.counts() {
                info!(table = table.file_name(), entries = count, "hasidic table loaded");
            }
        }
        Ok(())
    }

    /// Use a valid snapshot at `path`, otherwise load and write one.
    ///
    /// A snapshot that lacks a part this loader has a source for is completed
    /// by fetching that part, and rewritten. An unreadable snapshot is logged
    /// and replaced; failing to write the new snapshot is logged too, the
    /// loaded resources are still returned.
    pub fn load_or_snapshot<P: AsRef<Path>>(&self, path: P) -> Result<Arc<Resources>> {
        let path = path.as_ref();
        let cached = if path.exists() {
            match Resources::load_snapshot(path) {
                Ok(resources) => Some(resources),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "ignoring unusable snapshot");
                    None
                }
            }
        } else {
            debug!(path = %path.display(), "no resource snapshot");
            None
        };

        let had_snapshot = cached.is_some();
        let mut resources = cached.unwrap_or_default();
        let missing = self.parts().missing_from(resources.parts);
        if missing.is_empty() {
            if had_snapshot {
                debug!(path = %path.display(), "using resource snapshot");
            }
            return Ok(Arc::new(resources));
        }
        if had_snapshot {
            info!(
                path = %path.display(),
                loanwords = missing.loanwords,
                hasidic = missing.hasidic,
                "snapshot lacks resources, fetching them"
            );
        }

        self.fill(&mut resources, missing)?;
        match resources.save_snapshot(path) {
            Ok(()) => info!(path = %path.display(), "resource snapshot written"),
            Err(err) => warn!(path = %path.display(), error = %err, "cannot write snapshot"),
        }
        Ok(Arc::new(resources))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;
    use crate::tables::HasidicTable;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fails the first `failures` fetches, then serves from memory.
    struct Flaky {
        failures: u32,
        calls: AtomicU32,
        inner: MemorySource,
    }

    impl ResourceSource for Flaky {
        fn location(&self) -> String {
            "flaky".to_string()
        }

        fn fetch(&self, name: &str) -> Result<String> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                return Err(ConfigLoadError::Fetch {
                    location: self.location(),
                    resource: name.to_string(),
                    reason: "connection reset".to_string(),
                });
            }
            self.inner.fetch(name)
        }
    }

    fn hasidic_fixture() -> MemorySource {
        let mut src = MemorySource::new();
        for table in HasidicTable::ALL {
            src.insert(table.file_name(), "");
        }
        src.insert(HasidicTable::Lkizmen.file_name(), "Words\nשבת\n");
        src
    }

    #[test]
    fn loads_both_parts() {
        let loader = ResourceLoader::new()
            .with_loanword_source(Box::new(
                MemorySource::new().with_file(LOANWORD_FILE, "שבת\tשאַבעס\n"),
            ))
            .with_hasidic_source(Box::new(hasidic_fixture()));
        let resources = loader.load().unwrap();
        assert_eq!(resources.loanwords.len(), 1);
        assert_eq!(resources.hasidic.lkizmen, vec!["שבת".to_string()]);
    }

    #[test]
    fn missing_source_blocks_readiness() {
        let loader = ResourceLoader::new().with_loanword_source(Box::new(MemorySource::new()));
        assert!(matches!(loader.load(), Err(ConfigLoadError::Fetch { .. })));
    }

    #[test]
    fn retries_transient_failures() {
        let flaky = Flaky {
            failures: 2,
            calls: AtomicU32::new(0),
            inner: MemorySource::new().with_file(LOANWORD_FILE, "שבת\tשאַבעס\n"),
        };
        let loader = ResourceLoader::new()
            .with_loanword_source(Box::new(flaky))
            .with_retries(2, Duration::from_millis(1));
        assert_eq!(loader.load_loanwords().unwrap().len(), 1);
    }

    #[test]
    fn gives_up_after_retries() {
        let flaky = Flaky {
            failures: 3,
            calls: AtomicU32::new(0),
            inner: MemorySource::new().with_file(LOANWORD_FILE, "שבת\tשאַבעס\n"),
        };
        let loader = ResourceLoader::new()
            .with_loanword_source(Box::new(flaky))
            .with_retries(2, Duration::from_millis(1));
        assert!(loader.load_loanwords().is_err());
    }

    #[test]
    fn parse_errors_are_not_retried() {
        let flaky = Flaky {
            failures: 0,
            calls: AtomicU32::new(0),
            inner: MemorySource::new().with_file(LOANWORD_FILE, "no tab here\n"),
        };
        let loader = ResourceLoader::new()
            .with_loanword_source(Box::new(flaky))
            .with_retries(5, Duration::from_millis(1));
        assert!(matches!(loader.load_loanwords(), Err(ConfigLoadError::Parse { .. })));
    }

    #[test]
    fn snapshot_is_written_then_reused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resources.bin");
        let loader = ResourceLoader::new().with_loanword_source(Box::new(
            MemorySource::new().with_file(LOANWORD_FILE, "שבת\tשאַבעס\n"),
        ));
        let first = loader.load_or_snapshot(&path).unwrap();
        assert!(path.exists());

        // A loader with no reachable source still succeeds from the snapshot.
        let offline = ResourceLoader::new().with_loanword_source(Box::new(MemorySource::new()));
        let second = offline.load_or_snapshot(&path).unwrap();
        assert_eq!(second.loanwords.len(), first.loanwords.len());
    }

    #[test]
    fn corrupt_snapshot_is_refetched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resources.bin");
        std::fs::write(&path, b"not a snapshot").unwrap();
        let loader = ResourceLoader::new().with_loanword_source(Box::new(
            MemorySource::new().with_file(LOANWORD_FILE, "שבת\tשאַבעס\n"),
        ));
        assert_eq!(loader.load_or_snapshot(&path).unwrap().loanwords.len(), 1);
        assert!(Resources::load_snapshot(&path).is_ok());
    }

    #[test]
    fn snapshot_without_tables_is_completed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resources.bin");
        let lexicon_only = ResourceLoader::new().with_loanword_source(Box::new(
            MemorySource::new().with_file(LOANWORD_FILE, "שבת\tשאַבעס\n"),
        ));
        let first = lexicon_only.load_or_snapshot(&path).unwrap();
        assert_eq!(
            first.parts,
            LoadedParts {
                loanwords: true,
                hasidic: false
            }
        );

        // The tables are fetched; the lexicon still comes from the snapshot.
        let both = ResourceLoader::new()
            .with_loanword_source(Box::new(MemorySource::new()))
            .with_hasidic_source(Box::new(hasidic_fixture()));
        let second = both.load_or_snapshot(&path).unwrap();
        assert_eq!(second.parts, LoadedParts::ALL);
        assert_eq!(second.loanwords.len(), 1);
        assert_eq!(second.hasidic.lkizmen, vec!["שבת".to_string()]);
        assert_eq!(Resources::load_snapshot(&path).unwrap().parts, LoadedParts::ALL);
    }

    #[test]
    fn snapshot_without_tables_needs_a_reachable_table_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resources.bin");
        let mut lexicon = LoanwordLexicon::new();
        lexicon.insert("שבת", vec!["שאַבעס".to_string()]);
        Resources {
            loanwords: lexicon,
            hasidic: HasidicTables::default(),
            parts: LoadedParts {
                loanwords: true,
                hasidic: false,
            },
        }
        .save_snapshot(&path)
        .unwrap();

        let loader = ResourceLoader::new().with_hasidic_source(Box::new(MemorySource::new()));
        assert!(matches!(
            loader.load_or_snapshot(&path),
            Err(ConfigLoadError::Fetch { .. })
        ));
    }
}
