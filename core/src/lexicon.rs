//! Loanword pronunciation lexicon.
//!
//! Maps the etymological (loshn-koydesh) spelling of a word to an ordered list
//! of phonetic respellings, e.g. `שבת → שאַבעס`. Variant 0 is the default
//! pronunciation. A reverse index maps every phonetic form back to the first
//! orthographic key that produced it.
//!
//! Source format (`orthographic-to-phonetic.txt`): one entry per line,
//! `key<TAB>variant[,variant...]`. Keys and variants are stored composed and
//! with canonical punctuation, so the maqaf `־` is the hyphen inside entries.
//!
//! Public API:
//! - `LexiconEntry`: a key with its variants
//! - `LoanwordLexicon`: lookup, reverse lookup, longest-first key walk,
//!   bincode (de)serialization helpers

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::encoding::{normalize_punctuation, to_composed};
use crate::error::{ConfigLoadError, Result};

/// Default file name of the loanword list.
pub const LOANWORD_FILE: &str = "orthographic-to-phonetic.txt";

/// One orthographic word with its phonetic variants (index 0 preferred).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub orthographic: String,
    pub variants: Vec<String>,
}

impl LexiconEntry {
    pub fn new<T: Into<String>>(orthographic: T, variants: Vec<String>) -> Self {
        Self {
            orthographic: orthographic.into(),
            variants,
        }
    }

    /// The default (variant 0) pronunciation.
    pub fn preferred(&self) -> Option<&str> {
        self.variants.first().map(String::as_str)
    }
}

/// In-memory loanword lexicon preserving source order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoanwordLexicon {
    entries: Vec<LexiconEntry>,
    index: AHashMap<String, usize>,
    reverse: AHashMap<String, String>,
}

impl LoanwordLexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry.
    ///
    /// First writer wins: a key that is already present is ignored, and a
    /// phonetic form keeps pointing at the first key that introduced it.
    /// Returns false when the key was already present.
    pub fn insert<K: Into<String>>(&mut self, key: K, variants: Vec<String>) -> bool {
        let key = key.into();
        if self.index.contains_key(&key) {
            return false;
        }
        for variant in &variants {
            self.reverse
                .entry(variant.clone())
                .or_insert_with(|| key.clone());
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(LexiconEntry::new(key, variants));
        true
    }

    /// Parse the tab-separated loanword list.
    ///
    /// Every key and variant is composed and punctuation-normalized. Blank
    /// lines are skipped; anything else without a tab, key or variant is an
    /// error naming the line.
    pub fn from_tsv(text: &str) -> Result<Self> {
        let mut lexicon = Self::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            let parse_err = |reason: &str| ConfigLoadError::Parse {
                resource: LOANWORD_FILE.to_string(),
                line: idx + 1,
                reason: reason.to_string(),
            };

            let (key, variants) = line
                .split_once('\t')
                .ok_or_else(|| parse_err("expected key<TAB>variants"))?;
            let key = normalize_punctuation(&to_composed(key.trim()));
            if key.is_empty() {
                return Err(parse_err("empty key"));
            }

            let variants: Vec<String> = normalize_punctuation(&to_composed(variants))
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect();
            if variants.is_empty() {
                return Err(parse_err("no variants"));
            }

            lexicon.insert(key, variants);
        }
        Ok(lexicon)
    }

    /// Variants for an orthographic key.
    pub fn variants(&self, key: &str) -> Option<&[String]> {
        self.index
            .get(key)
            .map(|&i| self.entries[i].variants.as_slice())
    }

    /// The default pronunciation for an orthographic key.
    pub fn preferred(&self, key: &str) -> Option<&str> {
        self.index.get(key).and_then(|&i| self.entries[i].preferred())
    }

    /// Orthographic spelling for a phonetic form (reverse index).
    pub fn orthographic(&self, phonetic: &str) -> Option<&str> {
        self.reverse.get(phonetic).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Entries in source order.
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Entries ordered longest key first (by character count); ties keep source order.
    pub fn longest_first(&self) -> Vec<&LexiconEntry> {
        let mut ordered: Vec<&LexiconEntry> = self.entries.iter().collect();
        ordered.sort_by_key(|e| std::cmp::Reverse(e.orthographic.chars().count()));
        ordered
    }

    /// Small in-memory lexicon for smoke tests and demos.
    pub fn load_demo() -> Self {
        let mut lx = Self::new();
        for (key, variant) in [
            ("שבת", "שאַבעס"),
            ("תּורה", "טױרע"),
            ("חכמה", "כאָכמע"),
            ("בעל־הבית", "באַלעבאָס"),
        ] {
            lx.insert(to_composed(key), vec![to_composed(variant)]);
        }
        lx
    }

    /// Save the lexicon to a file using bincode serialization.
    pub fn save_bincode<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(writer, self)?;
        Ok(())
    }

    /// Load the lexicon from a bincode file produced by `save_bincode`.
    pub fn load_bincode<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(bincode::deserialize_from(reader)?)
    }

    /// Return the number of keys in the lexicon.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return true if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
