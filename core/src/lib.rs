//! yiddish-core
//!
//! Encoding model, ordered rule machinery, lexical resources and
//! configuration shared by the convention-specific crates (libyivo,
//! libhasidic).
//!
//! Every pipeline in the workspace works on the canonical precomposed
//! encoding produced by [`encoding::to_composed`] and rewrites text through
//! ordered [`RuleSet`]s. External resources (the loanword pronunciation list
//! and the Hasidic rule tables) are acquired once through a
//! [`ResourceLoader`] and shared immutably as `Arc<Resources>`.
//!
//! Public API:
//! - `encoding` - compose/decompose, diacritic stripping, punctuation
//! - `script` - letter classes, word classes and tokenization
//! - `Rule` / `RuleSet` - ordered regex substitution
//! - `LoanwordLexicon` - loshn-koydesh pronunciation dictionary
//! - `HasidicTables` - Hasidic-orthography rule tables
//! - `ResourceLoader` / `Resources` - acquisition, snapshots
//! - `Config` - configuration
//! - `ConfigLoadError` - initialization failures

pub mod encoding;
pub use encoding::{normalize_punctuation, strip_diacritics, to_composed, to_decomposed};

pub mod script;
pub use script::{tokenize, Token, WordClass};

pub mod rules;
pub use rules::{Rule, RuleSet};

pub mod error;
pub use error::{ConfigLoadError, Result};

pub mod lexicon;
pub use lexicon::{LexiconEntry, LoanwordLexicon};

pub mod tables;
pub use tables::{HasidicTable, HasidicTables};

pub mod source;
pub use source::{DirSource, HttpSource, MemorySource, ResourceSource};

pub mod resources;
pub use resources::{LoadedParts, ResourceLoader, Resources};

pub mod config;
pub use config::Config;
