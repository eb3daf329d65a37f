//! libyivo crate root
//!
//! YIVO-side operations over Yiddish text: romanization and its reverse,
//! phonetic respelling of loshn-koydesh words, and a German-flavoured
//! romanization for speech alignment. The high-level `Engine` pairs these
//! with the loanword lexicon loaded by `yiddish-core`.
//!
//! Public API exported here:
//! - `Engine` from `engine`
//! - `YivoConfig` from `config`
//! - `Respeller` from `respell`
//! - the free functions `transliterate`, `detransliterate` and
//!   `romanize_for_alignment`

pub mod alignment;
pub mod config;
pub mod detransliterate;
pub mod engine;
pub mod respell;
pub mod transliterate;

// Shared types callers need to build an engine.
pub use yiddish_core::{
    ConfigLoadError, LoadedParts, LoanwordLexicon, MemorySource, ResourceLoader, ResourceSource,
    Resources,
};

pub use alignment::romanize_for_alignment;
pub use config::YivoConfig;
pub use detransliterate::detransliterate;
pub use engine::Engine;
pub use respell::Respeller;
pub use transliterate::transliterate;
