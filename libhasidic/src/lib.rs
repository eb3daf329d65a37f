//! libhasidic crate root
//!
//! Converts YIVO-orthography Yiddish to the spelling conventions of Hasidic
//! print, driven by externally maintained rule tables loaded through
//! `yiddish-core`.
//!
//! Public API exported here:
//! - `Engine` from `engine`
//! - `Converter` from `converter`
//! - `reformat` and its fixed table from `reformat`

pub mod converter;
pub mod engine;
pub mod marked;
pub mod reformat;
pub mod suffix;

pub use yiddish_core::{
    Config, ConfigLoadError, HasidicTable, HasidicTables, LoadedParts, MemorySource,
    ResourceLoader, ResourceSource, Resources,
};

pub use converter::Converter;
pub use engine::Engine;
pub use reformat::{reformat, REFORMATTING};
