//! Initialization-time errors.
//!
//! Transforms never fail; everything that can go wrong happens while the
//! lexical resources are fetched, parsed and validated. All of it surfaces as
//! a [`ConfigLoadError`], which is fatal for the engine being built.

use thiserror::Error;

/// Failure to acquire or validate the engine's lexical resources.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    /// The resource could not be fetched from its location.
    #[error("failed to fetch {resource} from {location}: {reason}")]
    Fetch {
        /// Where the resource was looked up (URL or directory)
        location: String,
        /// Resource file name
        resource: String,
        /// Underlying cause
        reason: String,
    },

    /// A resource line could not be parsed.
    #[error("{resource}:{line}: {reason}")]
    Parse {
        /// Resource file name
        resource: String,
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// A table entry that is interpreted as a pattern does not compile.
    #[error("invalid pattern {pattern:?} in {resource}: {source}")]
    Pattern {
        /// Resource file name
        resource: String,
        /// The offending pattern
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Reading or writing a local file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A resource snapshot could not be (de)serialized.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    /// The TOML configuration is malformed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("cannot serialize configuration: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

/// Result type for resource acquisition.
pub type Result<T> = std::result::Result<T, ConfigLoadError>;
