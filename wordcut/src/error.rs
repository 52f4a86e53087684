//! Error types for recognizer generation.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a generation run.
///
/// Malformed table lines are not errors; the loader skips them.
#[derive(Debug, Error)]
pub enum GenError {
    /// The word table could not be read.
    #[error("cannot read word table {}: {source}", path.display())]
    Io {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Several entries end at the same trie node (strict mode only).
    #[error("ambiguous entries {ids:?} all end after {prefix:?}")]
    Ambiguous {
        /// Characters consumed when the conflict was found.
        prefix: String,
        /// Identifiers of the conflicting entries, in table order.
        ids: Vec<String>,
    },

    /// The generator configuration cannot produce valid output.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The emitted Rust source did not parse.
    #[error("generated Rust does not parse: {0}")]
    InvalidRust(String),

    /// Writing into the output buffer failed.
    #[error("formatting error: {0}")]
    Format(#[from] fmt::Error),
}

pub type Result<T> = std::result::Result<T, GenError>;
