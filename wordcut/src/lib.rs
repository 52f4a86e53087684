//! # wordcut: keyword recognizer generator
//!
//! wordcut turns a table of literal words into the source of one function
//! that, given a cursor into a character stream, recognizes which literal
//! starts at the cursor in a single pass, advances past it, and returns the
//! literal's token identifier.
//!
//! ## Architecture
//!
//! ```text
//!  word table (text)
//!        │
//!        ▼
//!  ┌─────────────┐   ┌──────────────┐   ┌──────────────────────────────┐
//!  │ table       │──▶│ trie         │──▶│ emit                          │
//!  │ WordTable   │   │ Node (IR)    │   │ render children bottom-up     │
//!  └─────────────┘   └──────────────┘   │ dedup::merge_arms per branch  │
//!                           │           │ Dialect: Rust | C++           │
//!                           ▼           └──────────────────────────────┘
//!                    simulate::Recognizer          │
//!                    (tests only run the IR)       ▼
//!                                           function source (String)
//! ```
//!
//! The generated recognizer returns the no-match value (`0` by default)
//! when nothing matches, the table's fallback identifier when it consumed an
//! unrecognized identifier-shaped run, or the matched entry's identifier.

pub mod config;
pub mod dedup;
pub mod emit;
pub mod error;
pub mod simulate;
pub mod table;
pub mod trie;

#[cfg(test)]
mod tests;

use std::path::Path;

use proc_macro2::TokenStream;

pub use config::{GeneratorConfig, Target};
pub use error::{GenError, Result};
pub use simulate::{Outcome, Recognizer};
pub use table::{WordEntry, WordTable};

/// Summary of one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenStats {
    /// Entries in the table.
    pub entries: usize,
    /// Whether a fallback identifier was registered.
    pub fallback: bool,
    /// Dispatches in the emitted code.
    pub branches: usize,
    /// Terminal nodes in the emitted code.
    pub accepts: usize,
    /// Arm labels that share another label's body.
    pub merged_labels: usize,
    /// Size of the emitted source in bytes.
    pub bytes: usize,
}

/// Generated recognizer source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub source: String,
    pub target: Target,
    pub stats: GenStats,
}

impl Generated {
    /// Parse Rust output into tokens, e.g. for splicing into a macro.
    pub fn to_token_stream(&self) -> Result<TokenStream> {
        match self.target {
            Target::Rust => emit::rust::validate(&self.source),
            Target::Cpp => Err(GenError::Config(
                "C++ output has no token stream form".to_string(),
            )),
        }
    }
}

/// Generate a recognizer for `table`.
pub fn generate(table: &WordTable, config: &GeneratorConfig) -> Result<Generated> {
    generate_with_origin(table, config, None)
}

/// Read the table at `path` and generate a recognizer for it.
///
/// A table that cannot be read aborts the run; nothing is produced.
pub fn generate_from_path(path: &Path, config: &GeneratorConfig) -> Result<Generated> {
    let table = WordTable::load(path)?;
    let origin = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    generate_with_origin(&table, config, Some(&origin))
}

fn generate_with_origin(
    table: &WordTable,
    config: &GeneratorConfig,
    origin: Option<&str>,
) -> Result<Generated> {
    config.validate()?;

    let root = trie::build(table, config.strict)?;
    let fallback = table.fallback.as_deref();
    let (source, emitted) = emit::render(&root, fallback, config, origin)?;

    if config.target == Target::Rust {
        emit::rust::validate(&source)?;
    }

    let stats = GenStats {
        entries: table.entries.len(),
        fallback: fallback.is_some(),
        branches: emitted.branches,
        accepts: emitted.accepts,
        merged_labels: emitted.merged_labels,
        bytes: source.len(),
    };
    tracing::debug!(
        function = %config.function_name,
        target = config.target.name(),
        entries = stats.entries,
        branches = stats.branches,
        merged_labels = stats.merged_labels,
        bytes = stats.bytes,
        "generated recognizer"
    );

    Ok(Generated {
        source,
        target: config.target,
        stats,
    })
}
