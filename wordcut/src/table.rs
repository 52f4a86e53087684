//! Word table loading.
//!
//! A word table is plain text, one entry per line:
//!
//! ```text
//! <token> <id> <value-or-'-'> <matchWord:true|false> <caseIgnore:true|false>
//! ```
//!
//! `#` starts a comment that runs to the end of the line. Lines that do not
//! carry five fields are skipped without complaint. A row whose token is
//! [`FALLBACK_SENTINEL`] registers the identifier returned for unmatched
//! identifier-shaped runs instead of adding an entry.

use std::fs;
use std::path::Path;

use crate::error::{GenError, Result};

/// Token spelling that registers the fallback identifier.
pub const FALLBACK_SENTINEL: &str = "---*---";

/// Value-column spelling meaning "do not assign a value".
pub const NO_VALUE: &str = "-";

/// One literal to recognize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// The literal, lower-cased when `case_ignore` is set.
    pub token: String,
    /// Identifier returned on a match, emitted verbatim.
    pub id: String,
    /// Expression assigned to the value slot on a match.
    pub value: Option<String>,
    /// Accept only when the next character is not alphanumeric.
    pub match_word: bool,
    /// The token is shaped like an identifier.
    pub is_word: bool,
    /// Match the literal case-insensitively.
    pub case_ignore: bool,
}

impl WordEntry {
    /// Builds a normalized entry: folds the token when `case_ignore` is set,
    /// derives `is_word`, and drops `match_word` for non-word tokens.
    pub fn new(
        token: &str,
        id: impl Into<String>,
        value: Option<String>,
        match_word: bool,
        case_ignore: bool,
    ) -> Self {
        let token = if case_ignore {
            token.to_ascii_lowercase()
        } else {
            token.to_string()
        };
        let is_word = is_identifier(&token);
        WordEntry {
            token,
            id: id.into(),
            value,
            match_word: match_word && is_word,
            is_word,
            case_ignore,
        }
    }
}

/// A parsed word table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTable {
    /// Entries in file order.
    pub entries: Vec<WordEntry>,
    /// Identifier returned for unmatched identifier-shaped runs.
    pub fallback: Option<String>,
}

/// What a single table line contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableLine {
    Entry(WordEntry),
    Fallback(String),
}

impl WordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whole table held in memory.
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Parse a table from individual lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = WordTable::new();
        let mut skipped = 0usize;
        for (lineno, line) in lines.into_iter().enumerate() {
            match parse_line(line.as_ref()) {
                Some(TableLine::Entry(entry)) => table.entries.push(entry),
                Some(TableLine::Fallback(id)) => {
                    if let Some(previous) = table.fallback.replace(id) {
                        tracing::warn!(
                            line = lineno + 1,
                            previous = %previous,
                            "fallback identifier registered twice; keeping the later one"
                        );
                    }
                }
                None => {
                    tracing::trace!(line = lineno + 1, "skipping line without five fields");
                    skipped += 1;
                }
            }
        }
        tracing::debug!(
            entries = table.entries.len(),
            skipped,
            fallback = table.fallback.as_deref().unwrap_or("-"),
            "loaded word table"
        );
        table
    }

    /// Read and parse a table file. A file that cannot be read is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| GenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    pub fn push(&mut self, entry: WordEntry) {
        self.entries.push(entry);
    }

    pub fn with_fallback(mut self, id: impl Into<String>) -> Self {
        self.fallback = Some(id.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse one line of a word table.
///
/// Returns `None` for blank lines, comments and lines with fewer than five
/// fields. Extra fields are folded into the last one, which therefore never
/// reads as `true`.
pub fn parse_line(line: &str) -> Option<TableLine> {
    let content = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    let fields: Vec<&str> = content.split_whitespace().collect();
    if fields.len() < 5 {
        return None;
    }
    let (token, id, value, match_word) = (fields[0], fields[1], fields[2], fields[3]);
    let case_ignore = fields.len() == 5 && fields[4] == "true";

    if token == FALLBACK_SENTINEL {
        return Some(TableLine::Fallback(id.to_string()));
    }

    let value = (value != NO_VALUE).then(|| value.to_string());
    Some(TableLine::Entry(WordEntry::new(
        token,
        id,
        value,
        match_word == "true",
        case_ignore,
    )))
}

/// Whether `s` matches `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
