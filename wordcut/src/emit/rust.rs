//! Rust dialect.
//!
//! The generated function scans a `&[char]` cursor:
//!
//! ```text
//! pub fn cut_word(ptr: &mut &[char], value: &mut i64) -> i32 {
//!     let p: &[char] = *ptr;
//!     let at = |i: usize| p.get(i).copied().unwrap_or('\0');
//!     'cut_word: {
//!         match at(0) {
//!             'i' => { ... }
//!             c if char::is_alphabetic(c) => break 'cut_word,
//!             _ => {}
//!         }
//!         return 0;
//!     }
//!     let len = p.iter().copied().take_while(|&c| char::is_alphanumeric(c)).count();
//!     *ptr = &p[len..];
//!     T_SYMBOL
//! }
//! ```
//!
//! Reads past the end of the input see `'\0'`. The labeled block and the
//! run-consuming tail exist only when the table registers a fallback.

use std::fmt::{self, Write};

use proc_macro2::TokenStream;

use super::{pad, Dialect};
use crate::config::GeneratorConfig;
use crate::dedup::MergedArm;
use crate::error::{GenError, Result};
use crate::trie::{Accept, Branch, Key};

/// Spaces per nesting step: one for the `match`, one for the arm body.
const STEP: usize = 8;

/// Lints the generated shape trips on purpose.
const ALLOWS: &str =
    "#[allow(unreachable_code, unreachable_patterns, unused_labels, unused_variables, clippy::all)]";

pub struct RustDialect<'a> {
    config: &'a GeneratorConfig,
    fallback: Option<&'a str>,
}

impl<'a> RustDialect<'a> {
    pub fn new(config: &'a GeneratorConfig, fallback: Option<&'a str>) -> Self {
        RustDialect { config, fallback }
    }

    /// The labeled block adds one level around the whole body.
    fn base(&self) -> usize {
        if self.fallback.is_some() {
            8
        } else {
            4
        }
    }

    fn indent(&self, depth: usize) -> String {
        pad(self.base() + depth * STEP)
    }

    fn write_labels(buf: &mut String, labels: &[Key]) -> fmt::Result {
        let mut first = true;
        for label in labels {
            if let Key::Char(c) = label {
                if !first {
                    buf.push_str(" | ");
                }
                first = false;
                write!(buf, "{}", char_literal(*c))?;
            }
        }
        Ok(())
    }
}

impl Dialect for RustDialect<'_> {
    fn write_accept(&self, buf: &mut String, accept: &Accept, depth: usize) -> fmt::Result {
        let ind = self.indent(depth);
        let n = accept.consumed;
        if accept.match_word {
            writeln!(buf, "{ind}if !{}(at({n})) {{", self.config.alnum_predicate)?;
            writeln!(buf, "{ind}    *ptr = &p[{n}..];")?;
            if let Some(value) = &accept.value {
                writeln!(buf, "{ind}    *value = {value};")?;
            }
            writeln!(buf, "{ind}    return {};", accept.id)?;
            writeln!(buf, "{ind}}}")?;
            if accept.cut_word {
                writeln!(buf, "{ind}break 'cut_word;")?;
            }
        } else {
            writeln!(buf, "{ind}*ptr = &p[{n}..];")?;
            if let Some(value) = &accept.value {
                writeln!(buf, "{ind}*value = {value};")?;
            }
            writeln!(buf, "{ind}return {};", accept.id)?;
        }
        Ok(())
    }

    fn write_branch(
        &self,
        buf: &mut String,
        branch: &Branch,
        arms: &[MergedArm],
        depth: usize,
    ) -> fmt::Result {
        let ind = self.indent(depth);
        writeln!(buf, "{ind}match at({}) {{", branch.offset)?;

        // A `match` is ordered, so the default group goes last under `_`;
        // its character labels dispatch there anyway.
        let mut default_body = None;
        for arm in arms {
            if arm.has_default() {
                default_body = Some(arm.body.as_str());
                continue;
            }
            buf.push_str(&ind);
            buf.push_str("    ");
            Self::write_labels(buf, &arm.labels)?;
            buf.push_str(" => {\n");
            buf.push_str(&arm.body);
            writeln!(buf, "{ind}    }}")?;
        }
        if branch.fallback_arm {
            writeln!(
                buf,
                "{ind}    c if {}(c) => break 'cut_word,",
                self.config.alpha_predicate
            )?;
        }
        match default_body {
            Some(body) => {
                writeln!(buf, "{ind}    _ => {{")?;
                buf.push_str(body);
                writeln!(buf, "{ind}    }}")?;
            }
            None => writeln!(buf, "{ind}    _ => {{}}")?,
        }
        writeln!(buf, "{ind}}}")?;
        if branch.cut_word {
            writeln!(buf, "{ind}break 'cut_word;")?;
        }
        Ok(())
    }

    fn write_function(&self, buf: &mut String, body: &str) -> fmt::Result {
        let config = self.config;
        writeln!(buf, "{ALLOWS}")?;
        writeln!(
            buf,
            "pub fn {}(ptr: &mut &[char], value: &mut {}) -> {} {{",
            config.function_name, config.value_type, config.id_type
        )?;
        writeln!(buf, "    let p: &[char] = *ptr;")?;
        writeln!(buf, "    let at = |i: usize| p.get(i).copied().unwrap_or('\\0');")?;
        match self.fallback {
            Some(fallback) => {
                writeln!(buf, "    'cut_word: {{")?;
                buf.push_str(body);
                writeln!(buf, "        return {};", config.no_match)?;
                writeln!(buf, "    }}")?;
                writeln!(
                    buf,
                    "    let len = p.iter().copied().take_while(|&c| {}(c)).count();",
                    config.alnum_predicate
                )?;
                writeln!(buf, "    *ptr = &p[len..];")?;
                writeln!(buf, "    {fallback}")?;
            }
            None => {
                buf.push_str(body);
                writeln!(buf, "    {}", config.no_match)?;
            }
        }
        writeln!(buf, "}}")
    }
}

/// A Rust character literal for `c`.
pub fn char_literal(c: char) -> String {
    format!("{c:?}")
}

/// Parse generated Rust into tokens, rejecting anything that is not a
/// well-formed item list.
pub fn validate(source: &str) -> Result<TokenStream> {
    let tokens = source
        .parse::<TokenStream>()
        .map_err(|e| GenError::InvalidRust(e.to_string()))?;
    syn::parse2::<syn::File>(tokens.clone()).map_err(|e| GenError::InvalidRust(e.to_string()))?;
    Ok(tokens)
}
