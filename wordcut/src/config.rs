//! Generator configuration.
//!
//! Everything the generator needs to know about the host that will compile
//! the recognizer: the function name, the identifier and value types, and
//! which predicates classify characters. Defaults depend on the target.

use crate::error::{GenError, Result};
use crate::table::is_identifier;

/// Output language of the generated recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
    /// `fn name(ptr: &mut &[char], value: &mut V) -> I` with nested `match`.
    #[default]
    Rust,
    /// `static I name(const C * & ptr, V &value)` with nested `switch`.
    Cpp,
}

impl Target {
    pub fn name(self) -> &'static str {
        match self {
            Target::Rust => "rust",
            Target::Cpp => "cpp",
        }
    }
}

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Name of the emitted function.
    pub function_name: String,
    /// Output language.
    pub target: Target,
    /// Return type of the function; table ids must be values of it.
    pub id_type: String,
    /// Returned when nothing matches.
    pub no_match: String,
    /// Type of the value slot; table values are assigned to it verbatim.
    pub value_type: String,
    /// Character type behind the cursor. Only used by the C++ target;
    /// Rust recognizers always scan `&[char]`.
    pub char_type: String,
    /// Callable deciding whether a character continues a word.
    pub alnum_predicate: String,
    /// Callable deciding whether a character may start a fallback run.
    pub alpha_predicate: String,
    /// Reject tables with ambiguous entries instead of picking the first.
    pub strict: bool,
    /// Prefix the output with a "generated, do not edit" banner.
    pub header: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::for_target(Target::Rust)
    }
}

impl GeneratorConfig {
    /// Defaults suited to `target`.
    pub fn for_target(target: Target) -> Self {
        let (id_type, value_type, char_type, alnum, alpha) = match target {
            Target::Rust => (
                "i32",
                "i64",
                "char",
                "char::is_alphanumeric",
                "char::is_alphabetic",
            ),
            Target::Cpp => ("int", "long", "wchar_t", "iswalnum", "iswalpha"),
        };
        GeneratorConfig {
            function_name: "cut_word".to_string(),
            target,
            id_type: id_type.to_string(),
            no_match: "0".to_string(),
            value_type: value_type.to_string(),
            char_type: char_type.to_string(),
            alnum_predicate: alnum.to_string(),
            alpha_predicate: alpha.to_string(),
            strict: false,
            header: true,
        }
    }

    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }

    pub fn with_id_type(mut self, ty: impl Into<String>) -> Self {
        self.id_type = ty.into();
        self
    }

    pub fn with_no_match(mut self, expr: impl Into<String>) -> Self {
        self.no_match = expr.into();
        self
    }

    pub fn with_value_type(mut self, ty: impl Into<String>) -> Self {
        self.value_type = ty.into();
        self
    }

    pub fn with_char_type(mut self, ty: impl Into<String>) -> Self {
        self.char_type = ty.into();
        self
    }

    /// Overrides both character predicates.
    pub fn with_predicates(mut self, alnum: impl Into<String>, alpha: impl Into<String>) -> Self {
        self.alnum_predicate = alnum.into();
        self.alpha_predicate = alpha.into();
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Check that every name will splice into valid source for the target.
    pub fn validate(&self) -> Result<()> {
        match self.target {
            Target::Rust => {
                syn::parse_str::<syn::Ident>(&self.function_name).map_err(|e| {
                    GenError::Config(format!(
                        "function name {:?} is not a Rust identifier: {e}",
                        self.function_name
                    ))
                })?;
                for (what, ty) in [("id type", &self.id_type), ("value type", &self.value_type)] {
                    syn::parse_str::<syn::Type>(ty).map_err(|e| {
                        GenError::Config(format!("{what} {ty:?} is not a Rust type: {e}"))
                    })?;
                }
                syn::parse_str::<syn::Expr>(&self.no_match).map_err(|e| {
                    GenError::Config(format!(
                        "no-match value {:?} is not a Rust expression: {e}",
                        self.no_match
                    ))
                })?;
                for (what, path) in [
                    ("alnum predicate", &self.alnum_predicate),
                    ("alpha predicate", &self.alpha_predicate),
                ] {
                    syn::parse_str::<syn::Path>(path).map_err(|e| {
                        GenError::Config(format!("{what} {path:?} is not a Rust path: {e}"))
                    })?;
                }
            }
            Target::Cpp => {
                if !is_identifier(&self.function_name) {
                    return Err(GenError::Config(format!(
                        "function name {:?} is not a C++ identifier",
                        self.function_name
                    )));
                }
                for (what, text) in [
                    ("id type", &self.id_type),
                    ("no-match value", &self.no_match),
                    ("value type", &self.value_type),
                    ("char type", &self.char_type),
                    ("alnum predicate", &self.alnum_predicate),
                    ("alpha predicate", &self.alpha_predicate),
                ] {
                    if text.trim().is_empty() {
                        return Err(GenError::Config(format!("{what} must not be empty")));
                    }
                }
            }
        }
        Ok(())
    }
}
