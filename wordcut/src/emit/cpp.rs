//! C++ dialect.
//!
//! Layout follows the hand-maintained word maps this generator replaces:
//! one space of indentation per level, stacked `case` labels, and a
//! `cut_word:` label at the end of the function reached by `goto`. Every
//! arm ends in `break`, so a rejected word-boundary guard leaves the switch
//! instead of running into the next arm, and the cursor is only advanced
//! once a match is accepted.

use std::fmt::{self, Write};

use super::{pad, Dialect};
use crate::config::GeneratorConfig;
use crate::dedup::MergedArm;
use crate::trie::{Accept, Branch, Key};

pub struct CppDialect<'a> {
    config: &'a GeneratorConfig,
    fallback: Option<&'a str>,
}

impl<'a> CppDialect<'a> {
    pub fn new(config: &'a GeneratorConfig, fallback: Option<&'a str>) -> Self {
        CppDialect { config, fallback }
    }

    fn indent(depth: usize) -> String {
        pad(depth + 1)
    }

    /// `{ ptr += n; value = v; return id; }`
    fn write_return(buf: &mut String, accept: &Accept) -> fmt::Result {
        write!(buf, "{{ ptr += {}; ", accept.consumed)?;
        if let Some(value) = &accept.value {
            write!(buf, "value = {value}; ")?;
        }
        writeln!(buf, "return {}; }}", accept.id)
    }
}

impl Dialect for CppDialect<'_> {
    fn write_accept(&self, buf: &mut String, accept: &Accept, depth: usize) -> fmt::Result {
        let ind = Self::indent(depth);
        buf.push_str(&ind);
        if accept.match_word {
            write!(
                buf,
                "if(!{}(p[{}])) ",
                self.config.alnum_predicate, accept.consumed
            )?;
            Self::write_return(buf, accept)?;
            if accept.cut_word {
                writeln!(buf, "{ind}goto cut_word;")?;
            }
        } else {
            Self::write_return(buf, accept)?;
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
        let ind = Self::indent(depth);
        writeln!(buf, "{ind}switch(p[{}]) {{", branch.offset)?;
        for arm in arms {
            for label in &arm.labels {
                match label {
                    Key::Char(c) => writeln!(buf, "{ind}case {}:", char_literal(*c))?,
                    Key::End => writeln!(buf, "{ind}default:")?,
                }
            }
            buf.push_str(&arm.body);
            writeln!(buf, "{ind} break;")?;
        }
        if branch.fallback_arm {
            writeln!(buf, "{ind}default:")?;
            writeln!(
                buf,
                "{ind} if({}(p[{}])) {{ p++; goto cut_word; }}",
                self.config.alpha_predicate, branch.offset
            )?;
        }
        writeln!(buf, "{ind}}}")?;
        if branch.cut_word {
            writeln!(buf, "{ind}goto cut_word;")?;
        }
        Ok(())
    }

    fn write_function(&self, buf: &mut String, body: &str) -> fmt::Result {
        let config = self.config;
        writeln!(
            buf,
            "static {} {}(const {} * & ptr, {} &value)",
            config.id_type, config.function_name, config.char_type, config.value_type
        )?;
        writeln!(buf, "{{")?;
        writeln!(buf, " const {} * p = ptr;", config.char_type)?;
        writeln!(buf)?;
        buf.push_str(body);
        writeln!(buf, " return {};", config.no_match)?;
        if let Some(fallback) = self.fallback {
            writeln!(buf, "cut_word:")?;
            writeln!(buf, " while({}(*p)) p++;", config.alnum_predicate)?;
            writeln!(buf, " ptr = p;")?;
            writeln!(buf, " return {fallback};")?;
        }
        writeln!(buf, "}}")
    }
}

/// A C++ case label for `c`: a quoted literal for printable ASCII, a hex
/// code point otherwise.
pub fn char_literal(c: char) -> String {
    match c {
        '\\' => "'\\\\'".to_string(),
        '\'' => "'\\''".to_string(),
        ' '..='~' => format!("'{c}'"),
        _ => format!("0x{:X}", c as u32),
    }
}
