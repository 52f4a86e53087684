//! Trie → recognizer source.
//!
//! Rendering is bottom-up: every child of a branch is rendered to text
//! first, the texts are merged by [`merge_arms`], and the dialect lays out
//! one arm per distinct text. The finished body is then wrapped in a
//! function declaration by the same dialect.
//!
//! Two dialects exist:
//! - [`RustDialect`]: nested `match` inside a labeled `'cut_word` block
//! - [`CppDialect`]: nested `switch` with a `cut_word:` label

pub mod cpp;
pub mod rust;

use std::fmt;

use crate::config::{GeneratorConfig, Target};
use crate::dedup::{merge_arms, saved_bodies, MergedArm};
use crate::error::Result;
use crate::trie::{Accept, Branch, Node};

pub use cpp::CppDialect;
pub use rust::RustDialect;

/// Layout rules for one output language.
///
/// `depth` is the nesting depth of the node being written; the root branch
/// is at depth 0 and each arm body one deeper.
pub trait Dialect {
    /// Write a terminal node.
    fn write_accept(&self, buf: &mut String, accept: &Accept, depth: usize) -> fmt::Result;

    /// Write a dispatch whose arms have already been rendered and merged.
    fn write_branch(
        &self,
        buf: &mut String,
        branch: &Branch,
        arms: &[MergedArm],
        depth: usize,
    ) -> fmt::Result;

    /// Wrap the rendered root in a complete function.
    fn write_function(&self, buf: &mut String, body: &str) -> fmt::Result;
}

/// Counters collected while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitStats {
    /// Dispatches written.
    pub branches: usize,
    /// Terminal nodes written (shared bodies count once per label).
    pub accepts: usize,
    /// Arm labels that reuse another label's body.
    pub merged_labels: usize,
}

/// Walks a trie and renders it through a [`Dialect`].
pub struct Emitter<'d, D: Dialect> {
    dialect: &'d D,
    stats: EmitStats,
}

impl<'d, D: Dialect> Emitter<'d, D> {
    pub fn new(dialect: &'d D) -> Self {
        Emitter {
            dialect,
            stats: EmitStats::default(),
        }
    }

    pub fn stats(&self) -> EmitStats {
        self.stats
    }

    /// Render one node and everything below it.
    pub fn fragment(&mut self, node: &Node, depth: usize) -> std::result::Result<String, fmt::Error> {
        let mut buf = String::new();
        match node {
            Node::Accept(accept) => {
                self.stats.accepts += 1;
                self.dialect.write_accept(&mut buf, accept, depth)?;
            }
            Node::Branch(branch) => {
                self.stats.branches += 1;
                let mut rendered = Vec::with_capacity(branch.arms.len());
                for (key, child) in &branch.arms {
                    rendered.push((*key, self.fragment(child, depth + 1)?));
                }
                let arms = merge_arms(rendered);
                self.stats.merged_labels += saved_bodies(&arms);
                self.dialect.write_branch(&mut buf, branch, &arms, depth)?;
            }
        }
        Ok(buf)
    }

    /// Render the whole recognizer function for `root`.
    pub fn emit(&mut self, root: &Node) -> Result<String> {
        let body = self.fragment(root, 0)?;
        let mut buf = String::with_capacity(body.len() + 512);
        self.dialect.write_function(&mut buf, &body)?;
        Ok(buf)
    }
}

/// Render `root` for the configured target.
///
/// `fallback` is the table's fallback identifier; `origin` names the table
/// in the banner.
pub fn render(
    root: &Node,
    fallback: Option<&str>,
    config: &GeneratorConfig,
    origin: Option<&str>,
) -> Result<(String, EmitStats)> {
    let mut buf = String::new();
    if config.header {
        write_banner(&mut buf, origin)?;
    }
    let (source, stats) = match config.target {
        Target::Rust => {
            let dialect = RustDialect::new(config, fallback);
            let mut emitter = Emitter::new(&dialect);
            let source = emitter.emit(root)?;
            (source, emitter.stats())
        }
        Target::Cpp => {
            let dialect = CppDialect::new(config, fallback);
            let mut emitter = Emitter::new(&dialect);
            let source = emitter.emit(root)?;
            (source, emitter.stats())
        }
    };
    buf.push_str(&source);
    Ok((buf, stats))
}

/// Both targets accept `//` line comments.
fn write_banner(buf: &mut String, origin: Option<&str>) -> fmt::Result {
    use fmt::Write;

    match origin {
        Some(origin) => writeln!(buf, "// Generated by wordcut from {origin}.")?,
        None => writeln!(buf, "// Generated by wordcut.")?,
    }
    writeln!(buf, "// Modifications by hand will be lost.")?;
    writeln!(buf)
}

/// Indentation helper shared by the dialects.
pub(crate) fn pad(width: usize) -> String {
    " ".repeat(width)
}
