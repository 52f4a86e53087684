//! Trie interpreter.
//!
//! Walks a built [`Node`] exactly the way the emitted Rust recognizer
//! executes, so recognizer behavior can be checked without compiling the
//! output. Arms never fall through; a rejected guard leaves the enclosing
//! dispatch, which then either transfers to the fallback path or returns
//! control to its parent.

use crate::error::Result;
use crate::table::WordTable;
use crate::trie::{self, Key, Node};

/// Result of recognizing at the start of an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing matched; the cursor stays put.
    NoMatch,
    /// A table entry matched.
    Matched {
        id: String,
        value: Option<String>,
        consumed: usize,
    },
    /// An identifier-shaped run was consumed under the fallback identifier.
    CutWord { id: String, consumed: usize },
}

impl Outcome {
    /// Characters the cursor advances by.
    pub fn consumed(&self) -> usize {
        match self {
            Outcome::NoMatch => 0,
            Outcome::Matched { consumed, .. } | Outcome::CutWord { consumed, .. } => *consumed,
        }
    }

    /// Identifier returned by the recognizer, `None` for no match.
    pub fn id(&self) -> Option<&str> {
        match self {
            Outcome::NoMatch => None,
            Outcome::Matched { id, .. } | Outcome::CutWord { id, .. } => Some(id),
        }
    }
}

/// How control leaves a node.
enum Flow {
    Return(Outcome),
    CutWord,
    Continue,
}

/// A built trie plus the fallback identifier, ready to run.
#[derive(Debug, Clone)]
pub struct Recognizer {
    root: Node,
    fallback: Option<String>,
    alnum: fn(char) -> bool,
    alpha: fn(char) -> bool,
}

impl Recognizer {
    /// Wrap an already built trie. Uses the default Rust predicates.
    pub fn new(root: Node, fallback: Option<String>) -> Self {
        Recognizer {
            root,
            fallback,
            alnum: char::is_alphanumeric,
            alpha: char::is_alphabetic,
        }
    }

    /// Build the trie for `table` and wrap it.
    pub fn from_table(table: &WordTable, strict: bool) -> Result<Self> {
        let root = trie::build(table, strict)?;
        Ok(Self::new(root, table.fallback.clone()))
    }

    /// Replace the character predicates.
    pub fn with_predicates(mut self, alnum: fn(char) -> bool, alpha: fn(char) -> bool) -> Self {
        self.alnum = alnum;
        self.alpha = alpha;
        self
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn recognize(&self, input: &[char]) -> Outcome {
        match self.eval(&self.root, input) {
            Flow::Return(outcome) => outcome,
            Flow::CutWord => self.cut_word(input),
            Flow::Continue => Outcome::NoMatch,
        }
    }

    pub fn recognize_str(&self, input: &str) -> Outcome {
        let chars: Vec<char> = input.chars().collect();
        self.recognize(&chars)
    }

    fn eval(&self, node: &Node, input: &[char]) -> Flow {
        let at = |i: usize| input.get(i).copied().unwrap_or('\0');
        match node {
            Node::Accept(accept) => {
                if !accept.match_word || !(self.alnum)(at(accept.consumed)) {
                    Flow::Return(Outcome::Matched {
                        id: accept.id.clone(),
                        value: accept.value.clone(),
                        consumed: accept.consumed,
                    })
                } else if accept.cut_word {
                    Flow::CutWord
                } else {
                    Flow::Continue
                }
            }
            Node::Branch(branch) => {
                let c = at(branch.offset);
                let arm = branch
                    .arms
                    .iter()
                    .find(|(key, _)| *key == Key::Char(c))
                    .map(|(_, child)| child);
                let flow = match arm {
                    Some(child) => self.eval(child, input),
                    None if branch.fallback_arm && (self.alpha)(c) => Flow::CutWord,
                    None => match branch.arms.iter().find(|(key, _)| *key == Key::End) {
                        Some((_, child)) => self.eval(child, input),
                        None => Flow::Continue,
                    },
                };
                match flow {
                    Flow::Continue if branch.cut_word => Flow::CutWord,
                    flow => flow,
                }
            }
        }
    }

    fn cut_word(&self, input: &[char]) -> Outcome {
        let consumed = input.iter().take_while(|c| (self.alnum)(**c)).count();
        match &self.fallback {
            Some(id) => Outcome::CutWord {
                id: id.clone(),
                consumed,
            },
            None => Outcome::NoMatch,
        }
    }
}
