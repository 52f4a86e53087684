//! Decision trie construction.
//!
//! Entries are partitioned by their next character, level by level, until
//! every path ends in a single entry with nothing left to match:
//!
//! ```text
//!   if, iffy            root ──'i'──▶ "i" ──'f'──▶ "if" ──End──▶ Accept(if)
//!                                                   └──'f'──▶ "iff" ──'y'──▶ Accept(iffy)
//! ```
//!
//! The `End` key is the wildcard arm taken when the input continues with
//! something no longer literal matches. The builder is a pure function of
//! the table: candidates own their remaining characters and nothing is
//! shared between levels.

use crate::error::{GenError, Result};
use crate::table::{is_identifier, WordEntry, WordTable};

/// Partition key of one branch arm.
///
/// `End` orders before every character so that an entry which is fully
/// consumed sorts ahead of the longer literals sharing its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// No literal characters remain; the default arm.
    End,
    /// The character at the branch's cursor offset.
    Char(char),
}

/// A terminal node: the path so far spells exactly one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accept {
    /// Characters consumed on a match.
    pub consumed: usize,
    pub id: String,
    pub value: Option<String>,
    /// Guard the match with "next character is not alphanumeric".
    pub match_word: bool,
    /// When the guard rejects, continue with the fallback path.
    pub cut_word: bool,
}

/// A multi-way dispatch on the character at `offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub offset: usize,
    /// One arm per partition, in key order.
    pub arms: Vec<(Key, Node)>,
    /// Root only: an alphabetic character no arm claims starts a fallback run.
    pub fallback_arm: bool,
    /// Control leaving the dispatch continues with the fallback path.
    pub cut_word: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Accept(Accept),
    Branch(Branch),
}

impl Node {
    pub fn branch_count(&self) -> usize {
        match self {
            Node::Accept(_) => 0,
            Node::Branch(branch) => {
                1 + branch.arms.iter().map(|(_, child)| child.branch_count()).sum::<usize>()
            }
        }
    }

    pub fn accept_count(&self) -> usize {
        match self {
            Node::Accept(_) => 1,
            Node::Branch(branch) => branch.arms.iter().map(|(_, child)| child.accept_count()).sum(),
        }
    }
}

/// An entry on its way down the trie.
#[derive(Debug, Clone)]
struct Candidate<'a> {
    /// Characters not yet matched.
    rest: String,
    entry: &'a WordEntry,
    /// Row position in the table; breaks ties deterministically.
    index: usize,
}

/// Builds the decision trie for one table.
#[derive(Debug, Clone, Copy)]
pub struct TrieBuilder<'a> {
    fallback: Option<&'a str>,
    strict: bool,
}

impl<'a> TrieBuilder<'a> {
    pub fn new(fallback: Option<&'a str>, strict: bool) -> Self {
        TrieBuilder { fallback, strict }
    }

    /// Build the root node for `entries`.
    pub fn build(&self, entries: &'a [WordEntry]) -> Result<Node> {
        let candidates: Vec<Candidate<'a>> = entries
            .iter()
            .enumerate()
            .filter(|(index, entry)| {
                if entry.token.is_empty() {
                    tracing::warn!(row = index + 1, id = %entry.id, "ignoring entry with empty token");
                    return false;
                }
                true
            })
            .map(|(index, entry)| Candidate {
                rest: entry.token.clone(),
                entry,
                index,
            })
            .collect();

        let root = self.node(0, candidates, "", false)?;
        tracing::debug!(
            branches = root.branch_count(),
            accepts = root.accept_count(),
            "built decision trie"
        );
        Ok(root)
    }

    fn node(
        &self,
        level: usize,
        mut candidates: Vec<Candidate<'a>>,
        prefix: &str,
        is_default: bool,
    ) -> Result<Node> {
        // The default arm is entered without consuming a character.
        let consumed = if is_default { level - 1 } else { level };
        debug_assert_eq!(consumed, prefix.chars().count());

        expand_case_ignore(&mut candidates);

        if !candidates.is_empty() && candidates.iter().all(|c| c.rest.is_empty()) {
            let winner = self.resolve_terminal(candidates, prefix)?;
            return Ok(Node::Accept(Accept {
                consumed,
                id: winner.entry.id.clone(),
                value: winner.entry.value.clone(),
                match_word: winner.entry.match_word,
                cut_word: winner.entry.is_word && self.fallback.is_some(),
            }));
        }

        candidates.sort_by(|a, b| a.rest.cmp(&b.rest).then(a.index.cmp(&b.index)));

        let mut partitions: Vec<(Key, Vec<Candidate<'a>>)> = Vec::new();
        for candidate in candidates {
            let mut chars = candidate.rest.chars();
            let key = match chars.next() {
                Some(c) => Key::Char(c),
                None => Key::End,
            };
            let stripped = Candidate {
                rest: chars.as_str().to_string(),
                ..candidate
            };
            match partitions.last_mut() {
                Some((last, group)) if *last == key => group.push(stripped),
                _ => partitions.push((key, vec![stripped])),
            }
        }

        let mut arms = Vec::with_capacity(partitions.len());
        for (key, group) in partitions {
            let child = match key {
                Key::End => self.node(level + 1, group, prefix, true)?,
                Key::Char(c) => {
                    let mut child_prefix = String::with_capacity(prefix.len() + c.len_utf8());
                    child_prefix.push_str(prefix);
                    child_prefix.push(c);
                    self.node(level + 1, group, &child_prefix, false)?
                }
            };
            arms.push((key, child));
        }

        Ok(Node::Branch(Branch {
            offset: consumed,
            arms,
            fallback_arm: level == 0 && self.fallback.is_some(),
            cut_word: self.fallback.is_some() && is_identifier(prefix),
        }))
    }

    /// Pick the entry that owns a terminal node.
    fn resolve_terminal(
        &self,
        candidates: Vec<Candidate<'a>>,
        prefix: &str,
    ) -> Result<Candidate<'a>> {
        if candidates.len() > 1 {
            let mut rows: Vec<&Candidate<'a>> = candidates.iter().collect();
            rows.sort_by_key(|c| c.index);
            let ids: Vec<String> = rows.iter().map(|c| c.entry.id.clone()).collect();
            if self.strict {
                return Err(GenError::Ambiguous {
                    prefix: prefix.to_string(),
                    ids,
                });
            }
            tracing::warn!(
                prefix,
                ?ids,
                "ambiguous entries end at the same node; the earliest row wins"
            );
        }
        candidates
            .into_iter()
            .min_by_key(|c| c.index)
            .ok_or_else(|| GenError::Config("terminal node without entries".to_string()))
    }
}

/// Add, for every case-insensitive candidate, a copy whose first remaining
/// character is upper-cased.
fn expand_case_ignore(candidates: &mut Vec<Candidate<'_>>) {
    let mut copies = Vec::new();
    for candidate in candidates.iter() {
        if !candidate.entry.case_ignore {
            continue;
        }
        let mut chars = candidate.rest.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        let upper = first.to_ascii_uppercase();
        if upper != first {
            let mut rest = String::with_capacity(candidate.rest.len());
            rest.push(upper);
            rest.push_str(chars.as_str());
            copies.push(Candidate {
                rest,
                ..candidate.clone()
            });
        }
    }
    candidates.extend(copies);
}

/// Build the decision trie for a whole table.
pub fn build(table: &WordTable, strict: bool) -> Result<Node> {
    TrieBuilder::new(table.fallback.as_deref(), strict).build(&table.entries)
}
