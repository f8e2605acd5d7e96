//! The mutable, indexable token buffer shared by the assembler and all rules.

use std::fmt;
use std::ops::Index;

use serde::Serialize;

use crate::lexing::Token;

/// Out-of-range indexed access into a [TokenCollection]. Fatal to the caller
/// of that access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "token index {} out of range for collection of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexError {}

/// An ordered, mutable sequence of tokens.
///
/// Indices are stable only between mutations: removal shifts everything that
/// follows. Search operations return the collection length when the token is
/// absent, which composes well with the before/after position arithmetic the
/// rules do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenCollection {
    tokens: Vec<Token>,
}

impl TokenCollection {
    pub fn new() -> Self {
        TokenCollection::default()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn push(&mut self, tok: impl Into<Token>) {
        self.tokens.push(tok.into());
    }

    pub fn get(&self, n: usize) -> Option<&str> {
        self.tokens.get(n).map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// Bounds-checked read.
    pub fn at(&self, n: usize) -> Result<&str, IndexError> {
        self.get(n).ok_or(IndexError {
            index: n,
            len: self.len(),
        })
    }

    /// Bounds-checked write.
    pub fn set(&mut self, n: usize, tok: impl Into<Token>) -> Result<(), IndexError> {
        let len = self.len();
        match self.tokens.get_mut(n) {
            Some(slot) => {
                *slot = tok.into();
                Ok(())
            }
            None => Err(IndexError { index: n, len }),
        }
    }

    /// Position of the first occurrence of `tok`; the collection length when
    /// absent.
    pub fn find(&self, tok: &str) -> usize {
        self.tokens
            .iter()
            .position(|t| t == tok)
            .unwrap_or_else(|| self.len())
    }

    pub fn contains(&self, tok: &str) -> bool {
        self.find(tok) < self.len()
    }

    /// Remove the first occurrence of `tok`.
    pub fn remove(&mut self, tok: &str) -> bool {
        match self.tokens.iter().position(|t| t == tok) {
            Some(i) => {
                self.tokens.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn remove_at(&mut self, n: usize) -> bool {
        if n < self.tokens.len() {
            self.tokens.remove(n);
            true
        } else {
            false
        }
    }

    /// Drop newlines from the front, but never below one remaining token.
    pub fn trim_front(&mut self) {
        while self.tokens.len() > 1 && self.tokens[0] == "\n" {
            self.tokens.remove(0);
        }
    }

    pub fn to_lower(&mut self) {
        for tok in &mut self.tokens {
            *tok = tok.to_lowercase();
        }
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Space-joined rendition, newlines omitted unless asked for.
    pub fn show(&self, show_newlines: bool) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.tokens.len());
        for tok in &self.tokens {
            if tok == "\n" {
                if show_newlines {
                    parts.push("\\n");
                }
            } else {
                parts.push(tok);
            }
        }
        parts.join(" ")
    }
}

impl Index<usize> for TokenCollection {
    type Output = str;

    fn index(&self, n: usize) -> &str {
        &self.tokens[n]
    }
}

impl<S: Into<Token>> FromIterator<S> for TokenCollection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TokenCollection {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}
