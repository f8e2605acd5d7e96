//! The semi-expression assembler.

use std::fmt;
use std::io::Read;

use crate::assembling::{IndexError, TokenCollection};
use crate::lexing::{is_comment, LexError, Token, Tokenizer};

const ACCESS_SPECIFIERS: &[&str] = &["public", "protected", "private"];

/// Failures while pulling a semi-expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssembleError {
    /// A fill was requested with no stream attached to the tokenizer. This is
    /// a programming error in the driver, not bad input.
    NotAttached,
    /// The tokenizer hit an unclassifiable character.
    Lex(LexError),
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssembleError::NotAttached => write!(f, "no stream attached to the tokenizer"),
            AssembleError::Lex(err) => write!(f, "lex error: {}", err),
        }
    }
}

impl std::error::Error for AssembleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssembleError::NotAttached => None,
            AssembleError::Lex(err) => Some(err),
        }
    }
}

impl From<LexError> for AssembleError {
    fn from(err: LexError) -> Self {
        AssembleError::Lex(err)
    }
}

/// Pulls tokens from an owned [Tokenizer] and groups them into terminated
/// units. Collection operations proxy through to the current buffer.
pub struct SemiExpression {
    tokenizer: Tokenizer,
    tokens: TokenCollection,
    has_for: bool,
}

impl SemiExpression {
    pub fn new(tokenizer: Tokenizer) -> Self {
        SemiExpression {
            tokenizer,
            tokens: TokenCollection::new(),
            has_for: false,
        }
    }

    /// Attach a new source stream to the underlying tokenizer.
    pub fn attach<R: Read + 'static>(&mut self, source: R) {
        self.tokenizer.attach(source);
    }

    pub fn tokenizer_mut(&mut self) -> &mut Tokenizer {
        &mut self.tokenizer
    }

    /// Refill the collection up to the next terminator.
    ///
    /// Returns `Ok(true)` when a terminator was found, `Ok(false)` when the
    /// stream ended first (any tokens collected so far are retained).
    pub fn get(&mut self, clear: bool) -> Result<bool, AssembleError> {
        let ok = self.fill(clear)?;
        if self.has_for && self.semicolon_between_parens() {
            self.fill(false)?; // loop-condition clause
            self.fill(false)?; // increment clause
        }
        Ok(ok)
    }

    fn fill(&mut self, clear: bool) -> Result<bool, AssembleError> {
        self.has_for = false;
        if !self.tokenizer.is_attached() {
            return Err(AssembleError::NotAttached);
        }
        if clear {
            self.tokens.clear();
        }
        loop {
            let token = match self.tokenizer.next_token()? {
                Some(token) => token,
                None => return Ok(false),
            };
            if token == "for" {
                self.has_for = true;
            }
            self.tokens.push(token.clone());
            if self.is_terminator(&token) {
                return Ok(true);
            }
        }
    }

    fn is_terminator(&mut self, token: &str) -> bool {
        if token == "{" || token == "}" || token == ";" {
            return true;
        }
        if token == "\n" {
            self.tokens.trim_front();
            if self.tokens.get(0) == Some("#") {
                return true;
            }
        }
        if self.tokens.len() < 2 {
            return false;
        }
        if token == ":" {
            let before = self.tokens.get(self.tokens.len() - 2);
            if before.map_or(false, |t| ACCESS_SPECIFIERS.contains(&t)) {
                return true;
            }
        }
        false
    }

    /// Does the first `;` lie between the first `(` and the first `)`?
    /// Decides whether a `for(...)` header needs its extra fills.
    fn semicolon_between_parens(&self) -> bool {
        let open = self.tokens.find("(");
        let semi = self.tokens.find(";");
        let close = self.tokens.find(")");
        open < semi && semi < close
    }

    /// Line number of the construct just collected: the line holding the
    /// terminator token, unaffected by how far the lookahead has read.
    pub fn current_line(&self) -> usize {
        self.tokenizer.token_line()
    }

    pub fn tokens(&self) -> &TokenCollection {
        &self.tokens
    }

    pub fn tokens_mut(&mut self) -> &mut TokenCollection {
        &mut self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn find(&self, tok: &str) -> usize {
        self.tokens.find(tok)
    }

    pub fn at(&self, n: usize) -> Result<&str, IndexError> {
        self.tokens.at(n)
    }

    pub fn set(&mut self, n: usize, tok: impl Into<Token>) -> Result<(), IndexError> {
        self.tokens.set(n, tok)
    }

    pub fn trim_front(&mut self) {
        self.tokens.trim_front();
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn is_comment(&self, tok: &str) -> bool {
        is_comment(tok)
    }

    pub fn show(&self, show_newlines: bool) -> String {
        self.tokens.show(show_newlines)
    }
}
