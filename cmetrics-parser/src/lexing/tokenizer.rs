//! The tokenizer state machine.
//!
//! Each state consumes one token's worth of characters and leaves the reader
//! positioned one character past the token, so a one-character lookahead is
//! always available for the next dispatch. Dispatch priority over the current
//! and peeked characters:
//!
//!     1. configured special token          -> Special
//!     2. whitespace other than newline     -> Whitespace (discarded)
//!     3. `//`                              -> LineComment
//!     4. `/*`                              -> BlockComment
//!     5. alphanumeric or `_`               -> Identifier
//!     6. unescaped `"`                     -> DoubleQuoted
//!     7. unescaped `'`                     -> SingleQuoted
//!     8. punctuation                       -> Punctuator
//!     9. anything else                     -> LexError

use std::fmt;
use std::io::{Cursor, Read};

use crate::lexing::reader::CharReader;
use crate::lexing::special::SpecialTokens;

/// Tokens are plain text fragments; their kind is derived by comparison, not
/// stored.
pub type Token = String;

/// An input character that matches none of the recognized classes. Fatal to
/// the current file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub byte: u8,
    pub line: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unclassifiable character 0x{:02x} at line {}",
            self.byte, self.line
        )
    }
}

impl std::error::Error for LexError {}

enum State {
    Special,
    Whitespace,
    LineComment,
    BlockComment,
    Identifier,
    DoubleQuoted,
    SingleQuoted,
    Punctuator,
}

/// Pulls tokens from an attached byte stream.
///
/// The sequence is lazy, finite, and not restartable: tokens are produced on
/// demand and the attached stream is consumed as they are.
pub struct Tokenizer {
    reader: Option<CharReader>,
    special: SpecialTokens,
    return_comments: bool,
}

impl Tokenizer {
    pub fn new() -> Self {
        Tokenizer {
            reader: None,
            special: SpecialTokens::default(),
            return_comments: false,
        }
    }

    /// Attach a readable source; a file stream and an in-memory buffer are
    /// equally fine. Replaces any previously attached stream.
    pub fn attach<R: Read + 'static>(&mut self, source: R) {
        self.reader = Some(CharReader::new(Box::new(source)));
    }

    /// Convenience attachment for in-memory source text.
    pub fn attach_str(&mut self, source: &str) {
        self.attach(Cursor::new(source.to_owned()));
    }

    pub fn is_attached(&self) -> bool {
        self.reader.is_some()
    }

    /// Start or stop returning comments as tokens. Off by default.
    pub fn return_comments(&mut self, do_return: bool) {
        self.return_comments = do_return;
    }

    /// Replace the one- and two-character token sets from a comma-separated
    /// string. Takes effect from the next token on.
    pub fn set_special_tokens(&mut self, csv: &str) {
        self.special.replace_from_csv(csv);
    }

    /// Number of newlines pulled from the stream so far, starting at 1.
    pub fn line_count(&self) -> usize {
        self.reader.as_ref().map_or(1, CharReader::line)
    }

    /// Line holding the most recently produced token. Unlike [line_count],
    /// this does not run ahead when the one-character lookahead past the
    /// token has already crossed into the next line.
    ///
    /// [line_count]: Tokenizer::line_count
    pub fn token_line(&self) -> usize {
        self.reader.as_ref().map_or(1, CharReader::consumed_line)
    }

    /// Produce the next token, `Ok(None)` once the stream is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        let return_comments = self.return_comments;
        let reader = match self.reader.as_mut() {
            Some(reader) => reader,
            None => return Ok(None),
        };
        loop {
            let curr = match reader.curr() {
                Some(curr) => curr,
                None => return Ok(None),
            };
            let state = dispatch(reader, &self.special, curr)?;
            let token = match state {
                State::Special => eat_special(reader, &self.special, curr),
                State::Whitespace => eat_whitespace(reader),
                State::LineComment => eat_line_comment(reader, return_comments),
                State::BlockComment => eat_block_comment(reader, return_comments),
                State::Identifier => eat_identifier(reader),
                State::DoubleQuoted => eat_quoted(reader, b'"'),
                State::SingleQuoted => eat_quoted(reader, b'\''),
                State::Punctuator => eat_punctuator(reader, &self.special),
            };
            if !token.is_empty() {
                return Ok(Some(token));
            }
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new()
    }
}

fn dispatch(reader: &CharReader, special: &SpecialTokens, curr: u8) -> Result<State, LexError> {
    let peek = reader.peek();
    if special.is_one_char(curr) {
        return Ok(State::Special);
    }
    if curr.is_ascii_whitespace() && curr != b'\n' {
        return Ok(State::Whitespace);
    }
    if curr == b'/' && peek == Some(b'/') {
        return Ok(State::LineComment);
    }
    if curr == b'/' && peek == Some(b'*') {
        return Ok(State::BlockComment);
    }
    if curr.is_ascii_alphanumeric() || curr == b'_' {
        return Ok(State::Identifier);
    }
    if curr == b'"' && reader.prev() != Some(b'\\') {
        return Ok(State::DoubleQuoted);
    }
    if curr == b'\'' && reader.prev() != Some(b'\\') {
        return Ok(State::SingleQuoted);
    }
    if curr.is_ascii_punctuation() {
        return Ok(State::Punctuator);
    }
    Err(LexError {
        byte: curr,
        line: reader.line(),
    })
}

fn eat_whitespace(reader: &mut CharReader) -> Token {
    loop {
        reader.advance();
        match reader.curr() {
            Some(c) if c.is_ascii_whitespace() && c != b'\n' => continue,
            _ => break,
        }
    }
    Token::new()
}

fn eat_line_comment(reader: &mut CharReader, keep: bool) -> Token {
    let mut token = Token::new();
    loop {
        if keep {
            if let Some(c) = reader.curr() {
                token.push(c as char);
            }
        }
        reader.advance();
        if reader.at_end() || reader.curr() == Some(b'\n') {
            break;
        }
    }
    token
}

fn eat_block_comment(reader: &mut CharReader, keep: bool) -> Token {
    let mut token = Token::new();
    loop {
        if keep {
            if let Some(c) = reader.curr() {
                token.push(c as char);
            }
        }
        reader.advance();
        if reader.at_end() {
            return token;
        }
        if reader.curr() == Some(b'*') && reader.peek() == Some(b'/') {
            break;
        }
    }
    if keep {
        token.push('*');
    }
    reader.advance(); // the terminating '/'
    if reader.at_end() {
        return token;
    }
    if keep {
        token.push('/');
    }
    reader.advance(); // first character past the comment
    token
}

fn eat_identifier(reader: &mut CharReader) -> Token {
    let mut token = Token::new();
    loop {
        if let Some(c) = reader.curr() {
            token.push(c as char);
        }
        reader.advance();
        match reader.curr() {
            Some(c) if c.is_ascii_alphanumeric() || c == b'_' => continue,
            _ => break,
        }
    }
    token
}

fn eat_special(reader: &mut CharReader, special: &SpecialTokens, curr: u8) -> Token {
    let mut token = Token::new();
    token.push(curr as char);
    if let Some(peek) = reader.peek() {
        let pair = format!("{}{}", curr as char, peek as char);
        if special.is_two_char(&pair) {
            reader.advance();
            token.push(peek as char);
        }
    }
    reader.advance();
    token
}

/// Odd number of trailing backslashes means the next quote is escaped.
fn ends_escaped(token: &str) -> bool {
    token.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

fn eat_quoted(reader: &mut CharReader, quote: u8) -> Token {
    let mut token = Token::new();
    loop {
        if let Some(c) = reader.curr() {
            token.push(c as char);
        }
        reader.advance();
        match reader.curr() {
            None => return token,
            Some(c) if c == quote && !ends_escaped(&token) => break,
            Some(_) => continue,
        }
    }
    token.push(quote as char);
    reader.advance();
    token
}

fn eat_punctuator(reader: &mut CharReader, special: &SpecialTokens) -> Token {
    let mut token = Token::new();
    loop {
        let curr = match reader.curr() {
            Some(curr) => curr,
            None => return token,
        };
        // Stop early at the start of a quoted string or a configured token.
        if (curr == b'"' || curr == b'\'') && reader.prev() != Some(b'\\') {
            return token;
        }
        if special.is_one_char(curr) {
            return token;
        }
        token.push(curr as char);
        reader.advance();
        match reader.curr() {
            Some(c) if c.is_ascii_punctuation() => continue,
            _ => return token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(source: &str) -> Vec<Token> {
        let mut toker = Tokenizer::new();
        toker.attach_str(source);
        let mut tokens = Vec::new();
        while let Some(tok) = toker.next_token().expect("classifiable input") {
            tokens.push(tok);
        }
        tokens
    }

    #[test]
    fn identifiers_and_specials() {
        assert_eq!(collect("int x = 10"), vec!["int", "x", "=", "10"]);
    }

    #[test]
    fn two_char_tokens_are_preferred() {
        assert_eq!(collect("a << b"), vec!["a", "<<", "b"]);
        assert_eq!(collect("std::cout"), vec!["std", "::", "cout"]);
        assert_eq!(collect("i++"), vec!["i", "++"]);
        // a lone '<' still comes out on its own
        assert_eq!(collect("a < b"), vec!["a", "<", "b"]);
    }

    #[test]
    fn newline_is_a_token() {
        assert_eq!(collect("a\nb"), vec!["a", "\n", "b"]);
    }

    #[test]
    fn punctuator_runs_are_maximal_but_stop_at_specials() {
        assert_eq!(collect("a;b"), vec!["a", ";", "b"]);
        assert_eq!(collect("x;("), vec!["x", ";", "("]);
        assert_eq!(collect("a->b"), vec!["a", "-", ">", "b"]); // '-' and '>' are configured tokens
        assert_eq!(collect("#include"), vec!["#", "include"]);
    }

    #[test]
    fn comments_are_suppressed_by_default() {
        assert_eq!(collect("x // trailing\ny"), vec!["x", "\n", "y"]);
        assert_eq!(collect("a /* inner */ b"), vec!["a", "b"]);
    }

    #[test]
    fn comments_can_be_returned_verbatim() {
        let mut toker = Tokenizer::new();
        toker.return_comments(true);
        toker.attach_str("x // trailing\ny");
        let mut tokens = Vec::new();
        while let Some(tok) = toker.next_token().unwrap() {
            tokens.push(tok);
        }
        assert_eq!(tokens, vec!["x", "// trailing", "\n", "y"]);

        let mut toker = Tokenizer::new();
        toker.return_comments(true);
        toker.attach_str("a /* inner */ b");
        let mut tokens = Vec::new();
        while let Some(tok) = toker.next_token().unwrap() {
            tokens.push(tok);
        }
        assert_eq!(tokens, vec!["a", "/* inner */", "b"]);
    }

    #[test]
    fn quoted_strings_keep_their_delimiters() {
        assert_eq!(collect(r#"s = "hello" ;"#), vec!["s", "=", "\"hello\"", ";"]);
        assert_eq!(collect("c = 'x' ;"), vec!["c", "=", "'x'", ";"]);
    }

    #[test]
    fn escaped_quote_does_not_terminate_the_string() {
        // "a\"b" - the inner quote is escaped by a single backslash
        assert_eq!(collect(r#""a\"b""#), vec![r#""a\"b""#]);
    }

    #[test]
    fn doubled_backslash_does_not_escape_the_closing_quote() {
        // "a\\" - two backslashes, so the final quote terminates
        assert_eq!(collect(r#""a\\""#), vec![r#""a\\""#]);
    }

    #[test]
    fn line_count_tracks_newlines_inside_comments() {
        let mut toker = Tokenizer::new();
        toker.attach_str("a\n/* one\ntwo */\nb");
        while toker.next_token().unwrap().is_some() {}
        assert_eq!(toker.line_count(), 4);
    }

    #[test]
    fn token_line_stays_with_the_token_just_produced() {
        let mut toker = Tokenizer::new();
        toker.attach_str("a;\nb;");
        assert_eq!(toker.next_token().unwrap(), Some("a".to_string()));
        assert_eq!(toker.token_line(), 1);
        assert_eq!(toker.next_token().unwrap(), Some(";".to_string()));
        // the lookahead now sits on the newline; the ';' is still on line 1
        assert_eq!(toker.line_count(), 2);
        assert_eq!(toker.token_line(), 1);
        assert_eq!(toker.next_token().unwrap(), Some("\n".to_string()));
        assert_eq!(toker.next_token().unwrap(), Some("b".to_string()));
        assert_eq!(toker.token_line(), 2);
        assert_eq!(toker.next_token().unwrap(), Some(";".to_string()));
        // end of input mid-line: no trailing newline to over-count
        assert_eq!(toker.token_line(), 2);
    }

    #[test]
    fn unclassifiable_character_is_a_lex_error() {
        let mut toker = Tokenizer::new();
        toker.attach_str("a \x01 b");
        assert_eq!(toker.next_token().unwrap(), Some("a".to_string()));
        let err = toker.next_token().unwrap_err();
        assert_eq!(err.byte, 0x01);
        assert_eq!(err.line, 1);
    }

    #[test]
    fn unattached_tokenizer_yields_nothing() {
        let mut toker = Tokenizer::new();
        assert_eq!(toker.next_token().unwrap(), None);
        assert_eq!(toker.line_count(), 1);
    }

    #[test]
    fn special_token_sets_are_replaceable() {
        let mut toker = Tokenizer::new();
        toker.set_special_tokens("., +, +=, \n");
        toker.attach_str("a+=b{c");
        let mut tokens = Vec::new();
        while let Some(tok) = toker.next_token().unwrap() {
            tokens.push(tok);
        }
        // '{' is no longer special, so it joins a punctuator run of its own
        assert_eq!(tokens, vec!["a", "+=", "b", "{", "c"]);
    }
}
