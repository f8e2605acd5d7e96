//! Buffered character source with one-character lookahead.
//!
//! Every tokenizer state relies on the same small protocol: `curr` is the next
//! unconsumed character, `peek` the one after it, and `prev` the one most
//! recently consumed. Read errors are treated like end of stream; only
//! character classification can fail, and that happens in the tokenizer.

use std::io::{BufReader, Bytes, Read};

pub(crate) struct CharReader {
    bytes: Bytes<BufReader<Box<dyn Read>>>,
    prev: Option<u8>,
    curr: Option<u8>,
    peek: Option<u8>,
    line: usize,
    prev_line: usize,
}

impl CharReader {
    pub(crate) fn new(source: Box<dyn Read>) -> Self {
        let mut bytes = BufReader::new(source).bytes();
        let curr = next_byte(&mut bytes);
        let peek = next_byte(&mut bytes);
        let mut reader = CharReader {
            bytes,
            prev: None,
            curr,
            peek,
            line: 1,
            prev_line: 1,
        };
        if reader.curr == Some(b'\n') {
            reader.line += 1;
        }
        reader
    }

    pub(crate) fn curr(&self) -> Option<u8> {
        self.curr
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.peek
    }

    pub(crate) fn prev(&self) -> Option<u8> {
        self.prev
    }

    pub(crate) fn at_end(&self) -> bool {
        self.curr.is_none()
    }

    /// Consume the current character and pull the next one into the lookahead.
    pub(crate) fn advance(&mut self) {
        // The running count was bumped when this character entered the
        // lookahead, so a newline being consumed now sits on the line before.
        self.prev_line = if self.curr == Some(b'\n') {
            self.line - 1
        } else {
            self.line
        };
        self.prev = self.curr;
        self.curr = self.peek;
        self.peek = next_byte(&mut self.bytes);
        if self.curr == Some(b'\n') {
            self.line += 1;
        }
    }

    /// Number of newlines pulled from the stream so far, starting at 1.
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// Line of the most recently consumed character.
    ///
    /// The running count bumps the moment a newline enters the lookahead,
    /// one character before it is consumed, so it can run ahead of what has
    /// actually been read. A consumed newline counts as the line it ends.
    pub(crate) fn consumed_line(&self) -> usize {
        self.prev_line
    }
}

fn next_byte(bytes: &mut Bytes<BufReader<Box<dyn Read>>>) -> Option<u8> {
    // An I/O error ends the stream, mirroring a stream that went bad mid-read.
    bytes.next().and_then(|result| result.ok())
}
