//! Semi-expression assembly
//!
//!     This module groups tokens into semi-expressions: terminator-delimited
//!     runs of tokens that hold just the right content to analyze one
//!     grammatical construct (a statement, a block opener, a block closer, or
//!     a preprocessor line).
//!
//! Termination Protocol
//!
//!     A fill ends when the incoming token is `{`, `}` or `;`; when it is a
//!     newline and the collection, after trimming leading newlines, starts
//!     with `#` (a full preprocessor line); or when it is `:` directly after
//!     `public`, `protected` or `private` (an access-specifier line carries
//!     no trailing semicolon or brace).
//!
//!     One special case: a `for(...)` header embeds two semicolons that would
//!     otherwise split it across three semi-expressions. When a fill that saw
//!     `for` ends with its first semicolon between an outer `(` and `)`, two
//!     additional non-clearing fills absorb the condition and increment
//!     clauses.

pub mod collection;
pub mod semi;

pub use collection::{IndexError, TokenCollection};
pub use semi::{AssembleError, SemiExpression};
