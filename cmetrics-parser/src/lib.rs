//! # cmetrics-parser
//!
//! Structural and complexity analysis for C++-like source text.
//!
//! The Analysis Pipeline
//!
//!     The pipeline consists of:
//!         1. Character-level tokenization. See [lexing]. A state-machine tokenizer
//!            turns an attached byte stream into a lazy sequence of string tokens,
//!            keeping a running line count. Newlines are themselves tokens.
//!
//!         2. Semi-expression assembly. See [assembling]. Tokens are grouped into
//!            terminator-delimited units ("semi-expressions"), each holding just the
//!            right tokens to analyze one grammatical construct: a statement, a
//!            block opener, a block closer, or a preprocessor line.
//!
//!         3. Rule application. See [parsing]. An ordered list of rules is applied
//!            to every semi-expression. A rule that matches fires its actions, which
//!            mutate the shared parse context: they open, retype, and close scope
//!            nodes, or append classification lines to the report log.
//!
//!         4. Tree analysis. See [ast]. The finished scope tree is rendered as an
//!            indented dump, and a size/complexity row is produced for every
//!            function node.
//!
//! The contract between stages is deliberately loose: tokens are plain strings and
//! their semantic kind is derived by comparison against configurable token sets, not
//! stored. This keeps the tokenizer reusable when the bracket/operator conventions
//! of the analyzed language change.

pub mod assembling;
pub mod ast;
pub mod lexing;
pub mod parsing;

pub use assembling::{AssembleError, SemiExpression, TokenCollection};
pub use ast::{FunctionMetrics, ScopeKind, ScopeNode, ScopeTree};
pub use lexing::{LexError, Tokenizer};
pub use parsing::{Analyzer, AnalyzerBuilder, FileAnalysis, ParseContext, RuleEngine};
