//! Rule/action parsing engine
//!
//!     Every semi-expression is checked against every registered rule, in
//!     registration order and without short-circuiting. A rule pairs one
//!     pattern with an ordered list of actions; when the pattern matches, the
//!     rule fires all of its actions before the engine moves on to the next
//!     rule. Actions observe and mutate the shared [ParseContext]: they open,
//!     retype and close scope nodes, or append classification lines to the
//!     report log.
//!
//! Scope Retyping
//!
//!     Scope opening is detected generically (any `{`) before its specific
//!     kind is known, so the generic rule pushes an anonymous unknown node
//!     first. A more specific rule matching the same brace-opening
//!     semi-expression then undoes the generic push (pop and detach from the
//!     parent) and redoes it with the corrected kind and name. The two-step
//!     protocol is kept deliberately explicit; it encodes "we don't know the
//!     scope's kind until we see what surrounds the brace".

pub mod actions;
pub mod builder;
pub mod context;
pub mod engine;
pub mod rules;

pub use builder::{Analyzer, AnalyzerBuilder, FileAnalysis};
pub use context::ParseContext;
pub use engine::{Action, Pattern, Rule, RuleEngine};
