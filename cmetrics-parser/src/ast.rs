//! Scope tree and complexity analysis
//!
//!     The parse actions build a tree of scope nodes: one node per lexical
//!     scope (namespace, function, class/struct, loop/conditional, lambda, or
//!     unknown), each with a line extent. Nodes live in an arena owned by
//!     [ScopeTree]; children are node ids, which keeps identities stable
//!     through the replace-in-place retyping the detection rules perform.
//!
//!     A scope is "open" while its closing brace has not been seen: its end
//!     line is unset. Malformed input never breaks the tree shape. Extra
//!     closers are ignored once only the root remains, and scopes left open
//!     at end of input simply keep an unset end line.

pub mod node;
pub mod stack;
pub mod tree;

pub use node::{NodeId, ScopeKind, ScopeNode};
pub use stack::ScopeStack;
pub use tree::{FunctionMetrics, ScopeTree};
