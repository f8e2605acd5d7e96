//! The stack of currently open scopes.

use crate::ast::NodeId;

/// LIFO of references (node ids) to the open scope nodes. The tree owns the
/// nodes; the stack only tracks which node new children attach to.
#[derive(Debug, Default)]
pub struct ScopeStack {
    items: Vec<NodeId>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack::default()
    }

    pub fn push(&mut self, id: NodeId) {
        self.items.push(id);
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        self.items.pop()
    }

    pub fn top(&self) -> Option<NodeId> {
        self.items.last().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
