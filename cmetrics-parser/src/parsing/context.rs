//! The shared parse context: scope stack, tree, line counter, report log.

use crate::ast::{ScopeKind, ScopeStack, ScopeTree};

/// Everything the rules and actions share during one file's analysis.
///
/// One context per run; nothing is ambient or global. The driver updates the
/// line counter from the assembler before each round of rule application.
pub struct ParseContext {
    tree: ScopeTree,
    stack: ScopeStack,
    line: usize,
    reports: Vec<String>,
}

impl ParseContext {
    /// A fresh context with the global scope created and pushed.
    pub fn new() -> Self {
        let tree = ScopeTree::new();
        let mut stack = ScopeStack::new();
        stack.push(tree.root());
        ParseContext {
            tree,
            stack,
            line: 0,
            reports: Vec::new(),
        }
    }

    pub fn set_line(&mut self, line: usize) {
        self.line = line;
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Open a new scope as a child of the current stack top and make it the
    /// new top.
    pub fn open_scope(&mut self, kind: ScopeKind, name: &str) {
        let parent = self.stack.top().unwrap_or_else(|| self.tree.root());
        let id = self.tree.add_child(parent, kind, name, self.line);
        self.stack.push(id);
    }

    /// Finalize and pop the current scope. Popping past the root is a silent
    /// no-op: extra closers in malformed input are tolerated.
    pub fn close_scope(&mut self) {
        if self.stack.len() <= 1 {
            return;
        }
        if let Some(id) = self.stack.pop() {
            self.tree.set_end_line(id, self.line);
        }
    }

    /// The replace-in-place dance: undo the generic anonymous push (pop and
    /// detach from the parent), then redo it with the specific kind and name.
    pub fn reopen_top(&mut self, kind: ScopeKind, name: &str) {
        if self.stack.len() > 1 && self.stack.pop().is_some() {
            if let Some(parent) = self.stack.top() {
                self.tree.drop_last_child(parent);
            }
        }
        self.open_scope(kind, name);
    }

    pub fn report(&mut self, line: String) {
        self.reports.push(line);
    }

    pub fn reports(&self) -> &[String] {
        &self.reports
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn tree(&self) -> &ScopeTree {
        &self.tree
    }

    /// Tear the context apart into its final products.
    pub fn into_parts(self) -> (ScopeTree, Vec<String>) {
        (self.tree, self.reports)
    }
}

impl Default for ParseContext {
    fn default() -> Self {
        ParseContext::new()
    }
}
