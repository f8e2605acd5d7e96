//! Scope node and kind types.

use std::fmt;

use serde::Serialize;

/// Index of a node within its [ScopeTree] arena.
///
/// [ScopeTree]: crate::ast::ScopeTree
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeKind {
    Namespace,
    Function,
    ClassOrStruct,
    LoopOrControl,
    Lambda,
    Unknown,
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ScopeKind::Namespace => "namespace",
            ScopeKind::Function => "function",
            ScopeKind::ClassOrStruct => "class or structure",
            ScopeKind::LoopOrControl => "loop or control",
            ScopeKind::Lambda => "lambda",
            ScopeKind::Unknown => "unknown",
        };
        f.write_str(text)
    }
}

/// One lexical scope with its line extent and owned children.
#[derive(Debug, Clone, Serialize)]
pub struct ScopeNode {
    pub kind: ScopeKind,
    pub name: String,
    pub start_line: usize,
    /// Unset while the scope is still open.
    pub end_line: Option<usize>,
    pub children: Vec<NodeId>,
}

impl ScopeNode {
    pub(crate) fn new(kind: ScopeKind, name: &str, start_line: usize) -> Self {
        ScopeNode {
            kind,
            name: name.to_string(),
            start_line,
            end_line: None,
            children: Vec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.end_line.is_none()
    }

    /// Inclusive line span; an open scope counts as a single line.
    pub fn line_count(&self) -> usize {
        self.end_line.unwrap_or(self.start_line) - self.start_line + 1
    }

    /// `(kind, name, start, end)` as used by the tree dump. An open scope
    /// shows `-` for its end line.
    pub fn describe(&self) -> String {
        match self.end_line {
            Some(end) => format!(
                "({}, {}, {}, {})",
                self.kind, self.name, self.start_line, end
            ),
            None => format!("({}, {}, {}, -)", self.kind, self.name, self.start_line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_marks_open_scopes() {
        let mut node = ScopeNode::new(ScopeKind::Function, "f", 3);
        assert_eq!(node.describe(), "(function, f, 3, -)");
        assert!(node.is_open());
        node.end_line = Some(9);
        assert_eq!(node.describe(), "(function, f, 3, 9)");
        assert_eq!(node.line_count(), 7);
    }
}
