//! The arena-backed scope tree and its analysis walks.

use serde::Serialize;

use crate::ast::{NodeId, ScopeKind, ScopeNode};

/// One row of the per-function size/complexity table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionMetrics {
    pub kind: ScopeKind,
    pub name: String,
    pub start_line: usize,
    pub line_count: usize,
    pub complexity: usize,
}

/// Tree of scope nodes for one analysis run.
///
/// Nodes are stored in an arena and addressed by id. A node retyped by a more
/// specific rule is detached from its parent but stays allocated, so ids held
/// elsewhere never dangle. All walks start from the root and therefore only
/// visit attached nodes.
#[derive(Debug, Serialize)]
pub struct ScopeTree {
    nodes: Vec<ScopeNode>,
    root: NodeId,
}

impl ScopeTree {
    /// A fresh tree holding only the global namespace scope.
    pub fn new() -> Self {
        ScopeTree {
            nodes: vec![ScopeNode::new(ScopeKind::Namespace, "global", 0)],
            root: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &ScopeNode {
        &self.nodes[id]
    }

    pub fn add_child(
        &mut self,
        parent: NodeId,
        kind: ScopeKind,
        name: &str,
        start_line: usize,
    ) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(ScopeNode::new(kind, name, start_line));
        self.nodes[parent].children.push(id);
        id
    }

    pub fn set_end_line(&mut self, id: NodeId, line: usize) {
        self.nodes[id].end_line = Some(line);
    }

    /// Detach the most recently attached child. The node itself stays in the
    /// arena; only the parent link is dropped.
    pub fn drop_last_child(&mut self, parent: NodeId) -> Option<NodeId> {
        self.nodes[parent].children.pop()
    }

    /// Attached nodes other than the root that are still open.
    pub fn open_scopes(&self) -> usize {
        let mut count = 0;
        self.visit(self.root, &mut |id, _depth| {
            if id != self.root && self.nodes[id].is_open() {
                count += 1;
            }
        });
        count
    }

    /// Depth-first pre-order dump, indented by depth.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.visit(self.root, &mut |id, depth| {
            out.push_str(&"  ".repeat(depth));
            out.push_str(&self.nodes[id].describe());
            out.push('\n');
        });
        out
    }

    /// Complexity of the scope rooted at `id`.
    ///
    /// One counter is shared across the whole recursion: each visited node
    /// sets it to the value passed in plus one, and every child call receives
    /// the counter's current value. The counter only ever grows, so the final
    /// value is the number of nodes in the subtree.
    pub fn complexity(&self, id: NodeId) -> usize {
        let mut counter = 0;
        self.shared_counter_walk(id, 0, &mut counter);
        counter
    }

    fn shared_counter_walk(&self, id: NodeId, passed: usize, counter: &mut usize) {
        *counter = passed + 1;
        for &child in &self.nodes[id].children {
            self.shared_counter_walk(child, *counter, counter);
        }
    }

    /// One table row per function node, in depth-first order. Functions
    /// nested inside any kind of scope are included.
    pub fn function_table(&self) -> Vec<FunctionMetrics> {
        let mut rows = Vec::new();
        self.visit(self.root, &mut |id, _depth| {
            let node = &self.nodes[id];
            if node.kind == ScopeKind::Function {
                rows.push(FunctionMetrics {
                    kind: node.kind,
                    name: node.name.clone(),
                    start_line: node.start_line,
                    line_count: node.line_count(),
                    complexity: self.complexity(id),
                });
            }
        });
        rows
    }

    fn visit(&self, id: NodeId, f: &mut impl FnMut(NodeId, usize)) {
        self.visit_at(id, 0, f);
    }

    fn visit_at(&self, id: NodeId, depth: usize, f: &mut impl FnMut(NodeId, usize)) {
        f(id, depth);
        for &child in &self.nodes[id].children {
            self.visit_at(child, depth + 1, f);
        }
    }
}

impl Default for ScopeTree {
    fn default() -> Self {
        ScopeTree::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> ScopeTree {
        // global -> f -> (loop, loop), global -> g
        let mut tree = ScopeTree::new();
        let f = tree.add_child(tree.root(), ScopeKind::Function, "f", 1);
        let first = tree.add_child(f, ScopeKind::LoopOrControl, "if", 2);
        tree.set_end_line(first, 3);
        let second = tree.add_child(f, ScopeKind::LoopOrControl, "for", 4);
        tree.set_end_line(second, 6);
        tree.set_end_line(f, 7);
        let g = tree.add_child(tree.root(), ScopeKind::Function, "g", 9);
        tree.set_end_line(g, 9);
        tree
    }

    #[test]
    fn render_indents_by_depth() {
        let tree = sample_tree();
        let expected = "\
(namespace, global, 0, -)
  (function, f, 1, 7)
    (loop or control, if, 2, 3)
    (loop or control, for, 4, 6)
  (function, g, 9, 9)
";
        assert_eq!(tree.render(), expected);
    }

    #[test]
    fn complexity_counts_the_subtree() {
        let tree = sample_tree();
        assert_eq!(tree.complexity(tree.root()), 5);
        let f = tree.node(tree.root()).children[0];
        assert_eq!(tree.complexity(f), 3);
        let leaf = tree.node(f).children[0];
        assert_eq!(tree.complexity(leaf), 1);
    }

    #[test]
    fn function_table_includes_nested_functions() {
        let mut tree = sample_tree();
        let f = tree.node(tree.root()).children[0];
        let inner = tree.add_child(f, ScopeKind::Function, "local", 5);
        tree.set_end_line(inner, 6);

        let rows = tree.function_table();
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["f", "local", "g"]);
        assert_eq!(rows[0].line_count, 7);
        assert_eq!(rows[0].complexity, 4); // f, both loops, and the nested function
        assert_eq!(rows[2].line_count, 1);
        assert_eq!(rows[2].complexity, 1);
    }

    #[test]
    fn detached_children_disappear_from_walks() {
        let mut tree = ScopeTree::new();
        let anon = tree.add_child(tree.root(), ScopeKind::Unknown, "anonymous", 1);
        assert_eq!(tree.drop_last_child(tree.root()), Some(anon));
        assert_eq!(tree.complexity(tree.root()), 1);
        assert!(!tree.render().contains("anonymous"));
    }

    #[test]
    fn open_scopes_are_counted_without_the_root() {
        let mut tree = ScopeTree::new();
        let f = tree.add_child(tree.root(), ScopeKind::Function, "f", 1);
        tree.add_child(f, ScopeKind::LoopOrControl, "if", 2);
        assert_eq!(tree.open_scopes(), 2);
        tree.set_end_line(f, 5);
        assert_eq!(tree.open_scopes(), 1);
    }
}
