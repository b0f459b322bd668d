//! Lazy depth-first traversal over a node tree.
//!
//! Each call to [`Node::walk`] produces a fresh, finite iterator; independent
//! consumers never share cursor state. Visits are pre-order and carry the
//! ordered ancestor path from the walk root down to (but excluding) the
//! visited node. List values are transparent containers: their node elements
//! are visited as if inlined, and the list itself never appears in a path or
//! as a visit. Scalar and absent values are skipped.

use crate::node::{Node, Value};

/// Collect the node elements of an attribute value, flattening nested lists
/// in order.
pub(crate) fn collect_nodes<'a>(value: &'a Value, out: &mut Vec<&'a Node>) {
    match value {
        Value::Node(node) => out.push(node),
        Value::List(items) => {
            for item in items {
                collect_nodes(item, out);
            }
        }
        _ => {}
    }
}

/// Direct node children of `node`, in schema order.
pub(crate) fn child_nodes(node: &Node) -> Vec<&Node> {
    let mut out = Vec::new();
    for value in node.children() {
        collect_nodes(value, &mut out);
    }
    out
}

/// Pre-order traversal yielding `(ancestor_path, node)` pairs.
pub struct Walk<'a> {
    // Pending visits, last entry is next; each carries its ancestor path.
    stack: Vec<(Vec<&'a Node>, &'a Node)>,
}

impl<'a> Walk<'a> {
    pub(crate) fn new(root: &'a Node) -> Self {
        Self { stack: vec![(Vec::new(), root)] }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (Vec<&'a Node>, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.stack.pop()?;

        let mut child_path = path.clone();
        child_path.push(node);
        for child in child_nodes(node).into_iter().rev() {
            self.stack.push((child_path.clone(), child));
        }

        Some((path, node))
    }
}

/// What a filtered traversal matches against.
#[derive(Debug, Clone, Copy)]
pub enum Pattern<'p> {
    /// The named variant or any variant declared under it.
    Variant(&'p str),
    /// A concrete node, matched by structural equality.
    Exact(&'p Node),
}

impl Pattern<'_> {
    fn matches(&self, node: &Node) -> bool {
        match self {
            Pattern::Variant(name) => node.schema().is_a(name),
            Pattern::Exact(expected) => node == *expected,
        }
    }
}

/// Traversal restricted to nodes matching a [`Pattern`].
pub struct Filter<'a, 'p> {
    walk: Walk<'a>,
    pattern: Pattern<'p>,
}

impl<'a, 'p> Filter<'a, 'p> {
    pub(crate) fn new(walk: Walk<'a>, pattern: Pattern<'p>) -> Self {
        Self { walk, pattern }
    }
}

impl<'a> Iterator for Filter<'a, '_> {
    type Item = (Vec<&'a Node>, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (path, node) = self.walk.next()?;
            if self.pattern.matches(node) {
                return Some((path, node));
            }
        }
    }
}
