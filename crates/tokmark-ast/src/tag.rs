//! Statement-context tagging.
//!
//! A tag pass walks the tree top-down carrying one "current boundary" value:
//! entering a node whose variant is in the priority set updates it, and every
//! visited node and attached token is labeled with the value in effect. The
//! pass is pure and never writes into the tree. Labels come back in a
//! [`Tagging`], keyed by discovery order for nodes and by [`TokenId`] for
//! tokens, so passes are re-runnable and safe to issue from any call site.
//!
//! Two propagation modes exist. [`ContextMode::Forward`] threads the current
//! boundary through the whole pre-order walk without restoring it when a
//! subtree ends, so a boundary label can carry into later siblings; this
//! reproduces the behavior downstream consumers were built against and is the
//! default. [`ContextMode::Scoped`] restores the previous boundary on subtree
//! exit, confining each label to its lexical extent.

use std::collections::HashSet;

use log::debug;
use once_cell::sync::Lazy;

use crate::node::{Attachment, Node, Position, SourceTree, Token, TokenId, Value};
use crate::walk::child_nodes;

/// Variant names treated as statement-context boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrioritySet(HashSet<String>);

impl PrioritySet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.0.insert(name.into());
    }
}

/// The default boundary set: statement constructs plus local-variable and
/// field declarations.
pub fn statement_priorities() -> &'static PrioritySet {
    static DEFAULTS: Lazy<PrioritySet> = Lazy::new(|| {
        PrioritySet::new([
            "StatementExpression",
            "LocalVariableDeclaration",
            "AssertStatement",
            "WhileStatement",
            "IfStatement",
            "TryStatement",
            "ThrowStatement",
            "SwitchStatement",
            "SwitchStatementCase",
            "ReturnStatement",
            "DoStatement",
            "ForStatement",
            "FieldDeclaration",
            "SynchronizedStatement",
        ])
    });
    &DEFAULTS
}

/// How the current boundary propagates past the end of a boundary subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextMode {
    /// Never restored on subtree exit; the boundary carries into later
    /// siblings. Matches the observed behavior of the original pass.
    #[default]
    Forward,
    /// Restored on subtree exit; each boundary is confined to its own
    /// subtree.
    Scoped,
}

/// Context assigned to one visited node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeContext {
    pub variant: String,
    pub position: Option<Position>,
    /// Nearest enclosing boundary variant, or `None` if no boundary was in
    /// effect when the node was visited.
    pub context: Option<String>,
}

/// Label assigned to one attached token. `value` is the token text after
/// modifier merging, or the original text when no merge applies.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenTag {
    pub token: TokenId,
    pub context: String,
    pub value: String,
}

/// Result of one tag pass over a tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tagging {
    /// One entry per visited node, in discovery (pre-order) order.
    pub nodes: Vec<NodeContext>,
    /// One entry per attached token on a labeled node, in discovery order.
    /// Tokens on unlabeled nodes are not stamped.
    pub tokens: Vec<TokenTag>,
}

impl Tagging {
    pub fn token_label(&self, id: TokenId) -> Option<&str> {
        self.tokens.iter().find(|t| t.token == id).map(|t| t.context.as_str())
    }

    pub fn token_value(&self, id: TokenId) -> Option<&str> {
        self.tokens.iter().find(|t| t.token == id).map(|t| t.value.as_str())
    }
}

/// A single statement-context tagging pass.
pub struct TagPass<'a> {
    priorities: &'a PrioritySet,
    mode: ContextMode,
}

impl<'a> TagPass<'a> {
    pub fn new(priorities: &'a PrioritySet) -> Self {
        Self { priorities, mode: ContextMode::Forward }
    }

    pub fn with_mode(priorities: &'a PrioritySet, mode: ContextMode) -> Self {
        Self { priorities, mode }
    }

    pub fn run(&self, tree: &SourceTree) -> Tagging {
        let mut tagging = Tagging::default();

        match self.mode {
            ContextMode::Forward => {
                let mut current: Option<String> = None;
                self.visit_forward(&tree.root, tree, &mut current, &mut tagging);
            }
            ContextMode::Scoped => {
                self.visit_scoped(&tree.root, tree, None, &mut tagging);
            }
        }

        debug!(
            "tag pass ({:?}): {} nodes visited, {} tokens stamped",
            self.mode,
            tagging.nodes.len(),
            tagging.tokens.len()
        );

        tagging
    }

    fn visit_forward(
        &self,
        node: &Node,
        tree: &SourceTree,
        current: &mut Option<String>,
        out: &mut Tagging,
    ) {
        if self.priorities.contains(node.variant()) {
            *current = Some(node.variant().to_string());
        }
        record(node, tree, current.as_deref(), out);

        for child in child_nodes(node) {
            self.visit_forward(child, tree, current, out);
        }
    }

    fn visit_scoped<'t>(
        &self,
        node: &'t Node,
        tree: &SourceTree,
        inherited: Option<&'t str>,
        out: &mut Tagging,
    ) {
        let current = if self.priorities.contains(node.variant()) {
            Some(node.variant())
        } else {
            inherited
        };
        record(node, tree, current, out);

        for child in child_nodes(node) {
            self.visit_scoped(child, tree, current, out);
        }
    }
}

fn record(node: &Node, tree: &SourceTree, label: Option<&str>, out: &mut Tagging) {
    out.nodes.push(NodeContext {
        variant: node.variant().to_string(),
        position: node.position(),
        context: label.map(str::to_string),
    });

    let Some(label) = label else { return };

    match node.attached() {
        Attachment::None => {}
        Attachment::One(id) => {
            if let Some(token) = tree.token(*id) {
                out.tokens.push(TokenTag {
                    token: *id,
                    context: label.to_string(),
                    value: merged_value(node, token),
                });
            }
        }
        Attachment::Many(ids) => {
            // Modifier merging applies only to a single attached token.
            for id in ids {
                if let Some(token) = tree.token(*id) {
                    out.tokens.push(TokenTag {
                        token: *id,
                        context: label.to_string(),
                        value: token.value.clone(),
                    });
                }
            }
        }
    }
}

/// Token text with the node's modifier keywords prefixed, underscore-joined,
/// in declared order: `public_static_foo`.
fn merged_value(node: &Node, token: &Token) -> String {
    let Some(Value::List(modifiers)) = node.get("modifiers") else {
        return token.value.clone();
    };

    let mut parts: Vec<&str> = modifiers.iter().filter_map(Value::as_str).collect();
    if parts.is_empty() {
        return token.value.clone();
    }
    parts.push(&token.value);
    parts.join("_")
}

/// Label every node with its own variant name, pre-order. No priority set is
/// consulted; useful when downstream wants per-construct rather than
/// per-statement granularity.
pub fn own_contexts(root: &Node) -> Vec<NodeContext> {
    root.walk()
        .map(|(_, node)| NodeContext {
            variant: node.variant().to_string(),
            position: node.position(),
            context: Some(node.variant().to_string()),
        })
        .collect()
}
