//! Annotated token-stream assembly.
//!
//! Two variants reconstruct a flat labeled token stream from a tagged tree:
//!
//! - [`Assembler`] reconciles the tag pass with the complete raw token list
//!   retained on the tree root, filling gaps line-by-line with positional and
//!   keyword heuristics. Complete coverage, approximate labels.
//! - [`direct_stream`] reads only the tokens actually attached to labeled
//!   nodes. Exact labels, no gap filling.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::node::{Position, SourceTree, Token, TokenKind};
use crate::tag::{PrioritySet, TagPass};

/// Label assigned when no tagged node shares the token's line and no keyword
/// heuristic applies.
pub const UNKNOWN_CONTEXT: &str = "<UNK>";

/// One token of the assembled stream.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedToken {
    pub value: String,
    pub position: Position,
    pub kind: TokenKind,
    pub context: String,
}

/// Reconciles tagged nodes with the raw token list.
pub struct Assembler<'a> {
    priorities: &'a PrioritySet,
    include_separators: bool,
}

impl<'a> Assembler<'a> {
    pub fn new(priorities: &'a PrioritySet) -> Self {
        Self { priorities, include_separators: false }
    }

    pub fn include_separators(mut self, include: bool) -> Self {
        self.include_separators = include;
        self
    }

    /// Assemble the annotated stream for `tree`.
    ///
    /// Returns an empty stream when no tagged node carries both a position
    /// and a label.
    pub fn assemble(&self, tree: &SourceTree) -> Vec<AnnotatedToken> {
        let tagging = TagPass::new(self.priorities).run(tree);

        let mut spans: Vec<(Position, &str)> = tagging
            .nodes
            .iter()
            .filter_map(|ctx| Some((ctx.position?, ctx.context.as_deref()?)))
            .collect();
        if spans.is_empty() {
            return Vec::new();
        }

        // Stable sort: discovery order breaks (line, column) ties, which
        // makes the last-write-wins line map below reproducible.
        spans.sort_by_key(|(position, _)| *position);

        let start_line = spans[0].0.line;
        let end_line = spans[spans.len() - 1].0.line;

        let mut by_line: HashMap<usize, &str> = HashMap::new();
        for (position, label) in &spans {
            by_line.insert(position.line, *label);
        }

        let mut out = Vec::new();
        for token in tree.tokens() {
            if token.position.line < start_line {
                continue;
            }
            if token.position.line > end_line {
                break;
            }
            if token.kind == TokenKind::Separator && !self.include_separators {
                continue;
            }

            let context = match by_line.get(&token.position.line) {
                Some(label) => (*label).to_string(),
                None => fallback_context(token).to_string(),
            };
            out.push(AnnotatedToken {
                value: token.value.clone(),
                position: token.position,
                kind: token.kind,
                context,
            });
        }

        debug!(
            "assembled {} tokens over lines {}..={}",
            out.len(),
            start_line,
            end_line
        );

        out
    }
}

/// Keyword heuristics for tokens on lines no tagged node covered.
fn fallback_context(token: &Token) -> &'static str {
    if token.kind == TokenKind::Keyword {
        if token.value == "finally" {
            return "TryStatement";
        }
        if token.value == "if" || token.value == "else" {
            return "IfStatement";
        }
    }
    UNKNOWN_CONTEXT
}

/// The exact-match stream: tokens attached to labeled nodes only, with
/// modifier-merged values, de-duplicated and ordered by (line, column).
/// Discovery order breaks position ties (stable sort).
pub fn direct_stream(tree: &SourceTree, priorities: &PrioritySet) -> Vec<AnnotatedToken> {
    let tagging = TagPass::new(priorities).run(tree);

    let mut seen: HashSet<(String, Position, String, TokenKind)> = HashSet::new();
    let mut out = Vec::new();
    for tag in &tagging.tokens {
        let Some(token) = tree.token(tag.token) else {
            continue;
        };
        let key = (tag.value.clone(), token.position, tag.context.clone(), token.kind);
        if seen.insert(key) {
            out.push(AnnotatedToken {
                value: tag.value.clone(),
                position: token.position,
                kind: token.kind,
                context: tag.context.clone(),
            });
        }
    }

    out.sort_by_key(|token| token.position);
    out
}
