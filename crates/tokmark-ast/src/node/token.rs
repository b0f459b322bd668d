use serde::{Deserialize, Serialize};

use crate::node::Position;

/// Lexical category of a raw token, as assigned by the external lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Keyword,
    Modifier,
    BasicType,
    Identifier,
    Operator,
    Separator,
    Literal,
    Annotation,
}

impl TokenKind {
    /// Stable name used in annotated streams.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Modifier => "Modifier",
            TokenKind::BasicType => "BasicType",
            TokenKind::Identifier => "Identifier",
            TokenKind::Operator => "Operator",
            TokenKind::Separator => "Separator",
            TokenKind::Literal => "Literal",
            TokenKind::Annotation => "Annotation",
        }
    }
}

/// One raw lexical unit. Tokens are produced by the external lexer and are
/// never rewritten here; tagging passes report labels and merged values in a
/// separate [`Tagging`](crate::tag::Tagging) keyed by [`TokenId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub value: String,
    pub position: Position,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(value: impl Into<String>, position: Position, kind: TokenKind) -> Self {
        Self { value: value.into(), position, kind }
    }
}

/// Index into the tree root's token list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TokenId(pub usize);

/// Raw tokens retained on a node: none, one, or an ordered group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Attachment {
    #[default]
    None,
    One(TokenId),
    Many(Vec<TokenId>),
}

impl Attachment {
    pub fn is_none(&self) -> bool {
        matches!(self, Attachment::None)
    }

    /// Attached token ids in order.
    pub fn ids(&self) -> Vec<TokenId> {
        match self {
            Attachment::None => Vec::new(),
            Attachment::One(id) => vec![*id],
            Attachment::Many(ids) => ids.clone(),
        }
    }
}
