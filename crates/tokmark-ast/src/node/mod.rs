//! The tree node model: variant schemas, attribute values, raw tokens, and
//! the tree root type.
//!
//! Every node carries a handle to its variant's schema: the ordered
//! attribute list composed once at declaration time from the supertype chain.
//! Attribute values live in schema order; unsupplied attributes are `Absent`.
//! Positions and token attachments are optional and assigned by the external
//! parser; neither participates in node equality.

pub mod position;
pub mod registry;
pub mod token;
pub mod value;

pub use position::Position;
pub use registry::{Registry, VariantSchema};
pub use token::{Attachment, Token, TokenId, TokenKind};
pub use value::Value;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};
use crate::walk::{Filter, Pattern, Walk};

/// One syntactic construct instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    schema: Arc<VariantSchema>,
    values: Vec<Value>, // schema order
    position: Option<Position>,
    attached: Attachment,
}

impl Node {
    /// A node with every attribute absent.
    pub fn new(schema: &Arc<VariantSchema>) -> Self {
        Self {
            schema: schema.clone(),
            values: vec![Value::Absent; schema.attrs().len()],
            position: None,
            attached: Attachment::None,
        }
    }

    /// Build a node from attribute name/value pairs. Construction is
    /// all-or-nothing: a name outside the schema fails and no node results.
    pub fn with_attrs<'a>(
        schema: &Arc<VariantSchema>,
        attrs: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Result<Self> {
        let mut node = Self::new(schema);
        for (name, value) in attrs {
            node.set(name, value)?;
        }
        Ok(node)
    }

    pub fn variant(&self) -> &str {
        self.schema.name()
    }

    pub fn schema(&self) -> &Arc<VariantSchema> {
        &self.schema
    }

    /// The value of a schema attribute, or `None` if the name is not in the
    /// schema.
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.schema.index_of(attribute).map(|i| &self.values[i])
    }

    pub fn set(&mut self, attribute: &str, value: Value) -> Result<()> {
        let index = self.schema.index_of(attribute).ok_or_else(|| {
            SchemaError::UnknownAttribute {
                variant: self.schema.name().to_string(),
                attribute: attribute.to_string(),
            }
        })?;
        self.values[index] = value;
        Ok(())
    }

    /// Attribute values in schema (declaration) order.
    pub fn children(&self) -> &[Value] {
        &self.values
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.position = Some(Position::new(line, column));
        self
    }

    pub fn attached(&self) -> &Attachment {
        &self.attached
    }

    pub fn with_token(mut self, id: TokenId) -> Self {
        self.attached = Attachment::One(id);
        self
    }

    pub fn with_tokens(mut self, ids: Vec<TokenId>) -> Self {
        self.attached = Attachment::Many(ids);
        self
    }

    /// A fresh lazy pre-order traversal over this subtree.
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(self)
    }

    /// Traversal restricted to nodes matching `pattern`.
    pub fn filter<'a, 'p>(&'a self, pattern: Pattern<'p>) -> Filter<'a, 'p> {
        Filter::new(self.walk(), pattern)
    }
}

// Equality is variant + pointwise attribute values; position and token
// attachment are bookkeeping, not structure.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.schema.name() == other.schema.name() && self.values == other.values
    }
}

impl fmt::Display for Node {
    /// Deterministic textual form: attributes in lexicographic name order,
    /// independent of schema order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.schema.attrs().iter().collect();
        names.sort();

        write!(f, "{}(", self.schema.name())?;
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            // Every name comes from the schema, so the lookup cannot miss.
            if let Some(value) = self.get(name) {
                write!(f, "{}={}", name, value)?;
            }
        }
        write!(f, ")")
    }
}

/// A parsed tree: the root node plus the complete ordered raw token list
/// produced by the external lexer (including tokens retained on no node,
/// e.g. punctuation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceTree {
    pub root: Node,
    tokens: Vec<Token>,
}

impl SourceTree {
    pub fn new(root: Node, tokens: Vec<Token>) -> Self {
        Self { root, tokens }
    }

    /// The complete raw token list, in original scan order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.0)
    }
}
