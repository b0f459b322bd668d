//! AST node model and statement-context token tagging.
//!
//! A parsed tree arrives from an external parser as [`Node`]s (variant tag +
//! fixed attribute schema) over a [`SourceTree`] that also retains the
//! complete raw token list. This crate re-associates those flat tokens with
//! the enclosing statement construct: [`TagPass`] labels nodes and attached
//! tokens with the nearest boundary variant from a [`PrioritySet`], and
//! [`Assembler`]/[`direct_stream`] flatten the result into an ordered
//! annotated token stream for downstream analysis.
//!
//! Grammar validation and semantic analysis are out of scope; so are the
//! lexer and parser themselves.

pub mod error;
pub mod node;
pub mod persist;
pub mod stream;
pub mod tag;
pub mod walk;

// Re-export commonly used items
pub use error::{PersistError, Result, SchemaError};
pub use node::{
    Attachment, Node, Position, Registry, SourceTree, Token, TokenId, TokenKind, Value,
    VariantSchema,
};
pub use stream::{direct_stream, AnnotatedToken, Assembler, UNKNOWN_CONTEXT};
pub use tag::{
    own_contexts, statement_priorities, ContextMode, NodeContext, PrioritySet, TagPass,
    Tagging, TokenTag,
};
pub use walk::{Filter, Pattern, Walk};
