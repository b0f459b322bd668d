//! Opaque whole-tree persistence.
//!
//! The blob format is private; the only guarantee is that a blob produced by
//! a compatible version round-trips to an equal tree. No streaming, no
//! partial reads: a corrupt or incompatible blob fails as a whole and no
//! partial tree is produced.

use crate::error::PersistError;
use crate::node::SourceTree;

pub fn to_bytes(tree: &SourceTree) -> Result<Vec<u8>, PersistError> {
    serde_json::to_vec(tree).map_err(PersistError::Encode)
}

pub fn from_bytes(bytes: &[u8]) -> Result<SourceTree, PersistError> {
    serde_json::from_slice(bytes).map_err(PersistError::Decode)
}
