use std::fmt;

use serde::{Deserialize, Serialize};

/// Position in source text
///
/// Ordering is by line, then column, which is the sort key used throughout
/// token-stream assembly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub line: usize,   // Line number (1-based)
    pub column: usize, // Column number (1-based)
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
