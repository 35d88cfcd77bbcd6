use crate::error::ChunkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Address of a second-level entry: `[book, chapter]`, both 0-based.
///
/// Serialized as a two-element array so it matches the `start`/`end`
/// arrays the web client passes around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Path {
    /// Index of the top-level child
    pub l0: usize,
    /// Index within that child's children
    pub l1: usize,
}

impl Path {
    pub const fn new(l0: usize, l1: usize) -> Self {
        Self { l0, l1 }
    }
}

impl From<[usize; 2]> for Path {
    fn from([l0, l1]: [usize; 2]) -> Self {
        Self { l0, l1 }
    }
}

impl From<Path> for [usize; 2] {
    fn from(path: Path) -> Self {
        [path.l0, path.l1]
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.l0, self.l1)
    }
}

/// Parses `book:chapter`, e.g. `0:12`
impl FromStr for Path {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChunkError::InvalidArgument(format!("expected BOOK:CHAPTER, got {:?}", s));

        let (l0, l1) = s.split_once(':').ok_or_else(invalid)?;
        let l0 = l0.trim().parse().map_err(|_| invalid())?;
        let l1 = l1.trim().parse().map_err(|_| invalid())?;
        Ok(Self { l0, l1 })
    }
}
