// Public API exports
pub mod chunker;
pub mod error;
pub mod results;
pub mod tree;

// Re-export main types for convenience
pub use error::ChunkError;

pub use tree::{Child, Leaf, Node, Path, Root};

pub use chunker::{Range, describe_range, partition};

pub use results::{ResultTree, SearchResult};
