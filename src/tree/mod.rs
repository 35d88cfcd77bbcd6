mod node;
mod path;

#[cfg(test)]
mod tests;

pub use node::{Child, Leaf, Node, Root};
pub use path::Path;
