mod tree;
mod types;

#[cfg(test)]
mod tests;

pub use tree::ResultTree;
pub use types::SearchResult;
