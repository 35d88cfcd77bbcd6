use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Path [{l0}, {l1}] does not address a leaf")]
    InvalidPath { l0: usize, l1: usize },

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
