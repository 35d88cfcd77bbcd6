// the search API contract
use serde::{Deserialize, Serialize};

/// A single verse hit returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub score: f32,
    pub book_id: String,
    pub text: String,
    pub l0: usize,
    pub l1: usize,
    pub l2: usize,
    /// Byte ranges of matched terms within `text`
    #[serde(default)]
    pub highlight: Vec<(usize, usize)>,
}

impl SearchResult {
    /// Index path of this hit, truncated to `depth + 1` levels
    pub fn path(&self, depth: usize) -> Vec<usize> {
        let full = [self.l0, self.l1, self.l2];
        full[..(depth + 1).min(full.len())].to_vec()
    }
}
