use super::SearchResult;
use crate::chunker::Range;
use crate::tree::Path;
use std::collections::BTreeMap;

/// Search results bucketed by their `[l0, l1, l2]` index path
///
/// Buckets are keyed by the path truncated to `max_depth + 1` levels and
/// iterate in document order, so every query returns hits the way they
/// appear in the text. Within a bucket, hits keep their input order.
#[derive(Debug, Clone, Default)]
pub struct ResultTree {
    results: Vec<SearchResult>,
    buckets: BTreeMap<Vec<usize>, Vec<usize>>,
}

impl ResultTree {
    /// Deepest supported level index (`l2`)
    pub const MAX_DEPTH: usize = 2;

    pub fn new(results: Vec<SearchResult>, max_depth: usize) -> Self {
        let depth = max_depth.min(Self::MAX_DEPTH);
        let mut buckets: BTreeMap<Vec<usize>, Vec<usize>> = BTreeMap::new();

        for (index, result) in results.iter().enumerate() {
            buckets.entry(result.path(depth)).or_default().push(index);
        }

        tracing::debug!(
            results = results.len(),
            buckets = buckets.len(),
            depth,
            "Grouped search results"
        );

        Self { results, buckets }
    }

    /// Tree with no results; every query comes back empty
    pub fn empty() -> Self {
        Self::default()
    }

    /// The flat result list, in input order
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// All results under `path`, flattened in document order
    ///
    /// An empty path returns everything; a path that reaches no bucket
    /// returns nothing.
    pub fn subtree(&self, path: &[usize]) -> Vec<&SearchResult> {
        self.buckets
            .range(path.to_vec()..)
            .take_while(|(key, _)| key.starts_with(path))
            .flat_map(|(_, indices)| indices.iter().map(|&i| &self.results[i]))
            .collect()
    }

    /// All results whose `[l0, l1]` falls in `start..=end`
    ///
    /// When results are only grouped by book, whole books are matched.
    pub fn range(&self, start: Path, end: Path) -> Vec<&SearchResult> {
        self.buckets
            .iter()
            .filter(|(key, _)| bucket_in_range(key, start, end))
            .flat_map(|(_, indices)| indices.iter().map(|&i| &self.results[i]))
            .collect()
    }

    /// Results inside a partitioned reading range
    pub fn in_range(&self, range: &Range) -> Vec<&SearchResult> {
        self.range(range.start, range.end)
    }
}

fn bucket_in_range(key: &[usize], start: Path, end: Path) -> bool {
    match key {
        [l0] => start.l0 <= *l0 && *l0 <= end.l0,
        [l0, l1, ..] => {
            let path = Path::new(*l0, *l1);
            start <= path && path <= end
        }
        [] => false,
    }
}
