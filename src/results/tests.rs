use super::*;
use crate::chunker::Range;
use crate::tree::Path;

fn hit(l0: usize, l1: usize, l2: usize, text: &str) -> SearchResult {
    SearchResult {
        score: 1.0,
        book_id: "bible-esv".to_string(),
        text: text.to_string(),
        l0,
        l1,
        l2,
        highlight: vec![],
    }
}

fn texts(results: &[&SearchResult]) -> Vec<String> {
    results.iter().map(|r| r.text.clone()).collect()
}

fn sample() -> Vec<SearchResult> {
    vec![
        hit(1, 0, 4, "b"),
        hit(0, 2, 1, "a"),
        hit(2, 5, 0, "e"),
        hit(1, 3, 2, "c"),
        hit(1, 3, 0, "d"),
    ]
}

#[test]
fn test_path_truncation() {
    let result = hit(3, 4, 5, "x");
    assert_eq!(result.path(0), vec![3]);
    assert_eq!(result.path(1), vec![3, 4]);
    assert_eq!(result.path(2), vec![3, 4, 5]);
    assert_eq!(result.path(7), vec![3, 4, 5]);
}

#[test]
fn test_results_keep_input_order() {
    let tree = ResultTree::new(sample(), 2);
    let flat: Vec<&str> = tree.results().iter().map(|r| r.text.as_str()).collect();
    assert_eq!(flat, vec!["b", "a", "e", "c", "d"]);
}

#[test]
fn test_subtree_by_book() {
    let tree = ResultTree::new(sample(), 2);

    assert_eq!(texts(&tree.subtree(&[1])), vec!["b", "d", "c"]);
    assert_eq!(texts(&tree.subtree(&[0])), vec!["a"]);
    assert!(tree.subtree(&[5]).is_empty());
}

#[test]
fn test_subtree_by_chapter_and_verse() {
    let tree = ResultTree::new(sample(), 2);

    assert_eq!(texts(&tree.subtree(&[1, 3])), vec!["d", "c"]);
    assert_eq!(texts(&tree.subtree(&[1, 3, 2])), vec!["c"]);
    assert!(tree.subtree(&[1, 1]).is_empty());
}

#[test]
fn test_subtree_empty_path_returns_everything() {
    let tree = ResultTree::new(sample(), 2);
    assert_eq!(texts(&tree.subtree(&[])), vec!["a", "b", "d", "c", "e"]);
}

#[test]
fn test_shallow_tree_keeps_bucket_order() {
    // Grouped by chapter only, so hits within a chapter stay in input order
    let tree = ResultTree::new(sample(), 1);

    assert_eq!(texts(&tree.subtree(&[1, 3])), vec!["c", "d"]);
    assert!(tree.subtree(&[1, 3, 2]).is_empty());
}

#[test]
fn test_range_inclusive() {
    let tree = ResultTree::new(sample(), 2);

    let hits = tree.range(Path::new(0, 2), Path::new(1, 3));
    assert_eq!(texts(&hits), vec!["a", "b", "d", "c"]);

    let hits = tree.range(Path::new(0, 3), Path::new(1, 2));
    assert_eq!(texts(&hits), vec!["b"]);

    let hits = tree.range(Path::new(3, 0), Path::new(9, 0));
    assert!(hits.is_empty());
}

#[test]
fn test_range_book_level_buckets() {
    let tree = ResultTree::new(sample(), 0);

    let hits = tree.range(Path::new(1, 9), Path::new(2, 0));
    assert_eq!(texts(&hits), vec!["b", "c", "d", "e"]);
}

#[test]
fn test_in_range_uses_partition_output() {
    let tree = ResultTree::new(sample(), 2);
    let range = Range {
        start: Path::new(1, 0),
        end: Path::new(2, 4),
        title: "Exodus - Leviticus 5".to_string(),
    };

    assert_eq!(texts(&tree.in_range(&range)), vec!["b", "d", "c"]);
}

#[test]
fn test_empty_tree() {
    let tree = ResultTree::empty();

    assert!(tree.is_empty());
    assert!(tree.subtree(&[0]).is_empty());
    assert!(tree.range(Path::new(0, 0), Path::new(100, 0)).is_empty());
}

#[test]
fn test_parse_search_response() {
    let json = r#"[
        { "score": 3.5, "book_id": "bible-esv", "text": "In the beginning",
          "l0": 0, "l1": 0, "l2": 0, "highlight": [[7, 16]] }
    ]"#;

    let results: Vec<SearchResult> = serde_json::from_str(json).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].highlight, vec![(7, 16)]);

    let tree = ResultTree::new(results, 2);
    assert_eq!(tree.subtree(&[0, 0, 0]).len(), 1);
}
