use super::*;

#[test]
fn test_node_new_sums_child_lengths() {
    let node = Node::with_leaves("Ruth", &[10, 20, 30, 40]);
    assert_eq!(node.len, 100);
    assert_eq!(node.child_count(), 4);
    assert_eq!(node.display_name(), "Ruth");
}

#[test]
fn test_unnamed_node_displays_empty() {
    let node = Node::new(None, vec![Child::Leaf(Leaf { len: 3 })]);
    assert_eq!(node.display_name(), "");
}

#[test]
fn test_root_from_books() {
    let root = Root::from_books([("Obadiah", &[50][..]), ("Jonah", &[10, 20, 30, 40][..])]);

    assert_eq!(root.child_count(), 2);
    assert_eq!(root.len, 150);
    assert_eq!(root.max_depth, 1);
    assert_eq!(root.child_node(1).map(Node::display_name), Some("Jonah"));
    assert!(root.child_node(2).is_none());
}

#[test]
fn test_max_depth_three_levels() {
    let chapter = Node::new(None, vec![Leaf { len: 5 }.into(), Leaf { len: 7 }.into()]);
    let book = Node::new(Some("Jude".to_string()), vec![chapter.into()]);
    let root = Root::new(Node::new(None, vec![book.into()]));

    assert_eq!(root.max_depth, 2);
    assert_eq!(root.len, 12);
}

#[test]
fn test_parse_stats_json() {
    let json = r#"{
        "name": "Test Bible",
        "maxDepth": 1,
        "len": 60,
        "children": [
            { "name": "Genesis", "len": 30, "children": [{ "len": 10 }, { "len": 20 }] },
            { "name": "Exodus", "len": 30, "children": [{ "len": 30 }] }
        ]
    }"#;

    let root = Root::from_json_str(json).unwrap();
    assert_eq!(root.display_name(), "Test Bible");
    assert_eq!(root.max_depth, 1);
    assert_eq!(root.child_count(), 2);
    assert_eq!(root.child_node(0).unwrap().child_count(), 2);
    assert_eq!(root.children[1].len(), 30);
}

#[test]
fn test_parse_without_inner_lengths() {
    // Stats files written by the index builder only carry leaf lengths
    let json = r#"{
        "children": [
            { "name": "Genesis", "children": [{ "name": "1", "len": 10 }, { "len": 20 }] },
            { "name": "Exodus", "children": [{ "len": 5 }] }
        ]
    }"#;

    let mut root = Root::from_json_str(json).unwrap();
    assert_eq!(root.len, 0);
    assert_eq!(root.max_depth, 1);

    assert_eq!(root.recompute_lengths(), 35);
    assert_eq!(root.len, 35);
    assert_eq!(root.children[0].len(), 30);
    assert_eq!(root.children[1].len(), 5);
}

#[test]
fn test_parse_invalid_json() {
    let result = Root::from_json_str("{ not json");
    assert!(matches!(result, Err(crate::ChunkError::Json(_))));
}

#[test]
fn test_path_ordering_and_serde() {
    assert!(Path::new(0, 9) < Path::new(1, 0));
    assert!(Path::new(2, 1) < Path::new(2, 3));

    let json = serde_json::to_string(&Path::new(4, 2)).unwrap();
    assert_eq!(json, "[4,2]");

    let parsed: Path = serde_json::from_str("[1,7]").unwrap();
    assert_eq!(parsed, Path::new(1, 7));
    assert_eq!(parsed.to_string(), "1:7");
}

#[test]
fn test_path_from_str() {
    assert_eq!("3:14".parse::<Path>().unwrap(), Path::new(3, 14));
    assert_eq!(" 0 : 2 ".parse::<Path>().unwrap(), Path::new(0, 2));
    assert!("3".parse::<Path>().is_err());
    assert!("a:1".parse::<Path>().is_err());
    assert!("1:-2".parse::<Path>().is_err());
}
