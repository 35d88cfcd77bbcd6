use crate::error::ChunkError;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Lowest-level unit (a chapter or verse) carrying only its length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    /// Text length of this unit
    pub len: u64,
}

/// Entry in a node's child list
///
/// Untagged in JSON: anything with a `children` array is a node,
/// everything else is a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    Node(Node),
    Leaf(Leaf),
}

/// Interior node of the document tree (a book, or a chapter holding verses)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Display name, if the level carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Ordered children
    pub children: Vec<Child>,
    /// Cached sum of all descendant leaf lengths
    #[serde(default)]
    pub len: u64,
}

/// Document root: a node plus the index of its deepest level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    #[serde(flatten)]
    pub node: Node,
    /// 0-based index of the deepest level below the root
    #[serde(rename = "maxDepth", default)]
    pub max_depth: usize,
}

impl Child {
    pub fn len(&self) -> u64 {
        match self {
            Child::Node(node) => node.len,
            Child::Leaf(leaf) => leaf.len,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Child::Node(node) => Some(node),
            Child::Leaf(_) => None,
        }
    }

    fn height(&self) -> usize {
        match self {
            Child::Node(node) => node.height(),
            Child::Leaf(_) => 0,
        }
    }

    fn recompute_lengths(&mut self) -> u64 {
        match self {
            Child::Node(node) => node.recompute_lengths(),
            Child::Leaf(leaf) => leaf.len,
        }
    }
}

impl From<Leaf> for Child {
    fn from(leaf: Leaf) -> Self {
        Child::Leaf(leaf)
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl Node {
    /// Create a node, computing `len` from its children
    pub fn new(name: Option<String>, children: Vec<Child>) -> Self {
        let len = children.iter().map(Child::len).sum();
        Self {
            name,
            children,
            len,
        }
    }

    /// Named node whose children are leaves of the given lengths
    pub fn with_leaves(name: impl Into<String>, lengths: &[u64]) -> Self {
        let children = lengths.iter().map(|&len| Child::Leaf(Leaf { len })).collect();
        Self::new(Some(name.into()), children)
    }

    /// Name for display, empty when the node is unnamed
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Get the top-level child at `index` if it is a node
    pub fn child_node(&self, index: usize) -> Option<&Node> {
        self.children.get(index).and_then(Child::as_node)
    }

    /// Number of levels between this node and its deepest leaf
    pub fn height(&self) -> usize {
        1 + self.children.iter().map(Child::height).max().unwrap_or(0)
    }

    /// Refresh every cached `len` below (and including) this node
    pub fn recompute_lengths(&mut self) -> u64 {
        self.len = self.children.iter_mut().map(Child::recompute_lengths).sum();
        self.len
    }
}

impl Root {
    /// Wrap a node, deriving `max_depth` from its shape
    pub fn new(node: Node) -> Self {
        let max_depth = node.height().saturating_sub(1);
        Self { node, max_depth }
    }

    /// Build a two-level tree from `(book name, chapter lengths)` pairs
    pub fn from_books<I, S, L>(books: I) -> Self
    where
        I: IntoIterator<Item = (S, L)>,
        S: Into<String>,
        L: AsRef<[u64]>,
    {
        let children = books
            .into_iter()
            .map(|(name, lengths)| Child::Node(Node::with_leaves(name, lengths.as_ref())))
            .collect();
        Self::new(Node::new(None, children))
    }

    /// Parse a stats JSON document
    ///
    /// A missing `maxDepth` is derived from the tree. Cached lengths are
    /// taken as-is; call [`Root::recompute_lengths`] for files that only
    /// store leaf lengths.
    pub fn from_json_str(json: &str) -> Result<Self, ChunkError> {
        let mut root: Root = serde_json::from_str(json)?;
        if root.max_depth == 0 {
            root.max_depth = root.node.height().saturating_sub(1);
        }
        tracing::debug!(
            books = root.node.child_count(),
            len = root.node.len,
            max_depth = root.max_depth,
            "Loaded document tree"
        );
        Ok(root)
    }

    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self, ChunkError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn recompute_lengths(&mut self) -> u64 {
        self.node.recompute_lengths()
    }
}

impl Deref for Root {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.node
    }
}
