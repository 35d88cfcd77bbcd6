use super::{merge, split, title::describe_range};
use crate::error::ChunkError;
use crate::tree::{Node, Path, Root};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An inclusive, contiguous span of chapters with a display title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    /// First chapter in the range
    pub start: Path,
    /// Last chapter in the range (inclusive)
    pub end: Path,
    /// Label such as `Genesis 1-25`
    pub title: String,
}

impl Range {
    pub(super) fn titled(root: &Root, start: Path, end: Path) -> Result<Self, ChunkError> {
        Ok(Self {
            start,
            end,
            title: describe_range(root, start, end)?,
        })
    }

    /// Whether `path` falls inside this range
    pub fn contains(&self, path: Path) -> bool {
        self.start <= path && path <= self.end
    }
}

/// Split a document into `desired` ranges, keeping every range inside a
/// single book when possible:
/// - as many books as ranges: one range per book
/// - fewer books than ranges: the longest books are split into several ranges
/// - more books than ranges: the shortest books are merged with a neighbour
pub fn partition(desired: usize, root: &Root) -> Result<Vec<Range>, ChunkError> {
    if desired == 0 {
        return Err(ChunkError::InvalidArgument(
            "desired range count must be at least 1".to_string(),
        ));
    }

    let books = top_level_books(root)?;

    match books.len().cmp(&desired) {
        Ordering::Equal => {
            tracing::debug!(books = books.len(), "One range per book");
            Ok(books
                .iter()
                .enumerate()
                .map(|(l0, book)| Range {
                    start: Path::new(l0, 0),
                    end: Path::new(l0, book.child_count() - 1),
                    title: book.display_name().to_string(),
                })
                .collect())
        }
        Ordering::Less => {
            tracing::debug!(books = books.len(), desired, "Splitting books");
            split::split_books(desired, root, &books)
        }
        Ordering::Greater => {
            tracing::debug!(books = books.len(), desired, "Merging books");
            merge::merge_books(desired, root, &books)
        }
    }
}

/// Collect the top-level children, rejecting any that have nothing to range over
fn top_level_books(root: &Root) -> Result<Vec<&Node>, ChunkError> {
    if root.children.is_empty() {
        return Err(ChunkError::InvalidArgument(
            "document has no top-level children".to_string(),
        ));
    }

    root.children
        .iter()
        .enumerate()
        .map(|(l0, child)| match child.as_node() {
            Some(book) if book.child_count() > 0 => Ok(book),
            _ => Err(ChunkError::InvalidArgument(format!(
                "top-level child {} has no children",
                l0
            ))),
        })
        .collect()
}
