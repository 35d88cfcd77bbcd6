use crate::error::ChunkError;
use crate::tree::{Node, Path, Root};

/// Human-readable label for the inclusive range `start..=end`
///
/// Chapter numbers are rendered 1-based:
/// - whole book: `Genesis`
/// - single chapter: `Genesis 3`
/// - chapters of one book: `Genesis 3-7`
/// - whole books: `Genesis - Exodus`
/// - anything else: `Genesis 3 - Exodus 4`
pub fn describe_range(root: &Root, start: Path, end: Path) -> Result<String, ChunkError> {
    let start_book = leaf_parent(root, start)?;
    let end_book = leaf_parent(root, end)?;

    let start_chapter = start.l1 + 1;
    let end_chapter = end.l1 + 1;

    let title = if start.l0 == end.l0 {
        let name = start_book.display_name();
        if start_chapter == 1 && end_chapter == start_book.child_count() {
            name.to_string()
        } else if start_chapter == end_chapter {
            format!("{} {}", name, start_chapter)
        } else {
            format!("{} {}-{}", name, start_chapter, end_chapter)
        }
    } else if start_chapter == 1 && end_chapter == end_book.child_count() {
        format!("{} - {}", start_book.display_name(), end_book.display_name())
    } else {
        format!(
            "{} {} - {} {}",
            start_book.display_name(),
            start_chapter,
            end_book.display_name(),
            end_chapter
        )
    };

    Ok(title)
}

/// Top-level node containing `path`, checking both indices
fn leaf_parent(root: &Root, path: Path) -> Result<&Node, ChunkError> {
    root.child_node(path.l0)
        .filter(|book| path.l1 < book.child_count())
        .ok_or(ChunkError::InvalidPath {
            l0: path.l0,
            l1: path.l1,
        })
}
