use super::Range;
use crate::error::ChunkError;
use crate::tree::{Node, Path, Root};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Length of each piece when `total_len` is cut into `splits` pieces
fn piece_len(total_len: u64, splits: usize) -> u64 {
    total_len.div_ceil(splits as u64)
}

/// More ranges than books: repeatedly give one more split to the book whose
/// pieces are currently longest, then cut each book into evenly sized slices
/// of chapters.
pub(super) fn split_books(
    desired: usize,
    root: &Root,
    books: &[&Node],
) -> Result<Vec<Range>, ChunkError> {
    let mut splits = vec![1usize; books.len()];

    // Max-heap on piece length; equal lengths pop the lower book index first.
    // A book is never split into more pieces than it has chapters.
    let mut heap: BinaryHeap<(u64, Reverse<usize>)> = books
        .iter()
        .enumerate()
        .filter(|(_, book)| book.child_count() > 1)
        .map(|(l0, book)| (piece_len(book.len, 1), Reverse(l0)))
        .collect();

    let mut total = books.len();
    while total < desired {
        let Some((longest, Reverse(l0))) = heap.pop() else {
            let chapters: usize = books.iter().map(|b| b.child_count()).sum();
            return Err(ChunkError::InvalidArgument(format!(
                "cannot split {} chapters into {} ranges",
                chapters, desired
            )));
        };

        splits[l0] += 1;
        total += 1;
        tracing::trace!(book = l0, longest, splits = splits[l0], "Split book");

        if splits[l0] < books[l0].child_count() {
            heap.push((piece_len(books[l0].len, splits[l0]), Reverse(l0)));
        }
    }

    let mut ranges = Vec::with_capacity(desired);
    for (l0, (book, &count)) in books.iter().zip(&splits).enumerate() {
        let slice_len = book.child_count() as f64 / count as f64;
        // Both ends come from the same rounding, so slice i ends right
        // before slice i + 1 starts.
        let boundary = |i: usize| (slice_len * i as f64).round() as usize;

        for i in 0..count {
            let start = Path::new(l0, boundary(i));
            let end = Path::new(l0, boundary(i + 1) - 1);
            ranges.push(Range::titled(root, start, end)?);
        }
    }

    Ok(ranges)
}
