use super::Range;
use crate::error::ChunkError;
use crate::tree::{Node, Path, Root};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Run of adjacent books being merged into one range
#[derive(Debug, Clone)]
struct Span {
    /// First book index (inclusive)
    lo: usize,
    /// Last book index (inclusive)
    hi: usize,
    /// Accumulated length of the covered books
    len: u64,
    /// False once absorbed into a neighbour
    live: bool,
}

/// Fewer ranges than books: fold the smallest span into its smaller
/// neighbour until `desired` spans remain.
///
/// Spans live in an arena addressed by handle; `owner[book]` tracks which
/// span currently covers each book, so neighbours are found by adjacency
/// in the original document.
pub(super) fn merge_books(
    desired: usize,
    root: &Root,
    books: &[&Node],
) -> Result<Vec<Range>, ChunkError> {
    let mut spans: Vec<Span> = books
        .iter()
        .enumerate()
        .map(|(l0, book)| Span {
            lo: l0,
            hi: l0,
            len: book.len,
            live: true,
        })
        .collect();
    let mut owner: Vec<usize> = (0..books.len()).collect();

    // Min-heap on (length, first book); entries go stale when a span grows
    // and are skipped on pop.
    let mut queue: BinaryHeap<Reverse<(u64, usize, usize)>> = spans
        .iter()
        .enumerate()
        .map(|(handle, span)| Reverse((span.len, span.lo, handle)))
        .collect();

    let mut remaining = spans.len();
    while remaining > desired {
        let Some(Reverse((len, lo, handle))) = queue.pop() else {
            break;
        };
        let span = &spans[handle];
        if !span.live || span.len != len || span.lo != lo {
            continue;
        }

        let prev = span.lo.checked_sub(1).map(|l0| owner[l0]);
        let next = owner.get(span.hi + 1).copied();

        // A missing neighbour counts as infinitely long; ties go to the next one
        let into = match (prev, next) {
            (Some(p), Some(n)) if spans[p].len < spans[n].len => p,
            (_, Some(n)) => n,
            (Some(p), None) => p,
            (None, None) => break,
        };

        let (lo, hi, len) = (span.lo, span.hi, span.len);
        spans[handle].live = false;

        let target = &mut spans[into];
        target.lo = target.lo.min(lo);
        target.hi = target.hi.max(hi);
        target.len += len;
        queue.push(Reverse((target.len, target.lo, into)));

        owner[lo..=hi].fill(into);
        remaining -= 1;

        tracing::trace!(from = lo, to = hi, into = ?(spans[into].lo, spans[into].hi), "Merged span");
    }

    let mut live: Vec<&Span> = spans.iter().filter(|span| span.live).collect();
    live.sort_by_key(|span| span.lo);

    live.into_iter()
        .map(|span| {
            let start = Path::new(span.lo, 0);
            let end = Path::new(span.hi, books[span.hi].child_count() - 1);
            Range::titled(root, start, end)
        })
        .collect()
}
