// ─────────────────────────────────────────────────────────────────────
// Launch Interceptor — Point Windows
// ─────────────────────────────────────────────────────────────────────
//! Contiguous fixed-length runs of the point sequence.
//!
//! Every LIC is "some window satisfies a predicate". A sequence shorter
//! than the window has no windows, so the LIC is vacuously false.

use decide_types::Point;

/// All contiguous runs of `len` points, in start-index order.
///
/// Yields nothing when `len` is zero or exceeds the sequence length.
pub fn windows(points: &[Point], len: usize) -> impl Iterator<Item = &[Point]> + '_ {
    (len > 0)
        .then(|| points.windows(len))
        .into_iter()
        .flatten()
}

/// True iff some window of `len` points satisfies `pred`.
///
/// Stops at the first satisfying window.
pub fn any_window<F>(points: &[Point], len: usize, pred: F) -> bool
where
    F: FnMut(&[Point]) -> bool,
{
    windows(points, len).any(pred)
}

/// Window length spanning the given point counts plus `extra` fixed
/// positions.
///
/// `None` when the total is negative or does not fit in `usize`; a
/// caller treats that as "no windows".
pub fn span(counts: &[i64], extra: i64) -> Option<usize> {
    let total = counts
        .iter()
        .try_fold(extra, |acc, &count| acc.checked_add(count))?;
    usize::try_from(total).ok()
}
