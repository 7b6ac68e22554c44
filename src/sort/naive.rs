//! Quadratic exchange sort.

use tracing::debug;

use super::compare::Compare;
use crate::list::List;

/// Sort `list` in place by exchanging values, `O(n²)` comparisons.
///
/// For each pivot from head to tail, every later node whose value should
/// precede the pivot's (or ties with it) swaps payloads with the pivot. Nodes
/// never move, only values do, so equal values may be reordered.
pub fn naive_sort<T, C>(list: &mut List<T>, compare: &mut C)
where
    C: Compare<T> + ?Sized,
{
    debug!(len = list.len(), "naive sort started");

    let mut pivots = list.nodes_mut();
    while let Some(pivot) = pivots.next() {
        for candidate in pivots.rest() {
            if !compare.precedes(pivot.value(), candidate.value()) {
                pivot.swap_values(candidate);
            }
        }
    }

    debug!("naive sort finished");
}
