//! Bottom-up merge sort on a list of lists.
//!
//! The input list is broken into singleton runs, each run held by a node of
//! a [`SubLists`] container. Every round pops runs in pairs, merges the
//! second into the first and pushes the result into a fresh container, so the
//! run count halves per round. Values are never copied: every step is a
//! `pop_front` from one list followed by a `push_back` onto another.

use std::fmt;

use tracing::{debug, trace};

use super::compare::Compare;
use crate::list::{List, Node};

/// Scratch container of sorted runs used by [`merge_sort`].
///
/// Each node of the inner list wraps one run. Dropping the container drops
/// every run it still holds, and every run drops its values.
pub struct SubLists<T> {
    runs: List<List<T>>,
}

impl<T> SubLists<T> {
    pub fn new() -> Self {
        Self { runs: List::new() }
    }

    /// Drain `list` into one singleton run per node, in order.
    pub fn decompose(list: &mut List<T>) -> Self {
        let mut sublists = Self::new();
        while let Some(node) = list.pop_front() {
            let mut run = List::new();
            run.push_back(node);
            sublists.push_run(Node::new(run));
        }
        sublists
    }

    /// Number of runs held.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Detach the first run together with its wrapper node.
    pub fn pop_run(&mut self) -> Option<Box<Node<List<T>>>> {
        self.runs.pop_front()
    }

    pub fn push_run(&mut self, run: Box<Node<List<T>>>) {
        self.runs.push_back(run);
    }

    pub fn runs(&self) -> impl Iterator<Item = &List<T>> {
        self.runs.iter()
    }

    /// Merge runs pairwise into a new container.
    ///
    /// An odd run out is carried over unmerged. The emptied container is
    /// dropped before returning.
    pub fn merge_round<C>(mut self, compare: &mut C) -> Self
    where
        C: Compare<T> + ?Sized,
    {
        let mut next = Self::new();
        while let Some(mut a) = self.pop_run() {
            if let Some(b) = self.pop_run() {
                merge(a.value_mut(), b.into_value(), compare);
            }
            next.push_run(a);
        }
        debug_assert!(self.is_empty());
        next
    }

    /// Move the values of every run, run by run, onto the back of `list`.
    ///
    /// After the last merge round there is a single run, so this hands the
    /// sorted values back. Returns how many values were moved.
    pub fn reassemble_into(mut self, list: &mut List<T>) -> usize {
        let mut moved = 0;
        while let Some(wrapper) = self.pop_run() {
            let mut run = wrapper.into_value();
            while let Some(node) = run.pop_front() {
                list.push_back(node);
                moved += 1;
            }
        }
        moved
    }
}

impl<T> Default for SubLists<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders one run per line between braces.
impl<T: fmt::Display> fmt::Display for SubLists<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\n{\n")?;
        for run in self.runs() {
            writeln!(f, "{}", run)?;
            f.write_str("\n")?;
        }
        f.write_str("\n}\n")
    }
}

impl<T: fmt::Debug> fmt::Debug for SubLists<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.runs()).finish()
    }
}

/// Merge two sorted lists into `right`, consuming `left`.
///
/// At each step the front of `left` is taken only when it strictly precedes
/// the front of `right`; otherwise the front of `right` is taken. Equal
/// values therefore leave `right` first. Once one side runs dry the other is
/// drained in order. The merged nodes are collected in a fresh list that
/// then replaces `right`.
///
/// Callers that want a stable sort pass the run that came first in the
/// input as `right`.
pub fn merge<T, C>(right: &mut List<T>, mut left: List<T>, compare: &mut C)
where
    C: Compare<T> + ?Sized,
{
    let mut result = List::new();
    let mut a = right.pop_front();
    let mut b = left.pop_front();

    loop {
        match (a, b) {
            (Some(node_a), Some(node_b)) => {
                if compare.precedes(node_b.value(), node_a.value()) {
                    result.push_back(node_b);
                    a = Some(node_a);
                    b = left.pop_front();
                } else {
                    result.push_back(node_a);
                    a = right.pop_front();
                    b = Some(node_b);
                }
            }
            (Some(node_a), None) => {
                result.push_back(node_a);
                a = right.pop_front();
                b = None;
            }
            (None, Some(node_b)) => {
                result.push_back(node_b);
                a = None;
                b = left.pop_front();
            }
            (None, None) => break,
        }
    }

    debug_assert!(right.is_empty() && left.is_empty());
    *right = result;
}

/// Summary of one [`merge_sort`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Singleton runs produced by decomposition.
    pub runs: usize,
    /// Pairwise merge rounds performed.
    pub rounds: usize,
}

/// Sort `list` in place, stably, with `O(n log n)` comparisons.
///
/// Lists of zero or one element are returned untouched without consulting
/// `compare`.
pub fn merge_sort<T, C>(list: &mut List<T>, compare: &mut C) -> MergeReport
where
    C: Compare<T> + ?Sized,
{
    merge_sort_observed(list, compare, |_, _| {})
}

/// [`merge_sort`] that hands the runs to `on_round` after every merge round,
/// together with the 1-based round number.
pub fn merge_sort_observed<T, C, F>(
    list: &mut List<T>,
    compare: &mut C,
    mut on_round: F,
) -> MergeReport
where
    C: Compare<T> + ?Sized,
    F: FnMut(usize, &SubLists<T>),
{
    let len = list.len();
    if len <= 1 {
        return MergeReport {
            runs: len,
            rounds: 0,
        };
    }

    debug!(len, "merge sort started");

    let mut sublists = SubLists::decompose(list);
    let runs = sublists.len();
    let mut rounds = 0;

    while sublists.len() > 1 {
        sublists = sublists.merge_round(compare);
        rounds += 1;
        trace!(round = rounds, runs = sublists.len(), "merge round finished");
        on_round(rounds, &sublists);
    }

    let moved = sublists.reassemble_into(list);
    debug_assert_eq!(moved, len);
    debug!(len, rounds, "merge sort finished");

    MergeReport { runs, rounds }
}
