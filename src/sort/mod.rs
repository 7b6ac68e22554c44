//! Sorting algorithms over [`List`].
//!
//! - [`merge_sort`]: stable bottom-up merge sort that relinks nodes
//! - [`naive_sort`]: quadratic exchange sort that swaps values

use std::fmt;

use serde::Deserialize;

use crate::list::List;

pub mod compare;
pub mod merge;
pub mod naive;

pub use compare::{Compare, Counting, LessThan};
pub use merge::{merge, merge_sort, merge_sort_observed, MergeReport, SubLists};
pub use naive::naive_sort;

/// Selectable sort algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Merge,
    Naive,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Merge, Algorithm::Naive];

    /// Sort `list` with this algorithm.
    pub fn sort<T, C>(self, list: &mut List<T>, compare: &mut C)
    where
        C: Compare<T> + ?Sized,
    {
        match self {
            Algorithm::Merge => {
                merge_sort(list, compare);
            }
            Algorithm::Naive => naive_sort(list, compare),
        }
    }

    /// True if equal values keep their input order.
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Merge)
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Merge => "merge",
            Algorithm::Naive => "naive",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
