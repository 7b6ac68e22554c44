//! 32-bit integer specialisation of the list.

use std::io::{self, Write};

use tracing::trace;

use crate::list::{List, Node};
use crate::sort::{merge_sort_observed, naive_sort, Algorithm, Compare};

/// List of signed 32-bit integers.
pub type IntegerList = List<i32>;

/// Create a detached node holding `value`.
pub fn integer_node(value: i32) -> Box<Node<i32>> {
    Node::new(value)
}

/// Add `value` at the head of `list`.
pub fn append_start(list: &mut IntegerList, value: i32) {
    list.push_front(integer_node(value));
}

/// Add `value` at the tail of `list`.
pub fn append_end(list: &mut IntegerList, value: i32) {
    list.push_back(integer_node(value));
}

/// Build a list holding `elements` in order.
pub fn with_elements(elements: &[i32]) -> IntegerList {
    let mut list = IntegerList::new();
    for &value in elements {
        append_end(&mut list, value);
    }
    list
}

pub fn to_vec(list: &IntegerList) -> Vec<i32> {
    list.iter().copied().collect()
}

/// Write `list` to `out` followed by a newline.
pub fn write_list<W: Write>(out: &mut W, list: &IntegerList) -> io::Result<()> {
    writeln!(out, "{}", list)
}

/// Write `list` to stdout followed by a newline.
pub fn print(list: &IntegerList) -> io::Result<()> {
    write_list(&mut io::stdout().lock(), list)
}

/// Production comparator: `a` precedes `b` iff `a < b`.
///
/// Has the shape of a [`Compare`](crate::sort::Compare) predicate, so it can
/// be handed to either sort directly.
pub fn less_than(a: &i32, b: &i32) -> bool {
    a < b
}

/// Sort `list` with `algorithm`.
///
/// Merge sort traces the full run layout after every round.
pub fn sort_list<C>(list: &mut IntegerList, algorithm: Algorithm, compare: &mut C)
where
    C: Compare<i32> + ?Sized,
{
    match algorithm {
        Algorithm::Merge => {
            merge_sort_observed(list, compare, |round, runs| {
                trace!(round, "runs after merge round:{}", runs);
            });
        }
        Algorithm::Naive => naive_sort(list, compare),
    }
}
