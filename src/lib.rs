//! linksort - doubly linked list sorting
//!
//! A doubly linked list whose nodes move between lists by ownership
//! transfer, plus two in-place sorts over it: a stable bottom-up merge sort
//! built from nothing but `pop_front` and `push_back`, and a quadratic
//! exchange sort that swaps values.

pub mod config;
pub mod error;
pub mod harness;
pub mod integer;
pub mod list;
pub mod sort;
pub mod utils;

pub use error::ListError;
pub use integer::IntegerList;
pub use list::{swap_values, CursorMut, List, Node};
pub use sort::{merge, merge_sort, naive_sort, Algorithm, Compare, Counting, LessThan};
