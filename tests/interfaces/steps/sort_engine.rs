//! Sort interface step definitions.

use cucumber::{given, then, when, World};
use linksort::integer::{to_vec, with_elements};
use linksort::{merge, Algorithm, Counting, IntegerList, LessThan};

use super::parse_values;

/// Test context for sort scenarios.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct SortWorld {
    list: IntegerList,
    right: IntegerList,
    left: IntegerList,
    input_len: usize,
    comparisons: u64,
}

impl SortWorld {
    fn new() -> Self {
        Self {
            list: IntegerList::new(),
            right: IntegerList::new(),
            left: IntegerList::new(),
            input_len: 0,
            comparisons: 0,
        }
    }
}

fn algorithm(name: &str) -> Algorithm {
    match name {
        "merge" => Algorithm::Merge,
        "naive" => Algorithm::Naive,
        other => panic!("unknown algorithm: {}", other),
    }
}

// --- Given steps ---

#[given(expr = "the values {string}")]
async fn given_values(world: &mut SortWorld, values: String) {
    let values = parse_values(&values);
    world.input_len = values.len();
    world.list = with_elements(&values);
}

#[given(expr = "the descending integers below {int}")]
async fn given_descending(world: &mut SortWorld, n: i32) {
    let values: Vec<i32> = (0..n).rev().collect();
    world.input_len = values.len();
    world.list = with_elements(&values);
}

#[given(expr = "a sorted right run {string} and a sorted left run {string}")]
async fn given_runs(world: &mut SortWorld, right: String, left: String) {
    world.right = with_elements(&parse_values(&right));
    world.left = with_elements(&parse_values(&left));
}

// --- When steps ---

#[when(expr = "I sort them with the {word} sort")]
async fn when_sort(world: &mut SortWorld, name: String) {
    let mut compare = Counting::new(LessThan);
    algorithm(&name).sort(&mut world.list, &mut compare);
    world.comparisons = compare.count();
}

#[when("I merge the runs")]
async fn when_merge(world: &mut SortWorld) {
    let left = std::mem::take(&mut world.left);
    let mut compare = Counting::new(LessThan);
    merge(&mut world.right, left, &mut compare);
    world.comparisons = compare.count();
}

// --- Then steps ---

#[then(expr = "the result is {string}")]
async fn then_result(world: &mut SortWorld, values: String) {
    assert_eq!(to_vec(&world.list), parse_values(&values));
    assert!(world.list.check_links());
}

#[then(expr = "the merged run is {string}")]
async fn then_merged(world: &mut SortWorld, values: String) {
    assert_eq!(to_vec(&world.right), parse_values(&values));
    assert!(world.left.is_empty());
}

#[then("the result is ascending")]
async fn then_ascending(world: &mut SortWorld) {
    let values = to_vec(&world.list);
    assert_eq!(values.len(), world.input_len);
    assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[then(expr = "exactly {int} comparisons were made")]
async fn then_exact_comparisons(world: &mut SortWorld, count: u64) {
    assert_eq!(world.comparisons, count);
}

#[then("at most n log n comparisons were made")]
async fn then_bounded_comparisons(world: &mut SortWorld) {
    let n = world.input_len as u64;
    let log = u64::from(u64::BITS - n.saturating_sub(1).leading_zeros());
    assert!(world.comparisons <= n * log);
}
