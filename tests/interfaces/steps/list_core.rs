//! List interface step definitions.

use cucumber::{given, then, when, World};
use linksort::integer::{append_end, append_start, integer_node, to_vec, with_elements};
use linksort::{IntegerList, ListError, Node};

use super::parse_values;

/// Test context for list scenarios.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct ListWorld {
    list: IntegerList,
    other: IntegerList,
    detached: Option<Box<Node<i32>>>,
    last_error: Option<ListError>,
    visited: Vec<i32>,
}

impl ListWorld {
    fn new() -> Self {
        Self {
            list: IntegerList::new(),
            other: IntegerList::new(),
            detached: None,
            last_error: None,
            visited: Vec::new(),
        }
    }
}

// --- Given steps ---

#[given("an empty list")]
async fn given_empty_list(world: &mut ListWorld) {
    world.list = IntegerList::new();
}

#[given(expr = "a list of {string}")]
async fn given_list_of(world: &mut ListWorld, values: String) {
    world.list = with_elements(&parse_values(&values));
}

#[given(expr = "another list of {string}")]
async fn given_other_list_of(world: &mut ListWorld, values: String) {
    world.other = with_elements(&parse_values(&values));
}

// --- When steps ---

#[when(expr = "I append {int} at the end")]
async fn when_append_end(world: &mut ListWorld, value: i32) {
    append_end(&mut world.list, value);
}

#[when(expr = "I append {int} at the start")]
async fn when_append_start(world: &mut ListWorld, value: i32) {
    append_start(&mut world.list, value);
}

#[when("I pop the front node")]
async fn when_pop_front(world: &mut ListWorld) {
    world.detached = world.list.pop_front();
}

#[when("I push the popped node onto the other list")]
async fn when_push_popped_onto_other(world: &mut ListWorld) {
    let node = world.detached.take().expect("a popped node");
    world.other.push_back(node);
}

#[when(expr = "I insert {int} after the front node")]
async fn when_insert_after_front(world: &mut ListWorld, value: i32) {
    let mut cursor = world.list.cursor_front_mut();
    world.last_error = cursor.insert_after(integer_node(value)).err();
}

#[when(expr = "I insert {int} before the back node")]
async fn when_insert_before_back(world: &mut ListWorld, value: i32) {
    let mut cursor = world.list.cursor_back_mut();
    world.last_error = cursor.insert_before(integer_node(value)).err();
}

#[when(expr = "I visit values until {int}")]
async fn when_visit_until(world: &mut ListWorld, stop: i32) {
    let mut visited = Vec::new();
    world.list.for_each(|&value| {
        visited.push(value);
        value != stop
    });
    world.visited = visited;
}

// --- Then steps ---

#[then(expr = "the list is {string}")]
async fn then_list_is(world: &mut ListWorld, values: String) {
    assert_eq!(to_vec(&world.list), parse_values(&values));
    assert!(world.list.check_links());
}

#[then(expr = "the other list is {string}")]
async fn then_other_list_is(world: &mut ListWorld, values: String) {
    assert_eq!(to_vec(&world.other), parse_values(&values));
    assert!(world.other.check_links());
}

#[then(expr = "the list has {int} nodes")]
async fn then_list_len(world: &mut ListWorld, len: usize) {
    assert_eq!(world.list.len(), len);
}

#[then(expr = "the popped node holds {int} and is detached")]
async fn then_popped_node(world: &mut ListWorld, value: i32) {
    let node = world.detached.as_ref().expect("a popped node");
    assert_eq!(*node.value(), value);
    assert!(node.is_detached());
}

#[then("nothing was popped")]
async fn then_nothing_popped(world: &mut ListWorld) {
    assert!(world.detached.is_none());
}

#[then("the insert is rejected as an invalid argument")]
async fn then_insert_rejected(world: &mut ListWorld) {
    assert!(matches!(
        world.last_error,
        Some(ListError::InvalidArgument(_))
    ));
}

#[then(expr = "the visited values are {string}")]
async fn then_visited(world: &mut ListWorld, values: String) {
    assert_eq!(world.visited, parse_values(&values));
}

#[then(expr = "the list renders as {string}")]
async fn then_renders(world: &mut ListWorld, rendered: String) {
    assert_eq!(world.list.to_string(), rendered);
}

#[then(expr = "destroying the list releases {int} values")]
async fn then_destroy(world: &mut ListWorld, count: usize) {
    let list = std::mem::take(&mut world.list);
    assert_eq!(list.destroy(), count);
}
