//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use linksort::List;

/// Values of `list`, head to tail.
pub fn values<T: Copy>(list: &List<T>) -> Vec<T> {
    list.iter().copied().collect()
}

/// `true` when no adjacent pair is out of order under `precedes`.
pub fn is_sorted_by<T>(values: &[T], mut precedes: impl FnMut(&T, &T) -> bool) -> bool {
    values.windows(2).all(|pair| !precedes(&pair[1], &pair[0]))
}

/// Value carrying a sort key, its input position, and a shared drop counter.
pub struct Tagged {
    pub key: i32,
    pub position: usize,
    drops: Rc<Cell<usize>>,
}

impl Tagged {
    pub fn list(keys: &[i32], drops: &Rc<Cell<usize>>) -> List<Tagged> {
        keys.iter()
            .enumerate()
            .map(|(position, &key)| Tagged {
                key,
                position,
                drops: Rc::clone(drops),
            })
            .collect()
    }

    pub fn by_key(a: &Tagged, b: &Tagged) -> bool {
        a.key < b.key
    }
}

impl Drop for Tagged {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
