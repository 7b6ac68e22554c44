//! Ordering predicates.
//!
//! Both algorithms take a predicate `precedes(a, b)` that answers "should `a`
//! sit closer to the head than `b`". It must be a strict weak ordering:
//! irreflexive, asymmetric and transitive.

/// Ordering predicate used by the sort algorithms.
pub trait Compare<T: ?Sized> {
    /// True iff `a` must come before `b`.
    fn precedes(&mut self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: FnMut(&T, &T) -> bool,
{
    fn precedes(&mut self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Ascending order by `Ord`: `a` precedes `b` iff `a < b`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LessThan;

impl<T: Ord + ?Sized> Compare<T> for LessThan {
    fn precedes(&mut self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Decorator that counts how many times the wrapped predicate is consulted.
#[derive(Debug, Clone, Default)]
pub struct Counting<C> {
    inner: C,
    count: u64,
}

impl<C> Counting<C> {
    pub fn new(inner: C) -> Self {
        Self { inner, count: 0 }
    }

    /// Comparisons made since creation or the last reset.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T: ?Sized, C: Compare<T>> Compare<T> for Counting<C> {
    fn precedes(&mut self, a: &T, b: &T) -> bool {
        self.count += 1;
        self.inner.precedes(a, b)
    }
}
