//! Doubly linked list with explicit node ownership.
//!
//! Nodes live on the heap. A node outside any list is only reachable as a
//! `Box<Node<T>>`, so moving a node between lists is a move of that box:
//! `pop_front` hands ownership to the caller and `push_back`/`push_front`
//! hand it to the receiving list. While a node is linked, the list owns it
//! through its `head`/`tail` and neighbour links.
//!
//! Invariants maintained by every operation:
//! - `len == 0` iff `head` and `tail` are both `None`
//! - `head.prev` and `tail.next` are `None`
//! - following `next` from `head` visits exactly `len` nodes, ending at `tail`
//! - following `prev` from `tail` ends at `head`

use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use tracing::trace;

mod cursor;

pub use cursor::CursorMut;

type Link<T> = Option<NonNull<Node<T>>>;

/// A list node holding one value and links to its neighbours.
pub struct Node<T> {
    value: T,
    next: Link<T>,
    prev: Link<T>,
}

impl<T> Node<T> {
    /// Create a detached node wrapping `value`.
    pub fn new(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            next: None,
            prev: None,
        })
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Free the node and return its value.
    pub fn into_value(self: Box<Self>) -> T {
        self.value
    }

    /// True when both links are cleared.
    pub fn is_detached(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }

    /// Exchange payloads with `other`. Node identities and links are untouched.
    pub fn swap_values(&mut self, other: &mut Node<T>) {
        mem::swap(&mut self.value, &mut other.value);
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("detached", &self.is_detached())
            .finish()
    }
}

/// Exchange the payloads of two nodes.
///
/// Returns `false` without touching anything when either node is absent.
pub fn swap_values<T>(a: Option<&mut Node<T>>, b: Option<&mut Node<T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => {
            a.swap_values(b);
            true
        }
        _ => false,
    }
}

/// Doubly linked list owning its nodes.
///
/// Values are destroyed by `T`'s `Drop` when the list is torn down, either
/// through [`List::destroy`] or by dropping the list.
pub struct List<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

// SAFETY: the list is the single owner of its nodes; no node is shared with
// another list or handed out while linked except through borrows of the list.
unsafe impl<T: Send> Send for List<T> {}
unsafe impl<T: Sync> Sync for List<T> {}

impl<T> List<T> {
    /// Create an empty list.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        // SAFETY: head, when present, points to a node owned by this list.
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    pub fn back(&self) -> Option<&T> {
        // SAFETY: tail, when present, points to a node owned by this list.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Link `node` in as the new head.
    pub fn push_front(&mut self, mut node: Box<Node<T>>) {
        node.prev = None;
        node.next = self.head;
        let ptr = NonNull::from(Box::leak(node));

        match self.head {
            // SAFETY: the old head is owned by this list and distinct from `ptr`.
            Some(head) => unsafe { (*head.as_ptr()).prev = Some(ptr) },
            None => self.tail = Some(ptr),
        }

        self.head = Some(ptr);
        self.len += 1;
    }

    /// Link `node` in as the new tail.
    pub fn push_back(&mut self, mut node: Box<Node<T>>) {
        node.next = None;
        node.prev = self.tail;
        let ptr = NonNull::from(Box::leak(node));

        match self.tail {
            // SAFETY: the old tail is owned by this list and distinct from `ptr`.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(ptr) },
            None => self.head = Some(ptr),
        }

        self.tail = Some(ptr);
        self.len += 1;
    }

    pub fn push_front_value(&mut self, value: T) {
        self.push_front(Node::new(value));
    }

    pub fn push_back_value(&mut self, value: T) {
        self.push_back(Node::new(value));
    }

    /// Unlink the head and hand it to the caller with both links cleared.
    ///
    /// This is the only way a node leaves a list.
    pub fn pop_front(&mut self) -> Option<Box<Node<T>>> {
        self.head.map(|head| {
            // SAFETY: head was produced by `Box::leak` in a push or insert and
            // is still owned by this list; reclaiming it transfers ownership.
            let mut node = unsafe { Box::from_raw(head.as_ptr()) };

            self.head = node.next;
            match self.head {
                // SAFETY: the new head is owned by this list.
                Some(new_head) => unsafe { (*new_head.as_ptr()).prev = None },
                None => self.tail = None,
            }

            self.len -= 1;
            node.next = None;
            node.prev = None;
            node
        })
    }

    /// Tear the list down, dropping every value exactly once.
    ///
    /// Returns the number of values destroyed.
    pub fn destroy(mut self) -> usize {
        let destroyed = self.clear();
        trace!(destroyed, "list destroyed");
        destroyed
    }

    /// Drop every node, leaving the list empty and reusable.
    pub fn clear(&mut self) -> usize {
        let mut destroyed = 0;
        while let Some(node) = self.pop_front() {
            drop(node);
            destroyed += 1;
        }
        destroyed
    }

    /// Visit values head to tail until `visit` returns `false`.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&T) -> bool,
    {
        for value in self.iter() {
            if !visit(value) {
                break;
            }
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
            tail: self.tail,
            remaining: self.len,
            marker: PhantomData,
        }
    }

    /// Mutable access to the nodes themselves, head to tail.
    pub fn nodes_mut(&mut self) -> NodesMut<'_, T> {
        NodesMut {
            next: self.head,
            remaining: self.len,
            marker: PhantomData,
        }
    }

    /// Cursor resting on the head, or on the ghost position when empty.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.head, self)
    }

    /// Cursor resting on the tail, or on the ghost position when empty.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.tail, self)
    }

    /// Walk the links in both directions and verify the structural invariants.
    pub fn check_links(&self) -> bool {
        if self.len == 0 {
            return self.head.is_none() && self.tail.is_none();
        }

        let (Some(head), Some(tail)) = (self.head, self.tail) else {
            return false;
        };

        // SAFETY: every pointer followed below is reached from head/tail
        // through links of nodes owned by this list.
        unsafe {
            if (*head.as_ptr()).prev.is_some() || (*tail.as_ptr()).next.is_some() {
                return false;
            }

            let mut forward = 0;
            let mut last = None;
            let mut cursor = Some(head);
            while let Some(node) = cursor {
                forward += 1;
                if forward > self.len {
                    return false;
                }
                let next = (*node.as_ptr()).next;
                if let Some(next) = next {
                    if (*next.as_ptr()).prev != Some(node) {
                        return false;
                    }
                }
                last = Some(node);
                cursor = next;
            }
            if forward != self.len || last != Some(tail) {
                return false;
            }

            let mut backward = 0;
            let mut first = None;
            let mut cursor = Some(tail);
            while let Some(node) = cursor {
                backward += 1;
                if backward > self.len {
                    return false;
                }
                first = Some(node);
                cursor = (*node.as_ptr()).prev;
            }
            backward == self.len && first == Some(head)
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push_back_value(value);
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `[ 1  2  3 ]`: every element padded by one space on each side.
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for value in self.iter() {
            write!(f, " {} ", value)?;
        }
        f.write_str("]")
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over values, usable from either end.
pub struct Iter<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    remaining: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.head.map(|node| {
            // SAFETY: the list is borrowed for 'a and `remaining` keeps the
            // two ends from crossing.
            let node = unsafe { &*node.as_ptr() };
            self.remaining -= 1;
            self.head = node.next;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.tail.map(|node| {
            // SAFETY: as in `next`.
            let node = unsafe { &*node.as_ptr() };
            self.remaining -= 1;
            self.tail = node.prev;
            &node.value
        })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Iterator yielding each node of a list as `&mut Node<T>`.
///
/// Every yielded reference points at a distinct node, so references taken
/// from one `NodesMut` may be held at the same time.
pub struct NodesMut<'a, T> {
    next: Link<T>,
    remaining: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

impl<T> NodesMut<'_, T> {
    /// Re-borrow the nodes not yet yielded, without advancing `self`.
    ///
    /// The returned iterator never reaches a node already handed out by
    /// `self`, so it can run while those references are still live.
    pub fn rest(&mut self) -> NodesMut<'_, T> {
        NodesMut {
            next: self.next,
            remaining: self.remaining,
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for NodesMut<'a, T> {
    type Item = &'a mut Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.next.map(|node| {
            // SAFETY: the list is mutably borrowed for 'a and each node is
            // yielded at most once by this iterator.
            let node = unsafe { &mut *node.as_ptr() };
            self.remaining -= 1;
            self.next = node.next;
            node
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
