//! Anchored insertion.
//!
//! A cursor rests either on a node of its list (the anchor) or on the ghost
//! position past both ends. Inserting relative to the ghost has no anchor to
//! rewire and is rejected.

use std::ptr::NonNull;

use super::{Link, List, Node};
use crate::error::{ListError, Result};

/// Mutable cursor over a [`List`].
pub struct CursorMut<'a, T> {
    current: Link<T>,
    list: &'a mut List<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(super) fn new(current: Link<T>, list: &'a mut List<T>) -> Self {
        Self { current, list }
    }

    /// True when the cursor is on the ghost position.
    pub fn is_ghost(&self) -> bool {
        self.current.is_none()
    }

    /// Step towards the tail. From the ghost position this wraps to the head.
    pub fn move_next(&mut self) {
        self.current = match self.current {
            // SAFETY: current is a node owned by the borrowed list.
            Some(node) => unsafe { (*node.as_ptr()).next },
            None => self.list.head,
        };
    }

    /// Step towards the head. From the ghost position this wraps to the tail.
    pub fn move_prev(&mut self) {
        self.current = match self.current {
            // SAFETY: current is a node owned by the borrowed list.
            Some(node) => unsafe { (*node.as_ptr()).prev },
            None => self.list.tail,
        };
    }

    /// Value at the anchor.
    pub fn current(&mut self) -> Option<&mut T> {
        // SAFETY: the list is mutably borrowed through the cursor.
        self.current.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// The anchor node itself.
    pub fn current_node(&mut self) -> Option<&mut Node<T>> {
        // SAFETY: the list is mutably borrowed through the cursor.
        self.current.map(|node| unsafe { &mut *node.as_ptr() })
    }

    /// Link `node` directly after the anchor. The cursor does not move.
    ///
    /// Fails with [`ListError::InvalidArgument`] on the ghost position; the
    /// node is dropped in that case.
    pub fn insert_after(&mut self, mut node: Box<Node<T>>) -> Result<()> {
        let anchor = self
            .current
            .ok_or(ListError::InvalidArgument("insert_after needs an anchor node"))?;

        // SAFETY: anchor and its successor are owned by the borrowed list;
        // the new node is freshly leaked and not linked anywhere else.
        unsafe {
            let after = (*anchor.as_ptr()).next;
            node.prev = Some(anchor);
            node.next = after;
            let ptr = NonNull::from(Box::leak(node));

            match after {
                Some(after) => (*after.as_ptr()).prev = Some(ptr),
                None => self.list.tail = Some(ptr),
            }
            (*anchor.as_ptr()).next = Some(ptr);
        }

        self.list.len += 1;
        Ok(())
    }

    /// Link `node` directly before the anchor. The cursor does not move.
    ///
    /// Fails with [`ListError::InvalidArgument`] on the ghost position; the
    /// node is dropped in that case.
    pub fn insert_before(&mut self, mut node: Box<Node<T>>) -> Result<()> {
        let anchor = self
            .current
            .ok_or(ListError::InvalidArgument("insert_before needs an anchor node"))?;

        // SAFETY: as in `insert_after`, mirrored.
        unsafe {
            let before = (*anchor.as_ptr()).prev;
            node.next = Some(anchor);
            node.prev = before;
            let ptr = NonNull::from(Box::leak(node));

            match before {
                Some(before) => (*before.as_ptr()).next = Some(ptr),
                None => self.list.head = Some(ptr),
            }
            (*anchor.as_ptr()).prev = Some(ptr);
        }

        self.list.len += 1;
        Ok(())
    }
}
