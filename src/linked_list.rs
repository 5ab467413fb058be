//! Singly linked lists
//!
//! Two variants with the same node shape:
//!
//! - [`ForwardList`]: tracks only the head. Prepend and pop-first in O(1).
//! - [`LinkedList`]: tracks head and tail, adding O(1) append, which is what
//!   a FIFO queue needs.
//!
//! `ForwardList` uses owning `Box` links. `LinkedList` needs a tail alias
//! into the chain, so its nodes are linked with raw pointers behind a safe
//! API; `Drop` walks the chain and frees every node.

use std::fmt;
use std::marker::PhantomData;
use std::ptr;

struct ForwardNode<T> {
    item: T,
    next: Option<Box<ForwardNode<T>>>,
}

/// A singly linked list that only keeps track of the first item
pub struct ForwardList<T> {
    first: Option<Box<ForwardNode<T>>>,
}

impl<T> ForwardList<T> {
    /// Creates an empty list
    pub fn new() -> Self {
        Self { first: None }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Inserts `item` at the front of the list
    pub fn prepend(&mut self, item: T) {
        self.first = Some(Box::new(ForwardNode {
            item,
            next: self.first.take(),
        }));
    }

    /// Removes and returns the first item, or `None` if the list is empty
    pub fn pop_first(&mut self) -> Option<T> {
        self.first.take().map(|node| {
            self.first = node.next;
            node.item
        })
    }

    /// Returns the first item without removing it
    pub fn first(&self) -> Option<&T> {
        self.first.as_deref().map(|node| &node.item)
    }

    /// Iterates the items front to back
    pub fn iter(&self) -> ForwardIter<'_, T> {
        ForwardIter {
            next: self.first.as_deref(),
        }
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    // Iterative drop; the default recursive one can blow the stack on long
    // chains.
    fn drop(&mut self) {
        let mut next = self.first.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct ForwardIter<'a, T> {
    next: Option<&'a ForwardNode<T>>,
}

impl<'a, T> Iterator for ForwardIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.item
        })
    }
}

struct RawNode<T> {
    item: T,
    next: *mut RawNode<T>,
}

/// A singly linked list that keeps track of the first and last item
///
/// Compared to [`ForwardList`] this adds O(1) [`append`](LinkedList::append).
pub struct LinkedList<T> {
    first: *mut RawNode<T>,
    last: *mut RawNode<T>,
    _owns: PhantomData<T>,
}

impl<T> LinkedList<T> {
    /// Creates an empty list
    pub fn new() -> Self {
        Self {
            first: ptr::null_mut(),
            last: ptr::null_mut(),
            _owns: PhantomData,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_null()
    }

    /// Inserts `item` at the front of the list
    pub fn prepend(&mut self, item: T) {
        let node = Box::into_raw(Box::new(RawNode {
            item,
            next: self.first,
        }));
        if self.last.is_null() {
            self.last = node;
        }
        self.first = node;
    }

    /// Inserts `item` at the back of the list
    pub fn append(&mut self, item: T) {
        let node = Box::into_raw(Box::new(RawNode {
            item,
            next: ptr::null_mut(),
        }));
        if self.last.is_null() {
            self.first = node;
        } else {
            // Safety: `last` is non-null and points at the tail node, which
            // this list owns.
            unsafe { (*self.last).next = node };
        }
        self.last = node;
    }

    /// Removes and returns the first item, or `None` if the list is empty
    pub fn pop_first(&mut self) -> Option<T> {
        if self.first.is_null() {
            return None;
        }
        // Safety: `first` was produced by Box::into_raw and is owned by this
        // list; ownership is reclaimed exactly once here.
        let node = unsafe { Box::from_raw(self.first) };
        self.first = node.next;
        if self.first.is_null() {
            self.last = ptr::null_mut();
        }
        Some(node.item)
    }

    /// Returns the first item without removing it
    pub fn first(&self) -> Option<&T> {
        // Safety: a non-null `first` always points at a live node owned by
        // this list.
        unsafe { self.first.as_ref().map(|node| &node.item) }
    }

    /// Returns the last item without removing it
    pub fn last(&self) -> Option<&T> {
        // Safety: same as `first`.
        unsafe { self.last.as_ref().map(|node| &node.item) }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        while self.pop_first().is_some() {}
    }
}
