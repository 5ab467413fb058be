//! FIFO queues
//!
//! A small [`Queue`] trait with two interchangeable implementations:
//! [`ListQueue`], built on [`LinkedList`], and [`VecQueue`], a deliberately
//! simple `Vec`-backed baseline. The baseline exists mostly to cross-check
//! the linked-list implementation in tests; its dequeue is O(n).
//!
//! # Example
//!
//! ```rust
//! use collection_utils::queue::{ListQueue, Queue};
//!
//! let mut queue = ListQueue::new();
//! queue.enqueue("a");
//! queue.enqueue("b");
//! assert_eq!(queue.peek(), Ok(&"a"));
//! assert_eq!(queue.dequeue(), Ok("a"));
//! assert_eq!(queue.dequeue(), Ok("b"));
//! assert!(queue.dequeue().is_err());
//! ```

use std::fmt;

use crate::linked_list::LinkedList;

/// Error returned by [`Queue::dequeue`] and [`Queue::peek`] on an empty queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyQueue;

impl fmt::Display for EmptyQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue is empty")
    }
}

impl std::error::Error for EmptyQueue {}

/// First-in/first-out queue contract
pub trait Queue<T> {
    fn is_empty(&self) -> bool;

    /// Adds `item` at the back of the queue
    fn enqueue(&mut self, item: T);

    /// Removes and returns the item at the front of the queue
    ///
    /// # Errors
    /// Returns [`EmptyQueue`] if the queue holds no items.
    fn dequeue(&mut self) -> Result<T, EmptyQueue>;

    /// Same as [`dequeue`](Queue::dequeue) but does not remove the item
    ///
    /// # Errors
    /// Returns [`EmptyQueue`] if the queue holds no items.
    fn peek(&self) -> Result<&T, EmptyQueue>;
}

/// Linked list implementation of a queue
///
/// The end of the linked list is the end of the queue, so both `enqueue`
/// and `dequeue` are O(1).
#[derive(Default)]
pub struct ListQueue<T> {
    list: LinkedList<T>,
}

impl<T> ListQueue<T> {
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }
}

impl<T> Queue<T> for ListQueue<T> {
    fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    fn enqueue(&mut self, item: T) {
        self.list.append(item);
    }

    fn dequeue(&mut self) -> Result<T, EmptyQueue> {
        self.list.pop_first().ok_or(EmptyQueue)
    }

    fn peek(&self) -> Result<&T, EmptyQueue> {
        self.list.first().ok_or(EmptyQueue)
    }
}

/// Queue over a `Vec` used as the underlying storage
///
/// Mostly useful to cross-compare with the other queue implementation,
/// since this one is simpler: dequeue shifts the whole tail left.
#[derive(Default, Debug)]
pub struct VecQueue<T> {
    items: Vec<T>,
}

impl<T> VecQueue<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }
}

impl<T> Queue<T> for VecQueue<T> {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn enqueue(&mut self, item: T) {
        self.items.push(item);
    }

    fn dequeue(&mut self) -> Result<T, EmptyQueue> {
        if self.items.is_empty() {
            return Err(EmptyQueue);
        }
        Ok(self.items.remove(0))
    }

    fn peek(&self) -> Result<&T, EmptyQueue> {
        self.items.first().ok_or(EmptyQueue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_fifo<Q: Queue<i32>>(mut queue: Q) {
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), Err(EmptyQueue));
        assert_eq!(queue.peek(), Err(EmptyQueue));

        for i in 1..=4 {
            queue.enqueue(i);
        }
        assert!(!queue.is_empty());
        assert_eq!(queue.peek(), Ok(&1));

        for i in 1..=4 {
            assert_eq!(queue.dequeue(), Ok(i));
        }
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), Err(EmptyQueue));
    }

    #[test]
    fn list_queue_fifo() {
        check_fifo(ListQueue::new());
    }

    #[test]
    fn vec_queue_fifo() {
        check_fifo(VecQueue::new());
        check_fifo(VecQueue::with_capacity(16));
    }

    #[test]
    fn interleaved_enqueue_dequeue() {
        let mut queue = ListQueue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Ok(1));
        queue.enqueue(3);
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
        assert!(queue.is_empty());
    }

    #[test]
    fn empty_queue_error_displays() {
        assert_eq!(EmptyQueue.to_string(), "queue is empty");
    }
}
