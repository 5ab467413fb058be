//! Binary min-heap over a caller-supplied comparator
//!
//! The heap stores its elements as a complete binary tree packed into a
//! `Vec`, ordered by a three-way comparator chosen at construction time.
//! The element that compares smallest is always at the root.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity |
//! |-----------------|------------|
//! | `push`          | O(log n)   |
//! | `pop`           | O(log n)   |
//! | `peek`          | O(1)       |
//! | `to_sorted_vec` | O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use collection_utils::heap::Heap;
//!
//! let mut heap = Heap::new(i32::cmp);
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.to_sorted_vec(), vec![2, 3]);
//! assert!(heap.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

/// Error returned by [`Heap::pop`] and [`Heap::peek`] on an empty heap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyHeap;

impl fmt::Display for EmptyHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "heap is empty")
    }
}

impl std::error::Error for EmptyHeap {}

/// A binary min-heap parameterized by element type and comparator
///
/// The comparator is any `Fn(&T, &T) -> Ordering` and must define a total
/// preorder over `T`: it has to be pure and consistent across calls for a
/// given pair of values, or the ordering guarantees below do not hold. Ties
/// are broken arbitrarily; no stability guarantee is made.
///
/// Invariant: for every non-root position `i`,
/// `comparator(data[parent(i)], data[i]) <= Equal`. The invariant holds
/// before and after every public operation.
///
/// The container is not internally synchronized; share it across threads
/// only under external locking or single-owner discipline.
///
/// # Example
///
/// ```rust
/// use std::cmp::Reverse;
/// use collection_utils::heap::Heap;
///
/// // A max-heap is a min-heap with the comparison flipped.
/// let mut heap = Heap::new(|a: &u32, b: &u32| Reverse(a).cmp(&Reverse(b)));
/// heap.push(1);
/// heap.push(3);
/// heap.push(2);
/// assert_eq!(heap.pop(), Ok(3));
/// ```
pub struct Heap<T, C> {
    comparator: C,
    data: Vec<T>,
}

/// An ephemeral view of one tree position.
///
/// Holds only the position; it is recomputed on demand and never outlives
/// the sift walk that created it, since the backing `Vec` may reallocate.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Node(usize);

fn left_child_index(index: usize) -> usize {
    2 * index + 1
}

fn right_child_index(index: usize) -> usize {
    left_child_index(index) + 1
}

/// Parent position of the node at `index`.
///
/// The root has no parent; calling this with `index == 0` is a bug in the
/// sift walks, so it panics rather than reporting a recoverable error.
fn parent_index(index: usize) -> usize {
    assert!(index > 0, "a node at index 0 has no parent");
    (index - 1) / 2
}

impl<T, C: Fn(&T, &T) -> Ordering> Heap<T, C> {
    /// Creates an empty heap ordered by `comparator`
    pub fn new(comparator: C) -> Self {
        Self {
            comparator,
            data: Vec::new(),
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts `value`, keeping the smallest element at the root
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(Node(self.data.len() - 1));
    }

    /// Returns the smallest element without removing it
    ///
    /// # Errors
    /// Returns [`EmptyHeap`] if the heap holds no elements.
    pub fn peek(&self) -> Result<&T, EmptyHeap> {
        self.data.first().ok_or(EmptyHeap)
    }

    /// Removes and returns the smallest element
    ///
    /// The last element is moved into the root slot and sifted down. When
    /// two children compare equal the walk descends into the left one; the
    /// choice is arbitrary but deterministic.
    ///
    /// # Errors
    /// Returns [`EmptyHeap`] if the heap holds no elements; the heap is left
    /// untouched.
    pub fn pop(&mut self) -> Result<T, EmptyHeap> {
        if self.data.is_empty() {
            return Err(EmptyHeap);
        }
        let value = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(Node(0));
        }
        Ok(value)
    }

    /// Drains the heap into a `Vec` sorted non-decreasing under the comparator
    ///
    /// Postcondition: the heap is empty. An already empty heap yields an
    /// empty `Vec`.
    pub fn to_sorted_vec(&mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Restores the invariant walking from `node` toward the root.
    ///
    /// Swaps `node` with its parent while the parent compares strictly
    /// greater. Each step decreases the depth, so the walk takes at most
    /// O(log n) swaps.
    fn sift_up(&mut self, mut node: Node) {
        while let Some(mut parent) = self.parent(node) {
            if (self.comparator)(self.value(parent), self.value(node)) == Ordering::Greater {
                self.swap_nodes(&mut parent, &mut node);
            } else {
                break;
            }
        }
    }

    /// Restores the invariant walking from `node` toward the leaves.
    ///
    /// At each step the candidate is the smaller-valued child (left on a
    /// tie); `node` is swapped with it while `node` compares strictly
    /// greater.
    fn sift_down(&mut self, mut node: Node) {
        let mut did_swap = true;
        while did_swap {
            did_swap = false;
            let Some(left) = self.left_child(node) else {
                break; // leaf, nothing below can violate the invariant
            };
            let mut candidate = left;
            if let Some(right) = self.right_child(node) {
                if (self.comparator)(self.value(right), self.value(left)) == Ordering::Less {
                    candidate = right;
                }
            }
            if (self.comparator)(self.value(node), self.value(candidate)) == Ordering::Greater {
                self.swap_nodes(&mut candidate, &mut node);
                did_swap = true;
            }
        }
    }

    fn parent(&self, node: Node) -> Option<Node> {
        (node.0 > 0).then(|| Node(parent_index(node.0)))
    }

    fn left_child(&self, node: Node) -> Option<Node> {
        let index = left_child_index(node.0);
        (index < self.data.len()).then_some(Node(index))
    }

    fn right_child(&self, node: Node) -> Option<Node> {
        let index = right_child_index(node.0);
        (index < self.data.len()).then_some(Node(index))
    }

    fn value(&self, node: Node) -> &T {
        &self.data[node.0]
    }

    /// Exchanges the elements at two positions and the positions the two
    /// views record, so each view keeps denoting the element it was
    /// tracking. Callers that continue walking after a swap rely on this.
    fn swap_nodes(&mut self, a: &mut Node, b: &mut Node) {
        self.data.swap(a.0, b.0);
        mem::swap(&mut a.0, &mut b.0);
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap").field("data", &self.data).finish()
    }
}
