//! Small container utilities
//!
//! The centerpiece is [`heap::Heap`], an array-backed binary min-heap ordered
//! by a caller-supplied comparator. Around it sit independent pieces of
//! plumbing that share no data with the heap:
//!
//! - [`linked_list`]: singly linked lists, head-only and head+tail
//! - [`queue`]: a FIFO trait with linked-list and `Vec` backed adapters
//! - [`aggregate`]: collects many errors into one error value
//!
//! Everything is single-threaded and synchronous; callers that share these
//! containers across threads must synchronize externally.
//!
//! # Example
//!
//! ```rust
//! use collection_utils::Heap;
//!
//! let mut heap = Heap::new(i32::cmp);
//! for value in [7, 4, 9, 5] {
//!     heap.push(value);
//! }
//! assert_eq!(heap.to_sorted_vec(), vec![4, 5, 7, 9]);
//! ```

pub mod aggregate;
pub mod heap;
pub mod linked_list;
pub mod queue;

// Re-export the core types for convenience
pub use heap::{EmptyHeap, Heap};
pub use queue::Queue;
