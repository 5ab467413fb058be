//! Property-based tests using proptest
//!
//! These tests generate random inputs and operation sequences and verify
//! that the heap's ordering guarantees always hold against a plain
//! sort-based oracle.

use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::HashMap;

use collection_utils::heap::Heap;

fn int_heap() -> Heap<i32, fn(&i32, &i32) -> Ordering> {
    Heap::new(i32::cmp)
}

fn counts(values: &[i32]) -> HashMap<i32, usize> {
    let mut map = HashMap::new();
    for &value in values {
        *map.entry(value).or_insert(0) += 1;
    }
    map
}

proptest! {
    /// Popping everything yields a non-decreasing sequence.
    #[test]
    fn pop_order_is_non_decreasing(values in prop::collection::vec(-100i32..100, 1..200)) {
        let mut heap = int_heap();
        for &value in &values {
            heap.push(value);
        }

        let mut last = i32::MIN;
        while let Ok(value) = heap.pop() {
            prop_assert!(value >= last, "popped {} after {}", value, last);
            last = value;
        }
        prop_assert!(heap.is_empty());
    }

    /// Sorted extraction preserves length and multiset membership and
    /// leaves the heap empty.
    #[test]
    fn sorted_extraction_round_trip(values in prop::collection::vec(-1000i32..1000, 0..300)) {
        let mut heap = int_heap();
        for &value in &values {
            heap.push(value);
        }

        let received = heap.to_sorted_vec();
        prop_assert_eq!(heap.len(), 0);
        prop_assert_eq!(received.len(), values.len());
        prop_assert_eq!(counts(&received), counts(&values));
        prop_assert!(received.windows(2).all(|w| w[0] <= w[1]));
    }

    /// Interleaved pushes and pops: every pop must return the minimum of
    /// the pushed-but-not-yet-popped elements, checked against a reference
    /// full-sort oracle.
    #[test]
    fn interleaved_ops_match_sort_oracle(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        let mut heap = int_heap();
        let mut oracle: Vec<i32> = Vec::new();

        for (should_pop, value) in ops {
            if should_pop && !oracle.is_empty() {
                let popped = heap.pop().unwrap();
                let min_pos = oracle
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, v)| **v)
                    .map(|(i, _)| i)
                    .unwrap();
                prop_assert_eq!(popped, oracle.remove(min_pos));
            } else {
                heap.push(value);
                oracle.push(value);
            }

            prop_assert_eq!(heap.len(), oracle.len());
            if let Ok(&min) = heap.peek() {
                prop_assert_eq!(Some(&min), oracle.iter().min());
            } else {
                prop_assert!(oracle.is_empty());
            }
        }

        let mut remaining = oracle;
        remaining.sort();
        prop_assert_eq!(heap.to_sorted_vec(), remaining);
    }

    /// len() tracks pushes minus pops exactly.
    #[test]
    fn len_tracks_operations(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        let mut heap = int_heap();
        let mut expected_len = 0usize;

        for (should_pop, value) in ops {
            if should_pop && !heap.is_empty() {
                heap.pop().unwrap();
                expected_len -= 1;
            } else {
                heap.push(value);
                expected_len += 1;
            }
            prop_assert_eq!(heap.len(), expected_len);
            prop_assert_eq!(heap.is_empty(), expected_len == 0);
        }
    }

    /// A reversed comparator drains in non-increasing order.
    #[test]
    fn reversed_comparator_drains_descending(values in prop::collection::vec(-100i32..100, 0..100)) {
        let mut heap = Heap::new(|a: &i32, b: &i32| b.cmp(a));
        for &value in &values {
            heap.push(value);
        }
        let received = heap.to_sorted_vec();
        prop_assert!(received.windows(2).all(|w| w[0] >= w[1]));
        prop_assert_eq!(received.len(), values.len());
    }
}
