//! Property-based tests for the MPMC queue using proptest
//!
//! These verify the queue's conservation and ordering invariants across
//! generated operation sequences and payload shapes.

use crate::queue::mpmc::LockFreeQueue;
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::vec::Vec;

mod single_thread_properties {
    use super::*;

    proptest! {
        #[test]
        fn test_fifo_ordering(values in prop::collection::vec(any::<i32>(), 1..200)) {
            let queue = LockFreeQueue::new();

            for &value in &values {
                prop_assert!(queue.push(value).is_ok());
            }
            for &expected in &values {
                prop_assert_eq!(queue.pop(), Some(expected));
            }
            prop_assert_eq!(queue.pop(), None);
        }

        #[test]
        fn test_conservation(
            operations in prop::collection::vec(prop::bool::weighted(0.7), 1..200)
        ) {
            let queue = LockFreeQueue::new();
            let mut expected_len = 0usize;
            let mut counter = 0i64;

            for &should_push in &operations {
                if should_push {
                    queue.push(counter).unwrap();
                    expected_len += 1;
                    counter += 1;
                } else if queue.pop().is_some() {
                    expected_len -= 1;
                }

                // Single-threaded: the advisory counter is exact.
                prop_assert_eq!(queue.len(), expected_len);
                prop_assert_eq!(queue.is_empty(), expected_len == 0);
            }

            let mut drained = 0usize;
            while queue.pop().is_some() {
                drained += 1;
            }
            prop_assert_eq!(drained, expected_len);
        }

        #[test]
        fn test_no_memory_leaks(
            total in 1usize..100,
            pops_before_drop in 0usize..100
        ) {
            struct DropTracker {
                counter: Arc<AtomicUsize>,
            }

            impl Drop for DropTracker {
                fn drop(&mut self) {
                    self.counter.fetch_add(1, Ordering::Relaxed);
                }
            }

            let drops = Arc::new(AtomicUsize::new(0));
            let queue = LockFreeQueue::new();

            for _ in 0..total {
                queue.push(DropTracker { counter: Arc::clone(&drops) }).unwrap();
            }
            for _ in 0..pops_before_drop.min(total) {
                drop(queue.pop());
            }
            drop(queue);

            prop_assert_eq!(drops.load(Ordering::Relaxed), total);
        }
    }
}

mod concurrent_properties {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_unique_delivery(
            num_producers in 2usize..4,
            items_per_producer in 10usize..50
        ) {
            let queue = Arc::new(LockFreeQueue::new());
            let total = num_producers * items_per_producer;

            let mut handles = Vec::new();
            for producer_id in 0..num_producers {
                let queue = Arc::clone(&queue);
                handles.push(thread::spawn(move || {
                    for i in 0..items_per_producer {
                        queue.push(producer_id * items_per_producer + i).unwrap();
                    }
                }));
            }
            for handle in handles {
                handle.join().unwrap();
            }

            let mut received = Vec::with_capacity(total);
            while let Some(value) = queue.pop() {
                received.push(value);
            }

            received.sort_unstable();
            prop_assert_eq!(received, (0..total).collect::<Vec<_>>());
        }

        #[test]
        fn test_concurrent_pop_conservation(
            num_consumers in 2usize..4,
            total in 20usize..100
        ) {
            let queue = Arc::new(LockFreeQueue::new());
            for i in 0..total {
                queue.push(i).unwrap();
            }

            let mut handles = Vec::new();
            for _ in 0..num_consumers {
                let queue = Arc::clone(&queue);
                handles.push(thread::spawn(move || {
                    let mut received = Vec::new();
                    while let Some(value) = queue.pop() {
                        received.push(value);
                    }
                    received
                }));
            }

            let mut all_received = Vec::with_capacity(total);
            for handle in handles {
                all_received.extend(handle.join().unwrap());
            }

            all_received.sort_unstable();
            prop_assert_eq!(all_received, (0..total).collect::<Vec<_>>());
            prop_assert_eq!(queue.pop(), None);
        }
    }
}
