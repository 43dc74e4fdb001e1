//! Queue implementations for ConduitX
//!
//! ## Available Queues
//!
//! - [`LockFreeQueue`]: unbounded multi-producer, multi-consumer FIFO queue
//!
//! ## Design
//!
//! - **Lock-free**: all operations are non-blocking CAS loops
//! - **Unbounded**: `push` never fails and never waits for capacity
//! - **Split reference counting**: nodes are reclaimed without epochs or
//!   hazard pointers; see the [`mpmc`] module docs for the protocol
//! - **Cache optimization**: the `head` and `tail` slots are cache-line padded
//!   to prevent false sharing between producers and consumers
//!
//! ## Examples
//!
//! ```rust
//! use conduitx::queue::LockFreeQueue;
//!
//! let queue = LockFreeQueue::new();
//! queue.push(1)?;
//! assert_eq!(queue.pop(), Some(1));
//! # Ok::<(), conduitx::Error>(())
//! ```

pub mod mpmc;

#[cfg(test)]
mod proptests;

// Re-export the main queue type
pub use mpmc::LockFreeQueue;
