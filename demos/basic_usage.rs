//! Basic usage of the ConduitX queue
//!
//! Walks through the facade: push/pop, the fallible and timed variants,
//! batch operations, and the metrics snapshot.

use conduitx::{Error, LockFreeQueue, MetricsCollector};
use std::time::Duration;

fn main() {
    println!("ConduitX Basic Usage");
    println!("====================\n");

    let queue = LockFreeQueue::new();

    // Plain push and pop.
    queue.push("alpha").unwrap();
    queue.push("beta").unwrap();
    println!("len after two pushes: {}", queue.len());

    println!("pop -> {:?}", queue.pop());
    println!("pop -> {:?}", queue.pop());
    println!("pop on empty -> {:?}", queue.pop());

    // Fallible pop for callers that thread errors.
    match queue.try_pop() {
        Ok(value) => println!("try_pop -> {value}"),
        Err(Error::Empty) => println!("try_pop -> queue was observed empty"),
        Err(e) => println!("try_pop -> {e}"),
    }

    // Timed pop: the queue never blocks, this layers retry-with-backoff on top.
    let result = queue.pop_with_timeout(Duration::from_millis(5));
    println!("pop_with_timeout on empty -> {result:?}");

    // Batch operations.
    let pushed = queue.push_batch(["one", "two", "three"]);
    println!("\npush_batch pushed {pushed} values");
    println!("pop_batch(2) -> {:?}", queue.pop_batch(2));
    println!("pop_batch(2) -> {:?}", queue.pop_batch(2));

    // Operation metrics.
    let metrics = queue.metrics();
    println!("\nMetrics:");
    println!("  pushes:      {}", metrics.pushes);
    println!("  pops:        {}", metrics.pops);
    println!("  empty pops:  {}", metrics.empty_pops);
    println!("  pop hit rate: {:.1}%", metrics.pop_hit_rate());
}
