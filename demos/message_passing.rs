//! High-throughput message passing demo
//!
//! Spawns a set of producer and consumer threads hammering one shared queue,
//! then verifies conservation (everything pushed came out exactly once) and
//! prints a throughput summary.

use conduitx::util::CachePadded;
use conduitx::{LockFreeQueue, MetricsCollector};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

const NUM_PRODUCERS: u64 = 4;
const NUM_CONSUMERS: u64 = 4;
const ITEMS_PER_PRODUCER: u64 = 2_500;
const TOTAL_ITEMS: u64 = NUM_PRODUCERS * ITEMS_PER_PRODUCER;

#[derive(Default)]
struct Stats {
    items_pushed: AtomicU64,
    successful_pops: AtomicU64,
    empty_pops: AtomicU64,
    popped_values: CachePadded<Mutex<HashSet<u64>>>,
}

impl Stats {
    fn record_pop(&self, value: u64) {
        self.popped_values.lock().insert(value);
        self.successful_pops.fetch_add(1, Ordering::Relaxed);
    }

    fn print_summary(&self) {
        println!("\n=== Results ===");
        println!("Items pushed:        {}", self.items_pushed.load(Ordering::Relaxed));
        println!("Successful pops:     {}", self.successful_pops.load(Ordering::Relaxed));
        println!("Empty pops:          {}", self.empty_pops.load(Ordering::Relaxed));
        println!("Unique values seen:  {}", self.popped_values.lock().len());
    }
}

fn main() {
    println!("ConduitX Message Passing Demo");
    println!("=============================");
    println!(
        "{} producers x {} items, {} consumers\n",
        NUM_PRODUCERS, ITEMS_PER_PRODUCER, NUM_CONSUMERS
    );

    let queue = Arc::new(LockFreeQueue::new());
    let stats = Arc::new(Stats::default());
    let consumed = Arc::new(AtomicU64::new(0));
    let start_time = Instant::now();

    let mut handles = Vec::new();

    for p in 0..NUM_PRODUCERS {
        let queue = Arc::clone(&queue);
        let stats = Arc::clone(&stats);
        handles.push(thread::spawn(move || {
            let start = p * ITEMS_PER_PRODUCER;
            for i in 0..ITEMS_PER_PRODUCER {
                queue.push(start + i).unwrap();
                stats.items_pushed.fetch_add(1, Ordering::Relaxed);
            }
            println!("producer {p} finished");
        }));
    }

    for c in 0..NUM_CONSUMERS {
        let queue = Arc::clone(&queue);
        let stats = Arc::clone(&stats);
        let consumed = Arc::clone(&consumed);
        handles.push(thread::spawn(move || {
            let mut local = 0u64;
            while consumed.load(Ordering::Relaxed) < TOTAL_ITEMS {
                match queue.pop() {
                    Some(value) => {
                        stats.record_pop(value);
                        consumed.fetch_add(1, Ordering::Relaxed);
                        local += 1;
                    }
                    None => {
                        stats.empty_pops.fetch_add(1, Ordering::Relaxed);
                        thread::yield_now();
                    }
                }
            }
            println!("consumer {c} finished, consumed {local} items");
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let elapsed = start_time.elapsed();
    stats.print_summary();

    assert_eq!(stats.successful_pops.load(Ordering::Relaxed), TOTAL_ITEMS);
    assert_eq!(stats.popped_values.lock().len() as u64, TOTAL_ITEMS);

    let metrics = queue.metrics();
    println!("\nQueue metrics:");
    println!("  contention rate: {:.2}%", metrics.contention_rate());
    println!("  avg op time:     {:?}", metrics.avg_operation_time());
    println!("  max op time:     {:?}", metrics.max_operation_time());

    println!("\nCompleted in {elapsed:?}");
    println!(
        "Throughput: {:.0} transfers/second",
        TOTAL_ITEMS as f64 / elapsed.as_secs_f64()
    );
}
