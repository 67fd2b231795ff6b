// src/portal/live_views.rs
//! Cosmetic live view counters on deal pages.
//!
//! One background task per deal adds a random amount every tick. The tasks
//! live as long as the owning `LiveViews` and are aborted when it drops.

use rand::Rng;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Exclusive upper bound of a single tick's increment
const MAX_TICK_INCREMENT: u64 = 100;

pub struct LiveViews {
    counters: HashMap<String, Arc<AtomicU64>>,
    tasks: Vec<JoinHandle<()>>,
}

impl LiveViews {
    /// Starts a counter per `(id, initial views)` pair. Needs a Tokio runtime.
    pub fn start<I>(seeds: I, tick: Duration) -> Self
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let mut counters = HashMap::new();
        let mut tasks = Vec::new();

        for (id, initial) in seeds {
            let counter = Arc::new(AtomicU64::new(initial));
            let task_counter = counter.clone();

            tasks.push(tokio::spawn(async move {
                let mut interval = tokio::time::interval(tick);
                // First tick completes immediately
                interval.tick().await;
                loop {
                    interval.tick().await;
                    let bump = rand::thread_rng().gen_range(0..MAX_TICK_INCREMENT);
                    task_counter.fetch_add(bump, Ordering::Relaxed);
                }
            }));

            counters.insert(id, counter);
        }

        debug!(counters = counters.len(), tick_secs = tick.as_secs(), "Live view counters started");

        Self { counters, tasks }
    }

    pub fn current(&self, id: &str) -> Option<u64> {
        self.counters.get(id).map(|c| c.load(Ordering::Relaxed))
    }
}

impl Drop for LiveViews {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}
