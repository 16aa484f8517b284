//! Stress helpers for concurrent submissions.
//!
//! These verify that concurrent writers to the two slots of one request
//! never lose each other's payload.

use bindiff_core::DiffService;
use bindiff_storage::Slot;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Result of a stress test run.
#[derive(Debug, Clone)]
pub struct StressTestResult {
    /// Total operations performed.
    pub total_ops: usize,
    /// Successful operations.
    pub successful_ops: usize,
    /// Failed operations.
    pub failed_ops: usize,
    /// Total duration.
    pub duration: Duration,
}

impl StressTestResult {
    /// Creates a new result.
    pub fn new(successful: usize, failed: usize, duration: Duration) -> Self {
        Self {
            total_ops: successful + failed,
            successful_ops: successful,
            failed_ops: failed,
            duration,
        }
    }
}

/// Configuration for stress tests.
#[derive(Debug, Clone)]
pub struct StressConfig {
    /// Number of request ids written.
    pub requests: usize,
    /// Payload size in bytes.
    pub payload_size: usize,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            requests: 200,
            payload_size: 256,
        }
    }
}

/// Payload written to `slot` of request `index`.
pub fn stress_payload(index: usize, slot: Slot, size: usize) -> String {
    let fill = match slot {
        Slot::Left => 'L',
        Slot::Right => 'R',
    };
    let mut payload = format!("{index}:");
    while payload.len() < size {
        payload.push(fill);
    }
    payload
}

/// Writes left and right payloads of every request from two threads at
/// once, one thread per slot.
///
/// Every write that returns `Ok` counts as successful. Use
/// [`verify_slot_pairs`] afterwards to check nothing was lost.
pub fn stress_concurrent_slots(service: &DiffService, config: &StressConfig) -> StressTestResult {
    let successful = Arc::new(AtomicUsize::new(0));
    let failed = Arc::new(AtomicUsize::new(0));
    let start = Instant::now();

    let handles: Vec<_> = Slot::ALL
        .into_iter()
        .map(|slot| {
            let service = service.clone();
            let successful = Arc::clone(&successful);
            let failed = Arc::clone(&failed);
            let config = config.clone();

            thread::spawn(move || {
                for i in 0..config.requests {
                    let payload = stress_payload(i, slot, config.payload_size);
                    match service.submit(&format!("stress-{i}"), slot, &payload) {
                        Ok(()) => {
                            successful.fetch_add(1, Ordering::Relaxed);
                        }
                        Err(_) => {
                            failed.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    StressTestResult::new(
        successful.load(Ordering::Relaxed),
        failed.load(Ordering::Relaxed),
        start.elapsed(),
    )
}

/// Returns the ids whose stored pair differs from what
/// [`stress_concurrent_slots`] wrote.
pub fn verify_slot_pairs(service: &DiffService, config: &StressConfig) -> Vec<String> {
    (0..config.requests)
        .filter_map(|i| {
            let id = format!("stress-{i}");
            let expected = (
                stress_payload(i, Slot::Left, config.payload_size),
                stress_payload(i, Slot::Right, config.payload_size),
            );
            match service.store().get(&id) {
                Ok(pair) if pair == expected => None,
                _ => Some(id),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::TestStore;

    fn small_config() -> StressConfig {
        StressConfig {
            requests: 50,
            payload_size: 32,
        }
    }

    #[test]
    fn test_concurrent_slots_memory() {
        let store = TestStore::memory();
        let service = store.service();
        let config = small_config();

        let result = stress_concurrent_slots(&service, &config);
        assert_eq!(result.total_ops, 100);
        assert_eq!(result.failed_ops, 0);
        assert!(verify_slot_pairs(&service, &config).is_empty());
    }

    #[test]
    fn test_concurrent_slots_file() {
        let store = TestStore::file();
        let service = store.service();
        let config = small_config();

        let result = stress_concurrent_slots(&service, &config);
        assert_eq!(result.failed_ops, 0);
        assert!(verify_slot_pairs(&service, &config).is_empty());
    }

    #[test]
    fn test_payload_shape() {
        let payload = stress_payload(7, Slot::Right, 8);
        assert_eq!(payload, "7:RRRRRR");
    }
}
