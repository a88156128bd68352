//! Small per-thread identifiers for display and records.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_ID: u64 = NEXT_ID.fetch_add(1, Ordering::Relaxed);
}

/// Id of the calling thread, assigned on first use, unique for the process
/// lifetime and stable for the thread's lifetime.
pub fn current() -> u64 {
    THREAD_ID.with(|id| *id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_stable_within_thread() {
        assert_eq!(current(), current());
    }

    #[test]
    fn test_unique_across_threads() {
        let ids: HashSet<u64> = (0..16)
            .map(|_| thread::spawn(current))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect();
        assert_eq!(ids.len(), 16);
        assert!(!ids.contains(&0));
    }
}
