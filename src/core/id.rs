//! Opaque unique identifier generation for students and courses

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generate a new opaque id.
///
/// Millisecond timestamp plus a process-local sequence number, so ids created
/// within the same millisecond stay distinct.
#[must_use]
pub fn next_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{millis}-{seq}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let ids: Vec<String> = (0..100).map(|_| next_id()).collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id), "duplicate id generated: {id}");
        }
    }

    #[test]
    fn test_id_is_non_empty() {
        assert!(!next_id().is_empty());
    }
}
