//! Process-wide logical clock used to order orders by arrival.

use std::sync::atomic::{AtomicU64, Ordering};

static SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Returns the next value of the logical clock.
///
/// Values are strictly increasing across all threads in the process, so two
/// orders created one after the other always compare in creation order even
/// when the wall clock cannot tell them apart.
pub fn next_sequence() -> u64 {
    SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

/// Returns the value the next call to [`next_sequence`] would hand out.
pub fn current_sequence() -> u64 {
    SEQUENCE.load(Ordering::Relaxed)
}
