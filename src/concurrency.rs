//! Cooperative cancellation for long-running comparisons
//!
//! Trees are immutable once built, so any number of merges may read the same
//! base tree concurrently without locking. The only shared mutable state is
//! the cancellation flag below, which a caller (for example a UI thread) sets
//! while a merge runs elsewhere.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag
///
/// Cloning yields another handle to the same flag. The merge engine polls it
/// between sibling steps and abandons its partial result once it is set.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
