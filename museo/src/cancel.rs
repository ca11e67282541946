use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Cooperative cancellation signal for in-flight catalog work.
///
/// Handles are cheap to clone and safe to trigger from another task. Two
/// things happen on `cancel()`: the flag aborts a running multi-page
/// accumulation at its next page boundary, and the epoch counter advances,
/// which invalidates any page fetch whose response has not been committed
/// yet. The flag is rearmed when the next accumulation starts, so a handle
/// always refers to in-flight work; the epoch only ever moves forward.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
    epoch: Arc<AtomicU64>,
}

impl CancelHandle {
    /// Request that in-flight work stop: accumulation halts at the next
    /// page boundary and an uncommitted page fetch is discarded.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }

    /// Returns true once cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub(crate) fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    pub(crate) fn rearm(&self) {
        self.cancelled.store(false, Ordering::SeqCst);
    }
}
