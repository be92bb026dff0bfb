//! Supersede handles for in-flight work.
//!
//! Generation results and debounced contrast evaluations share one rule: a
//! computation superseded by a newer request must never land. Both paths
//! poll a [`CancellationToken`] immediately before applying their result.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// The control side. Dropping the source does not cancel its tokens;
/// cancellation is always an explicit act of the superseding request.
#[derive(Debug, Default)]
pub struct CancellationSource {
    cancelled: Arc<AtomicBool>,
}

/// The observing side, cheap to clone and hand to pending work.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> CancellationToken {
        CancellationToken {
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    /// Signal that the associated work has been superseded or aborted.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl CancellationToken {
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
