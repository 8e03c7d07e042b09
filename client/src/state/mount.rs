//! Mount-lifetime cancellation for view fetches.
//!
//! A view creates one `MountToken` on mount and cancels it from
//! `on_cleanup`. The fetch task checks the token after it settles and drops
//! the outcome if the view is gone.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared cancellation flag bound to one view mount.
#[derive(Clone, Debug, Default)]
pub struct MountToken {
    cancelled: Arc<AtomicBool>,
}

impl MountToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the owning view as unmounted. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Run `apply` with the outcome unless the mount was cancelled first.
    ///
    /// Returns whether `apply` ran.
    pub fn deliver<O>(&self, outcome: O, apply: impl FnOnce(O)) -> bool {
        if self.is_cancelled() {
            return false;
        }
        apply(outcome);
        true
    }
}
