//! Per-mount fetch lifecycle state shared by both collection views.
//!
//! DESIGN
//! ======
//! One `ViewState` lives for exactly one view mount. It starts in `Loading`
//! and settles once; both settled variants are terminal. Going back to
//! `Loading` requires a remount, which builds a fresh state.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// Lifecycle of a single fetch activation.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    /// Fetch started, not yet settled.
    Loading,
    /// Fetch succeeded; the collection may be empty.
    Ready(Vec<T>),
    /// Fetch failed with a user-facing message.
    Failed(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> ViewState<T> {
    /// Apply the outcome of the fetch.
    ///
    /// Returns `false` and leaves the state untouched if it has already
    /// settled.
    pub fn settle(&mut self, outcome: Result<Vec<T>, String>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match outcome {
            Ok(data) => Self::Ready(data),
            Err(message) => Self::Failed(message),
        };
        true
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Resolved rows; empty while loading or after a failure.
    #[must_use]
    pub fn data(&self) -> &[T] {
        match self {
            Self::Ready(data) => data,
            Self::Loading | Self::Failed(_) => &[],
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}
