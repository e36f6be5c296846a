//! Per-view fetched-data lifecycle.
//!
//! Every view owns its data exclusively and re-fetches on mount, so the
//! lifecycle is always the same three states. A failed fetch leaves the view
//! in `Failed` with a message instead of spinning forever.

/// View data fetched from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch<T> {
    /// Request in flight; render a loading placeholder.
    Loading,
    /// Data arrived.
    Ready(T),
    /// Request failed; render the message and offer a retry.
    Failed(String),
}

impl<T> Default for Fetch<T> {
    fn default() -> Self {
        Fetch::Loading
    }
}

impl<T> Fetch<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Fetch::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Fetch::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Fetch::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Fetch::Failed(message) => Some(message),
            _ => None,
        }
    }
}
