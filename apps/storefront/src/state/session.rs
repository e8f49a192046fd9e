//! # Filter Session
//!
//! Holds the `FilterState` of one mounted view.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Filter Session Lifecycle                             │
//! │                                                                         │
//! │  View mounts ──────────► FilterSession::new()  (defaults)              │
//! │                                                                         │
//! │  Pick category ────────► set_facet_a() ─────────► state.set_facet_a    │
//! │  Pick type ────────────► set_facet_b() ─────────► state.set_facet_b    │
//! │  Click quick filter ───► set_exclusive_toggle() ► state.set_exclusive… │
//! │  Type in search ───────► set_search_text() ─────► state.set_search_text│
//! │                                                                         │
//! │  Render ───────────────► get_results() ─────────► (read only)          │
//! │                                                                         │
//! │  View unmounts ────────► session dropped (nothing persisted)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use palengke_core::FilterState;

use crate::error::ApiError;

/// Shared handle to the view's filter state.
///
/// ## Thread Safety
/// `Arc<Mutex<FilterState>>`: commands may be invoked from any thread,
/// and each transition replaces the whole state under the lock.
#[derive(Debug, Clone, Default)]
pub struct FilterSession {
    state: Arc<Mutex<FilterState>>,
}

impl FilterSession {
    /// Creates a session with the default filter state.
    pub fn new() -> Self {
        FilterSession::default()
    }

    /// Executes a function with read access to the state.
    pub fn with_state<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&FilterState) -> R,
    {
        let state = self
            .state
            .lock()
            .map_err(|_| ApiError::internal("Filter state lock poisoned"))?;
        Ok(f(&state))
    }

    /// Replaces the state with `f(current)` and returns a copy of the result.
    ///
    /// ## Usage
    /// ```rust
    /// use palengke_storefront::state::FilterSession;
    ///
    /// let session = FilterSession::new();
    /// let next = session.update(|s| s.set_search_text("tuna")).unwrap();
    /// assert_eq!(next.search_text(), "tuna");
    /// ```
    pub fn update<F>(&self, f: F) -> Result<FilterState, ApiError>
    where
        F: FnOnce(FilterState) -> FilterState,
    {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ApiError::internal("Filter state lock poisoned"))?;
        let next = f(std::mem::take(&mut *state));
        *state = next.clone();
        Ok(next)
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> Result<FilterState, ApiError> {
        self.with_state(FilterState::clone)
    }
}
