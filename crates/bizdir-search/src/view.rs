//! Derived, read-only presentation state.

use crate::executor::ResultSnapshot;

/// What the results area should show. Driven solely by executor outcomes
/// and the projected result count; `Error` and `Empty`/`Populated` are
/// mutually exclusive and always follow a `Loading` state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// First paint, before any request has been issued.
    Initializing,
    /// A request is in flight, or its minimum display window has not yet
    /// elapsed, or the user is mid-keystroke (optimistic indicator).
    Loading,
    /// The last applied request failed (never a cancelled one).
    Error(String),
    /// The last request succeeded but the projection has zero records.
    Empty,
    /// The projection has at least one record.
    Populated,
}

/// Derives the view state from the executor snapshot, the projected result
/// count, and the synchronous keystroke-time searching indicator.
#[must_use]
pub fn derive_view_state(
    snapshot: &ResultSnapshot,
    projected_len: usize,
    searching: bool,
) -> ViewState {
    if snapshot.loading || searching {
        return ViewState::Loading;
    }
    if !snapshot.attempted {
        return ViewState::Initializing;
    }
    if let Some(message) = &snapshot.error {
        return ViewState::Error(message.clone());
    }
    if projected_len == 0 {
        ViewState::Empty
    } else {
        ViewState::Populated
    }
}
