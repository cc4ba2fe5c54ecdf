use crate::engine::EngineError;

/// Display marker for an empty result set.
pub const NO_ENTRIES: &str = "No entries";

/// UI events the presentation surface forwards to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The query text changed; carries the full new text.
    QueryChanged(String),
    /// The query input gained UI focus.
    QueryFocusGained,
    /// The query input lost UI focus (e.g. tab traversal to the cancel
    /// control).
    QueryFocusLost,
    /// Enter pressed in the query input: accept and close.
    Submitted,
    /// The cancel control was pressed or the OS closed the window.
    CloseRequested,
    /// The dialog was moved; screen coordinates of the new position.
    Moved { x: i32, y: i32 },
}

/// Result-list directive — exactly one of four states, so conflicting
/// show/clear instructions are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsAction {
    /// Leave the list as-is.
    Keep,
    /// Replace the list with these display strings.
    Show(Vec<String>),
    /// Replace the list with the "No entries" marker.
    ShowNoEntries,
    /// Clear the list.
    Clear,
}

/// Why a session reached its terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Enter in the query input.
    Accepted,
    /// Cancel control or OS window close.
    Cancelled,
    /// A newer session replaced this one.
    Evicted,
    /// The engine rejected a state transition; the session tore itself
    /// down rather than leave the translator indeterminate.
    Failed,
}

/// Deferred dictionary lookup handed back to the caller.
///
/// `seq` is the per-session monotonic edit counter; results delivered for
/// an older counter are discarded, so a slow lookup can never overwrite a
/// newer edit's results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub text: String,
    pub seq: u64,
}

/// Response from `handle_event`, telling the surface what to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventResponse {
    pub results: ResultsAction,
    /// Set when this event closed the session.
    pub closed: Option<CloseReason>,
    /// Lookup to run out-of-band (deferred mode only).
    pub query_request: Option<QueryRequest>,
}

impl EventResponse {
    pub(super) fn none() -> Self {
        Self {
            results: ResultsAction::Keep,
            closed: None,
            query_request: None,
        }
    }

    pub(super) fn with_results(results: ResultsAction) -> Self {
        Self {
            results,
            ..Self::none()
        }
    }
}

/// Session-boundary errors. The accessor and geometry boundaries never
/// produce one; only the engine boundary is fatal.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}
