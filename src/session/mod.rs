//! Lookup session lifecycle and engine-state arbitration.
//!
//! A `LookupSession` lets the lookup overlay interrogate a live engine
//! without corrupting in-progress dictation: the dictation state is
//! snapshotted at open, swapped out for a pre-built scratch state while
//! the query input has focus, and restored on blur and on close. Closing
//! at any point — cancel, accept, OS close, eviction by a newer session —
//! leaves the engine exactly as it was at open and hands OS focus back to
//! the window the user was dictating into.

mod query;
mod registry;
pub(crate) mod types;

#[cfg(test)]
mod tests;

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::config::{GeometryStore, OverlayGeometry};
use crate::engine::{ReverseDictionary, TranslationState, TranslationStateController};
use crate::window::{ForegroundWindowAccessor, WindowHandle};

pub use registry::ActiveSessionRegistry;
pub use types::{
    CloseReason, EventResponse, QueryRequest, ResultsAction, SessionError, SurfaceEvent,
    NO_ENTRIES,
};

/// Which engine state is installed while the session is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    /// Query input focused: the scratch state is installed, so engine-side
    /// effects of typing into the lookup field cannot pollute dictation.
    Scratch,
    /// Some other control focused: the real dictation state is installed.
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Active(Focus),
    Closed(CloseReason),
}

/// The active overlay instance. At most one is alive per registry; opening
/// a new one evicts the old through its normal close path.
pub struct LookupSession {
    id: u64,
    controller: Arc<dyn TranslationStateController>,
    dictionary: Arc<dyn ReverseDictionary>,
    accessor: Arc<dyn ForegroundWindowAccessor>,
    registry: Arc<ActiveSessionRegistry>,
    geometry: Option<Arc<dyn GeometryStore>>,

    /// Engine state at open; restored on blur and on close.
    previous_state: TranslationState,
    /// Clean state installed while the query input has focus.
    scratch_state: TranslationState,
    /// OS-focused window at open; focus is handed back to it on close.
    captured_window: Option<WindowHandle>,

    phase: Phase,

    /// When true, edits return a `QueryRequest` instead of querying
    /// synchronously; see `receive_results`.
    defer_queries: bool,
    query_seq: u64,
}

impl LookupSession {
    /// Open a lookup session, evicting any session already active.
    ///
    /// Ordering matters here. The dictation snapshot, the scratch state,
    /// and the foreground window are all captured *before* the predecessor
    /// is evicted: the predecessor's close restores its own captured
    /// window, which may briefly change focus, but ours is already saved.
    /// The scratch state is pre-built with a clear/snapshot/restore dance
    /// so the engine is left holding the dictation state until the query
    /// input actually gains focus.
    ///
    /// The caller should focus the query input once this returns; the
    /// hosting app has already been raised.
    pub fn open(
        controller: Arc<dyn TranslationStateController>,
        dictionary: Arc<dyn ReverseDictionary>,
        accessor: Arc<dyn ForegroundWindowAccessor>,
        registry: Arc<ActiveSessionRegistry>,
        geometry: Option<Arc<dyn GeometryStore>>,
    ) -> Result<Arc<Mutex<LookupSession>>, SessionError> {
        let previous_state = controller.state()?;
        let scratch_state = controller.clear_state()?;
        controller.set_state(previous_state.clone())?;

        let captured_window = accessor.foreground_window();

        let id = registry.allocate_id();
        let session = Arc::new(Mutex::new(LookupSession {
            id,
            controller,
            dictionary,
            accessor: Arc::clone(&accessor),
            registry: Arc::clone(&registry),
            geometry,
            previous_state,
            scratch_state,
            captured_window,
            phase: Phase::Active(Focus::Idle),
            defer_queries: false,
            query_seq: 0,
        }));

        // Only now close the predecessor; its restoration runs with its
        // own captured values.
        if let Some(evicted) = registry.replace_active(id, Arc::clone(&session)) {
            if let Ok(mut prior) = evicted.lock() {
                if let Err(e) = prior.close(CloseReason::Evicted) {
                    debug!(id = prior.id, error = %e, "evicted session close failed");
                }
            }
        }

        accessor.bring_own_app_to_front();
        debug!(id, "lookup session opened");
        Ok(session)
    }

    /// Feed one surface event through the state machine.
    ///
    /// Events arriving after the session closed are ignored — the surface
    /// may still deliver a blur or a move while tearing down.
    pub fn handle_event(&mut self, event: SurfaceEvent) -> Result<EventResponse, SessionError> {
        let Phase::Active(focus) = self.phase else {
            return Ok(EventResponse::none());
        };

        match event {
            SurfaceEvent::QueryFocusGained => {
                if focus != Focus::Scratch {
                    self.install(self.scratch_state.clone(), Focus::Scratch)?;
                }
                Ok(EventResponse::none())
            }
            SurfaceEvent::QueryFocusLost => {
                if focus != Focus::Idle {
                    self.install(self.previous_state.clone(), Focus::Idle)?;
                }
                Ok(EventResponse::none())
            }
            SurfaceEvent::QueryChanged(text) => Ok(self.query_edited(&text)),
            SurfaceEvent::Submitted => self.close_with(CloseReason::Accepted),
            SurfaceEvent::CloseRequested => self.close_with(CloseReason::Cancelled),
            SurfaceEvent::Moved { x, y } => {
                if let Some(geometry) = &self.geometry {
                    geometry.set_geometry(OverlayGeometry {
                        frame_x: x,
                        frame_y: y,
                    });
                }
                Ok(EventResponse::none())
            }
        }
    }

    /// Close the session, restoring engine and OS focus state.
    ///
    /// Idempotent: the first close wins and later calls are no-ops. Every
    /// close path runs this same sequence — restore the dictation state
    /// (a no-op if blur already restored it), best-effort focus hand-back,
    /// deregister. Cancellation is unconditional: an engine failure during
    /// restore is surfaced only after the remaining steps have run.
    pub fn close(&mut self, reason: CloseReason) -> Result<(), SessionError> {
        if matches!(self.phase, Phase::Closed(_)) {
            return Ok(());
        }
        self.phase = Phase::Closed(reason);

        let restored = self.controller.set_state(self.previous_state.clone());

        self.accessor.restore_foreground(self.captured_window.as_ref());
        self.registry.remove(self.id);
        debug!(id = self.id, ?reason, "lookup session closed");

        restored.map_err(Into::into)
    }

    /// Edits return a `QueryRequest` instead of querying synchronously.
    pub fn set_defer_queries(&mut self, enabled: bool) {
        self.defer_queries = enabled;
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.phase, Phase::Closed(_))
    }

    pub fn close_reason(&self) -> Option<CloseReason> {
        match self.phase {
            Phase::Closed(reason) => Some(reason),
            Phase::Active(_) => None,
        }
    }

    /// Install an engine state for a focus transition. A rejected install
    /// is fatal: the session tears itself down, then surfaces the error.
    fn install(&mut self, state: TranslationState, focus: Focus) -> Result<(), SessionError> {
        match self.controller.set_state(state) {
            Ok(()) => {
                self.phase = Phase::Active(focus);
                Ok(())
            }
            Err(e) => {
                if let Err(close_err) = self.close(CloseReason::Failed) {
                    debug!(id = self.id, error = %close_err, "restore during failure close failed");
                }
                Err(e.into())
            }
        }
    }

    fn close_with(&mut self, reason: CloseReason) -> Result<EventResponse, SessionError> {
        self.close(reason)?;
        let mut resp = EventResponse::none();
        resp.closed = Some(reason);
        Ok(resp)
    }
}
