//! Process-wide active-session registry.
//!
//! At most one lookup session is alive at a time. The registry is a
//! capacity-one slot: registering a new session returns the evicted
//! predecessor, and the caller closes it *after* the new session has
//! captured its own dictation context and foreground window. That
//! ordering is the whole point of making eviction an explicit contract.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use super::LookupSession;

pub(super) type SharedSession = Arc<Mutex<LookupSession>>;

#[derive(Default)]
pub struct ActiveSessionRegistry {
    active: Mutex<Option<(u64, SharedSession)>>,
    next_id: AtomicU64,
}

impl ActiveSessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Install `session` as the active one, returning the evicted
    /// predecessor for the caller to close.
    pub(super) fn replace_active(
        &self,
        id: u64,
        session: SharedSession,
    ) -> Option<SharedSession> {
        let mut active = self.active.lock().unwrap();
        active
            .replace((id, session))
            .map(|(_, evicted)| evicted)
    }

    /// Clear the slot if `id` is still the registered session. An evicted
    /// session closing late must not deregister its successor.
    pub(super) fn remove(&self, id: u64) {
        let mut active = self.active.lock().unwrap();
        if active.as_ref().is_some_and(|(active_id, _)| *active_id == id) {
            *active = None;
        }
    }

    /// The currently registered session, if any.
    pub fn active(&self) -> Option<SharedSession> {
        self.active
            .lock()
            .unwrap()
            .as_ref()
            .map(|(_, session)| Arc::clone(session))
    }

    pub fn active_id(&self) -> Option<u64> {
        self.active.lock().unwrap().as_ref().map(|(id, _)| *id)
    }
}
