
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{ActiveSessionRegistry, EventResponse, LookupSession, SurfaceEvent};
use crate::config::{GeometryStore, OverlayGeometry};
use crate::engine::{EngineError, ReverseDictionary, TranslationState, TranslationStateController};
use crate::steno::StrokeSequence;
use crate::window::{ForegroundWindowAccessor, WindowHandle};

/// In-memory translator fake. State is a byte buffer; `feed_stroke`
/// simulates engine-side mutation (e.g. the lookup field routing input
/// through the same engine) while the overlay holds focus.
pub(super) struct FakeTranslator {
    current: Mutex<Vec<u8>>,
}

impl FakeTranslator {
    pub(super) fn with_state(bytes: &[u8]) -> Arc<Self> {
        Arc::new(Self {
            current: Mutex::new(bytes.to_vec()),
        })
    }

    pub(super) fn feed_stroke(&self, byte: u8) {
        self.current.lock().unwrap().push(byte);
    }

    pub(super) fn current_state(&self) -> TranslationState {
        TranslationState::from_bytes(self.current.lock().unwrap().clone())
    }
}

impl TranslationStateController for FakeTranslator {
    fn state(&self) -> Result<TranslationState, EngineError> {
        Ok(self.current_state())
    }

    fn set_state(&self, state: TranslationState) -> Result<(), EngineError> {
        *self.current.lock().unwrap() = state.as_bytes().to_vec();
        Ok(())
    }

    fn clear_state(&self) -> Result<TranslationState, EngineError> {
        self.current.lock().unwrap().clear();
        Ok(TranslationState::empty())
    }
}

/// Translator that rejects `set_state` after a budget of successful
/// installs, for the fatal-engine-failure paths.
pub(super) struct RejectingTranslator {
    inner: FakeTranslator,
    remaining_installs: AtomicUsize,
}

impl RejectingTranslator {
    pub(super) fn after_installs(bytes: &[u8], installs: usize) -> Arc<Self> {
        Arc::new(Self {
            inner: FakeTranslator {
                current: Mutex::new(bytes.to_vec()),
            },
            remaining_installs: AtomicUsize::new(installs),
        })
    }
}

impl TranslationStateController for RejectingTranslator {
    fn state(&self) -> Result<TranslationState, EngineError> {
        self.inner.state()
    }

    fn set_state(&self, state: TranslationState) -> Result<(), EngineError> {
        let remaining = self.remaining_installs.load(Ordering::SeqCst);
        if remaining == 0 {
            return Err(EngineError::StateRejected("install budget spent".into()));
        }
        self.remaining_installs.store(remaining - 1, Ordering::SeqCst);
        self.inner.set_state(state)
    }

    fn clear_state(&self) -> Result<TranslationState, EngineError> {
        self.inner.clear_state()
    }
}

/// Counting dictionary fake with a fixed translation → strokes table.
pub(super) struct FakeDictionary {
    entries: HashMap<String, Vec<StrokeSequence>>,
    lookups: AtomicUsize,
}

impl FakeDictionary {
    pub(super) fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ReverseDictionary for FakeDictionary {
    fn reverse_lookup(&self, translation: &str) -> Vec<StrokeSequence> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.entries.get(translation).cloned().unwrap_or_default()
    }
}

pub(super) fn make_test_dict() -> Arc<FakeDictionary> {
    let mut entries: HashMap<String, Vec<StrokeSequence>> = HashMap::new();
    entries.insert(
        "left".to_string(),
        vec![
            ["TH", "EFT"].into_iter().collect(),
            ["HREFT"].into_iter().collect(),
        ],
    );
    entries.insert(
        "yesterday".to_string(),
        vec![["KWRED"].into_iter().collect()],
    );
    Arc::new(FakeDictionary {
        entries,
        lookups: AtomicUsize::new(0),
    })
}

/// Accessor fake: hands out a scripted sequence of foreground windows and
/// records every restore and raise.
pub(super) struct RecordingAccessor {
    handles: Mutex<VecDeque<Option<WindowHandle>>>,
    restored: Mutex<Vec<Option<WindowHandle>>>,
    raised: AtomicUsize,
}

impl RecordingAccessor {
    pub(super) fn returning(handle: Option<&str>) -> Arc<Self> {
        Self::returning_sequence(&[handle])
    }

    pub(super) fn returning_sequence(handles: &[Option<&str>]) -> Arc<Self> {
        Arc::new(Self {
            handles: Mutex::new(
                handles
                    .iter()
                    .map(|h| h.map(WindowHandle::new))
                    .collect(),
            ),
            restored: Mutex::new(Vec::new()),
            raised: AtomicUsize::new(0),
        })
    }

    pub(super) fn restored(&self) -> Vec<Option<WindowHandle>> {
        self.restored.lock().unwrap().clone()
    }

    pub(super) fn raise_count(&self) -> usize {
        self.raised.load(Ordering::SeqCst)
    }
}

impl ForegroundWindowAccessor for RecordingAccessor {
    fn foreground_window(&self) -> Option<WindowHandle> {
        self.handles.lock().unwrap().pop_front().flatten()
    }

    fn restore_foreground(&self, window: Option<&WindowHandle>) {
        self.restored.lock().unwrap().push(window.cloned());
    }

    fn bring_own_app_to_front(&self) {
        self.raised.fetch_add(1, Ordering::SeqCst);
    }
}

pub(super) struct RecordingGeometryStore {
    writes: Mutex<Vec<OverlayGeometry>>,
}

impl RecordingGeometryStore {
    pub(super) fn new() -> Arc<Self> {
        Arc::new(Self {
            writes: Mutex::new(Vec::new()),
        })
    }

    pub(super) fn writes(&self) -> Vec<OverlayGeometry> {
        self.writes.lock().unwrap().clone()
    }
}

impl GeometryStore for RecordingGeometryStore {
    fn geometry(&self) -> OverlayGeometry {
        self.writes.lock().unwrap().last().copied().unwrap_or_default()
    }

    fn set_geometry(&self, geometry: OverlayGeometry) {
        self.writes.lock().unwrap().push(geometry);
    }
}

// Helper: open a session with the standard fixtures and no geometry store.
pub(super) fn open_with(
    controller: Arc<dyn TranslationStateController>,
    dictionary: Arc<dyn ReverseDictionary>,
    accessor: Arc<dyn ForegroundWindowAccessor>,
    registry: &Arc<ActiveSessionRegistry>,
) -> Arc<Mutex<LookupSession>> {
    LookupSession::open(
        controller,
        dictionary,
        accessor,
        Arc::clone(registry),
        None,
    )
    .unwrap()
}

// Helper: feed one event, unwrapping the lock and the result.
pub(super) fn drive(session: &Arc<Mutex<LookupSession>>, event: SurfaceEvent) -> EventResponse {
    session.lock().unwrap().handle_event(event).unwrap()
}
