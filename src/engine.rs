//! Engine-boundary contracts.
//!
//! The overlay never inspects translator internals: it snapshots and
//! replays opaque `TranslationState` values through
//! `TranslationStateController`, and resolves translations to stroke
//! sequences through `ReverseDictionary`. Both traits are implemented by
//! the host engine.

use std::fmt;
use std::sync::Arc;

use crate::steno::StrokeSequence;

/// Opaque snapshot of the translator's in-progress stroke/translation
/// history.
///
/// Equality is byte-for-byte: a snapshot captured before entering lookup
/// mode, restored after, resumes dictation exactly where the user left
/// off. The session only stores and replays these; `as_bytes` exists for
/// controller implementations to deserialize from.
#[derive(Clone, PartialEq, Eq)]
pub struct TranslationState {
    bytes: Arc<[u8]>,
}

impl TranslationState {
    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// A fresh state with no stroke history.
    pub fn empty() -> Self {
        Self::from_bytes(Vec::new())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

// The payload is opaque; only the length is worth printing.
impl fmt::Debug for TranslationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationState")
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Unified error type for the engine boundary.
///
/// Any of these is fatal to a lookup session: if the translator cannot
/// produce or accept a state, the session closes rather than leave the
/// engine indeterminate.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("translator state unavailable: {0}")]
    StateUnavailable(String),

    #[error("translator rejected state: {0}")]
    StateRejected(String),
}

/// Facade over the engine's translator for snapshotting, swapping, and
/// restoring its stroke/translation state.
pub trait TranslationStateController: Send + Sync {
    /// Snapshot the translator's current state.
    fn state(&self) -> Result<TranslationState, EngineError>;

    /// Install `state` as the translator's current state.
    fn set_state(&self, state: TranslationState) -> Result<(), EngineError>;

    /// Install a fresh empty state and return it.
    fn clear_state(&self) -> Result<TranslationState, EngineError>;
}

/// Reverse-lookup capability of the engine's steno dictionary.
pub trait ReverseDictionary: Send + Sync {
    /// Every known stroke sequence producing `translation`, in the
    /// dictionary's natural order. Deterministic for identical dictionary
    /// state; no ordering guarantee beyond that. Callers pass trimmed,
    /// non-empty text — the session short-circuits empty queries before
    /// reaching the dictionary.
    fn reverse_lookup(&self, translation: &str) -> Vec<StrokeSequence>;
}
