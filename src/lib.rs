//! Transient reverse-lookup overlay core for a stenographic input engine.
//!
//! The user types an English word or phrase and the overlay lists every
//! stroke sequence in the engine's dictionary that produces it. The
//! interesting part is not the dialog but keeping a live engine safe while
//! the overlay pokes at it: [`LookupSession`] snapshots the translator's
//! dictation state at open, works against a scratch state while the query
//! input has focus, and restores both engine state and OS window focus
//! when it closes — however it closes. A capacity-one
//! [`ActiveSessionRegistry`] guarantees a single live session per process.
//!
//! The engine's translator and dictionary stay behind the
//! [`engine::TranslationStateController`] and [`engine::ReverseDictionary`]
//! contracts; the platform focus primitives behind
//! [`window::ForegroundWindowAccessor`], with safe no-op degradation on
//! unsupported targets.

pub mod config;
pub mod engine;
pub mod session;
pub mod steno;
pub mod window;

mod trace_init;

pub use trace_init::init_tracing;

pub use config::{FileGeometryStore, GeometryStore, OverlayGeometry};
pub use engine::{EngineError, ReverseDictionary, TranslationState, TranslationStateController};
pub use session::{
    ActiveSessionRegistry, CloseReason, EventResponse, LookupSession, QueryRequest,
    ResultsAction, SessionError, SurfaceEvent, NO_ENTRIES,
};
pub use steno::StrokeSequence;
pub use window::{platform_accessor, ForegroundWindowAccessor, NoopAccessor, WindowHandle};
