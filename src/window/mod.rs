//! Platform window-focus boundary.
//!
//! Three primitives: read the OS-level focused window, hand focus back to
//! a previously captured window, and raise the hosting application. OS
//! focus APIs are racy and absent on some platforms, so every operation is
//! best-effort: failures degrade to `None`/no-op with a debug log and are
//! never propagated. The rest of the overlay works identically on an
//! unsupported platform, minus focus restoration.

#[cfg(target_os = "macos")]
mod macos;
mod noop;
#[cfg(target_os = "linux")]
mod x11;

#[cfg(target_os = "macos")]
pub use macos::MacosAccessor;
pub use noop::NoopAccessor;
#[cfg(target_os = "linux")]
pub use x11::X11Accessor;

use std::sync::Arc;

/// Opaque identifier of a native OS window (X11 window id, macOS process
/// id, ...). A capability token, not a resource: holding one confers no
/// ownership and it may go stale at any time — the window it names can
/// close while the overlay is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowHandle(String);

impl WindowHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Platform capability to read and set OS input focus.
pub trait ForegroundWindowAccessor: Send + Sync {
    /// The OS-level focused window right now, or `None` when the platform
    /// cannot tell.
    fn foreground_window(&self) -> Option<WindowHandle>;

    /// Best-effort request to give focus back to `window`. No-ops on
    /// `None` and swallows failures — the target may have closed in the
    /// interim.
    fn restore_foreground(&self, window: Option<&WindowHandle>);

    /// Raise the hosting application itself, without changing which
    /// document window inside it is focused. Called once when the overlay
    /// opens.
    fn bring_own_app_to_front(&self);
}

/// Accessor for the current build target, selected once at process start
/// and injected into the session.
///
/// `app_title` is the overlay's window title; the X11 path needs it to
/// raise the app (see `X11Accessor`). Unsupported targets get
/// `NoopAccessor`.
pub fn platform_accessor(app_title: &str) -> Arc<dyn ForegroundWindowAccessor> {
    #[cfg(target_os = "linux")]
    {
        Arc::new(X11Accessor::new(app_title))
    }
    #[cfg(target_os = "macos")]
    {
        let _ = app_title;
        Arc::new(MacosAccessor::new())
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        let _ = app_title;
        Arc::new(NoopAccessor)
    }
}
