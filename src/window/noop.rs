//! Functional no-op accessor for platforms without a focus path.

use super::{ForegroundWindowAccessor, WindowHandle};

/// Fallback accessor: never knows the foreground window, silently accepts
/// every restore and raise request. The overlay behaves identically with
/// this installed, minus focus restoration.
#[derive(Default)]
pub struct NoopAccessor;

impl ForegroundWindowAccessor for NoopAccessor {
    fn foreground_window(&self) -> Option<WindowHandle> {
        None
    }

    fn restore_foreground(&self, _window: Option<&WindowHandle>) {}

    fn bring_own_app_to_front(&self) {}
}
