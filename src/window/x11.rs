//! X11 accessor backed by the `xprop` and `wmctrl` helper binaries.
//!
//! Raising our own app goes through `wmctrl -a <title>` — by window title,
//! not by a tracked handle. The helper has no notion of which window in
//! this process hosts the overlay, so the title is the only key available;
//! restore uses the captured window id like the other platforms.

use std::process::Command;

use tracing::debug;

use super::{ForegroundWindowAccessor, WindowHandle};

pub struct X11Accessor {
    app_title: String,
}

impl X11Accessor {
    pub fn new(app_title: impl Into<String>) -> Self {
        Self {
            app_title: app_title.into(),
        }
    }
}

/// Extract the active window id from `xprop -root _NET_ACTIVE_WINDOW`
/// output, e.g. `_NET_ACTIVE_WINDOW(WINDOW): window id # 0x3c00007`.
fn parse_active_window(output: &str) -> Option<WindowHandle> {
    let id = output.split_whitespace().last()?;
    if !id.starts_with("0x") {
        return None;
    }
    Some(WindowHandle::new(id))
}

impl ForegroundWindowAccessor for X11Accessor {
    fn foreground_window(&self) -> Option<WindowHandle> {
        let output = match Command::new("xprop")
            .args(["-root", "_NET_ACTIVE_WINDOW"])
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                debug!(error = %e, "xprop not available");
                return None;
            }
        };
        if !output.status.success() {
            debug!(status = %output.status, "xprop failed");
            return None;
        }
        parse_active_window(&String::from_utf8_lossy(&output.stdout))
    }

    fn restore_foreground(&self, window: Option<&WindowHandle>) {
        let Some(window) = window else { return };
        match Command::new("wmctrl")
            .args(["-i", "-a", window.as_str()])
            .status()
        {
            Ok(status) if status.success() => {}
            Ok(status) => debug!(%status, window = window.as_str(), "wmctrl activate failed"),
            Err(e) => debug!(error = %e, "wmctrl not available"),
        }
    }

    fn bring_own_app_to_front(&self) {
        match Command::new("wmctrl")
            .args(["-a", self.app_title.as_str()])
            .status()
        {
            Ok(status) if status.success() => {}
            Ok(status) => debug!(%status, title = %self.app_title, "wmctrl raise failed"),
            Err(e) => debug!(error = %e, "wmctrl not available"),
        }
    }
}
