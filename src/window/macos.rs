//! macOS accessor backed by `osascript` and System Events.
//!
//! Focus is tracked by process rather than window: System Events exposes
//! the frontmost *process*, and re-activating a process restores its own
//! window stacking. The captured handle is therefore a unix pid.

use std::process::Command;

use tracing::debug;

use super::{ForegroundWindowAccessor, WindowHandle};

const FRONTMOST_PID_SCRIPT: &str = r#"tell application "System Events"
    return unix id of first process whose frontmost is true
end tell"#;

#[derive(Default)]
pub struct MacosAccessor;

impl MacosAccessor {
    pub fn new() -> Self {
        Self
    }
}

fn activate_pid(pid: u32) {
    let script = format!(
        r#"tell application "System Events"
    set the frontmost of first process whose unix id is {pid} to true
end tell"#
    );
    match Command::new("osascript").args(["-e", &script]).status() {
        Ok(status) if status.success() => {}
        Ok(status) => debug!(%status, pid, "osascript activate failed"),
        Err(e) => debug!(error = %e, "osascript not available"),
    }
}

impl ForegroundWindowAccessor for MacosAccessor {
    fn foreground_window(&self) -> Option<WindowHandle> {
        let output = match Command::new("osascript")
            .args(["-e", FRONTMOST_PID_SCRIPT])
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                debug!(error = %e, "osascript not available");
                return None;
            }
        };
        if !output.status.success() {
            debug!(status = %output.status, "osascript frontmost query failed");
            return None;
        }
        let pid = String::from_utf8_lossy(&output.stdout);
        let pid = pid.trim();
        // Only a numeric pid is a usable handle.
        pid.parse::<u32>().ok()?;
        Some(WindowHandle::new(pid))
    }

    fn restore_foreground(&self, window: Option<&WindowHandle>) {
        let Some(window) = window else { return };
        // A handle that no longer parses as a pid is stale garbage; drop it
        // rather than splice it into a script.
        let Ok(pid) = window.as_str().parse::<u32>() else {
            debug!(window = window.as_str(), "not a pid, skipping restore");
            return;
        };
        activate_pid(pid);
    }

    fn bring_own_app_to_front(&self) {
        activate_pid(std::process::id());
    }
}
