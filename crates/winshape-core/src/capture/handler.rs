use tracing::info;

use super::errors::CaptureError;
use super::types::CaptureEvent;
use crate::platform::{self, RawHandle};

const CAPTURE_HOTKEY_ID: i32 = 1;
const EXIT_HOTKEY_ID: i32 = 2;

/// Scoped registration of the capture (Ctrl+Alt+A) and exit (Ctrl+Alt+C)
/// hotkeys. Dropping the guard unregisters both, so the process-wide
/// registrations cannot outlive the session on any exit path.
#[derive(Debug)]
pub struct HotkeyGuard {
    _private: (),
}

impl HotkeyGuard {
    pub fn register() -> Result<Self, CaptureError> {
        platform::register_hotkey(CAPTURE_HOTKEY_ID, 'A')
            .map_err(|source| CaptureError::HotkeyRegistrationFailed { source })?;

        if let Err(source) = platform::register_hotkey(EXIT_HOTKEY_ID, 'C') {
            // Don't leak the first registration when the second fails
            platform::unregister_hotkey(CAPTURE_HOTKEY_ID);
            return Err(CaptureError::HotkeyRegistrationFailed { source });
        }

        info!(event = "core.capture.hotkeys_registered");
        Ok(Self { _private: () })
    }
}

impl Drop for HotkeyGuard {
    fn drop(&mut self) {
        platform::unregister_hotkey(CAPTURE_HOTKEY_ID);
        platform::unregister_hotkey(EXIT_HOTKEY_ID);
        info!(event = "core.capture.hotkeys_released");
    }
}

/// Check the message queue for a pending hotkey trigger. Non-blocking;
/// the caller owns the sleep between polls.
pub fn poll_event() -> Option<CaptureEvent> {
    match platform::poll_hotkey() {
        Some(CAPTURE_HOTKEY_ID) => Some(CaptureEvent::Capture),
        Some(EXIT_HOTKEY_ID) => Some(CaptureEvent::Exit),
        _ => None,
    }
}

/// Resolve the window currently under the screen cursor, if any.
pub fn window_under_cursor() -> Result<Option<RawHandle>, CaptureError> {
    let (x, y) = platform::cursor_pos()?;
    info!(event = "core.capture.cursor_read", x = x, y = y);
    Ok(platform::window_from_point(x, y))
}
