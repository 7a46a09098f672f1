use std::time::Duration;

/// How often the interactive loop polls for hotkey messages.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// User-facing labels for the fixed hotkey combinations.
pub const CAPTURE_HOTKEY_LABEL: &str = "Ctrl+Alt+A";
pub const EXIT_HOTKEY_LABEL: &str = "Ctrl+Alt+C";

/// A hotkey trigger observed by the capture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureEvent {
    /// Capture hotkey: report the window under the cursor.
    Capture,
    /// Exit hotkey: end the session.
    Exit,
}
