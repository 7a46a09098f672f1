//! Interactive capture session: global hotkey registration and polling.
//!
//! Hotkeys are process-wide OS registrations; [`HotkeyGuard`] scopes them so
//! they are released on every exit path, including unwinds.

pub mod errors;
pub mod handler;
pub mod types;

pub use errors::CaptureError;
pub use handler::{HotkeyGuard, poll_event, window_under_cursor};
pub use types::{CAPTURE_HOTKEY_LABEL, CaptureEvent, EXIT_HOTKEY_LABEL, POLL_INTERVAL};
