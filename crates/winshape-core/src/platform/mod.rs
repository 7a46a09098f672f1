//! Thin checked wrappers over the host window-management API.
//!
//! All `unsafe` in the crate lives in the `win32` backend. Every wrapper
//! checks the OS return value and maps failure to [`OsError`] instead of
//! proceeding silently. Non-Windows hosts get a stub backend so the
//! workspace compiles everywhere; every OS-touching call fails with
//! [`OsError::Unsupported`] there.

use crate::errors::ShapeError;

#[cfg(windows)]
mod win32;
#[cfg(windows)]
pub use win32::*;

#[cfg(not(windows))]
mod stub;
#[cfg(not(windows))]
pub use stub::*;

/// Raw OS window handle, carried as an integer so domain types stay
/// `Send + Sync` and serializable. A live reference into OS state: the
/// window can vanish (or the value be recycled) at any time.
pub type RawHandle = isize;

/// Style bits applied in borderless mode: WS_VISIBLE | WS_CLIPCHILDREN.
pub const BORDERLESS_STYLE: u32 = 0x1000_0000 | 0x0200_0000;

/// Extended style bits applied in borderless mode: all cleared.
pub const BORDERLESS_EXSTYLE: u32 = 0;

/// Window rectangle in screen coordinates, as reported by the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OsError {
    #[error("OS call {call} failed: {message}")]
    CallFailed { call: &'static str, message: String },

    #[error("OS call {call} is not supported on this platform")]
    Unsupported { call: &'static str },
}

impl OsError {
    pub fn call_failed(call: &'static str, message: impl Into<String>) -> Self {
        OsError::CallFailed {
            call,
            message: message.into(),
        }
    }

    pub fn unsupported(call: &'static str) -> Self {
        OsError::Unsupported { call }
    }
}

impl ShapeError for OsError {
    fn error_code(&self) -> &'static str {
        match self {
            OsError::CallFailed { .. } => "OS_CALL_FAILED",
            OsError::Unsupported { .. } => "UNSUPPORTED_PLATFORM",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_dimensions() {
        let bounds = Bounds {
            left: 100,
            top: 200,
            right: 1380,
            bottom: 920,
        };
        assert_eq!(bounds.width(), 1280);
        assert_eq!(bounds.height(), 720);
    }

    #[test]
    fn test_borderless_style_bits() {
        // WS_VISIBLE | WS_CLIPCHILDREN and nothing else
        assert_eq!(BORDERLESS_STYLE, 0x1200_0000);
        assert_eq!(BORDERLESS_EXSTYLE, 0);
    }

    #[test]
    fn test_os_error_display() {
        let error = OsError::call_failed("SetWindowPos", "access denied");
        assert_eq!(
            error.to_string(),
            "OS call SetWindowPos failed: access denied"
        );
        assert_eq!(error.error_code(), "OS_CALL_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_os_error_unsupported() {
        let error = OsError::unsupported("EnumWindows");
        assert_eq!(
            error.to_string(),
            "OS call EnumWindows is not supported on this platform"
        );
        assert_eq!(error.error_code(), "UNSUPPORTED_PLATFORM");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OsError>();
    }
}
