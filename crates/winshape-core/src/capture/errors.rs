use crate::errors::ShapeError;
use crate::platform::OsError;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Failed to register global hotkeys: {source}")]
    HotkeyRegistrationFailed { source: OsError },

    #[error(transparent)]
    OsCall {
        #[from]
        source: OsError,
    },
}

impl ShapeError for CaptureError {
    fn error_code(&self) -> &'static str {
        match self {
            CaptureError::HotkeyRegistrationFailed { .. } => "HOTKEY_REGISTRATION_FAILED",
            CaptureError::OsCall { source } => source.error_code(),
        }
    }
}
