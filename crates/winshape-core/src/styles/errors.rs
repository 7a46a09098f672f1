use crate::errors::ShapeError;
use crate::platform::OsError;

#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("No saved styles for window {handle}")]
    SnapshotMissing { handle: isize },

    #[error("Failed to parse snapshot file '{path}': {message}")]
    SnapshotParseError { path: String, message: String },

    #[error("Snapshot store IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error(transparent)]
    OsCall {
        #[from]
        source: OsError,
    },
}

impl ShapeError for StyleError {
    fn error_code(&self) -> &'static str {
        match self {
            StyleError::SnapshotMissing { .. } => "SNAPSHOT_MISSING",
            StyleError::SnapshotParseError { .. } => "SNAPSHOT_PARSE_ERROR",
            StyleError::IoError { .. } => "SNAPSHOT_IO_ERROR",
            StyleError::OsCall { source } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, StyleError::SnapshotMissing { .. })
    }
}
