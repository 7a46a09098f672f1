use crate::errors::ShapeError;
use crate::platform::OsError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("No window found with title containing '{title}'")]
    WindowNotFound { title: String },

    #[error("Window with id {id} does not exist")]
    WindowNotFoundById { id: isize },

    #[error("Cannot reduce aspect ratio for zero-sized window ({width}x{height})")]
    InvalidGeometry { width: i32, height: i32 },

    #[error(transparent)]
    OsCall {
        #[from]
        source: OsError,
    },
}

impl ShapeError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::WindowNotFound { .. } => "WINDOW_NOT_FOUND",
            WindowError::WindowNotFoundById { .. } => "WINDOW_NOT_FOUND_BY_ID",
            WindowError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            WindowError::OsCall { source } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            WindowError::WindowNotFound { .. }
                | WindowError::WindowNotFoundById { .. }
                | WindowError::InvalidGeometry { .. }
        )
    }
}
