use serde::{Deserialize, Serialize};

use super::errors::WindowError;
use crate::platform::RawHandle;

/// Information about a window, captured at lookup time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowInfo {
    handle: RawHandle,
    title: String,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl WindowInfo {
    pub fn new(
        handle: RawHandle,
        title: String,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Self {
        Self {
            handle,
            title,
            x,
            y,
            width,
            height,
        }
    }

    pub fn handle(&self) -> RawHandle {
        self.handle
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title for user-facing output; empty titles get a placeholder.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(untitled)"
        } else {
            &self.title
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Width/height reduced by their greatest common divisor.
    pub fn aspect_ratio(&self) -> Result<(i32, i32), WindowError> {
        aspect_ratio(self.width, self.height)
    }
}

/// Reduce a width/height pair by its greatest common divisor.
///
/// A zero dimension has no meaningful ratio and is reported as an error
/// rather than faulting on the division.
pub fn aspect_ratio(width: i32, height: i32) -> Result<(i32, i32), WindowError> {
    if width == 0 || height == 0 {
        return Err(WindowError::InvalidGeometry { width, height });
    }
    let g = gcd(width.unsigned_abs(), height.unsigned_abs()) as i32;
    Ok((width / g, height / g))
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
