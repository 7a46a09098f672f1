use tracing::{debug, info};

use super::errors::WindowError;
use super::types::WindowInfo;
use crate::platform::{self, RawHandle};

/// List all visible, titled top-level windows in OS enumeration order.
pub fn list_windows() -> Result<Vec<WindowInfo>, WindowError> {
    info!(event = "core.window.list_started");

    let handles = platform::enumerate_windows()?;

    let mut skipped_count = 0;
    let result: Vec<WindowInfo> = handles
        .into_iter()
        .filter_map(|handle| {
            if !platform::is_window_visible(handle) {
                return None;
            }
            let title = platform::window_title(handle);
            if title.trim().is_empty() {
                return None;
            }
            match platform::window_bounds(handle) {
                Ok(bounds) => Some(WindowInfo::new(
                    handle,
                    title,
                    bounds.left,
                    bounds.top,
                    bounds.width(),
                    bounds.height(),
                )),
                Err(e) => {
                    debug!(
                        event = "core.window.bounds_read_failed",
                        handle = handle,
                        error = %e
                    );
                    skipped_count += 1;
                    None
                }
            }
        })
        .collect();

    info!(
        event = "core.window.list_completed",
        count = result.len(),
        skipped_count = skipped_count
    );
    Ok(result)
}

/// Find the first window whose title contains `title`.
///
/// Matching is a case-sensitive substring check; when multiple windows
/// match, the first in OS enumeration order wins. Enumeration order is
/// not guaranteed stable across runs.
pub fn find_window_by_title(title: &str) -> Result<WindowInfo, WindowError> {
    info!(event = "core.window.find_started", title = title);

    for handle in platform::enumerate_windows()? {
        let window_title = platform::window_title(handle);
        if window_title.contains(title) {
            info!(
                event = "core.window.find_completed",
                title = title,
                handle = handle
            );
            return build_window_info(handle, window_title);
        }
    }

    Err(WindowError::WindowNotFound {
        title: title.to_string(),
    })
}

/// Find a window by its raw handle value.
///
/// The handle is only checked for current validity; a recycled handle
/// value will happily resolve to whatever window owns it now.
pub fn find_window_by_id(id: RawHandle) -> Result<WindowInfo, WindowError> {
    info!(event = "core.window.find_by_id_started", id = id);

    if !platform::is_window(id) {
        return Err(WindowError::WindowNotFoundById { id });
    }

    let title = platform::window_title(id);
    info!(
        event = "core.window.find_by_id_completed",
        id = id,
        title = title.as_str()
    );
    build_window_info(id, title)
}

/// Resize a window to `width` x `height`, keeping its current top-left
/// corner. Values are passed to the OS as-is; the OS may clamp or ignore
/// the request (e.g. for a maximized window) without reporting it.
pub fn resize_window(handle: RawHandle, width: i32, height: i32) -> Result<(), WindowError> {
    info!(
        event = "core.window.resize_started",
        handle = handle,
        width = width,
        height = height
    );

    let bounds = platform::window_bounds(handle)?;
    platform::move_window(handle, bounds.left, bounds.top, width, height)?;

    info!(event = "core.window.resize_completed", handle = handle);
    Ok(())
}

/// Resolve the window under a screen point, if any.
pub fn window_at_point(x: i32, y: i32) -> Option<RawHandle> {
    platform::window_from_point(x, y)
}

fn build_window_info(handle: RawHandle, title: String) -> Result<WindowInfo, WindowError> {
    let bounds = platform::window_bounds(handle)?;
    Ok(WindowInfo::new(
        handle,
        title,
        bounds.left,
        bounds.top,
        bounds.width(),
        bounds.height(),
    ))
}
