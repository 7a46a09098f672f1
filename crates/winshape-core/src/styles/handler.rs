use std::path::Path;

use tracing::info;

use super::errors::StyleError;
use super::persistence;
use super::types::StyleSnapshot;
use crate::platform::{self, BORDERLESS_EXSTYLE, BORDERLESS_STYLE, RawHandle};

/// Strip a window's chrome: snapshot its current style bits, then overwrite
/// them with the borderless configuration.
///
/// Re-applying without an intervening revert overwrites the snapshot, so
/// the pre-first-apply styles are lost (last-apply-wins).
pub fn apply_borderless(handle: RawHandle) -> Result<(), StyleError> {
    let dir = persistence::styles_dir()?;
    apply_borderless_in(&dir, handle)
}

/// Restore the style bits saved by a prior [`apply_borderless`].
///
/// Fails with `SnapshotMissing` (and touches nothing) when no apply was
/// recorded for this handle. The snapshot file is left on disk, so a
/// repeated revert re-applies the same saved bits.
pub fn revert_borderless(handle: RawHandle) -> Result<(), StyleError> {
    let dir = persistence::styles_dir()?;
    revert_borderless_in(&dir, handle)
}

fn apply_borderless_in(dir: &Path, handle: RawHandle) -> Result<(), StyleError> {
    info!(event = "core.styles.apply_started", handle = handle);

    let snapshot = StyleSnapshot {
        original_style: platform::window_style(handle)?,
        original_exstyle: platform::window_exstyle(handle)?,
    };

    persistence::ensure_styles_directory(dir)?;
    persistence::save_snapshot(dir, handle, &snapshot)?;

    platform::set_window_style(handle, BORDERLESS_STYLE)?;
    platform::set_window_exstyle(handle, BORDERLESS_EXSTYLE)?;
    reframe(handle)?;

    info!(
        event = "core.styles.apply_completed",
        handle = handle,
        original_style = snapshot.original_style,
        original_exstyle = snapshot.original_exstyle
    );
    Ok(())
}

pub(crate) fn revert_borderless_in(dir: &Path, handle: RawHandle) -> Result<(), StyleError> {
    info!(event = "core.styles.revert_started", handle = handle);

    let snapshot =
        persistence::load_snapshot(dir, handle)?.ok_or(StyleError::SnapshotMissing { handle })?;

    platform::set_window_style(handle, snapshot.original_style)?;
    platform::set_window_exstyle(handle, snapshot.original_exstyle)?;
    reframe(handle)?;

    info!(event = "core.styles.revert_completed", handle = handle);
    Ok(())
}

/// Make a style mutation visible: reapply the current bounds so the OS
/// recomputes the non-client area, then request a frame-changed repaint.
fn reframe(handle: RawHandle) -> Result<(), StyleError> {
    let bounds = platform::window_bounds(handle)?;
    platform::move_window(
        handle,
        bounds.left,
        bounds.top,
        bounds.width(),
        bounds.height(),
    )?;
    platform::apply_frame_change(
        handle,
        bounds.left,
        bounds.top,
        bounds.width(),
        bounds.height(),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ShapeError;
    use tempfile::TempDir;

    #[test]
    fn test_revert_without_apply_reports_snapshot_missing() {
        let temp = TempDir::new().unwrap();

        let result = revert_borderless_in(temp.path(), 424242);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().error_code(), "SNAPSHOT_MISSING");
    }

    #[test]
    fn test_revert_without_apply_mutates_nothing_on_disk() {
        let temp = TempDir::new().unwrap();

        let _ = revert_borderless_in(temp.path(), 424242);

        // Failed revert must not leave files behind
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_apply_fails_before_writing_snapshot_off_windows() {
        let temp = TempDir::new().unwrap();

        // Style read fails first, so no snapshot may be written
        let result = apply_borderless_in(temp.path(), 1);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().error_code(), "UNSUPPORTED_PLATFORM");
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_revert_with_snapshot_leaves_file_on_failure() {
        use crate::styles::persistence::save_snapshot;

        let temp = TempDir::new().unwrap();
        let saved = StyleSnapshot {
            original_style: 0x14CF_0000,
            original_exstyle: 0x100,
        };
        save_snapshot(temp.path(), 9, &saved).unwrap();

        // Style write is unsupported here, but the snapshot must survive
        let result = revert_borderless_in(temp.path(), 9);
        assert!(result.is_err());
        assert!(temp.path().join("9.json").exists());
    }
}
