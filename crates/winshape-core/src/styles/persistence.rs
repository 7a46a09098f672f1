//! Snapshot file persistence
//!
//! One JSON file per window handle, written atomically via temp file +
//! rename. Files are never deleted by revert; a stale snapshot for a
//! recycled handle value is an accepted hazard of handle-only keying.

use std::fs;
use std::path::{Path, PathBuf};

use crate::platform::RawHandle;
use crate::styles::{errors::StyleError, types::StyleSnapshot};

/// Default snapshot directory: `~/.winshape/styles`.
pub fn styles_dir() -> Result<PathBuf, std::io::Error> {
    dirs::home_dir()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not find home directory",
            )
        })
        .map(|p| p.join(".winshape").join("styles"))
}

pub fn ensure_styles_directory(styles_dir: &Path) -> Result<(), StyleError> {
    fs::create_dir_all(styles_dir).map_err(|e| StyleError::IoError { source: e })?;
    Ok(())
}

fn snapshot_path(styles_dir: &Path, handle: RawHandle) -> PathBuf {
    styles_dir.join(format!("{handle}.json"))
}

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = fs::remove_file(temp_file) {
        tracing::warn!(
            event = "core.styles.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err,
            message = "Failed to clean up temp file after operation error"
        );
    }
}

/// Write a snapshot for `handle`, overwriting any prior one (last-apply-wins).
pub fn save_snapshot(
    styles_dir: &Path,
    handle: RawHandle,
    snapshot: &StyleSnapshot,
) -> Result<(), StyleError> {
    let snapshot_file = snapshot_path(styles_dir, handle);
    let snapshot_json = serde_json::to_string_pretty(snapshot).map_err(|e| {
        tracing::error!(
            event = "core.styles.serialization_failed",
            handle = handle,
            error = %e,
            message = "Failed to serialize snapshot to JSON"
        );
        StyleError::IoError {
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        }
    })?;

    let temp_file = snapshot_file.with_extension("json.tmp");

    // Write to temp file
    if let Err(e) = fs::write(&temp_file, &snapshot_json) {
        cleanup_temp_file(&temp_file, &e);
        return Err(StyleError::IoError { source: e });
    }

    // Rename temp file to final location
    if let Err(e) = fs::rename(&temp_file, &snapshot_file) {
        cleanup_temp_file(&temp_file, &e);
        return Err(StyleError::IoError { source: e });
    }

    Ok(())
}

/// Load the snapshot for `handle`, or `None` when no apply was recorded.
///
/// A present-but-unreadable file is an error, not a silent reset: reverting
/// from garbage would mangle the window worse than refusing to.
pub fn load_snapshot(
    styles_dir: &Path,
    handle: RawHandle,
) -> Result<Option<StyleSnapshot>, StyleError> {
    let snapshot_file = snapshot_path(styles_dir, handle);

    if !snapshot_file.exists() {
        return Ok(None);
    }

    let content =
        fs::read_to_string(&snapshot_file).map_err(|e| StyleError::IoError { source: e })?;

    let snapshot =
        serde_json::from_str::<StyleSnapshot>(&content).map_err(|e| {
            StyleError::SnapshotParseError {
                path: snapshot_file.display().to_string(),
                message: e.to_string(),
            }
        })?;

    Ok(Some(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn snapshot(style: u32, exstyle: u32) -> StyleSnapshot {
        StyleSnapshot {
            original_style: style,
            original_exstyle: exstyle,
        }
    }

    #[test]
    fn test_ensure_styles_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("styles");

        // Should create directory
        assert!(ensure_styles_directory(&dir).is_ok());
        assert!(dir.exists());

        // Should not error if directory already exists
        assert!(ensure_styles_directory(&dir).is_ok());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let saved = snapshot(0x14CF_0000, 0x100);

        save_snapshot(temp.path(), 66062, &saved).unwrap();

        // File is named by the literal handle value
        assert!(temp.path().join("66062.json").exists());

        let loaded = load_snapshot(temp.path(), 66062).unwrap();
        assert_eq!(loaded, Some(saved));
    }

    #[test]
    fn test_save_overwrites_prior_snapshot() {
        let temp = TempDir::new().unwrap();

        save_snapshot(temp.path(), 1, &snapshot(0xAAAA, 0x1)).unwrap();
        save_snapshot(temp.path(), 1, &snapshot(0xBBBB, 0x2)).unwrap();

        // Last apply wins; the first snapshot is gone
        let loaded = load_snapshot(temp.path(), 1).unwrap().unwrap();
        assert_eq!(loaded.original_style, 0xBBBB);
        assert_eq!(loaded.original_exstyle, 0x2);
    }

    #[test]
    fn test_load_missing_snapshot_is_none() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_snapshot(temp.path(), 99999).unwrap(), None);
    }

    #[test]
    fn test_snapshots_are_keyed_by_handle() {
        let temp = TempDir::new().unwrap();

        save_snapshot(temp.path(), 10, &snapshot(0x1, 0x0)).unwrap();
        save_snapshot(temp.path(), 20, &snapshot(0x2, 0x0)).unwrap();

        assert_eq!(
            load_snapshot(temp.path(), 10).unwrap().unwrap().original_style,
            0x1
        );
        assert_eq!(
            load_snapshot(temp.path(), 20).unwrap().unwrap().original_style,
            0x2
        );
    }

    #[test]
    fn test_save_cleans_up_temp_file() {
        let temp = TempDir::new().unwrap();
        save_snapshot(temp.path(), 5, &snapshot(0x1, 0x0)).unwrap();

        assert!(
            !temp.path().join("5.json.tmp").exists(),
            "Temp file should be cleaned up after successful write"
        );
        assert!(temp.path().join("5.json").exists());
    }

    #[test]
    fn test_save_temp_file_cleanup_on_rename_failure() {
        let temp = TempDir::new().unwrap();

        // Create a directory where the final file should be to force rename failure
        fs::create_dir_all(temp.path().join("7.json")).unwrap();

        let result = save_snapshot(temp.path(), 7, &snapshot(0x1, 0x0));
        assert!(result.is_err(), "Save should fail when rename fails");

        assert!(
            !temp.path().join("7.json.tmp").exists(),
            "Temp file should be cleaned up after rename failure"
        );
    }

    #[test]
    fn test_load_corrupt_snapshot_is_parse_error() {
        use crate::errors::ShapeError;

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("3.json"), "{ not json }").unwrap();

        let result = load_snapshot(temp.path(), 3);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().error_code(), "SNAPSHOT_PARSE_ERROR");
    }

    #[test]
    fn test_negative_handle_file_name() {
        // Handle values are pointer-sized and can print as negative on
        // some windows; the store must round-trip them all the same.
        let temp = TempDir::new().unwrap();
        save_snapshot(temp.path(), -8, &snapshot(0x1, 0x0)).unwrap();
        assert!(temp.path().join("-8.json").exists());
        assert!(load_snapshot(temp.path(), -8).unwrap().is_some());
    }
}
