use serde::{Deserialize, Serialize};

/// Style bitmasks captured before a borderless apply, for later restore.
///
/// Persisted one file per window handle. The handle is only the file name:
/// if the OS recycles a handle value after the window closes, a stale
/// snapshot will be applied to whatever window owns that value now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSnapshot {
    pub original_style: u32,
    pub original_exstyle: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_serialization_round_trip() {
        let snapshot = StyleSnapshot {
            original_style: 0x14CF_0000,
            original_exstyle: 0x0000_0100,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let loaded: StyleSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_snapshot_field_names() {
        let snapshot = StyleSnapshot {
            original_style: 1,
            original_exstyle: 2,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"original_style\":1"));
        assert!(json.contains("\"original_exstyle\":2"));
    }
}
