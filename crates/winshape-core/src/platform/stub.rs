//! Non-Windows backend. Keeps the workspace compiling on other hosts;
//! every OS-touching call reports the platform as unsupported.

use super::{Bounds, OsError, RawHandle};

pub fn is_window(_handle: RawHandle) -> bool {
    false
}

pub fn is_window_visible(_handle: RawHandle) -> bool {
    false
}

pub fn enumerate_windows() -> Result<Vec<RawHandle>, OsError> {
    Err(OsError::unsupported("EnumWindows"))
}

pub fn window_title(_handle: RawHandle) -> String {
    String::new()
}

pub fn window_bounds(_handle: RawHandle) -> Result<Bounds, OsError> {
    Err(OsError::unsupported("GetWindowRect"))
}

pub fn move_window(
    _handle: RawHandle,
    _x: i32,
    _y: i32,
    _width: i32,
    _height: i32,
) -> Result<(), OsError> {
    Err(OsError::unsupported("SetWindowPos"))
}

pub fn apply_frame_change(
    _handle: RawHandle,
    _x: i32,
    _y: i32,
    _width: i32,
    _height: i32,
) -> Result<(), OsError> {
    Err(OsError::unsupported("SetWindowPos"))
}

pub fn window_style(_handle: RawHandle) -> Result<u32, OsError> {
    Err(OsError::unsupported("GetWindowLongW"))
}

pub fn window_exstyle(_handle: RawHandle) -> Result<u32, OsError> {
    Err(OsError::unsupported("GetWindowLongW"))
}

pub fn set_window_style(_handle: RawHandle, _style: u32) -> Result<(), OsError> {
    Err(OsError::unsupported("SetWindowLongW"))
}

pub fn set_window_exstyle(_handle: RawHandle, _exstyle: u32) -> Result<(), OsError> {
    Err(OsError::unsupported("SetWindowLongW"))
}

pub fn cursor_pos() -> Result<(i32, i32), OsError> {
    Err(OsError::unsupported("GetCursorPos"))
}

pub fn window_from_point(_x: i32, _y: i32) -> Option<RawHandle> {
    None
}

pub fn register_hotkey(_id: i32, _key: char) -> Result<(), OsError> {
    Err(OsError::unsupported("RegisterHotKey"))
}

pub fn unregister_hotkey(_id: i32) {}

pub fn poll_hotkey() -> Option<i32> {
    None
}
