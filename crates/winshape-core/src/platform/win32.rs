//! Win32 backend. The only module in the crate containing `unsafe`.

use windows::Win32::Foundation::{BOOL, HWND, LPARAM, POINT, RECT, SetLastError, TRUE, WIN32_ERROR};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    MOD_ALT, MOD_CONTROL, RegisterHotKey, UnregisterHotKey,
};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GWL_EXSTYLE, GWL_STYLE, GetCursorPos, GetWindowLongW, GetWindowRect,
    GetWindowTextW, IsWindow, IsWindowVisible, MSG, PM_REMOVE, PeekMessageW, SWP_FRAMECHANGED,
    SWP_NOOWNERZORDER, SWP_NOZORDER, SetWindowLongW, SetWindowPos, WM_HOTKEY, WindowFromPoint,
};

use super::{Bounds, OsError, RawHandle};

fn hwnd(handle: RawHandle) -> HWND {
    HWND(handle as *mut core::ffi::c_void)
}

/// Run a Get/SetWindowLongW-style call whose zero return is ambiguous:
/// zero is an error only when GetLastError reports one.
fn checked_long_call(call: &'static str, f: impl FnOnce() -> i32) -> Result<i32, OsError> {
    unsafe { SetLastError(WIN32_ERROR(0)) };
    let value = f();
    if value == 0 {
        let err = windows::core::Error::from_win32();
        if err.code().is_err() {
            return Err(OsError::call_failed(call, err.message()));
        }
    }
    Ok(value)
}

pub fn is_window(handle: RawHandle) -> bool {
    if handle == 0 {
        return false;
    }
    unsafe { IsWindow(hwnd(handle)).as_bool() }
}

pub fn is_window_visible(handle: RawHandle) -> bool {
    unsafe { IsWindowVisible(hwnd(handle)).as_bool() }
}

/// Enumerate all top-level windows in OS order.
pub fn enumerate_windows() -> Result<Vec<RawHandle>, OsError> {
    unsafe extern "system" fn collect(window: HWND, lparam: LPARAM) -> BOOL {
        let handles = unsafe { &mut *(lparam.0 as *mut Vec<RawHandle>) };
        handles.push(window.0 as isize);
        TRUE
    }

    let mut handles: Vec<RawHandle> = Vec::new();
    unsafe {
        EnumWindows(
            Some(collect),
            LPARAM(&mut handles as *mut Vec<RawHandle> as isize),
        )
    }
    .map_err(|e| OsError::call_failed("EnumWindows", e.message()))?;
    Ok(handles)
}

pub fn window_title(handle: RawHandle) -> String {
    let mut buf = [0u16; 512];
    let len = unsafe { GetWindowTextW(hwnd(handle), &mut buf) };
    String::from_utf16_lossy(&buf[..len.max(0) as usize])
}

pub fn window_bounds(handle: RawHandle) -> Result<Bounds, OsError> {
    let mut rect = RECT::default();
    unsafe { GetWindowRect(hwnd(handle), &mut rect) }
        .map_err(|e| OsError::call_failed("GetWindowRect", e.message()))?;
    Ok(Bounds {
        left: rect.left,
        top: rect.top,
        right: rect.right,
        bottom: rect.bottom,
    })
}

/// Reposition/resize a window without touching its z-order or owner order.
pub fn move_window(
    handle: RawHandle,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
) -> Result<(), OsError> {
    unsafe {
        SetWindowPos(
            hwnd(handle),
            None,
            x,
            y,
            width,
            height,
            SWP_NOZORDER | SWP_NOOWNERZORDER,
        )
    }
    .map_err(|e| OsError::call_failed("SetWindowPos", e.message()))
}

/// Request a frame-changed repaint after a style mutation.
///
/// The one-pixel nudge on each axis is required to make some windows
/// actually redraw their frame; it is not reverted.
pub fn apply_frame_change(
    handle: RawHandle,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
) -> Result<(), OsError> {
    unsafe {
        SetWindowPos(
            hwnd(handle),
            None,
            x,
            y,
            width + 1,
            height + 1,
            SWP_FRAMECHANGED | SWP_NOZORDER | SWP_NOOWNERZORDER,
        )
    }
    .map_err(|e| OsError::call_failed("SetWindowPos", e.message()))
}

pub fn window_style(handle: RawHandle) -> Result<u32, OsError> {
    checked_long_call("GetWindowLongW", || unsafe {
        GetWindowLongW(hwnd(handle), GWL_STYLE)
    })
    .map(|v| v as u32)
}

pub fn window_exstyle(handle: RawHandle) -> Result<u32, OsError> {
    checked_long_call("GetWindowLongW", || unsafe {
        GetWindowLongW(hwnd(handle), GWL_EXSTYLE)
    })
    .map(|v| v as u32)
}

pub fn set_window_style(handle: RawHandle, style: u32) -> Result<(), OsError> {
    checked_long_call("SetWindowLongW", || unsafe {
        SetWindowLongW(hwnd(handle), GWL_STYLE, style as i32)
    })
    .map(|_| ())
}

pub fn set_window_exstyle(handle: RawHandle, exstyle: u32) -> Result<(), OsError> {
    checked_long_call("SetWindowLongW", || unsafe {
        SetWindowLongW(hwnd(handle), GWL_EXSTYLE, exstyle as i32)
    })
    .map(|_| ())
}

pub fn cursor_pos() -> Result<(i32, i32), OsError> {
    let mut point = POINT::default();
    unsafe { GetCursorPos(&mut point) }
        .map_err(|e| OsError::call_failed("GetCursorPos", e.message()))?;
    Ok((point.x, point.y))
}

pub fn window_from_point(x: i32, y: i32) -> Option<RawHandle> {
    let hit = unsafe { WindowFromPoint(POINT { x, y }) };
    if hit.0.is_null() {
        None
    } else {
        Some(hit.0 as isize)
    }
}

/// Register Ctrl+Alt+`key` as a process-wide hotkey delivered to the calling
/// thread's message queue. `key` must be an ASCII uppercase letter; its
/// codepoint is the Win32 virtual-key code.
pub fn register_hotkey(id: i32, key: char) -> Result<(), OsError> {
    unsafe { RegisterHotKey(None, id, MOD_CONTROL | MOD_ALT, key as u32) }
        .map_err(|e| OsError::call_failed("RegisterHotKey", e.message()))
}

/// Best-effort unregistration; called from Drop where failure has nowhere
/// to propagate.
pub fn unregister_hotkey(id: i32) {
    let _ = unsafe { UnregisterHotKey(None, id) };
}

/// Drain one pending WM_HOTKEY message, returning its hotkey id.
pub fn poll_hotkey() -> Option<i32> {
    let mut msg = MSG::default();
    let pending = unsafe { PeekMessageW(&mut msg, None, WM_HOTKEY, WM_HOTKEY, PM_REMOVE) };
    if pending.as_bool() && msg.message == WM_HOTKEY {
        Some(msg.wParam.0 as i32)
    } else {
        None
    }
}
