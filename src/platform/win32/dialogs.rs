// ── Message boxes ─────────────────────────────────────────────────────────────
//
// Thin wrappers around `MessageBoxW`.  Both take Rust strings and perform the
// UTF-16 conversion internally.
//
// This is inside `platform::win32` so `unsafe` is permitted per crate policy.

#![allow(unsafe_code)]

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::HWND,
        UI::WindowsAndMessaging::{
            GetDesktopWindow, MessageBoxW, MB_ICONERROR, MB_OK,
        },
    },
};

use super::last_error;
use crate::error::Result;

// ── Informational dialog ──────────────────────────────────────────────────────

/// Show a modal OK-only message box owned by the desktop window.
///
/// Blocks until the user dismisses it.
pub(crate) fn show_message(title: &str, text: &str) -> Result<()> {
    let text_wide = to_wide(text);
    let title_wide = to_wide(title);

    // SAFETY: GetDesktopWindow takes no arguments and always returns the
    // desktop's HWND, which is valid for the session lifetime.
    let owner = unsafe { GetDesktopWindow() };

    // SAFETY: text_wide and title_wide are valid null-terminated UTF-16
    // strings that remain allocated for the duration of the call.  The call
    // is made on the thread that initialised the apartment.
    let ret = unsafe {
        MessageBoxW(
            owner,
            PCWSTR(text_wide.as_ptr()),
            PCWSTR(title_wide.as_ptr()),
            MB_OK,
        )
    };

    // Zero means the box could not be created.
    if ret.0 == 0 {
        return Err(last_error("MessageBoxW"));
    }
    Ok(())
}

// ── Fatal error dialog ────────────────────────────────────────────────────────

/// Show a modal error dialog with the given message.
///
/// Safe to call from any context.  Used by `main()` when the demo fails.
pub(crate) fn show_error_dialog(message: &str) {
    let msg_wide = to_wide(message);
    let title_wide = to_wide("Coords — Fatal Error");

    // SAFETY: msg_wide and title_wide are valid null-terminated UTF-16 strings
    // that remain allocated for the duration of the MessageBoxW call.
    // HWND::default() (null) means the dialog has no owner window.
    // Return value (button pressed) is intentionally unused for an error dialog.
    unsafe {
        let _ = MessageBoxW(
            HWND::default(),
            PCWSTR(msg_wide.as_ptr()),
            PCWSTR(title_wide.as_ptr()),
            MB_OK | MB_ICONERROR,
        );
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Encode `s` as a null-terminated UTF-16 buffer.
fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}
