// ── Win32 platform implementation ─────────────────────────────────────────────
//
// This is the only module in the codebase where `unsafe` code is permitted.
// Every `unsafe` block MUST carry a `// SAFETY:` comment that states:
//   • which invariant makes the operation sound, and
//   • what the caller is responsible for maintaining.
//
// Nothing in this module is `pub` beyond what callers genuinely need; keep the
// unsafe surface as small as possible.

#![allow(unsafe_code)]

use windows::Win32::Foundation::GetLastError;

use crate::error::CoordsError;

// ── Sub-modules ───────────────────────────────────────────────────────────────

pub(crate) mod apartment; // COM apartment initialisation
pub(crate) mod dialogs; // MessageBoxW wrappers

// ── Error helpers ─────────────────────────────────────────────────────────────

/// Capture the current Win32 last-error code and wrap it in a `CoordsError`.
///
/// Call immediately after a Win32 function that signals failure — `GetLastError`
/// reads thread-local state that can be overwritten by any subsequent API call.
pub(crate) fn last_error(function: &'static str) -> CoordsError {
    // SAFETY: GetLastError reads thread-local state set by the last Win32 call.
    // It is always safe to call and never fails.
    let code = unsafe { GetLastError() };
    CoordsError::Win32 {
        function,
        code: code.0,
    }
}
