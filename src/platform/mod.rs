// ── Platform abstraction layer ────────────────────────────────────────────────
//
// This module defines the interface that the rest of the codebase uses to
// talk to the OS.  No `unsafe` lives here; all Win32 FFI is confined to the
// `win32` sub-module and never leaks outward.  Non-Windows targets get the
// `console` fallback so the coordinate logic stays portable.

use crate::error::Result;

#[cfg(windows)]
pub mod win32;

#[cfg(not(windows))]
pub mod console;

// ── Message display ───────────────────────────────────────────────────────────

/// Anything that can present a titled, modal, OK-only message to the user.
pub trait MessageSink {
    /// Present `text` under `title`.  Returns once the user has dismissed it.
    fn show(&self, title: &str, text: &str) -> Result<()>;
}

/// The platform's native message display: `MessageBoxW` on Windows, stdout
/// elsewhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialog;

impl MessageSink for NativeDialog {
    fn show(&self, title: &str, text: &str) -> Result<()> {
        #[cfg(windows)]
        {
            win32::dialogs::show_message(title, text)
        }
        #[cfg(not(windows))]
        {
            console::show_message(title, text)
        }
    }
}

// ── Runtime lifecycle ─────────────────────────────────────────────────────────

/// Prepare the calling thread for platform calls.
///
/// On Windows this joins a single-threaded COM apartment; elsewhere it does
/// nothing.  Call once, on the UI thread, before any dialog is shown.
pub fn init_runtime() -> Result<()> {
    #[cfg(windows)]
    {
        win32::apartment::init_single_threaded()
    }
    #[cfg(not(windows))]
    {
        Ok(())
    }
}

/// Show a fatal-error message.  Never fails; used by `main()` on exit paths.
pub fn show_error_dialog(message: &str) {
    #[cfg(windows)]
    win32::dialogs::show_error_dialog(message);
    #[cfg(not(windows))]
    console::show_error(message);
}
