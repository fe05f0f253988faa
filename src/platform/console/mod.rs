// ── Console fallback ──────────────────────────────────────────────────────────
//
// Used on targets without Win32 message boxes.  Messages go to stdout,
// fatal errors to stderr.

use std::io::Write;

use crate::error::Result;

/// Print `title: text` on its own line.
pub(crate) fn show_message(title: &str, text: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{title}: {text}")?;
    out.flush()?;
    Ok(())
}

pub(crate) fn show_error(message: &str) {
    eprintln!("coords: fatal error: {message}");
}
