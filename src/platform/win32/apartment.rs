#![allow(unsafe_code)]

use windows::Win32::System::Com::{CoInitializeEx, COINIT_APARTMENTTHREADED};

use crate::error::Result;

/// Join a single-threaded COM apartment on the calling thread.
///
/// MUST be called before any dialog is shown.  A second call on the same
/// thread returns `S_FALSE`, which counts as success.  The apartment is left
/// open until process exit; there is no matching `CoUninitialize`.
pub(crate) fn init_single_threaded() -> Result<()> {
    // SAFETY: pvReserved must be null (None).  Called once from the UI thread
    // at start-up, before any COM object exists on it.
    unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) }.ok()?;
    log::debug!("joined single-threaded apartment");
    Ok(())
}
