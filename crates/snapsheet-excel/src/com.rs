use snapsheet_core::error::Error;

/// RAII guard for COM initialization.
///
/// CoUninitialize runs on drop, covering early returns and panics on
/// the calling thread.
pub struct ComGuard;

impl ComGuard {
    /// Initialize COM for the current thread.
    ///
    /// Apartment threaded: the automation server marshals calls through
    /// the owning apartment.
    pub fn initialize() -> Result<Self, Error> {
        unsafe {
            windows::Win32::System::Com::CoInitializeEx(
                None,
                windows::Win32::System::Com::COINIT_APARTMENTTHREADED,
            )
            .ok()
            .map_err(|e| Error::Workbook(format!("COM initialization failed: {e}")))?;
        }
        Ok(ComGuard)
    }
}

impl Drop for ComGuard {
    fn drop(&mut self) {
        unsafe {
            windows::Win32::System::Com::CoUninitialize();
        }
    }
}
