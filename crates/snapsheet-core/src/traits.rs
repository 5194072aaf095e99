use snapsheet_types::{CaptureRegion, RowRecord};

use crate::error::Error;

/// Produces a PNG-encoded bitmap of a screen rectangle.
pub trait RegionCapturer: Send + Sync {
    fn capture(&self, region: CaptureRegion) -> Result<Vec<u8>, Error>;
}

/// Turns a PNG-encoded bitmap into a best-effort transcription.
pub trait TextRecognizer: Send + Sync {
    fn recognize(&self, png: &[u8]) -> Result<String, Error>;
}

/// Appends one record after the last used row of the target sheet.
///
/// Returns the 1-based row the record landed in. Implementations must
/// either write the full row and persist it, or leave the workbook
/// untouched.
pub trait RowAppender: Send + Sync {
    fn append(&self, record: &RowRecord) -> Result<u32, Error>;
}

/// Screen-space sanity check for a configured region.
pub fn validate_region(region: &CaptureRegion) -> Result<(), Error> {
    if region.width == 0 || region.height == 0 {
        return Err(Error::InvalidRegion(format!(
            "{}x{} at ({}, {})",
            region.width, region.height, region.x, region.y
        )));
    }
    Ok(())
}
