use snapsheet_core::error::Error;
use snapsheet_core::traits::RegionCapturer;
use snapsheet_types::CaptureRegion;
use xcap::Monitor;

/// Captures screen rectangles through the OS compositor.
pub struct ScreenCapturer;

impl RegionCapturer for ScreenCapturer {
    fn capture(&self, region: CaptureRegion) -> Result<Vec<u8>, Error> {
        capture_screen_region(region)
    }
}

/// Capture a region of the screen as PNG bytes.
///
/// The monitor containing the region is used; a region outside every
/// monitor falls back to the first one.
pub fn capture_screen_region(region: CaptureRegion) -> Result<Vec<u8>, Error> {
    let monitors =
        Monitor::all().map_err(|e| Error::Capture(format!("failed to enumerate monitors: {e}")))?;

    let monitor = monitors
        .iter()
        .find(|m| {
            region.x >= m.x()
                && region.y >= m.y()
                && region.x + region.width as i32 <= m.x() + m.width() as i32
                && region.y + region.height as i32 <= m.y() + m.height() as i32
        })
        .or(monitors.first())
        .ok_or_else(|| Error::Capture("no monitor found".to_string()))?;

    let image = monitor
        .capture_image()
        .map_err(|e| Error::Capture(format!("screen copy failed: {e}")))?;

    let cropped = xcap::image::imageops::crop_imm(
        &image,
        (region.x - monitor.x()).max(0) as u32,
        (region.y - monitor.y()).max(0) as u32,
        region.width,
        region.height,
    )
    .to_image();

    encode_png(&cropped)
}

fn encode_png(image: &xcap::image::RgbaImage) -> Result<Vec<u8>, Error> {
    use xcap::image::ImageEncoder;
    let mut buffer = Vec::new();
    xcap::image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            xcap::image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| Error::Capture(format!("failed to encode PNG: {e}")))?;
    Ok(buffer)
}
