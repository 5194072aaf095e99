use snapsheet_core::error::Error;
use snapsheet_core::traits::{RegionCapturer, RowAppender, TextRecognizer};
use snapsheet_core::{preprocess, stamp};
use snapsheet_types::{CaptureRegion, PipelineStage, RowRecord};

#[derive(Debug)]
pub enum PipelineOutcome {
    Appended { row: u32, record: RowRecord },
    SkippedBlank,
}

/// One trigger handling: capture, recognize, append.
///
/// Runs synchronously; the caller decides which thread pays for the
/// blocking work. Any error aborts the chain, and the workbook is only
/// touched in the final step.
pub fn run_trigger(
    capturer: &dyn RegionCapturer,
    recognizer: Option<&dyn TextRecognizer>,
    appender: &dyn RowAppender,
    region: CaptureRegion,
    skip_blank: bool,
    mut on_stage: impl FnMut(PipelineStage),
) -> Result<PipelineOutcome, Error> {
    // A failed model-data check at startup lands here on every press,
    // before any capture is attempted.
    let recognizer = recognizer.ok_or(Error::EngineNotInitialized)?;

    on_stage(PipelineStage::Capturing);
    let png = capturer.capture(region)?;

    on_stage(PipelineStage::Recognizing);
    let raw = recognizer.recognize(&png)?;
    let text = preprocess::tidy(&raw);

    if skip_blank && preprocess::is_blank(&text) {
        on_stage(PipelineStage::Idle);
        return Ok(PipelineOutcome::SkippedBlank);
    }

    on_stage(PipelineStage::Writing);
    let record = RowRecord::new(stamp::now(), text);
    let row = appender.append(&record)?;

    on_stage(PipelineStage::Idle);
    Ok(PipelineOutcome::Appended { row, record })
}
