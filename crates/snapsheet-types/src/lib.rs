pub mod types;

pub use types::{AppEvent, AppendStrategy, CaptureRegion, PipelineStage, RowRecord};
