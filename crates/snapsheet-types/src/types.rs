use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    TriggerCapture(CaptureRegion),
    StageChanged(PipelineStage),
    RowAppended {
        row: u32,
        record: RowRecord,
    },
    AppendSkipped,
    PipelineFailed {
        message: String,
    },
    HotkeyReady {
        combo: String,
    },
    Close,
}

/// Where the orchestrator currently is inside one trigger handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Idle,
    Capturing,
    Recognizing,
    Writing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PipelineStage::Idle => "idle",
            PipelineStage::Capturing => "capturing",
            PipelineStage::Recognizing => "recognizing",
            PipelineStage::Writing => "writing",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRegion {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// One appended spreadsheet row: column A is the timestamp,
/// column B the recognized text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowRecord {
    pub timestamp: String,
    pub text: String,
}

impl RowRecord {
    pub fn new(timestamp: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            text: text.into(),
        }
    }
}

/// How recognized rows reach the workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppendStrategy {
    /// Open the workbook file, append, save, close.
    File,
    /// Attach to a running spreadsheet application and mutate its
    /// open workbook (Windows only).
    Live,
}

impl Default for AppendStrategy {
    fn default() -> Self {
        AppendStrategy::File
    }
}
