use std::sync::Arc;

use kanal::AsyncSender;
use snapsheet_core::traits::{RowAppender, TextRecognizer};
use snapsheet_ocr::ScreenCapturer;
use snapsheet_types::{AppEvent, CaptureRegion, PipelineStage};

use crate::pipeline::{self, PipelineOutcome};
use crate::state::AppState;

pub async fn handle_capture_trigger(
    state: Arc<AppState>,
    region: CaptureRegion,
    appender: Arc<dyn RowAppender>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let skip_blank = {
        let config = state.config.read().await;
        config.excel.skip_blank
    };

    state.status.record_trigger();

    let state_blocking = state.clone();
    let stage_tx = app_to_ui_tx.clone();
    let result = tokio::task::spawn_blocking(move || {
        let capturer = ScreenCapturer;
        pipeline::run_trigger(
            &capturer,
            state_blocking
                .recognizer
                .as_ref()
                .map(|r| r as &dyn TextRecognizer),
            appender.as_ref(),
            region,
            skip_blank,
            |stage: PipelineStage| {
                // best effort from the blocking thread
                let _ = stage_tx.try_send(AppEvent::StageChanged(stage));
            },
        )
    })
    .await?;

    match result {
        Ok(PipelineOutcome::Appended { row, record }) => {
            state.status.record_append();
            tracing::info!(row, chars = record.text.len(), "row appended");
            let _ = app_to_ui_tx.send(AppEvent::RowAppended { row, record }).await;
        }
        Ok(PipelineOutcome::SkippedBlank) => {
            state.status.record_skip();
            tracing::info!("blank recognition, nothing appended");
            let _ = app_to_ui_tx.send(AppEvent::AppendSkipped).await;
        }
        Err(e) => {
            state.status.record_error();
            tracing::error!("trigger failed: {e}");
            let _ = app_to_ui_tx
                .send(AppEvent::PipelineFailed {
                    message: e.to_string(),
                })
                .await;
        }
    }

    Ok(())
}
