use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use snapsheet_core::traits::RowAppender;
use snapsheet_types::AppEvent;

use crate::state::AppState;

pub mod trigger_capture;

use trigger_capture::handle_capture_trigger;

/// App's main loop: triggers are handled one at a time, in arrival
/// order, so overlapping hotkey presses serialize here.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    // Build the appender once; both strategies are stateless between
    // triggers, the choice itself is configuration.
    let appender: Arc<dyn RowAppender> = {
        let config = state.config.read().await;
        snapsheet_excel::build_appender(
            config.excel.strategy,
            &config.excel.workbook,
            &config.excel.sheet,
        )?
        .into()
    };

    tracing::info!("event loop started, waiting for triggers");
    loop {
        let event = ui_to_app_rx.recv().await?;
        if !handle_events(state.clone(), appender.clone(), &app_to_ui_tx, event).await? {
            return Ok(());
        }
    }
}

async fn handle_events(
    state: Arc<AppState>,
    appender: Arc<dyn RowAppender>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<bool> {
    match event {
        AppEvent::TriggerCapture(region) => {
            handle_capture_trigger(state, region, appender, app_to_ui_tx).await?;
        }
        AppEvent::HotkeyReady { combo } => {
            // forward to the status surface
            let _ = app_to_ui_tx.send(AppEvent::HotkeyReady { combo }).await;
        }
        AppEvent::Close => {
            let _ = app_to_ui_tx.send(AppEvent::Close).await;
            return Ok(false);
        }
        _ => {}
    }
    Ok(true)
}
