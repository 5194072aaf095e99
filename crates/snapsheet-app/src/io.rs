use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use snapsheet_ocr::HotkeyManager;
use snapsheet_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Hotkey watcher: registers the global combination and turns presses
/// into trigger events for the main loop.
pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (combo, region, delta_time) = {
        let config = state.config.read().await;
        (
            config.hotkey.combo.clone(),
            config.ocr.capture_region,
            config.delta_time,
        )
    };

    tokio::task::spawn_blocking(move || {
        let manager = match HotkeyManager::with_combo(&combo) {
            Ok(manager) => manager,
            Err(e) => {
                // combination taken by another process; triggers will
                // simply never arrive
                tracing::error!("hotkey registration failed: {e}");
                return;
            }
        };

        tracing::info!("hotkey registered ({combo})");
        let _ = event_tx.try_send(AppEvent::HotkeyReady {
            combo: combo.clone(),
        });

        loop {
            if cancel.is_cancelled() {
                break;
            }

            if manager.poll() {
                tracing::info!("hotkey pressed");
                if let Err(e) = event_tx.try_send(AppEvent::TriggerCapture(region)) {
                    tracing::error!("failed to queue trigger: {e}");
                }
            }

            std::thread::sleep(Duration::from_millis(delta_time));
        }

        tracing::info!("hotkey listener stopping");
    })
    .await?;

    Ok(())
}
