use std::io::Write;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use snapsheet_config::Config;
use snapsheet_types::AppEvent;
use tokio::sync::RwLock;

/// Console status surface. Outcome reporting only; the functional
/// contract lives in the event loop.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    _ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    let ui = {
        let config = config.read().await;
        config.ui.clone()
    };

    while let Ok(event) = app_to_ui_rx.recv().await {
        match event {
            AppEvent::HotkeyReady { combo } => {
                println!("ready - press {combo} to capture");
            }
            AppEvent::StageChanged(stage) => {
                tracing::debug!(%stage, "pipeline stage");
            }
            AppEvent::RowAppended { row, record } => {
                if ui.bell {
                    // audible success cue
                    print!("\x07");
                }
                println!(
                    "[{}] row {row}: {}",
                    record.timestamp,
                    preview(&record.text, ui.preview_chars)
                );
                std::io::stdout().flush().ok();
            }
            AppEvent::AppendSkipped => {
                println!("nothing recognized, no row written");
            }
            AppEvent::PipelineFailed { message } => {
                eprintln!("error: {message}");
            }
            AppEvent::Close => break,
            _ => {}
        }
    }

    Ok(())
}

/// Single status line worth of text.
fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut out: String = flat.chars().take(max_chars).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_passes_through() {
        assert_eq!(preview("123.45", 80), "123.45");
    }

    #[test]
    fn line_breaks_are_flattened() {
        assert_eq!(preview("a\nb", 80), "a b");
    }

    #[test]
    fn long_text_is_truncated_by_chars() {
        let long = "x".repeat(100);
        let shown = preview(&long, 10);
        assert_eq!(shown.chars().count(), 11);
        assert!(shown.ends_with('…'));
    }
}
