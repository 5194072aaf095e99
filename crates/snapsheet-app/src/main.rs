use std::future::Future;
use std::sync::Arc;

use anyhow::Context;

mod controller;
mod events;
mod io;
mod pipeline;
mod profile;
mod state;
mod status;
mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = profile::init_user_config() {
        tracing::warn!("could not initialize user profiles: {e}");
    }
    let config = profile::load_config();
    config.validate().context("invalid configuration")?;

    // Engine setup touches the process environment, so the state is
    // built before the runtime spawns worker threads.
    let state = Arc::new(AppState::new(config));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build runtime")?;

    runtime.block_on(run(state, async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl+c");
    }));

    Ok(())
}

pub async fn run(state: Arc<AppState>, shutdown: impl Future<Output = ()>) {
    let controller = AppController::new(state.clone());
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::warn!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;

    let (triggers, appended, skipped, errors) = state.status.snapshot();
    tracing::info!(triggers, appended, skipped, errors, "session summary");
}
