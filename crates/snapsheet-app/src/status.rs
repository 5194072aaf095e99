use std::sync::atomic::{AtomicU64, Ordering};

/// Per-process counters for the status surface and shutdown log line.
#[derive(Default)]
pub struct AppStatus {
    pub trigger_count: AtomicU64,
    pub append_count: AtomicU64,
    pub skip_count: AtomicU64,
    pub error_count: AtomicU64,
}

impl AppStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_trigger(&self) {
        self.trigger_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_append(&self) {
        self.append_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_skip(&self) {
        self.skip_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.error_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> (u64, u64, u64, u64) {
        (
            self.trigger_count.load(Ordering::Relaxed),
            self.append_count.load(Ordering::Relaxed),
            self.skip_count.load(Ordering::Relaxed),
            self.error_count.load(Ordering::Relaxed),
        )
    }
}
