use contracts::store::MockStore;
use std::sync::Arc;
use std::time::Duration;

/// Shared by every handler; the store is never mutated.
#[derive(Debug)]
pub struct AppState {
    pub store: MockStore,
    pub latency: Duration,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(store: MockStore, latency: Duration) -> SharedState {
        Arc::new(Self { store, latency })
    }

    /// Waits for the configured mock latency, if any.
    pub async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}
