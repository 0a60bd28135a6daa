pub mod advisor;
pub mod auth;
pub mod dashboard;
pub mod inventory;
pub mod reports;
pub mod settings;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::shared::state::{AppState, SharedState};
    use axum::extract::State;
    use contracts::store::MockStore;
    use std::time::Duration;

    pub fn state() -> State<SharedState> {
        State(AppState::new(MockStore::seeded(), Duration::ZERO))
    }
}
