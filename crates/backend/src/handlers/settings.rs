use axum::extract::State;
use axum::Json;
use contracts::system::settings::{SettingsResponse, SettingsUpdate};

use crate::shared::error::ApiError;
use crate::shared::state::SharedState;

/// POST /api/settings
pub async fn update_settings(
    State(state): State<SharedState>,
    Json(update): Json<SettingsUpdate>,
) -> Result<Json<SettingsResponse>, ApiError> {
    state.simulate_latency().await;
    match &update {
        // Never log password values
        SettingsUpdate::Password { .. } => tracing::info!("Saving settings: password change"),
        other => tracing::info!("Saving settings: {:?}", other),
    }
    Ok(Json(state.store.acknowledge_settings(&update)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::state;
    use contracts::system::settings::NotificationSettings;

    #[tokio::test]
    async fn test_settings_acknowledged() {
        let Json(response) = update_settings(
            state(),
            Json(SettingsUpdate::Notifications(NotificationSettings::default())),
        )
        .await
        .unwrap();
        assert_eq!(response.message, "Settings updated successfully!");
    }
}
