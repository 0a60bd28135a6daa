use axum::extract::State;
use axum::Json;
use contracts::usecases::u501_upload_data::request::{UploadRequest, UploadResponse};

use crate::shared::error::ApiError;
use crate::shared::state::SharedState;

/// POST /api/upload
///
/// Acknowledges the file by name; nothing is stored.
pub async fn upload(
    State(state): State<SharedState>,
    Json(request): Json<UploadRequest>,
) -> Result<Json<UploadResponse>, ApiError> {
    state.simulate_latency().await;
    tracing::info!("Upload received: {}", request.file_name);
    Ok(Json(state.store.acknowledge_upload(&request.file_name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::state;

    #[tokio::test]
    async fn test_upload_acknowledged_by_name() {
        let Json(response) = upload(
            state(),
            Json(UploadRequest {
                file_name: "march.csv".into(),
            }),
        )
        .await
        .unwrap();
        assert!(response.message.starts_with("File \"march.csv\""));
    }
}
