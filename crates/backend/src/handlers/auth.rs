use axum::extract::State;
use axum::Json;
use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::error::ApiError;
use crate::shared::state::SharedState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<SharedState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    state.simulate_latency().await;
    let response = state.store.login(&request)?;
    tracing::info!("User {} signed in", response.user.email);
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::state;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    fn request(email: &str, password: &str) -> Json<LoginRequest> {
        Json(LoginRequest {
            email: email.into(),
            password: password.into(),
        })
    }

    #[tokio::test]
    async fn test_login_accepts_any_email() {
        let Json(response) = login(state(), request("ravi@store.in", "secret"))
            .await
            .unwrap();
        assert_eq!(response.user.name, "Ravi");
    }

    #[tokio::test]
    async fn test_login_rejects_missing_password() {
        let err = login(state(), request("ravi@store.in", "")).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
