use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::alert::AlertInfo;
use contracts::system::auth::LoginError;
use thiserror::Error;

/// Error returned by API handlers. The body is always an `AlertInfo` so the
/// client can show it as is.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("login rejected: {0}")]
    Login(#[from] LoginError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Login(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn alert(&self) -> AlertInfo {
        match self {
            ApiError::Login(e) => e.to_alert(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);
        (self.status(), Json(self.alert())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_errors_are_bad_requests() {
        let err = ApiError::from(LoginError::InvalidEmail);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.alert().title, "Login Failed");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
