use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::state::SharedState;

/// All API routes of the mock server.
pub fn configure_routes(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // AUTH
        // ========================================
        .route("/api/auth/login", post(handlers::auth::login))
        // ========================================
        // DASHBOARDS
        // ========================================
        .route("/api/roi/summary", get(handlers::dashboard::roi_summary))
        .route("/api/roi/details", get(handlers::dashboard::roi_details))
        .route(
            "/api/dashboard/quick-stats",
            get(handlers::dashboard::quick_stats),
        )
        .route(
            "/api/visualizations",
            post(handlers::dashboard::visualization_data),
        )
        .route("/api/actions", get(handlers::dashboard::actionable_items))
        .route("/api/reports/weekly", get(handlers::reports::weekly_report))
        // ========================================
        // INVENTORY & SALES
        // ========================================
        .route(
            "/api/medicines/low-stock",
            get(handlers::inventory::low_stock),
        )
        .route(
            "/api/sales/top-selling",
            get(handlers::inventory::top_selling),
        )
        // ========================================
        // AI ADVISOR
        // ========================================
        .route(
            "/api/advisor/advice",
            get(handlers::advisor::business_advice),
        )
        .route("/api/advisor/insights", get(handlers::advisor::insights))
        .route("/api/advisor/chat", post(handlers::advisor::chat))
        // ========================================
        // SETTINGS & UPLOAD
        // ========================================
        .route("/api/settings", post(handlers::settings::update_settings))
        .route("/api/upload", post(handlers::upload::upload))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::state::AppState;
    use contracts::store::MockStore;
    use std::time::Duration;

    #[test]
    fn test_routes_build_without_conflicts() {
        let state = AppState::new(MockStore::seeded(), Duration::ZERO);
        let _router = configure_routes(state);
    }
}
