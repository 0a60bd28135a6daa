use axum::extract::State;
use axum::Json;
use chrono::Local;
use contracts::dashboards::d400_roi::dto::{RoiDetails, RoiSummary};
use contracts::dashboards::d401_visualizations::dto::{VisualizationConfig, VisualizationData};
use contracts::dashboards::d403_quick_stats::dto::QuickStats;
use contracts::domain::a003_actionable_item::aggregate::ActionableItem;

use crate::shared::error::ApiError;
use crate::shared::state::SharedState;

/// GET /api/roi/summary
pub async fn roi_summary(State(state): State<SharedState>) -> Result<Json<RoiSummary>, ApiError> {
    state.simulate_latency().await;
    Ok(Json(state.store.roi_summary()))
}

/// GET /api/roi/details
pub async fn roi_details(State(state): State<SharedState>) -> Result<Json<RoiDetails>, ApiError> {
    state.simulate_latency().await;
    let today = Local::now().date_naive();
    Ok(Json(state.store.roi_details(today)))
}

/// GET /api/dashboard/quick-stats
pub async fn quick_stats(State(state): State<SharedState>) -> Result<Json<QuickStats>, ApiError> {
    state.simulate_latency().await;
    Ok(Json(state.store.quick_stats()))
}

/// POST /api/visualizations
pub async fn visualization_data(
    State(state): State<SharedState>,
    Json(config): Json<VisualizationConfig>,
) -> Result<Json<VisualizationData>, ApiError> {
    state.simulate_latency().await;
    tracing::debug!("Visualization requested: {:?}", config);
    Ok(Json(state.store.visualization_data(config)))
}

/// GET /api/actions
pub async fn actionable_items(
    State(state): State<SharedState>,
) -> Result<Json<Vec<ActionableItem>>, ApiError> {
    state.simulate_latency().await;
    Ok(Json(state.store.actionable_items()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::state;
    use contracts::dashboards::d401_visualizations::dto::{ChartType, Dimension, Metric};

    #[tokio::test]
    async fn test_roi_summary_is_canned() {
        let Json(summary) = roi_summary(state()).await.unwrap();
        assert_eq!(summary.total_savings, 25000.0);
        assert_eq!(summary.expiry_waste + summary.lost_sales, 25000.0);
    }

    #[tokio::test]
    async fn test_roi_details_totals_add_up() {
        let Json(details) = roi_details(state()).await.unwrap();
        assert_eq!(details.total_savings, details.expiry_waste + details.lost_sales);
        assert_eq!(details.out_of_stock.len(), 1);
    }

    #[tokio::test]
    async fn test_visualization_stock_over_time_is_by_medicine() {
        let config = VisualizationConfig {
            chart_type: ChartType::Pie,
            metric: Metric::Stock,
            dimension: Dimension::Time,
        };
        let Json(data) = visualization_data(state(), Json(config)).await.unwrap();
        assert_eq!(data.data.len(), 7);
        assert!(data.data.iter().all(|p| p.stock.is_some()));
    }

    #[tokio::test]
    async fn test_actions_and_quick_stats() {
        let Json(items) = actionable_items(state()).await.unwrap();
        assert_eq!(items.len(), 6);
        let Json(stats) = quick_stats(state()).await.unwrap();
        assert_eq!(stats.out_of_stock_items, 1);
    }
}
