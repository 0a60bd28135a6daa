use axum::extract::{Query, State};
use axum::Json;
use contracts::domain::a001_medicine::aggregate::Medicine;
use contracts::domain::a002_sales_record::aggregate::{SalesRecord, TopSellingPeriod};
use serde::Deserialize;

use crate::shared::error::ApiError;
use crate::shared::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct TopSellingQuery {
    #[serde(default)]
    pub period: Option<String>,
}

/// GET /api/medicines/low-stock
pub async fn low_stock(State(state): State<SharedState>) -> Result<Json<Vec<Medicine>>, ApiError> {
    state.simulate_latency().await;
    Ok(Json(state.store.low_stock()))
}

/// GET /api/sales/top-selling?period=
pub async fn top_selling(
    State(state): State<SharedState>,
    Query(query): Query<TopSellingQuery>,
) -> Result<Json<Vec<SalesRecord>>, ApiError> {
    state.simulate_latency().await;
    let period = query
        .period
        .as_deref()
        .map(TopSellingPeriod::from_key)
        .unwrap_or_default();
    Ok(Json(state.store.top_selling(period)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::state;

    #[tokio::test]
    async fn test_low_stock_only_below_minimum() {
        let Json(meds) = low_stock(state()).await.unwrap();
        assert_eq!(meds.len(), 5);
        assert!(meds.iter().all(|m| m.stock <= m.min_required));
    }

    #[tokio::test]
    async fn test_lists_serialize_as_plain_arrays() {
        let Json(meds) = low_stock(state()).await.unwrap();
        let body = serde_json::to_value(&meds).unwrap();
        assert!(body.is_array());
        assert_eq!(body.as_array().map(Vec::len), Some(5));
    }

    #[tokio::test]
    async fn test_top_selling_ignores_period() {
        let week = top_selling(
            state(),
            Query(TopSellingQuery {
                period: Some("7days".into()),
            }),
        )
        .await
        .unwrap()
        .0;
        let none = top_selling(state(), Query(TopSellingQuery { period: None }))
            .await
            .unwrap()
            .0;
        assert_eq!(week, none);
        assert_eq!(week[0].name, "Vitamin C 500mg");
    }
}
