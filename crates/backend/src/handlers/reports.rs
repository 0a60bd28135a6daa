use axum::extract::{Query, State};
use axum::Json;
use contracts::dashboards::d402_weekly_report::dto::{WeeklyReport, WeeklyReportQuery, FACTOR_RANGE};
use rand::Rng;

use crate::shared::error::ApiError;
use crate::shared::state::SharedState;

/// GET /api/reports/weekly?week=
///
/// The week parameter is accepted but the report always covers the demo week.
pub async fn weekly_report(
    State(state): State<SharedState>,
    Query(query): Query<WeeklyReportQuery>,
) -> Result<Json<WeeklyReport>, ApiError> {
    state.simulate_latency().await;
    if let Some(week) = &query.week {
        tracing::debug!("Weekly report requested for {}", week);
    }
    let mut rng = rand::thread_rng();
    let revenue_factor = rng.gen_range(FACTOR_RANGE);
    let units_factor = rng.gen_range(FACTOR_RANGE);
    Ok(Json(state.store.weekly_report(revenue_factor, units_factor)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::state;

    #[tokio::test]
    async fn test_weekly_report_totals_within_band() {
        for _ in 0..20 {
            let Json(report) = weekly_report(state(), Query(WeeklyReportQuery { week: None }))
                .await
                .unwrap();
            assert!(report.total_revenue >= 87800.0 * 0.9 - 1e-6);
            assert!(report.total_revenue < 87800.0 * 1.1);
            assert!(report.units_sold >= 1944 && report.units_sold <= 2376);
            assert_eq!(report.week, "May 20, 2024 - May 26, 2024");
        }
    }
}
