use serde::{Deserialize, Serialize};

use crate::domain::a001_medicine::aggregate::{Medicine, StockStatus};
use crate::domain::a002_sales_record::aggregate::SalesRecord;

/// Range drawn from for both report jitter factors.
pub const FACTOR_RANGE: std::ops::Range<f64> = 0.9..1.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    pub name: String,
    pub sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSlice {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub week: String,
    pub total_revenue: f64,
    pub units_sold: u32,
    pub new_low_stock_items: u32,
    pub top_seller: Option<SalesRecord>,
    pub daily_sales: Vec<DailySales>,
    pub stock_status: Vec<StockSlice>,
    pub ai_summary: String,
}

impl WeeklyReport {
    /// `PharmaIQ_Weekly_Report_<week>.pdf` with spaces turned into `_`.
    pub fn pdf_file_name(&self) -> String {
        format!("PharmaIQ_Weekly_Report_{}.pdf", self.week.replace(' ', "_"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyReportQuery {
    #[serde(default)]
    pub week: Option<String>,
}

/// Maps a uniform sample in `[0, 1)` onto [`FACTOR_RANGE`].
pub fn factor_from_unit(sample: f64) -> f64 {
    FACTOR_RANGE.start + sample.clamp(0.0, 1.0) * (FACTOR_RANGE.end - FACTOR_RANGE.start)
}

/// Scaled period totals: revenue times `revenue_factor`, units times
/// `units_factor` rounded to a whole count.
pub fn scaled_totals(sales: &[SalesRecord], revenue_factor: f64, units_factor: f64) -> (f64, u32) {
    let revenue: f64 = sales.iter().map(|s| s.total_revenue).sum();
    let units: u32 = sales.iter().map(|s| s.units_sold).sum();
    (
        revenue * revenue_factor,
        (f64::from(units) * units_factor).round() as u32,
    )
}

/// In Stock / Low Stock / Out of Stock counts using each medicine's own
/// minimum as the threshold.
pub fn stock_status_slices(medicines: &[Medicine]) -> Vec<StockSlice> {
    vec![
        StockSlice {
            name: "In Stock".into(),
            value: count_status(medicines, StockStatus::Sufficient),
        },
        StockSlice {
            name: "Low Stock".into(),
            value: count_status(medicines, StockStatus::LowStock),
        },
        StockSlice {
            name: "Out of Stock".into(),
            value: count_status(medicines, StockStatus::OutOfStock),
        },
    ]
}

fn count_status(medicines: &[Medicine], status: StockStatus) -> u32 {
    medicines
        .iter()
        .filter(|m| m.status(m.min_required) == status)
        .count() as u32
}
