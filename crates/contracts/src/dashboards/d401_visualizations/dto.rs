use serde::{Deserialize, Serialize};

use crate::domain::a001_medicine::aggregate::Medicine;
use crate::domain::a002_sales_record::aggregate::SalesRecord;
use crate::shared::alert::AlertInfo;

/// Most points a chart shows when grouped by medicine.
pub const MAX_MEDICINE_POINTS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Pie,
}

impl ChartType {
    pub const ALL: [ChartType; 3] = [ChartType::Bar, ChartType::Line, ChartType::Pie];

    pub fn key(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar Chart",
            ChartType::Line => "Line Chart",
            ChartType::Pie => "Pie Chart",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL.iter().copied().find(|c| c.key() == key).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    #[default]
    TotalRevenue,
    UnitsSold,
    Stock,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::TotalRevenue, Metric::UnitsSold, Metric::Stock];

    pub fn key(&self) -> &'static str {
        match self {
            Metric::TotalRevenue => "totalRevenue",
            Metric::UnitsSold => "unitsSold",
            Metric::Stock => "stock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::TotalRevenue => "Total Revenue",
            Metric::UnitsSold => "Units Sold",
            Metric::Stock => "Current Stock",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL.iter().copied().find(|m| m.key() == key).unwrap_or_default()
    }

    pub fn is_currency(&self) -> bool {
        matches!(self, Metric::TotalRevenue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    #[default]
    Medicine,
    Time,
}

impl Dimension {
    pub const ALL: [Dimension; 2] = [Dimension::Medicine, Dimension::Time];

    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Medicine => "medicine",
            Dimension::Time => "time",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Medicine => "By Medicine",
            Dimension::Time => "Over Time",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL.iter().copied().find(|d| d.key() == key).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationConfig {
    pub chart_type: ChartType,
    pub metric: Metric,
    pub dimension: Dimension,
}

impl VisualizationConfig {
    /// Stock has no history, so a stock chart is always grouped by medicine.
    pub fn normalized(self) -> Self {
        if self.metric == Metric::Stock && self.dimension == Dimension::Time {
            Self {
                dimension: Dimension::Medicine,
                ..self
            }
        } else {
            self
        }
    }

    pub fn time_dimension_available(&self) -> bool {
        self.metric != Metric::Stock
    }
}

/// One labelled point; `stock` is only known when grouped by medicine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub name: String,
    pub units_sold: u32,
    pub total_revenue: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

impl ChartPoint {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::TotalRevenue => self.total_revenue,
            Metric::UnitsSold => f64::from(self.units_sold),
            Metric::Stock => f64::from(self.stock.unwrap_or(0)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationData {
    pub data: Vec<ChartPoint>,
}

/// First points of the sales records joined to current stock by medicine id;
/// records without a medicine show stock 0.
pub fn by_medicine(sales: &[SalesRecord], medicines: &[Medicine]) -> Vec<ChartPoint> {
    sales
        .iter()
        .take(MAX_MEDICINE_POINTS)
        .map(|record| {
            let stock = medicines
                .iter()
                .find(|m| m.id == record.medicine_id)
                .map(|m| m.stock)
                .unwrap_or(0);
            ChartPoint {
                name: record.name.clone(),
                units_sold: record.units_sold,
                total_revenue: record.total_revenue,
                stock: Some(stock),
            }
        })
        .collect()
}

/// Alert shown when a generated chart has nothing to plot.
pub fn empty_result_alert() -> AlertInfo {
    AlertInfo::info(
        "No Data Available",
        "There is no data for the selected combination. Try a different metric or dimension.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_stock_over_time_falls_back_to_medicine() {
        let config = VisualizationConfig {
            chart_type: ChartType::Line,
            metric: Metric::Stock,
            dimension: Dimension::Time,
        };
        assert!(!config.time_dimension_available());
        let normalized = config.normalized();
        assert_eq!(normalized.dimension, Dimension::Medicine);
        assert_eq!(normalized.chart_type, ChartType::Line);

        let revenue = VisualizationConfig {
            metric: Metric::TotalRevenue,
            dimension: Dimension::Time,
            ..config
        };
        assert_eq!(revenue.normalized(), revenue);
    }

    #[test]
    fn test_by_medicine_truncates_and_joins() {
        let sales: Vec<SalesRecord> = (1..=9)
            .map(|i| SalesRecord {
                id: format!("s{i}"),
                medicine_id: i.to_string(),
                name: format!("Med {i}"),
                units_sold: i * 10,
                total_revenue: f64::from(i) * 100.0,
            })
            .collect();
        let medicines = vec![Medicine {
            id: "2".into(),
            name: "Med 2".into(),
            batch: "B".into(),
            stock: 42,
            price: None,
            expiry: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            min_required: 5,
        }];

        let points = by_medicine(&sales, &medicines);
        assert_eq!(points.len(), MAX_MEDICINE_POINTS);
        assert_eq!(points[0].stock, Some(0));
        assert_eq!(points[1].stock, Some(42));
        assert_eq!(points[6].name, "Med 7");
        assert_eq!(points[1].value(Metric::UnitsSold), 20.0);
    }

    #[test]
    fn test_config_wire_format() {
        let json = serde_json::to_value(VisualizationConfig::default()).unwrap();
        assert_eq!(json["chartType"], "bar");
        assert_eq!(json["metric"], "totalRevenue");
        assert_eq!(json["dimension"], "medicine");
        assert_eq!(Metric::from_key("unitsSold"), Metric::UnitsSold);
    }
}
