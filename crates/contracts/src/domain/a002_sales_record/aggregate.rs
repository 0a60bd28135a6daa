use serde::{Deserialize, Serialize};

/// Sales totals for one medicine over the reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    pub id: String,
    /// Joins the record to `Medicine::id`.
    pub medicine_id: String,
    pub name: String,
    pub units_sold: u32,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopSellingPeriod {
    #[default]
    #[serde(rename = "7days")]
    Last7Days,
    #[serde(rename = "30days")]
    Last30Days,
    Custom,
}

impl TopSellingPeriod {
    pub const ALL: [TopSellingPeriod; 3] = [
        TopSellingPeriod::Last7Days,
        TopSellingPeriod::Last30Days,
        TopSellingPeriod::Custom,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TopSellingPeriod::Last7Days => "7days",
            TopSellingPeriod::Last30Days => "30days",
            TopSellingPeriod::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TopSellingPeriod::Last7Days => "Last 7 Days",
            TopSellingPeriod::Last30Days => "Last 30 Days",
            TopSellingPeriod::Custom => "Custom Range",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.key() == key)
            .unwrap_or_default()
    }
}

/// Descending by revenue, stable for equal revenue.
pub fn rank_by_revenue(records: &mut [SalesRecord]) {
    records.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
}

/// Highest revenue; the earliest record wins a tie, as in the ranking.
pub fn top_by_revenue(records: &[SalesRecord]) -> Option<&SalesRecord> {
    records
        .iter()
        .min_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_keys() {
        for p in TopSellingPeriod::ALL {
            assert_eq!(TopSellingPeriod::from_key(p.key()), p);
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.key()));
        }
        assert_eq!(TopSellingPeriod::from_key("year"), TopSellingPeriod::Last7Days);
    }

    fn rec(id: &str, revenue: f64) -> SalesRecord {
        SalesRecord {
            id: id.into(),
            medicine_id: id.into(),
            name: format!("Med {id}"),
            units_sold: 1,
            total_revenue: revenue,
        }
    }

    #[test]
    fn test_rank_by_revenue() {
        let mut records = vec![rec("a", 100.0), rec("b", 300.0), rec("c", 100.0), rec("d", 200.0)];
        rank_by_revenue(&mut records);
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_top_by_revenue_matches_first_ranked() {
        let mut records = vec![rec("a", 100.0), rec("b", 300.0), rec("c", 300.0)];
        assert_eq!(top_by_revenue(&records).map(|r| r.id.as_str()), Some("b"));

        rank_by_revenue(&mut records);
        assert_eq!(records[0].id, "b");
        assert!(top_by_revenue(&[]).is_none());
    }
}
