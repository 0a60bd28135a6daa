use serde::{Deserialize, Serialize};

use crate::domain::a001_medicine::aggregate::Medicine;
use crate::domain::a002_sales_record::aggregate::{top_by_revenue, SalesRecord};

/// Counters for the dashboard stat cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickStats {
    /// In stock but at or below the medicine's minimum.
    pub low_stock_items: u32,
    pub out_of_stock_items: u32,
    pub top_seller: Option<String>,
    pub inventory_value: f64,
}

pub fn compute_quick_stats(medicines: &[Medicine], sales: &[SalesRecord]) -> QuickStats {
    QuickStats {
        low_stock_items: medicines
            .iter()
            .filter(|m| m.stock > 0 && m.needs_reorder())
            .count() as u32,
        out_of_stock_items: medicines.iter().filter(|m| m.is_out_of_stock()).count() as u32,
        top_seller: top_by_revenue(sales).map(|s| s.name.clone()),
        inventory_value: medicines.iter().map(Medicine::inventory_value).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_data() {
        let stats = compute_quick_stats(&[], &[]);
        assert_eq!(stats.low_stock_items, 0);
        assert_eq!(stats.top_seller, None);
        assert_eq!(stats.inventory_value, 0.0);
    }

    #[test]
    fn test_top_seller_tie_goes_to_first_record() {
        let sale = |id: &str| SalesRecord {
            id: id.into(),
            medicine_id: id.into(),
            name: format!("Med {id}"),
            units_sold: 10,
            total_revenue: 5000.0,
        };
        let stats = compute_quick_stats(&[], &[sale("1"), sale("2")]);
        assert_eq!(stats.top_seller.as_deref(), Some("Med 1"));
    }
}
