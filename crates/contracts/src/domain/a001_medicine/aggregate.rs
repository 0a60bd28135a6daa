use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Inventory line for one medicine batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub id: String,
    pub name: String,
    pub batch: String,
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub expiry: NaiveDate,
    pub min_required: u32,
}

impl Medicine {
    /// Stock on hand times unit price; a missing price counts as zero.
    pub fn inventory_value(&self) -> f64 {
        f64::from(self.stock) * self.price.unwrap_or(0.0)
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// At or below its own reorder minimum.
    pub fn needs_reorder(&self) -> bool {
        self.stock <= self.min_required
    }

    pub fn status(&self, threshold: u32) -> StockStatus {
        StockStatus::classify(self.stock, threshold)
    }
}

// ============================================================================
// Stock status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    Sufficient,
}

impl StockStatus {
    /// `0` is out of stock, up to `threshold` inclusive is low, above is fine.
    pub fn classify(stock: u32, threshold: u32) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock <= threshold {
            StockStatus::LowStock
        } else {
            StockStatus::Sufficient
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::Sufficient => "Sufficient",
        }
    }

    /// CSS modifier used by status badges.
    pub fn css_class(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "badge--danger",
            StockStatus::LowStock => "badge--warning",
            StockStatus::Sufficient => "badge--success",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medicine(stock: u32, price: Option<f64>) -> Medicine {
        Medicine {
            id: "1".into(),
            name: "Paracetamol 500mg".into(),
            batch: "P500-123".into(),
            stock,
            price,
            expiry: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            min_required: 20,
        }
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(StockStatus::classify(0, 10), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(1, 10), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(10, 10), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(11, 10), StockStatus::Sufficient);
        assert_eq!(StockStatus::classify(0, 0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(1, 0), StockStatus::Sufficient);
    }

    #[test]
    fn test_status_uses_given_threshold() {
        let med = medicine(15, Some(25.0));
        assert_eq!(med.status(10), StockStatus::Sufficient);
        assert_eq!(med.status(med.min_required), StockStatus::LowStock);
        assert_eq!(medicine(0, None).status(10), StockStatus::OutOfStock);
    }

    #[test]
    fn test_inventory_value_missing_price_is_zero() {
        assert_eq!(medicine(8, Some(25.0)).inventory_value(), 200.0);
        assert_eq!(medicine(8, None).inventory_value(), 0.0);
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(medicine(8, Some(25.0))).unwrap();
        assert_eq!(json["minRequired"], 20);
        assert_eq!(json["expiry"], "2025-12-31");

        let without_price = serde_json::to_value(medicine(8, None)).unwrap();
        assert!(without_price.get("price").is_none());
    }
}
