use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::a001_medicine::aggregate::Medicine;
use crate::domain::a002_sales_record::aggregate::SalesRecord;

/// Days ahead within which a batch counts as expiring.
pub const EXPIRY_WINDOW_DAYS: u64 = 60;

/// Share of a medicine's sales revenue assumed lost while it is out of stock.
pub const LOST_REVENUE_SHARE: f64 = 0.5;

/// Headline ROI figures for the dashboard card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiSummary {
    pub total_savings: f64,
    pub expiry_waste: f64,
    pub lost_sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutOfStockItem {
    pub id: String,
    pub name: String,
    pub potential_lost_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiDetails {
    pub total_savings: f64,
    pub expiry_waste: f64,
    pub lost_sales: f64,
    pub expiring_soon: Vec<Medicine>,
    pub out_of_stock: Vec<OutOfStockItem>,
}

/// Estimates avoidable losses as of `today`.
///
/// Expiring stock is valued at stock times price. Out-of-stock items are
/// charged half the revenue of the sales record sharing their id.
pub fn compute_roi_details(medicines: &[Medicine], sales: &[SalesRecord], today: NaiveDate) -> RoiDetails {
    let cutoff = today
        .checked_add_days(Days::new(EXPIRY_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX);

    let expiring_soon: Vec<Medicine> = medicines
        .iter()
        .filter(|m| m.expiry < cutoff)
        .cloned()
        .collect();

    let out_of_stock: Vec<OutOfStockItem> = medicines
        .iter()
        .filter(|m| m.is_out_of_stock())
        .map(|m| {
            let revenue = sales
                .iter()
                .find(|s| s.medicine_id == m.id)
                .map(|s| s.total_revenue)
                .unwrap_or(0.0);
            OutOfStockItem {
                id: m.id.clone(),
                name: m.name.clone(),
                potential_lost_revenue: revenue * LOST_REVENUE_SHARE,
            }
        })
        .collect();

    let expiry_waste: f64 = expiring_soon.iter().map(Medicine::inventory_value).sum();
    let lost_sales: f64 = out_of_stock.iter().map(|i| i.potential_lost_revenue).sum();

    RoiDetails {
        total_savings: expiry_waste + lost_sales,
        expiry_waste,
        lost_sales,
        expiring_soon,
        out_of_stock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn med(id: &str, stock: u32, price: Option<f64>, expiry: NaiveDate) -> Medicine {
        Medicine {
            id: id.into(),
            name: format!("Med {id}"),
            batch: "B".into(),
            stock,
            price,
            expiry,
            min_required: 10,
        }
    }

    fn sale(medicine_id: &str, revenue: f64) -> SalesRecord {
        SalesRecord {
            id: format!("s{medicine_id}"),
            medicine_id: medicine_id.into(),
            name: format!("Med {medicine_id}"),
            units_sold: 1,
            total_revenue: revenue,
        }
    }

    #[test]
    fn test_expiry_window_is_exclusive() {
        let today = date(2024, 8, 1);
        let meds = vec![
            med("1", 5, Some(75.0), date(2024, 9, 29)),
            med("2", 5, Some(75.0), date(2024, 9, 30)),
            med("3", 4, None, date(2024, 7, 1)),
        ];
        let details = compute_roi_details(&meds, &[], today);
        let ids: Vec<_> = details.expiring_soon.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(details.expiry_waste, 375.0);
    }

    #[test]
    fn test_lost_sales_joins_on_medicine_id() {
        let today = date(2020, 1, 1);
        let far = date(2030, 1, 1);
        let meds = vec![med("4", 0, Some(60.0), far), med("9", 0, Some(10.0), far)];
        let sales = vec![sale("4", 7200.0)];
        let details = compute_roi_details(&meds, &sales, today);

        assert_eq!(details.out_of_stock.len(), 2);
        assert_eq!(details.out_of_stock[0].potential_lost_revenue, 3600.0);
        assert_eq!(details.out_of_stock[1].potential_lost_revenue, 0.0);
        assert_eq!(details.lost_sales, 3600.0);
        assert_eq!(details.total_savings, details.expiry_waste + details.lost_sales);
    }

    #[test]
    fn test_empty_inventory_is_zero() {
        let details = compute_roi_details(&[], &[], date(2024, 1, 1));
        assert_eq!(details.total_savings, 0.0);
        assert!(details.expiring_soon.is_empty());
        assert!(details.out_of_stock.is_empty());
    }
}
