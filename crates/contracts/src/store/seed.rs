//! Fixed demo data the mock store starts from.

use chrono::NaiveDate;

use crate::dashboards::d401_visualizations::dto::ChartPoint;
use crate::dashboards::d402_weekly_report::dto::DailySales;
use crate::domain::a001_medicine::aggregate::Medicine;
use crate::domain::a002_sales_record::aggregate::SalesRecord;
use crate::domain::a003_actionable_item::aggregate::{
    ActionCategory, ActionableItem, ItemStatus, Priority,
};
use crate::domain::a004_ai_advisor::aggregate::{AdviceCategory, BusinessAdvice, Insight};
use crate::system::pages::Page;

pub const REPORT_WEEK: &str = "May 20, 2024 - May 26, 2024";

pub const NEW_LOW_STOCK_ITEMS: u32 = 3;

pub const AI_SUMMARY: &str = "This week showed strong sales, particularly on Saturday. Revenue is up 5% compared to the previous week. However, Paracetamol 500mg is consistently a top seller and is approaching low stock levels. Recommend placing a reorder within the next 2 days to avoid a stockout. Also, consider a promotion for Amoxicillin, as its sales have been slower than average.";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn medicine(
    id: &str,
    name: &str,
    batch: &str,
    stock: u32,
    min_required: u32,
    expiry: NaiveDate,
    price: f64,
) -> Medicine {
    Medicine {
        id: id.into(),
        name: name.into(),
        batch: batch.into(),
        stock,
        price: Some(price),
        expiry,
        min_required,
    }
}

pub fn medicines() -> Vec<Medicine> {
    vec![
        medicine("1", "Paracetamol 500mg", "P500-123", 8, 20, date(2025, 12, 31), 25.0),
        medicine("2", "Amoxicillin 250mg", "A250-456", 5, 15, date(2024, 8, 30), 75.0),
        medicine("3", "Cetirizine 10mg", "C10-789", 12, 25, date(2026, 5, 20), 40.0),
        medicine("4", "Omeprazole 20mg", "O20-101", 0, 10, date(2025, 10, 15), 60.0),
        medicine("5", "Ibuprofen 400mg", "I400-112", 30, 25, date(2025, 11, 30), 35.0),
        medicine("6", "Aspirin 75mg", "A75-131", 50, 40, date(2026, 1, 10), 15.0),
        medicine("7", "Vitamin C 500mg", "VC500-415", 100, 50, date(2025, 9, 1), 50.0),
        medicine("8", "Metformin 500mg", "M500-161", 22, 30, date(2024, 9, 25), 80.0),
    ]
}

fn sale(id: &str, medicine_id: &str, name: &str, units_sold: u32, total_revenue: f64) -> SalesRecord {
    SalesRecord {
        id: id.into(),
        medicine_id: medicine_id.into(),
        name: name.into(),
        units_sold,
        total_revenue,
    }
}

pub fn sales_records() -> Vec<SalesRecord> {
    vec![
        sale("1", "1", "Paracetamol 500mg", 520, 13000.0),
        sale("2", "7", "Vitamin C 500mg", 350, 17500.0),
        sale("3", "6", "Aspirin 75mg", 310, 4650.0),
        sale("4", "5", "Ibuprofen 400mg", 280, 9800.0),
        sale("5", "3", "Cetirizine 10mg", 250, 10000.0),
        sale("6", "8", "Metformin 500mg", 180, 14400.0),
        sale("7", "2", "Amoxicillin 250mg", 150, 11250.0),
        sale("8", "4", "Omeprazole 20mg", 120, 7200.0),
    ]
}

pub fn business_advice() -> Vec<BusinessAdvice> {
    let advice = |id: &str, title: &str, message: &str, category| BusinessAdvice {
        id: id.into(),
        title: title.into(),
        message: message.into(),
        category,
    };
    vec![
        advice(
            "1",
            "Restock Paracetamol 500mg",
            "This item is consistently a top seller but stock is running low. Reorder soon to avoid missing sales.",
            AdviceCategory::Inventory,
        ),
        advice(
            "2",
            "Seasonal Sales Opportunity",
            "Demand for Cetirizine 10mg is peaking. Consider a promotional bundle to maximize revenue.",
            AdviceCategory::Sales,
        ),
        advice(
            "3",
            "Expiring Stock Action",
            "A batch of Amoxicillin is expiring in two months. Prioritize selling this batch to prevent financial loss.",
            AdviceCategory::Inventory,
        ),
        advice(
            "4",
            "Strategic Pricing Review",
            "Analyze profit margins on high-volume, low-cost items like Aspirin to optimize your overall pricing strategy.",
            AdviceCategory::Strategy,
        ),
    ]
}

pub fn insights() -> Vec<Insight> {
    let insight = |title: &str, message: &str, category: &str| Insight {
        title: title.into(),
        message: message.into(),
        category: category.into(),
    };
    vec![
        insight(
            "Data Quality Anomaly",
            "Found 2 sales records for 'Aspirin 150mg' which does not exist in your current inventory master. Consider adding it or correcting the sales entries.",
            "Financial",
        ),
        insight(
            "Inventory Optimization: Paracetamol",
            "Paracetamol 500mg has a high sales velocity but is currently low on stock. Recommend increasing minimum stock level from 20 to 50 units to prevent stockouts.",
            "Inventory",
        ),
        insight(
            "Sales Trend: Anti-Allergens",
            "Sales for Cetirizine have increased by 30% month-over-month. This indicates a seasonal trend; ensure adequate stock for the next 4-6 weeks.",
            "Sales",
        ),
    ]
}

pub fn actionable_items() -> Vec<ActionableItem> {
    let item = |id: &str,
                title: &str,
                description: &str,
                category,
                priority,
                status,
                action_page: Option<Page>| ActionableItem {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        category,
        priority,
        status,
        action_page,
    };
    vec![
        item(
            "1",
            "Restock Paracetamol 500mg",
            "This item is consistently a top seller but stock is running low. Reorder soon to avoid missing sales.",
            ActionCategory::Inventory,
            Priority::High,
            ItemStatus::Todo,
            Some(Page::LowStock),
        ),
        item(
            "2",
            "Resolve Data Anomaly",
            "Found 2 sales records for 'Aspirin 150mg' which does not exist in your current inventory master. Consider adding it or correcting the sales entries.",
            ActionCategory::DataQuality,
            Priority::High,
            ItemStatus::Todo,
            Some(Page::UploadData),
        ),
        item(
            "3",
            "Address Expiring Stock",
            "A batch of Amoxicillin is expiring in two months. Prioritize selling this batch to prevent financial loss.",
            ActionCategory::Inventory,
            Priority::Medium,
            ItemStatus::Todo,
            Some(Page::RoiTracker),
        ),
        item(
            "4",
            "Launch Seasonal Promotion",
            "Demand for Cetirizine 10mg is peaking. Consider a promotional bundle to maximize revenue.",
            ActionCategory::Sales,
            Priority::Medium,
            ItemStatus::Todo,
            Some(Page::TopSelling),
        ),
        item(
            "5",
            "Review Pricing Strategy",
            "Analyze profit margins on high-volume, low-cost items like Aspirin to optimize your overall pricing strategy.",
            ActionCategory::Strategy,
            Priority::Low,
            ItemStatus::Todo,
            None,
        ),
        item(
            "6",
            "Increase Vitamin C Stock",
            "Sales for Vitamin C are trending upwards. Ensure you have enough stock for the next 4-6 weeks to meet demand.",
            ActionCategory::Inventory,
            Priority::Medium,
            ItemStatus::Done,
            None,
        ),
    ]
}

/// Canned week of sales used when charting over time.
pub fn time_series() -> Vec<ChartPoint> {
    [
        ("May 1", 1200, 45000.0),
        ("May 2", 1500, 52000.0),
        ("May 3", 1350, 48000.0),
        ("May 4", 1600, 55000.0),
        ("May 5", 1800, 62000.0),
        ("May 6", 2100, 71000.0),
        ("May 7", 1900, 68000.0),
    ]
    .into_iter()
    .map(|(name, units_sold, total_revenue)| ChartPoint {
        name: name.to_string(),
        units_sold,
        total_revenue,
        stock: None,
    })
    .collect()
}

pub fn daily_sales() -> Vec<DailySales> {
    [
        ("Mon", 12000.0),
        ("Tue", 15000.0),
        ("Wed", 13500.0),
        ("Thu", 16000.0),
        ("Fri", 18000.0),
        ("Sat", 21000.0),
        ("Sun", 19000.0),
    ]
    .into_iter()
    .map(|(name, sales)| DailySales {
        name: name.to_string(),
        sales,
    })
    .collect()
}
