//! In-memory mock data store.
//!
//! Every dashboard operation is a plain synchronous method here. The
//! frontend's mock provider wraps them with artificial latency and the
//! backend exposes them as JSON endpoints, so both see identical data.

pub mod seed;

use chrono::NaiveDate;

use crate::dashboards::d400_roi::dto::{compute_roi_details, RoiDetails, RoiSummary};
use crate::dashboards::d401_visualizations::dto::{
    by_medicine, Dimension, VisualizationConfig, VisualizationData,
};
use crate::dashboards::d402_weekly_report::dto::{scaled_totals, stock_status_slices, WeeklyReport};
use crate::dashboards::d403_quick_stats::dto::{compute_quick_stats, QuickStats};
use crate::domain::a001_medicine::aggregate::Medicine;
use crate::domain::a002_sales_record::aggregate::{rank_by_revenue, SalesRecord, TopSellingPeriod};
use crate::domain::a003_actionable_item::aggregate::ActionableItem;
use crate::domain::a004_ai_advisor::aggregate::{BusinessAdvice, Insight};
use crate::domain::a004_ai_advisor::chat;
use crate::system::auth::{authenticate, LoginError, LoginRequest, LoginResponse};
use crate::system::settings::{SettingsResponse, SettingsUpdate, SETTINGS_SAVED};
use crate::usecases::u501_upload_data::request::{upload_message, UploadResponse};

#[derive(Debug, Clone)]
pub struct MockStore {
    medicines: Vec<Medicine>,
    sales: Vec<SalesRecord>,
    actions: Vec<ActionableItem>,
    advice: Vec<BusinessAdvice>,
    insights: Vec<Insight>,
}

impl Default for MockStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl MockStore {
    pub fn seeded() -> Self {
        Self {
            medicines: seed::medicines(),
            sales: seed::sales_records(),
            actions: seed::actionable_items(),
            advice: seed::business_advice(),
            insights: seed::insights(),
        }
    }

    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }

    pub fn sales(&self) -> &[SalesRecord] {
        &self.sales
    }

    pub fn login(&self, request: &LoginRequest) -> Result<LoginResponse, LoginError> {
        authenticate(request).map(|user| LoginResponse { user })
    }

    /// Headline figures are fixed; the ROI tracker page computes the details.
    pub fn roi_summary(&self) -> RoiSummary {
        RoiSummary {
            total_savings: 25000.0,
            expiry_waste: 8500.0,
            lost_sales: 16500.0,
        }
    }

    pub fn roi_details(&self, today: NaiveDate) -> RoiDetails {
        compute_roi_details(&self.medicines, &self.sales, today)
    }

    pub fn quick_stats(&self) -> QuickStats {
        compute_quick_stats(&self.medicines, &self.sales)
    }

    pub fn low_stock(&self) -> Vec<Medicine> {
        self.medicines
            .iter()
            .filter(|m| m.needs_reorder())
            .cloned()
            .collect()
    }

    /// The period is accepted but every period returns the same ranking.
    pub fn top_selling(&self, _period: TopSellingPeriod) -> Vec<SalesRecord> {
        let mut sales = self.sales.clone();
        rank_by_revenue(&mut sales);
        sales
    }

    pub fn business_advice(&self) -> Vec<BusinessAdvice> {
        self.advice.clone()
    }

    pub fn insights(&self) -> Vec<Insight> {
        self.insights.clone()
    }

    pub fn visualization_data(&self, config: VisualizationConfig) -> VisualizationData {
        let data = match config.normalized().dimension {
            Dimension::Medicine => by_medicine(&self.sales, &self.medicines),
            Dimension::Time => seed::time_series(),
        };
        VisualizationData { data }
    }

    pub fn answer_question(&self, question: &str) -> String {
        chat::answer_question(question, &self.medicines, &self.sales)
    }

    /// Weekly report with totals scaled by the caller's factors, each drawn
    /// from `[0.9, 1.1)`.
    pub fn weekly_report(&self, revenue_factor: f64, units_factor: f64) -> WeeklyReport {
        let (total_revenue, units_sold) = scaled_totals(&self.sales, revenue_factor, units_factor);
        WeeklyReport {
            week: seed::REPORT_WEEK.to_string(),
            total_revenue,
            units_sold,
            new_low_stock_items: seed::NEW_LOW_STOCK_ITEMS,
            top_seller: self.sales.first().cloned(),
            daily_sales: seed::daily_sales(),
            stock_status: stock_status_slices(&self.medicines),
            ai_summary: seed::AI_SUMMARY.to_string(),
        }
    }

    pub fn actionable_items(&self) -> Vec<ActionableItem> {
        self.actions.clone()
    }

    pub fn acknowledge_upload(&self, file_name: &str) -> UploadResponse {
        UploadResponse {
            message: upload_message(file_name),
        }
    }

    pub fn acknowledge_settings(&self, _update: &SettingsUpdate) -> SettingsResponse {
        SettingsResponse {
            message: SETTINGS_SAVED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d401_visualizations::dto::{ChartType, Metric, MAX_MEDICINE_POINTS};
    use crate::domain::a003_actionable_item::aggregate::ItemStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_seed_sizes() {
        let store = MockStore::seeded();
        assert_eq!(store.medicines().len(), 8);
        assert_eq!(store.sales().len(), 8);
        assert_eq!(store.actionable_items().len(), 6);
        assert_eq!(store.business_advice().len(), 4);
        assert_eq!(store.insights().len(), 3);
    }

    #[test]
    fn test_sales_join_to_matching_medicine() {
        let store = MockStore::seeded();
        for sale in store.sales() {
            let medicine = store
                .medicines()
                .iter()
                .find(|m| m.id == sale.medicine_id)
                .unwrap();
            assert_eq!(medicine.name, sale.name);
        }
    }

    #[test]
    fn test_low_stock_uses_each_minimum() {
        let names: Vec<String> = MockStore::seeded()
            .low_stock()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Paracetamol 500mg",
                "Amoxicillin 250mg",
                "Cetirizine 10mg",
                "Omeprazole 20mg",
                "Metformin 500mg"
            ]
        );
    }

    #[test]
    fn test_top_selling_sorted_by_revenue() {
        let sales = MockStore::seeded().top_selling(TopSellingPeriod::Last30Days);
        assert_eq!(sales[0].name, "Vitamin C 500mg");
        assert_eq!(sales[7].name, "Aspirin 75mg");
        assert!(sales.windows(2).all(|w| w[0].total_revenue >= w[1].total_revenue));
    }

    #[test]
    fn test_roi_details_from_seed() {
        let details = MockStore::seeded().roi_details(date(2024, 8, 1));
        let expiring: Vec<_> = details.expiring_soon.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(expiring, vec!["2", "8"]);
        // 5 × 75 + 22 × 80
        assert_eq!(details.expiry_waste, 2135.0);
        assert_eq!(details.out_of_stock.len(), 1);
        assert_eq!(details.out_of_stock[0].potential_lost_revenue, 3600.0);
        assert_eq!(details.total_savings, 5735.0);
    }

    #[test]
    fn test_visualization_by_medicine_and_time() {
        let store = MockStore::seeded();
        let by_med = store.visualization_data(VisualizationConfig::default());
        assert_eq!(by_med.data.len(), MAX_MEDICINE_POINTS);
        assert_eq!(by_med.data[0].stock, Some(8));
        assert_eq!(by_med.data[1].stock, Some(100));

        let over_time = store.visualization_data(VisualizationConfig {
            chart_type: ChartType::Line,
            metric: Metric::UnitsSold,
            dimension: Dimension::Time,
        });
        assert_eq!(over_time.data.len(), 7);
        assert_eq!(over_time.data[0].name, "May 1");
        assert!(over_time.data.iter().all(|p| p.stock.is_none()));

        let stock_over_time = store.visualization_data(VisualizationConfig {
            chart_type: ChartType::Bar,
            metric: Metric::Stock,
            dimension: Dimension::Time,
        });
        assert_eq!(stock_over_time.data[0].name, "Paracetamol 500mg");
    }

    #[test]
    fn test_weekly_report_scaling() {
        let store = MockStore::seeded();
        let report = store.weekly_report(1.0, 1.0);
        assert_eq!(report.total_revenue, 87800.0);
        assert_eq!(report.units_sold, 2160);
        assert_eq!(report.new_low_stock_items, 3);
        assert_eq!(report.top_seller.unwrap().name, "Paracetamol 500mg");
        assert_eq!(report.daily_sales.len(), 7);
        assert_eq!(report.daily_sales[5].sales, 21000.0);

        let values: Vec<u32> = report.stock_status.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![3, 4, 1]);

        let low = store.weekly_report(0.9, 0.9);
        assert!((low.total_revenue - 79020.0).abs() < 1e-6);
        assert_eq!(low.units_sold, 1944);
    }

    #[test]
    fn test_chat_fallback_mentions_seed_totals() {
        let answer = MockStore::seeded().answer_question("tell me something");
        assert!(answer.contains("8 unique medicines"));
        assert!(answer.contains("₹87,800"));
    }

    #[test]
    fn test_chat_inventory_value() {
        let answer = MockStore::seeded().answer_question("What is my inventory value?");
        assert_eq!(answer, "The total value of your current inventory is ₹9,615.");
    }

    #[test]
    fn test_quick_stats_from_seed() {
        let stats = MockStore::seeded().quick_stats();
        assert_eq!(stats.low_stock_items, 4);
        assert_eq!(stats.out_of_stock_items, 1);
        assert_eq!(stats.top_seller.as_deref(), Some("Vitamin C 500mg"));
        assert_eq!(stats.inventory_value, 9615.0);
    }

    #[test]
    fn test_seeded_action_items() {
        let items = MockStore::seeded().actionable_items();
        let done = items.iter().filter(|i| i.status == ItemStatus::Done).count();
        assert_eq!(done, 1);
    }

    #[test]
    fn test_acknowledgements() {
        let store = MockStore::seeded();
        assert_eq!(
            store.acknowledge_upload("inventory.csv").message,
            "File \"inventory.csv\" uploaded successfully. Data has been integrated."
        );
        let update = SettingsUpdate::Sync {
            auto_sync: true,
            sync_time: "02:00".into(),
        };
        assert_eq!(
            store.acknowledge_settings(&update).message,
            "Settings updated successfully!"
        );
    }

    #[test]
    fn test_login() {
        let store = MockStore::seeded();
        let ok = store
            .login(&LoginRequest {
                email: "admin@pharmiq.com".into(),
                password: "pw".into(),
            })
            .unwrap();
        assert_eq!(ok.user.name, "Admin");
        let err = store
            .login(&LoginRequest {
                email: "admin".into(),
                password: "pw".into(),
            })
            .unwrap_err();
        assert_eq!(err, LoginError::InvalidEmail);
    }
}
