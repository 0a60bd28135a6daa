//! In-browser provider: the seeded store plus artificial latency.

use async_trait::async_trait;
use chrono::NaiveDate;
use contracts::dashboards::d400_roi::dto::{RoiDetails, RoiSummary};
use contracts::dashboards::d401_visualizations::dto::{VisualizationConfig, VisualizationData};
use contracts::dashboards::d402_weekly_report::dto::{factor_from_unit, WeeklyReport};
use contracts::dashboards::d403_quick_stats::dto::QuickStats;
use contracts::domain::a001_medicine::aggregate::Medicine;
use contracts::domain::a002_sales_record::aggregate::{SalesRecord, TopSellingPeriod};
use contracts::domain::a003_actionable_item::aggregate::ActionableItem;
use contracts::domain::a004_ai_advisor::aggregate::{BusinessAdvice, Insight};
use contracts::shared::error::FetchError;
use contracts::store::MockStore;
use contracts::system::auth::{LoginRequest, LoginResponse};
use contracts::system::settings::{SettingsResponse, SettingsUpdate};
use contracts::usecases::u501_upload_data::request::UploadResponse;
use gloo_timers::future::TimeoutFuture;

use super::DataProvider;

/// Simulated response times in milliseconds.
pub mod latency {
    pub const DEFAULT: u32 = 500;
    pub const LOGIN: u32 = 1000;
    pub const ACTIONS: u32 = 700;
    pub const ADVICE: u32 = 800;
    pub const CHAT: u32 = 1000;
    pub const VISUALIZATION: u32 = 1000;
    pub const REPORT: u32 = 1200;
    pub const UPLOAD: u32 = 1200;
    pub const INSIGHTS: u32 = 1500;
}

pub struct MockProvider {
    store: MockStore,
}

impl MockProvider {
    pub fn new(store: MockStore) -> Self {
        Self { store }
    }

    pub fn seeded() -> Self {
        Self::new(MockStore::seeded())
    }
}

async fn delay(ms: u32) {
    TimeoutFuture::new(ms).await;
}

/// Today's date from the browser clock.
pub fn browser_today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

fn random_factor() -> f64 {
    factor_from_unit(js_sys::Math::random())
}

#[async_trait(?Send)]
impl DataProvider for MockProvider {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, FetchError> {
        delay(latency::LOGIN).await;
        self.store
            .login(&request)
            .map_err(|e| FetchError::Rejected(e.to_string()))
    }

    async fn roi_summary(&self) -> Result<RoiSummary, FetchError> {
        delay(latency::DEFAULT).await;
        Ok(self.store.roi_summary())
    }

    async fn roi_details(&self) -> Result<RoiDetails, FetchError> {
        delay(latency::DEFAULT).await;
        Ok(self.store.roi_details(browser_today()))
    }

    async fn quick_stats(&self) -> Result<QuickStats, FetchError> {
        delay(latency::DEFAULT).await;
        Ok(self.store.quick_stats())
    }

    async fn low_stock(&self) -> Result<Vec<Medicine>, FetchError> {
        delay(latency::DEFAULT).await;
        Ok(self.store.low_stock())
    }

    async fn top_selling(&self, period: TopSellingPeriod) -> Result<Vec<SalesRecord>, FetchError> {
        delay(latency::DEFAULT).await;
        Ok(self.store.top_selling(period))
    }

    async fn business_advice(&self) -> Result<Vec<BusinessAdvice>, FetchError> {
        delay(latency::ADVICE).await;
        Ok(self.store.business_advice())
    }

    async fn insights(&self) -> Result<Vec<Insight>, FetchError> {
        delay(latency::INSIGHTS).await;
        Ok(self.store.insights())
    }

    async fn visualization_data(
        &self,
        config: VisualizationConfig,
    ) -> Result<VisualizationData, FetchError> {
        delay(latency::VISUALIZATION).await;
        Ok(self.store.visualization_data(config))
    }

    async fn ask(&self, question: String) -> Result<String, FetchError> {
        delay(latency::CHAT).await;
        Ok(self.store.answer_question(&question))
    }

    async fn weekly_report(&self, week: Option<String>) -> Result<WeeklyReport, FetchError> {
        delay(latency::REPORT).await;
        if let Some(week) = week {
            log::debug!("Weekly report requested for {}", week);
        }
        Ok(self.store.weekly_report(random_factor(), random_factor()))
    }

    async fn actionable_items(&self) -> Result<Vec<ActionableItem>, FetchError> {
        delay(latency::ACTIONS).await;
        Ok(self.store.actionable_items())
    }

    async fn upload(&self, file_name: String) -> Result<UploadResponse, FetchError> {
        delay(latency::UPLOAD).await;
        Ok(self.store.acknowledge_upload(&file_name))
    }

    async fn update_settings(
        &self,
        update: SettingsUpdate,
    ) -> Result<SettingsResponse, FetchError> {
        delay(latency::DEFAULT).await;
        log::info!("Saving {} settings", update.section().label());
        Ok(self.store.acknowledge_settings(&update))
    }
}
