//! Provider backed by the mock HTTP server.

use async_trait::async_trait;
use contracts::dashboards::d400_roi::dto::{RoiDetails, RoiSummary};
use contracts::dashboards::d401_visualizations::dto::{VisualizationConfig, VisualizationData};
use contracts::dashboards::d402_weekly_report::dto::{WeeklyReport, WeeklyReportQuery};
use contracts::dashboards::d403_quick_stats::dto::QuickStats;
use contracts::domain::a001_medicine::aggregate::Medicine;
use contracts::domain::a002_sales_record::aggregate::{SalesRecord, TopSellingPeriod};
use contracts::domain::a003_actionable_item::aggregate::ActionableItem;
use contracts::domain::a004_ai_advisor::aggregate::{
    BusinessAdvice, ChatRequest, ChatResponse, Insight,
};
use contracts::shared::alert::AlertInfo;
use contracts::shared::error::FetchError;
use contracts::system::auth::{LoginRequest, LoginResponse};
use contracts::system::settings::{SettingsResponse, SettingsUpdate};
use contracts::usecases::u501_upload_data::request::{UploadRequest, UploadResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::DataProvider;

pub struct HttpProvider {
    base: String,
}

impl HttpProvider {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        decode(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, FetchError> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| FetchError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()));
    }
    let status = response.status();
    if status == 400 {
        if let Ok(alert) = response.json::<AlertInfo>().await {
            return Err(FetchError::Rejected(alert.message));
        }
    }
    Err(FetchError::Status(status))
}

/// Weekly report endpoint, with `?week=` only when a week is chosen.
fn weekly_report_path(week: Option<String>) -> String {
    match week {
        Some(week) => {
            let query = serde_qs::to_string(&WeeklyReportQuery { week: Some(week) })
                .unwrap_or_default();
            format!("/api/reports/weekly?{}", query)
        }
        None => "/api/reports/weekly".to_string(),
    }
}

#[async_trait(?Send)]
impl DataProvider for HttpProvider {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, FetchError> {
        self.post("/api/auth/login", &request).await
    }

    async fn roi_summary(&self) -> Result<RoiSummary, FetchError> {
        self.get("/api/roi/summary").await
    }

    async fn roi_details(&self) -> Result<RoiDetails, FetchError> {
        self.get("/api/roi/details").await
    }

    async fn quick_stats(&self) -> Result<QuickStats, FetchError> {
        self.get("/api/dashboard/quick-stats").await
    }

    async fn low_stock(&self) -> Result<Vec<Medicine>, FetchError> {
        self.get("/api/medicines/low-stock").await
    }

    async fn top_selling(&self, period: TopSellingPeriod) -> Result<Vec<SalesRecord>, FetchError> {
        self.get(&format!("/api/sales/top-selling?period={}", period.key()))
            .await
    }

    async fn business_advice(&self) -> Result<Vec<BusinessAdvice>, FetchError> {
        self.get("/api/advisor/advice").await
    }

    async fn insights(&self) -> Result<Vec<Insight>, FetchError> {
        self.get("/api/advisor/insights").await
    }

    async fn visualization_data(
        &self,
        config: VisualizationConfig,
    ) -> Result<VisualizationData, FetchError> {
        self.post("/api/visualizations", &config).await
    }

    async fn ask(&self, question: String) -> Result<String, FetchError> {
        let response: ChatResponse = self
            .post("/api/advisor/chat", &ChatRequest { question })
            .await?;
        Ok(response.answer)
    }

    async fn weekly_report(&self, week: Option<String>) -> Result<WeeklyReport, FetchError> {
        self.get(&weekly_report_path(week)).await
    }

    async fn actionable_items(&self) -> Result<Vec<ActionableItem>, FetchError> {
        self.get("/api/actions").await
    }

    async fn upload(&self, file_name: String) -> Result<UploadResponse, FetchError> {
        self.post("/api/upload", &UploadRequest { file_name }).await
    }

    async fn update_settings(
        &self,
        update: SettingsUpdate,
    ) -> Result<SettingsResponse, FetchError> {
        self.post("/api/settings", &update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_report_path() {
        assert_eq!(weekly_report_path(None), "/api/reports/weekly");
        assert_eq!(
            weekly_report_path(Some("2024W21".into())),
            "/api/reports/weekly?week=2024W21"
        );
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let provider = HttpProvider::new("http://localhost:3000");
        assert_eq!(
            provider.url("/api/actions"),
            "http://localhost:3000/api/actions"
        );
    }
}
