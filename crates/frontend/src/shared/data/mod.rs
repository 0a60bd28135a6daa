//! Data access for every page.
//!
//! Pages never call the network or the mock store directly; they take the
//! [`Api`] handle from context and await its operations. Which provider sits
//! behind the handle is decided once at startup (see [`Api::from_location`]).

pub mod http;
pub mod mock;

use std::sync::Arc;

use async_trait::async_trait;
use contracts::dashboards::d400_roi::dto::{RoiDetails, RoiSummary};
use contracts::dashboards::d401_visualizations::dto::{VisualizationConfig, VisualizationData};
use contracts::dashboards::d402_weekly_report::dto::WeeklyReport;
use contracts::dashboards::d403_quick_stats::dto::QuickStats;
use contracts::domain::a001_medicine::aggregate::Medicine;
use contracts::domain::a002_sales_record::aggregate::{SalesRecord, TopSellingPeriod};
use contracts::domain::a003_actionable_item::aggregate::ActionableItem;
use contracts::domain::a004_ai_advisor::aggregate::{BusinessAdvice, Insight};
use contracts::shared::error::FetchError;
use contracts::system::auth::{LoginRequest, LoginResponse};
use contracts::system::settings::{SettingsResponse, SettingsUpdate};
use contracts::usecases::u501_upload_data::request::UploadResponse;
use leptos::prelude::*;
use serde::Deserialize;
use web_sys::window;

use self::http::HttpProvider;
use self::mock::MockProvider;

/// The operations the dashboard needs from its data source.
#[async_trait(?Send)]
pub trait DataProvider: Send + Sync {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, FetchError>;
    async fn roi_summary(&self) -> Result<RoiSummary, FetchError>;
    async fn roi_details(&self) -> Result<RoiDetails, FetchError>;
    async fn quick_stats(&self) -> Result<QuickStats, FetchError>;
    async fn low_stock(&self) -> Result<Vec<Medicine>, FetchError>;
    async fn top_selling(&self, period: TopSellingPeriod) -> Result<Vec<SalesRecord>, FetchError>;
    async fn business_advice(&self) -> Result<Vec<BusinessAdvice>, FetchError>;
    async fn insights(&self) -> Result<Vec<Insight>, FetchError>;
    async fn visualization_data(
        &self,
        config: VisualizationConfig,
    ) -> Result<VisualizationData, FetchError>;
    async fn ask(&self, question: String) -> Result<String, FetchError>;
    async fn weekly_report(&self, week: Option<String>) -> Result<WeeklyReport, FetchError>;
    async fn actionable_items(&self) -> Result<Vec<ActionableItem>, FetchError>;
    async fn upload(&self, file_name: String) -> Result<UploadResponse, FetchError>;
    async fn update_settings(&self, update: SettingsUpdate)
        -> Result<SettingsResponse, FetchError>;
}

/// Which provider backs the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    Mock,
    Http,
}

#[derive(Deserialize, Default)]
struct ProviderQuery {
    provider: Option<String>,
}

impl ProviderKind {
    /// Reads `?provider=http` from a query string; anything else is the mock.
    pub fn from_query(search: &str) -> Self {
        let query: ProviderQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        match query.provider.as_deref() {
            Some("http") => ProviderKind::Http,
            _ => ProviderKind::Mock,
        }
    }
}

/// Cloneable handle to the active provider, shared through context.
#[derive(Clone)]
pub struct Api(Arc<dyn DataProvider>);

impl Api {
    pub fn new(provider: impl DataProvider + 'static) -> Self {
        Self(Arc::new(provider))
    }

    pub fn from_kind(kind: ProviderKind) -> Self {
        log::info!("Using {:?} data provider", kind);
        match kind {
            ProviderKind::Mock => Self::new(MockProvider::seeded()),
            ProviderKind::Http => Self::new(HttpProvider::new(crate::shared::api_utils::api_base())),
        }
    }

    pub fn from_location() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_kind(ProviderKind::from_query(&search))
    }
}

impl std::ops::Deref for Api {
    type Target = dyn DataProvider;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

pub fn use_api() -> Api {
    use_context::<Api>().expect("Api context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_from_query() {
        assert_eq!(ProviderKind::from_query(""), ProviderKind::Mock);
        assert_eq!(ProviderKind::from_query("?provider=http"), ProviderKind::Http);
        assert_eq!(
            ProviderKind::from_query("?page=reports&provider=http"),
            ProviderKind::Http
        );
        assert_eq!(ProviderKind::from_query("?provider=ftp"), ProviderKind::Mock);
    }
}
