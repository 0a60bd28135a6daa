use contracts::system::pages::Page;
use leptos::prelude::*;

use crate::dashboards::d400_roi::ui::RoiTrackerPage;
use crate::dashboards::d401_visualizations::ui::VisualizationsPage;
use crate::dashboards::d402_weekly_report::ui::ReportsPage;
use crate::dashboards::d403_overview::ui::DashboardPage;
use crate::domain::a001_medicine::ui::LowStockPage;
use crate::domain::a002_sales_record::ui::TopSellingPage;
use crate::domain::a003_actionable_item::ui::ActionCenterPage;
use crate::domain::a004_ai_advisor::ui::{AiChatPage, AiInsightsPage};
use crate::layout::global_context::use_global_context;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::pages::documentation::DocumentationPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::settings::SettingsPage;
use crate::usecases::u501_upload_data::view::UploadDataPage;

/// Renders the component for `page`. A fresh instance is mounted on every
/// navigation, so page-local state and alerts never carry over.
fn page_view(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
        Page::ActionCenter => view! { <ActionCenterPage /> }.into_any(),
        Page::UploadData => view! { <UploadDataPage /> }.into_any(),
        Page::LowStock => view! { <LowStockPage /> }.into_any(),
        Page::TopSelling => view! { <TopSellingPage /> }.into_any(),
        Page::Visualizations => view! { <VisualizationsPage /> }.into_any(),
        Page::AiInsights => view! { <AiInsightsPage /> }.into_any(),
        Page::AiChat => view! { <AiChatPage /> }.into_any(),
        Page::RoiTracker => view! { <RoiTrackerPage /> }.into_any(),
        Page::Reports => view! { <ReportsPage /> }.into_any(),
        Page::Settings => view! { <SettingsPage /> }.into_any(),
        Page::Documentation => view! { <DocumentationPage /> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_global_context();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    let page = Memo::new(move |_| ctx.page());

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || view! { {move || page_view(page.get())} }.into_any()
        />
    }
}

/// Auth gate: the login screen until a user is signed in.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <Show
            when=move || ctx.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
