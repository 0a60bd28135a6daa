use contracts::dashboards::d400_roi::dto::RoiSummary;
use contracts::dashboards::d403_quick_stats::dto::QuickStats;
use contracts::domain::a004_ai_advisor::aggregate::{AdviceCategory, BusinessAdvice};
use contracts::shared::error::FetchError;
use contracts::shared::format::{format_count, format_inr, format_inr_compact};
use contracts::system::pages::Page;
use futures::future::join;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_global_context;
use crate::shared::components::{AlertBanner, PageHeader, StatCard, StatTone};
use crate::shared::data::use_api;
use crate::shared::icons::icon;
use crate::shared::load_state::{spawn_load, LoadState};
use crate::shared::mount_guard::MountGuard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

const LOAD_FAILED_TITLE: &str = "Data Load Failed";
const LOAD_FAILED_MESSAGE: &str =
    "We couldn't load your dashboard data. Please try refreshing the page.";

const QUICK_ACTIONS: [(&str, &str, Page); 4] = [
    ("Low Stock", "alert-triangle", Page::LowStock),
    ("Upload Data", "upload", Page::UploadData),
    ("Top Selling", "trending-up", Page::TopSelling),
    ("AI Insights", "lightbulb", Page::AiInsights),
];

fn advice_class(category: AdviceCategory) -> &'static str {
    match category {
        AdviceCategory::Inventory => "advice advice--inventory",
        AdviceCategory::Sales => "advice advice--sales",
        AdviceCategory::Strategy => "advice advice--strategy",
    }
}

type Overview = (RoiSummary, Vec<BusinessAdvice>);

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();
    let ctx = use_global_context();
    let overview = RwSignal::new(LoadState::<Overview>::default());
    let stats = RwSignal::new(LoadState::<QuickStats>::default());

    // ROI and advice arrive together; either failing fails both sections.
    let overview_api = api.clone();
    spawn_load(
        overview,
        MountGuard::new(),
        LOAD_FAILED_TITLE,
        LOAD_FAILED_MESSAGE,
        async move {
            let (roi, advice) =
                join(overview_api.roi_summary(), overview_api.business_advice()).await;
            Ok::<_, FetchError>((roi?, advice?))
        },
    );
    spawn_load(
        stats,
        MountGuard::new(),
        LOAD_FAILED_TITLE,
        LOAD_FAILED_MESSAGE,
        async move { api.quick_stats().await },
    );

    let alert = Signal::derive(move || {
        overview
            .with(|s| s.alert().cloned())
            .or_else(|| stats.with(|s| s.alert().cloned()))
    });
    let stat = move |f: fn(&QuickStats) -> String| {
        Signal::derive(move || stats.with(|s| s.ready().map(f)))
    };

    view! {
        <PageFrame page_id="d403_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <AlertBanner
                alert=alert
                on_close=move |_| {
                    overview.update(|s| s.dismiss());
                    stats.update(|s| s.dismiss());
                }
            />
            <PageHeader title="Dashboard" subtitle="An overview of your pharmacy's performance." />

            <div class="grid grid--4">
                <StatCard
                    label="Low Stock Items"
                    icon_name="alert-triangle"
                    tone=StatTone::Warning
                    value=stat(|s| format_count(u64::from(s.low_stock_items)))
                />
                <StatCard
                    label="Out of Stock Items"
                    icon_name="x-circle"
                    tone=StatTone::Danger
                    value=stat(|s| format_count(u64::from(s.out_of_stock_items)))
                />
                <StatCard
                    label="Top Selling Item"
                    icon_name="trending-up"
                    tone=StatTone::Success
                    value=stat(|s| s.top_seller.clone().unwrap_or_else(|| "—".to_string()))
                />
                <StatCard
                    label="Inventory Value"
                    icon_name="rupee"
                    value=stat(|s| format_inr_compact(s.inventory_value))
                />
            </div>

            <div class="grid grid--3">
                <section class="card grid__span-2">
                    <h2 class="card__title">"ROI & Savings Snapshot"</h2>
                    {move || match overview.get() {
                        LoadState::Loading => view! {
                            <p class="empty-state">"Loading Savings Data..."</p>
                        }
                        .into_any(),
                        LoadState::Ready((roi, _)) => view! {
                            <div class="roi-snapshot">
                                <div>
                                    <p class="text-muted">"Potential Monthly Savings with PharmaIQ"</p>
                                    <p class="roi-snapshot__total">{format_inr(roi.total_savings)}</p>
                                    <div class="roi-snapshot__parts">
                                        <span>{format!("Expiry Waste: {}", format_inr(roi.expiry_waste))}</span>
                                        <span>{format!("Lost Sales: {}", format_inr(roi.lost_sales))}</span>
                                    </div>
                                </div>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| ctx.navigate(Page::RoiTracker)
                                >
                                    "View Detailed Report"
                                </Button>
                            </div>
                        }
                        .into_any(),
                        LoadState::Idle => view! {
                            <p class="empty-state">"Could not load savings data."</p>
                        }
                        .into_any(),
                        LoadState::Failed(_) => ().into_any(),
                    }}
                </section>

                <section class="card">
                    <h2 class="card__title">"Quick Actions"</h2>
                    <div class="quick-actions">
                        {QUICK_ACTIONS
                            .into_iter()
                            .map(|(title, icon_name, page)| view! {
                                <button class="quick-action" on:click=move |_| ctx.navigate(page)>
                                    <span class="quick-action__icon">{icon(icon_name)}</span>
                                    <span class="quick-action__title">{title}</span>
                                </button>
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>

            <section class="card">
                <h2 class="card__title">"AI Business Advisor"</h2>
                {move || {
                    if overview.with(|s| s.is_loading()) {
                        return view! { <p class="empty-state">"Loading Advice..."</p> }.into_any();
                    }
                    let advice = overview.with(|s| s.ready().map(|(_, a)| a.clone()).unwrap_or_default());
                    view! {
                        <div class="advice-list">
                            {advice
                                .into_iter()
                                .map(|item| view! {
                                    <div class=advice_class(item.category)>
                                        <span class="advice__icon">{icon("lightbulb")}</span>
                                        <div>
                                            <h3 class="advice__title">
                                                {item.title}
                                                " "
                                                <span class="badge badge--neutral">{item.category.label()}</span>
                                            </h3>
                                            <p class="advice__message">{item.message}</p>
                                        </div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </section>
        </PageFrame>
    }
}
