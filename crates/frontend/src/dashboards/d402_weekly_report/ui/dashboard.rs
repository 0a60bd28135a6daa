use contracts::dashboards::d402_weekly_report::dto::WeeklyReport;
use contracts::shared::format::{format_count, format_inr, format_inr_axis};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::charts::{LineChart, PieChart};
use crate::shared::components::{AlertBanner, StatCard, StatTone};
use crate::shared::data::use_api;
use crate::shared::export::download_empty_pdf;
use crate::shared::icons::icon;
use crate::shared::load_state::{spawn_load, LoadState};
use crate::shared::mount_guard::MountGuard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

const CURRENT_WEEK: &str = "this-week";
const PDF_GENERATION_MS: u32 = 2_000;
const DOWNLOAD_NOTICE_MS: u32 = 3_000;
const DOWNLOAD_COMPLETE: &str = "Download complete!";

fn stock_value(value: f64) -> String {
    format_count(value.round().max(0.0) as u64)
}

fn report_view(
    report: WeeklyReport,
    downloading: RwSignal<bool>,
    notice: RwSignal<Option<&'static str>>,
    on_download: Callback<String>,
) -> impl IntoView {
    let file_name = report.pdf_file_name();
    let top_seller = report
        .top_seller
        .as_ref()
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "—".to_string());
    let daily: Vec<(String, f64)> = report
        .daily_sales
        .iter()
        .map(|d| (d.name.clone(), d.sales))
        .collect();
    let stock: Vec<(String, f64)> = report
        .stock_status
        .iter()
        .map(|s| (s.name.clone(), f64::from(s.value)))
        .collect();

    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">"Weekly Business Report"</h1>
                <div class="page-header__subtitle">{report.week.clone()}</div>
            </div>
            <div class="page-header__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || downloading.get())
                    on_click=move |_| on_download.run(file_name.clone())
                >
                    {icon("download")}
                    {move || if downloading.get() { " Generating PDF..." } else { " Download as PDF" }}
                </Button>
            </div>
        </div>
        {move || notice.get().map(|text| view! { <p class="download-notice text-success">{text}</p> })}

        <div class="grid grid--4">
            <StatCard
                label="Total Revenue"
                icon_name="rupee"
                tone=StatTone::Success
                value=Some(format_inr(report.total_revenue))
            />
            <StatCard
                label="Units Sold"
                icon_name="file-text"
                value=Some(format_count(u64::from(report.units_sold)))
            />
            <StatCard label="Top Selling Item" icon_name="trending-up" value=Some(top_seller) />
            <StatCard
                label="New Low Stock Items"
                icon_name="alert-triangle"
                tone=StatTone::Warning
                value=Some(report.new_low_stock_items.to_string())
            />
        </div>

        <section class="card ai-summary">
            <span class="ai-summary__icon">{icon("lightbulb")}</span>
            <div>
                <h2 class="card__title">"AI-Powered Summary"</h2>
                <p>{report.ai_summary}</p>
            </div>
        </section>

        <div class="grid grid--2">
            <section class="card">
                <h2 class="card__title">"Daily Sales Trend"</h2>
                <LineChart points=daily axis_format=format_inr_axis />
            </section>
            <section class="card">
                <h2 class="card__title">"Inventory Status"</h2>
                <PieChart points=stock value_format=stock_value />
            </section>
        </div>
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let api = use_api();
    let guard = MountGuard::new();
    let report = RwSignal::new(LoadState::<WeeklyReport>::default());
    let downloading = RwSignal::new(false);
    let notice = RwSignal::new(Option::<&'static str>::None);

    spawn_load(
        report,
        guard.clone(),
        "Report Generation Failed",
        "Could not generate the weekly report. Please try refreshing the page.",
        async move { api.weekly_report(Some(CURRENT_WEEK.to_string())).await },
    );

    // Simulated generation: the file is a placeholder.
    let on_download = Callback::new(move |file_name: String| {
        downloading.set(true);
        notice.set(None);
        let guard = guard.clone();
        spawn_local(async move {
            TimeoutFuture::new(PDF_GENERATION_MS).await;
            if !guard.is_mounted() {
                return;
            }
            downloading.set(false);
            notice.set(Some(DOWNLOAD_COMPLETE));
            log::info!("Downloading {}", file_name);
            if let Err(e) = download_empty_pdf(&file_name) {
                log::error!("Failed to download report: {:?}", e);
            }
            TimeoutFuture::new(DOWNLOAD_NOTICE_MS).await;
            guard.run(|| notice.set(None));
        });
    });

    view! {
        <PageFrame page_id="d402_weekly_report--dashboard" category=PAGE_CAT_DASHBOARD>
            <AlertBanner
                alert=Signal::derive(move || report.with(|s| s.alert().cloned()))
                on_close=move |_| report.update(|s| s.dismiss())
            />
            {move || match report.get() {
                LoadState::Loading => view! {
                    <div class="empty-state">
                        <Spinner />
                        <p class="text-muted">"Generating Your Weekly Report..."</p>
                    </div>
                }
                .into_any(),
                LoadState::Ready(r) => report_view(r, downloading, notice, on_download).into_any(),
                LoadState::Idle | LoadState::Failed(_) => view! {
                    <p class="empty-state">"Could not load report data."</p>
                }
                .into_any(),
            }}
        </PageFrame>
    }
}
