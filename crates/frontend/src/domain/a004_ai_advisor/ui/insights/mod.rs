use contracts::domain::a004_ai_advisor::aggregate::Insight;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::{AlertBanner, PageHeader};
use crate::shared::data::use_api;
use crate::shared::icons::icon;
use crate::shared::load_state::{spawn_load, LoadState};
use crate::shared::mount_guard::MountGuard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Insights are only generated on request; the page starts idle.
#[component]
pub fn AiInsightsPage() -> impl IntoView {
    let api = use_api();
    let guard = MountGuard::new();
    let insights = RwSignal::new(LoadState::<Vec<Insight>>::default());

    let generate = move |_: leptos::ev::MouseEvent| {
        log::info!("Generating AI insights");
        let api = api.clone();
        spawn_load(
            insights,
            guard.clone(),
            "Generation Failed",
            "Couldn't generate AI insights at the moment. Please try again.",
            async move { api.insights().await },
        );
    };

    let loading = Signal::derive(move || insights.with(|s| s.is_loading()));

    view! {
        <PageFrame page_id="a004_ai_advisor--insights" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="AI Insights">
                <Button appearance=ButtonAppearance::Primary disabled=loading on_click=generate>
                    {icon("lightbulb")}
                    {move || if loading.get() { " Generating..." } else { " Generate Insights" }}
                </Button>
            </PageHeader>
            <AlertBanner
                alert=Signal::derive(move || insights.with(|s| s.alert().cloned()))
                on_close=move |_| insights.update(|s| s.dismiss())
            />

            {move || match insights.get() {
                LoadState::Loading => view! {
                    <div class="empty-state">
                        <Spinner />
                        <p class="text-muted">"Our AI is analyzing your data..."</p>
                    </div>
                }
                .into_any(),
                LoadState::Idle => view! {
                    <div class="card empty-state">
                        <span class="empty-state__icon">{icon("lightbulb")}</span>
                        <h2>"Ready for smart recommendations?"</h2>
                        <p class="text-muted">"Click the \"Generate Insights\" button to get started."</p>
                    </div>
                }
                .into_any(),
                LoadState::Ready(list) => view! {
                    <div class="grid grid--3">
                        {list
                            .into_iter()
                            .map(|insight| view! {
                                <div class="card insight-card">
                                    <h3 class="insight-card__title">{insight.title}</h3>
                                    <p class="insight-card__message">{insight.message}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
                LoadState::Failed(_) => ().into_any(),
            }}
        </PageFrame>
    }
}
