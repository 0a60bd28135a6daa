use contracts::dashboards::d401_visualizations::dto::{
    empty_result_alert, ChartType, Dimension, Metric, VisualizationConfig, VisualizationData,
};
use contracts::shared::alert::AlertInfo;
use contracts::shared::error::FetchError;
use contracts::shared::format::{format_count, format_inr, format_inr_axis};
use leptos::prelude::*;
use thaw::*;

use crate::shared::charts::{BarChart, LineChart, PieChart};
use crate::shared::components::{AlertBanner, PageHeader};
use crate::shared::data::use_api;
use crate::shared::icons::icon;
use crate::shared::load_state::{spawn_load, LoadState};
use crate::shared::mount_guard::MountGuard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Generated chart together with the settings it was built from.
type Generated = (VisualizationConfig, VisualizationData);

fn count_label(value: f64) -> String {
    format_count(value.round().max(0.0) as u64)
}

fn axis_format(metric: Metric) -> fn(f64) -> String {
    if metric.is_currency() {
        format_inr_axis
    } else {
        count_label
    }
}

fn value_format(metric: Metric) -> fn(f64) -> String {
    if metric.is_currency() {
        format_inr
    } else {
        count_label
    }
}

/// Alert for the current chart state: fetch errors, or the info notice when
/// the chart came back empty.
fn chart_alert(state: &LoadState<Generated>) -> Option<AlertInfo> {
    match state {
        LoadState::Failed(alert) => Some(alert.clone()),
        LoadState::Ready((_, data)) if data.data.is_empty() => Some(empty_result_alert()),
        _ => None,
    }
}

fn render_chart(config: VisualizationConfig, data: VisualizationData) -> AnyView {
    let points: Vec<(String, f64)> = data
        .data
        .iter()
        .map(|p| (p.name.clone(), p.value(config.metric)))
        .collect();
    match config.chart_type {
        ChartType::Bar => {
            view! { <BarChart points=points axis_format=axis_format(config.metric) /> }.into_any()
        }
        ChartType::Line => {
            view! { <LineChart points=points axis_format=axis_format(config.metric) /> }.into_any()
        }
        ChartType::Pie => {
            view! { <PieChart points=points value_format=value_format(config.metric) /> }.into_any()
        }
    }
}

#[component]
pub fn VisualizationsPage() -> impl IntoView {
    let api = use_api();
    let guard = MountGuard::new();
    let config = RwSignal::new(VisualizationConfig::default());
    let chart = RwSignal::new(LoadState::<Generated>::default());

    let generate = move |_: leptos::ev::MouseEvent| {
        let requested = config.get_untracked().normalized();
        log::info!("Generating chart: {:?}", requested);
        let api = api.clone();
        spawn_load(
            chart,
            guard.clone(),
            "Chart Generation Failed",
            "We failed to generate chart data based on your selections. Please try again.",
            async move {
                let data = api.visualization_data(requested).await?;
                Ok::<_, FetchError>((requested, data))
            },
        );
    };

    let loading = Signal::derive(move || chart.with(|s| s.is_loading()));
    let time_available = move || config.with(|c| c.time_dimension_available());

    view! {
        <PageFrame page_id="d401_visualizations--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Visualizations" />

            <section class="card">
                <h2 class="card__title">"Chart Builder"</h2>
                <div class="chart-builder">
                    <div class="form-group">
                        <Label>"Chart Type"</Label>
                        <select
                            class="form-select"
                            prop:value=move || config.with(|c| c.chart_type.key())
                            on:change=move |ev| {
                                let chart_type = ChartType::from_key(&event_target_value(&ev));
                                config.update(|c| c.chart_type = chart_type);
                            }
                        >
                            {ChartType::ALL
                                .into_iter()
                                .map(|t| view! { <option value=t.key()>{t.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <Label>"Metric (Analyze)"</Label>
                        <select
                            class="form-select"
                            prop:value=move || config.with(|c| c.metric.key())
                            on:change=move |ev| {
                                let metric = Metric::from_key(&event_target_value(&ev));
                                config.update(|c| {
                                    c.metric = metric;
                                    *c = c.normalized();
                                });
                            }
                        >
                            {Metric::ALL
                                .into_iter()
                                .map(|m| view! { <option value=m.key()>{m.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <Label>"Dimension (Group By)"</Label>
                        <select
                            class="form-select"
                            disabled=move || !time_available()
                            prop:value=move || config.with(|c| c.dimension.key())
                            on:change=move |ev| {
                                let dimension = Dimension::from_key(&event_target_value(&ev));
                                config.update(|c| c.dimension = dimension);
                            }
                        >
                            {Dimension::ALL
                                .into_iter()
                                .map(|d| view! { <option value=d.key()>{d.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <Button appearance=ButtonAppearance::Primary disabled=loading on_click=generate>
                        {move || if loading.get() { "Generating..." } else { "Generate Chart" }}
                    </Button>
                </div>
                <Show when=move || !time_available()>
                    <p class="form-hint text-warning">
                        "Time dimension is not available for Current Stock metric."
                    </p>
                </Show>
            </section>

            <AlertBanner
                alert=Signal::derive(move || chart.with(chart_alert))
                on_close=move |_| chart.set(LoadState::Idle)
            />

            <section class="card chart-panel">
                {move || match chart.get() {
                    LoadState::Loading => view! {
                        <div class="empty-state">
                            <Spinner />
                            <p class="text-muted">"Building your chart..."</p>
                        </div>
                    }
                    .into_any(),
                    LoadState::Ready((used, data)) if !data.data.is_empty() => render_chart(used, data),
                    LoadState::Idle => view! {
                        <div class="empty-state">
                            <span class="empty-state__icon">{icon("pie-chart")}</span>
                            <p><strong>"Your custom chart will appear here."</strong></p>
                            <p class="text-muted">"Configure your preferences above and click \"Generate Chart\"."</p>
                        </div>
                    }
                    .into_any(),
                    _ => ().into_any(),
                }}
            </section>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d401_visualizations::dto::ChartPoint;
    use contracts::shared::alert::AlertKind;

    #[test]
    fn test_empty_chart_raises_info_alert() {
        let empty: LoadState<Generated> = LoadState::Ready((
            VisualizationConfig::default(),
            VisualizationData { data: vec![] },
        ));
        let alert = chart_alert(&empty).unwrap();
        assert_eq!(alert.kind, AlertKind::Info);
        assert_eq!(alert.title, "No Data Available");

        let filled: LoadState<Generated> = LoadState::Ready((
            VisualizationConfig::default(),
            VisualizationData {
                data: vec![ChartPoint {
                    name: "Paracetamol 500mg".into(),
                    units_sold: 3,
                    total_revenue: 75.0,
                    stock: Some(50),
                }],
            },
        ));
        assert!(chart_alert(&filled).is_none());
        assert!(chart_alert(&LoadState::Idle).is_none());
    }

    #[test]
    fn test_formats_follow_metric() {
        assert_eq!(axis_format(Metric::TotalRevenue)(45_000.0), "₹45k");
        assert_eq!(value_format(Metric::UnitsSold)(1250.0), "1,250");
    }
}
