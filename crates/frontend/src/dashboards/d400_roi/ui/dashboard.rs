use contracts::dashboards::d400_roi::dto::{OutOfStockItem, RoiDetails};
use contracts::domain::a001_medicine::aggregate::Medicine;
use contracts::shared::format::format_inr_precise;
use leptos::prelude::*;

use crate::shared::components::{AlertBanner, PageHeader};
use crate::shared::data::use_api;
use crate::shared::icons::icon;
use crate::shared::load_state::{spawn_load, LoadState};
use crate::shared::mount_guard::MountGuard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

fn expiring_table(items: Vec<Medicine>) -> impl IntoView {
    view! {
        <table class="simple-table">
            <thead>
                <tr>
                    <th>"Medicine"</th>
                    <th>"Stock"</th>
                    <th>"Expiry"</th>
                    <th class="text-right">"Value"</th>
                </tr>
            </thead>
            <tbody>
                {items
                    .into_iter()
                    .map(|m| {
                        let value = m.inventory_value();
                        view! {
                            <tr>
                                <td><strong>{m.name}</strong></td>
                                <td>{m.stock}</td>
                                <td>{m.expiry.format("%d/%m/%Y").to_string()}</td>
                                <td class="text-right">{format_inr_precise(value)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

fn lost_sales_table(items: Vec<OutOfStockItem>) -> impl IntoView {
    view! {
        <table class="simple-table">
            <thead>
                <tr>
                    <th>"Medicine"</th>
                    <th class="text-right">"Potential Lost Revenue"</th>
                </tr>
            </thead>
            <tbody>
                {items
                    .into_iter()
                    .map(|item| view! {
                        <tr>
                            <td><strong>{item.name}</strong></td>
                            <td class="text-right">{format_inr_precise(item.potential_lost_revenue)}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

fn breakdown(details: RoiDetails) -> impl IntoView {
    view! {
        <section class="card text-center">
            <p class="roi__caption">"Total Potential Monthly Savings"</p>
            <p class="roi-snapshot__total">{format_inr_precise(details.total_savings)}</p>
            <p class="text-muted">"This is an estimate based on your current inventory and sales data."</p>
        </section>

        <div class="grid grid--2">
            <section class="card">
                <div class="roi__heading">
                    <span class="roi__icon roi__icon--warning">{icon("alert-triangle")}</span>
                    <div>
                        <h2 class="card__title">"Reduced Expiry Waste"</h2>
                        <p class="roi__amount text-warning">{format_inr_precise(details.expiry_waste)}</p>
                    </div>
                </div>
                <p class="text-muted">
                    "Value of stock expiring in the next two months. PharmaIQ helps you manage this stock before it becomes a loss."
                </p>
                {expiring_table(details.expiring_soon)}
            </section>

            <section class="card">
                <div class="roi__heading">
                    <span class="roi__icon roi__icon--danger">{icon("rupee")}</span>
                    <div>
                        <h2 class="card__title">"Prevented Lost Sales"</h2>
                        <p class="roi__amount text-danger">{format_inr_precise(details.lost_sales)}</p>
                    </div>
                </div>
                <p class="text-muted">
                    "Potential revenue missed from out-of-stock items. Low stock alerts help you reorder in time."
                </p>
                {lost_sales_table(details.out_of_stock)}
            </section>
        </div>
    }
}

#[component]
pub fn RoiTrackerPage() -> impl IntoView {
    let api = use_api();
    let details = RwSignal::new(LoadState::<RoiDetails>::default());

    spawn_load(
        details,
        MountGuard::new(),
        "Data Load Failed",
        "We couldn't load your ROI and savings details. Please refresh the page.",
        async move { api.roi_details().await },
    );

    view! {
        <PageFrame page_id="d400_roi--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="ROI & Savings Tracker"
                subtitle="A detailed breakdown of how PharmaIQ saves you money."
            />
            <AlertBanner
                alert=Signal::derive(move || details.with(|s| s.alert().cloned()))
                on_close=move |_| details.update(|s| s.dismiss())
            />
            {move || match details.get() {
                LoadState::Loading => view! {
                    <p class="empty-state">"Loading ROI Details..."</p>
                }
                .into_any(),
                LoadState::Ready(d) => breakdown(d).into_any(),
                LoadState::Idle => view! {
                    <p class="empty-state">"Could not load ROI data."</p>
                }
                .into_any(),
                LoadState::Failed(_) => ().into_any(),
            }}
        </PageFrame>
    }
}
