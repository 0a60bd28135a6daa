use contracts::domain::a002_sales_record::aggregate::{SalesRecord, TopSellingPeriod};
use contracts::domain::a002_sales_record::csv_export::{export_top_selling, CSV_FILE_NAME};
use contracts::shared::format::{format_count, format_inr, format_inr_precise};
use leptos::prelude::*;
use thaw::*;

use crate::shared::charts::PieChart;
use crate::shared::components::{AlertBanner, PageHeader};
use crate::shared::data::use_api;
use crate::shared::export::{download_text, CSV_MIME};
use crate::shared::icons::icon;
use crate::shared::load_state::{spawn_latest_load, LoadState, LoadTicket};
use crate::shared::mount_guard::MountGuard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const PIE_SLICES: usize = 5;

/// Revenue of the first five ranked records, as chart points.
fn top_revenue_points(records: &[SalesRecord]) -> Vec<(String, f64)> {
    records
        .iter()
        .take(PIE_SLICES)
        .map(|r| (r.name.clone(), r.total_revenue))
        .collect()
}

fn message_row(text: &'static str) -> AnyView {
    view! {
        <tr class="table__row">
            <td class="table__cell table__cell--message" colspan="4">{text}</td>
        </tr>
    }
    .into_any()
}

#[component]
pub fn TopSellingPage() -> impl IntoView {
    let api = use_api();
    let guard = MountGuard::new();
    let sales = RwSignal::new(LoadState::<Vec<SalesRecord>>::default());
    let period_key = RwSignal::new(TopSellingPeriod::Last30Days.key().to_string());
    let tickets = LoadTicket::default();

    // Refetches whenever the period changes.
    Effect::new(move || {
        let period = TopSellingPeriod::from_key(&period_key.get());
        log::info!("Loading top selling medicines for {}", period.key());
        let api = api.clone();
        spawn_latest_load(
            sales,
            guard.clone(),
            tickets.clone(),
            "Error Loading Data",
            "Could not fetch top selling medicines data. Please try again later.",
            async move { api.top_selling(period).await },
        );
    });

    let export_csv = move |_: leptos::ev::MouseEvent| {
        let content = sales.with_untracked(|s| s.ready().map(|records| export_top_selling(records)));
        match content {
            Some(csv) => {
                if let Err(e) = download_text(&csv, CSV_FILE_NAME, CSV_MIME) {
                    log::error!("Failed to export CSV: {:?}", e);
                }
            }
            None => log::warn!("Nothing to export yet"),
        }
    };

    view! {
        <PageFrame page_id="a002_sales_record--list" category=PAGE_CAT_LIST>
            <PageHeader title="Top Selling Medicines">
                <Select value=period_key>
                    {TopSellingPeriod::ALL
                        .into_iter()
                        .map(|p| view! { <option value=p.key()>{p.label()}</option> })
                        .collect_view()}
                </Select>
                <Button appearance=ButtonAppearance::Primary on_click=export_csv>
                    {icon("download")}
                    " Export CSV"
                </Button>
            </PageHeader>
            <AlertBanner
                alert=Signal::derive(move || sales.with(|s| s.alert().cloned()))
                on_close=move |_| sales.update(|s| s.dismiss())
            />

            <div class="grid grid--5">
                <section class="card grid__span-3 table-wrapper">
                    <h2 class="card__title">"Sales Ranking"</h2>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=60.0>"Rank"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Medicine Name"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0 class="text-right">"Units Sold"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0 class="text-right">"Total Revenue"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                if sales.with(|s| s.is_loading()) {
                                    return message_row("Loading...");
                                }
                                let records = sales.with(|s| s.ready().cloned().unwrap_or_default());
                                if records.is_empty() {
                                    return message_row("No sales data available.");
                                }
                                records
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, record)| {
                                        view! {
                                            <TableRow>
                                                <TableCell><strong>{i + 1}</strong></TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{record.name}</TableCellLayout>
                                                </TableCell>
                                                <TableCell class="text-right">
                                                    {format_count(u64::from(record.units_sold))}
                                                </TableCell>
                                                <TableCell class="text-right text-success">
                                                    <strong>{format_inr_precise(record.total_revenue)}</strong>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </TableBody>
                    </Table>
                </section>

                <section class="card grid__span-2">
                    <h2 class="card__title">"Top 5 by Revenue"</h2>
                    {move || {
                        let points = sales.with(|s| s.ready().map(|r| top_revenue_points(r)));
                        points.map(|points| view! { <PieChart points=points value_format=format_inr /> })
                    }}
                </section>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, revenue: f64) -> SalesRecord {
        SalesRecord {
            id: name.into(),
            medicine_id: name.into(),
            name: name.into(),
            units_sold: 1,
            total_revenue: revenue,
        }
    }

    #[test]
    fn test_pie_takes_first_five() {
        let records: Vec<SalesRecord> = (0..7).map(|i| record(&format!("m{}", i), 100.0 - i as f64)).collect();
        let points = top_revenue_points(&records);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], ("m0".to_string(), 100.0));
        assert_eq!(points[4].0, "m4");
    }
}
