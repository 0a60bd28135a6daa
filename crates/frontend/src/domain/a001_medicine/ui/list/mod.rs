pub mod state;

use self::state::create_state;
use contracts::domain::a001_medicine::aggregate::Medicine;
use contracts::domain::a001_medicine::low_stock::LowStockSortField;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::{AlertBanner, PageHeader};
use crate::shared::data::use_api;
use crate::shared::load_state::{spawn_load, LoadState};
use crate::shared::mount_guard::MountGuard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const COLUMN_COUNT: &str = "5";

fn message_row(text: &'static str) -> AnyView {
    view! {
        <tr class="table__row">
            <td class="table__cell table__cell--message" colspan=COLUMN_COUNT>{text}</td>
        </tr>
    }
    .into_any()
}

#[component]
pub fn LowStockPage() -> impl IntoView {
    let api = use_api();
    let state = create_state();
    let medicines = RwSignal::new(LoadState::<Vec<Medicine>>::default());

    spawn_load(
        medicines,
        MountGuard::new(),
        "Error Loading Data",
        "Could not fetch low stock data. Please try again later.",
        async move { api.low_stock().await },
    );

    let sort = RwSignal::new(state.get_untracked().sort);
    Effect::new(move || {
        let s = sort.get();
        state.update(|st| st.sort = s);
    });

    let filter = RwSignal::new(String::new());
    Effect::new(move || {
        let f = filter.get();
        state.update(|st| st.filter = f);
    });

    let rows = Memo::new(move |_| {
        medicines.with(|m| m.ready().map(|list| state.with(|s| s.rows(list))))
    });

    view! {
        <PageFrame page_id="a001_medicine--list" category=PAGE_CAT_LIST>
            <PageHeader title="Low Stock Alerts" />
            <AlertBanner
                alert=Signal::derive(move || medicines.with(|m| m.alert().cloned()))
                on_close=move |_| medicines.update(|m| m.dismiss())
            />

            <div class="card toolbar">
                <div class="toolbar__group">
                    <label for="threshold" class="toolbar__label">"Low Stock Threshold:"</label>
                    <input
                        id="threshold"
                        type="number"
                        min="0"
                        class="form-input form-input--narrow"
                        prop:value=move || state.with(|s| s.threshold.to_string())
                        on:input=move |ev| state.update(|s| s.set_threshold(&event_target_value(&ev)))
                    />
                </div>
                <div class="toolbar__search">
                    <Input value=filter placeholder="Filter by medicine name..." />
                </div>
            </div>

            <div class="card table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Medicine Name" field=LowStockSortField::Name sort=sort min_width=200.0 />
                            <SortableHeaderCell label="Available Stock" field=LowStockSortField::Stock sort=sort align="center" />
                            <SortableHeaderCell label="Minimum Required" field=LowStockSortField::MinRequired sort=sort align="center" />
                            <SortableHeaderCell label="Expiry Date" field=LowStockSortField::Expiry sort=sort />
                            <TableHeaderCell resizable=false min_width=110.0>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            if medicines.with(|m| m.is_loading()) {
                                return message_row("Loading...");
                            }
                            let list = rows.get().unwrap_or_default();
                            if list.is_empty() {
                                return message_row("No low stock items found.");
                            }
                            let threshold = state.with(|s| s.threshold);
                            list.into_iter()
                                .map(|med| {
                                    let status = med.status(threshold);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <strong>{med.name}</strong>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell class="text-center">{med.stock}</TableCell>
                                            <TableCell class="text-center">{med.min_required}</TableCell>
                                            <TableCell>{med.expiry.format("%d/%m/%Y").to_string()}</TableCell>
                                            <TableCell>
                                                <span class=format!("badge {}", status.css_class())>
                                                    {status.label()}
                                                </span>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}
