//! Sortable table header cell.
//!
//! ```ignore
//! <SortableHeaderCell label="Available Stock" field=LowStockSortField::Stock sort=sort />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::sort::SortState;
use leptos::prelude::*;
use thaw::*;

/// Header cell that shows the sort arrow for `field` and requests sorting
/// on click (same column flips direction, another column starts ascending).
#[component]
pub fn SortableHeaderCell<F>(
    /// Header text
    label: &'static str,

    /// Column this header sorts by
    field: F,

    /// Shared sort selection of the table
    sort: RwSignal<SortState<F>>,

    #[prop(optional, default = 110.0)]
    min_width: f64,

    /// Header alignment (left/center)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView
where
    F: Copy + PartialEq + Send + Sync + 'static,
{
    let header_class = if align == "center" {
        "table__sortable-header table__sortable-header--center"
    } else {
        "table__sortable-header"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width class="resizable">
            <div
                class=header_class
                on:click=move |_| sort.update(|s| *s = s.request(field))
            >
                {label}
                <span class=move || sort.with(|s| get_sort_class(s, field))>
                    {move || sort.with(|s| get_sort_indicator(s, field))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
