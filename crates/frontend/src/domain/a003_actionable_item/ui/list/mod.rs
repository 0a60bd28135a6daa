use contracts::domain::a003_actionable_item::aggregate::{ActionableItem, ItemStatus, Priority};
use contracts::domain::a003_actionable_item::filter::{
    filter_items, pending_count, toggle_status, PriorityFilter, StatusFilter,
};
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_global_context;
use crate::shared::components::AlertBanner;
use crate::shared::data::use_api;
use crate::shared::icons::icon;
use crate::shared::load_state::{spawn_load, LoadState};
use crate::shared::mount_guard::MountGuard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "action-item--high",
        Priority::Medium => "action-item--medium",
        Priority::Low => "action-item--low",
    }
}

fn priority_badge(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "badge badge--danger",
        Priority::Medium => "badge badge--warning",
        Priority::Low => "badge badge--primary",
    }
}

/// "You have 1 pending task to address."
fn pending_summary(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("You have {} pending task{} to address.", count, suffix)
}

#[component]
pub fn ActionCenterPage() -> impl IntoView {
    let api = use_api();
    let ctx = use_global_context();
    let items = RwSignal::new(LoadState::<Vec<ActionableItem>>::default());
    let status_key = RwSignal::new(StatusFilter::default().key().to_string());
    let priority_key = RwSignal::new(PriorityFilter::default().key().to_string());

    spawn_load(
        items,
        MountGuard::new(),
        "Could Not Load Actions",
        "Failed to fetch your action items. Please try refreshing the page.",
        async move { api.actionable_items().await },
    );

    let toggle = move |id: String| {
        items.update(|state| {
            if let LoadState::Ready(list) = state {
                if !toggle_status(list, &id) {
                    log::warn!("Action item {} not found", id);
                }
            }
        });
    };

    let pending = Memo::new(move |_| items.with(|s| s.ready().map(|l| pending_count(l)).unwrap_or(0)));

    let visible = Memo::new(move |_| {
        let status = StatusFilter::from_key(&status_key.get());
        let priority = PriorityFilter::from_key(&priority_key.get());
        items.with(|s| {
            s.ready()
                .map(|list| {
                    filter_items(list, status, priority)
                        .into_iter()
                        .cloned()
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });

    view! {
        <PageFrame page_id="a003_actionable_item--list" category=PAGE_CAT_LIST>
            <div class="page-header">
                <div class="page-header__text">
                    <h1 class="page-header__title">"Action Center"</h1>
                    <div class="page-header__subtitle">{move || pending_summary(pending.get())}</div>
                </div>
            </div>
            <AlertBanner
                alert=Signal::derive(move || items.with(|s| s.alert().cloned()))
                on_close=move |_| items.update(|s| s.dismiss())
            />

            <div class="card toolbar">
                <div class="toolbar__group">
                    <span class="toolbar__label">"Status:"</span>
                    <Select value=status_key>
                        {StatusFilter::ALL
                            .into_iter()
                            .map(|f| view! { <option value=f.key()>{f.label()}</option> })
                            .collect_view()}
                    </Select>
                </div>
                <div class="toolbar__group">
                    <span class="toolbar__label">"Priority:"</span>
                    <Select value=priority_key>
                        {PriorityFilter::ALL
                            .into_iter()
                            .map(|f| view! { <option value=f.key()>{f.label()}</option> })
                            .collect_view()}
                    </Select>
                </div>
            </div>

            <div class="action-list">
                <Show when=move || items.with(|s| s.is_loading())>
                    <div class="empty-state">
                        <Spinner />
                        " Loading Actions..."
                    </div>
                </Show>
                <For
                    each=move || visible.get()
                    key=|item| item.row_key()
                    children=move |item| {
                        let done = item.status == ItemStatus::Done;
                        let id = item.id.clone();
                        view! {
                            <div
                                class=format!("action-item {}", priority_class(item.priority))
                                class:action-item--done=done
                            >
                                <input
                                    type="checkbox"
                                    class="action-item__check"
                                    prop:checked=done
                                    on:change=move |_| toggle(id.clone())
                                />
                                <div class="action-item__body">
                                    <h3 class="action-item__title">{item.title.clone()}</h3>
                                    <p class="action-item__description">{item.description.clone()}</p>
                                    <div class="action-item__meta">
                                        <span class=priority_badge(item.priority)>
                                            {format!("{} Priority", item.priority.label())}
                                        </span>
                                        <span class="badge badge--neutral">{item.category.label()}</span>
                                        {item.action_page.map(|page| view! {
                                            <button
                                                class="link-button"
                                                on:click=move |_| ctx.navigate(page)
                                            >
                                                {format!("Go to {}", page.label())}
                                            </button>
                                        })}
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
                <Show when=move || {
                    items.with(|s| s.ready().is_some()) && visible.with(|v| v.is_empty())
                }>
                    <div class="card empty-state">
                        <span class="empty-state__icon">{icon("lightbulb")}</span>
                        <h2>"All Clear!"</h2>
                        <p class="text-muted">"There are no items matching your current filters."</p>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_summary_pluralises() {
        assert_eq!(pending_summary(1), "You have 1 pending task to address.");
        assert_eq!(pending_summary(3), "You have 3 pending tasks to address.");
        assert_eq!(pending_summary(0), "You have 0 pending tasks to address.");
    }
}
