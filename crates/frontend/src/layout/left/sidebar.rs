//! Sidebar navigation: one entry per page.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use contracts::system::pages::Page;
use leptos::prelude::*;

/// Icon name for each sidebar entry.
pub fn page_icon(page: Page) -> &'static str {
    match page {
        Page::Dashboard => "dashboard",
        Page::ActionCenter => "check-square",
        Page::RoiTracker => "trending-up",
        Page::Reports => "file-text",
        Page::UploadData => "upload",
        Page::LowStock => "alert-triangle",
        Page::TopSelling => "bar-chart",
        Page::Visualizations => "pie-chart",
        Page::AiInsights => "lightbulb",
        Page::AiChat => "message-square",
        Page::Settings => "settings",
        Page::Documentation => "book",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let current = Memo::new(move |_| ctx.page());

    view! {
        <div class="sidebar">
            <div class="sidebar__brand">
                {icon("pill")}
                <span class="sidebar__title">"PharmaIQ"</span>
                <button
                    class="sidebar__close"
                    aria-label="Close menu"
                    on:click=move |_| ctx.close_sidebar()
                >
                    {icon("close")}
                </button>
            </div>
            <nav class="sidebar__nav">
                {Page::ALL
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="sidebar__item"
                                class:sidebar__item--active=move || current.get() == page
                                on:click=move |_| ctx.navigate(page)
                            >
                                <span class="sidebar__icon">{icon(page_icon(page))}</span>
                                <span class="sidebar__label">{page.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
