use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

/// Sidebar container; open/closed only matters on narrow screens.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_global_context();
    let is_open = move || ctx.session.with(|s| s.sidebar_open);

    view! {
        <div
            class="sidebar-backdrop"
            class:visible=is_open
            on:click=move |_| ctx.close_sidebar()
        ></div>
        <aside data-zone="left" class="left" class:open=is_open>
            {children()}
        </aside>
    }
}
