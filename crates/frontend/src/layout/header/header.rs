use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Top bar: menu toggle, current page title, user and sign-out.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_global_context();

    let user_name = move || ctx.user().map(|u| u.name).unwrap_or_default();
    let user_email = move || ctx.user().map(|u| u.email).unwrap_or_default();

    view! {
        <header class="top-header">
            <button
                class="top-header__icon-btn top-header__menu"
                aria-label="Open menu"
                on:click=move |_| ctx.toggle_sidebar()
            >
                {icon("menu")}
            </button>
            <h2 class="top-header__title">{move || ctx.page().label()}</h2>
            <div class="top-header__actions">
                <div class="top-header__user">
                    <span class="top-header__user-name">{user_name}</span>
                    <span class="top-header__user-email">{user_email}</span>
                </div>
                <button
                    class="top-header__icon-btn"
                    title="Sign out"
                    on:click=move |_| ctx.logout()
                >
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
