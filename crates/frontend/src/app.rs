use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::data::Api;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Session store and data provider for the whole app.
    provide_context(AppGlobalContext::new());
    provide_context(Api::from_location());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
