use contracts::shared::alert::AlertInfo;
use leptos::prelude::*;

/// Dismissible notification for the current page.
///
/// Renders nothing while `alert` is `None`; the close button calls `on_close`.
#[component]
pub fn AlertBanner(
    #[prop(into)] alert: Signal<Option<AlertInfo>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    move || {
        alert.get().map(|info| {
            let class = format!("alert alert--{}", info.kind.as_str());
            view! {
                <div class=class role="alert">
                    <div class="alert__body">
                        <strong class="alert__title">{info.title}</strong>
                        <span class="alert__message">{info.message}</span>
                    </div>
                    <button
                        class="alert__close"
                        aria-label="Dismiss"
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
