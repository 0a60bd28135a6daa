use leptos::prelude::*;

/// Title row shared by every page, with an actions slot on the right.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_without_actions() {
        Owner::new().with(|| {
            let _plain = view! { <PageHeader title="Settings" /> };
            let _with_actions = view! {
                <PageHeader title="Top Selling Medicines" subtitle="Last 30 Days">
                    <button>"Export CSV"</button>
                </PageHeader>
            };
        });
    }
}
