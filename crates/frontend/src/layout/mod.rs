pub mod global_context;
pub mod header;
pub mod left;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |           |            Header            |
/// |  Sidebar  +------------------------------+
/// |  (Left)   |        Content (Center)      |
/// +-----------+------------------------------+
/// ```
///
/// On narrow screens the sidebar slides over the content and a backdrop
/// closes it.
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <left::Left>
                {left()}
            </left::Left>
            <div class="app-main">
                <header::Header />
                <main class="app-content">
                    {center()}
                </main>
            </div>
        </div>
    }
}
