//! PageFrame: standard root wrapper for every page.
//!
//! ```ignore
//! use crate::shared::page_frame::PageFrame;
//! use crate::shared::page_standard::PAGE_CAT_LIST;
//!
//! #[component]
//! pub fn LowStockPage() -> impl IntoView {
//!     view! {
//!         <PageFrame page_id="a001_medicine--list" category=PAGE_CAT_LIST>
//!             <div class="page__content">...</div>
//!         </PageFrame>
//!     }
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

fn frame_class(category: &str, extra: &str) -> String {
    let base = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_USECASE => "page page--usecase",
        _ => "page",
    };
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{module}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class=frame_class(category, class) data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_class() {
        assert_eq!(frame_class(PAGE_CAT_LIST, ""), "page");
        assert_eq!(
            frame_class(PAGE_CAT_DASHBOARD, "roi"),
            "page page--dashboard roi"
        );
    }
}
