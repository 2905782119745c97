//! PageFrame, the root wrapper for every page rendered inside a tab.
//!
//! Sets `id` (`"{entity}--{category}"`) and `data-page-category` on the root
//! element so a page can be located from the DOM inspector.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a001_product--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {}", page_id);

    let class = page_class(category);

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
