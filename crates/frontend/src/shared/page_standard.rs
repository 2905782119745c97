//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab carries an HTML `id` of the form
//! `{entity}--{category}` (e.g. `"a001_product--list"`) and a
//! `data-page-category` attribute with one of the constants below.

/// List of records, table with search and dialogs.
pub const PAGE_CAT_LIST: &str = "list";

/// Read-only aggregate view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Multi-step workflow page (stocktaking, new sale).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Account and administration pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

/// CSS class for the root element of a page in `category`.
pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_LIST => "page page--list",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_USECASE => "page page--usecase",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids() {
        assert!(is_valid_page_id("a006_stocktaking--usecase"));
        assert!(!is_valid_page_id("a006_stocktaking"));
        assert!(!is_valid_page_id("--list"));
    }

    #[test]
    fn every_category_has_a_class() {
        for category in [
            PAGE_CAT_LIST,
            PAGE_CAT_DASHBOARD,
            PAGE_CAT_USECASE,
            PAGE_CAT_SYSTEM,
        ] {
            assert_eq!(page_class(category), format!("page page--{}", category));
        }
        assert_eq!(page_class("detail"), "page");
    }
}
