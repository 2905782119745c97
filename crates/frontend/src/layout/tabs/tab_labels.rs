//! Tab titles, one place for every tab key.

/// Readable tab title for a key. Fallback: the key itself.
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        "d400_metrics" => "Dashboard",
        "a001_product" => "Products",
        "a002_supplier" => "Suppliers",
        "a003_position" => "Positions",
        "a004_shelf" => "Shelves",
        "a004_location" => "Product Locations",
        "a005_transaction" => "Transactions",
        "a005_sale" => "New Sale",
        "a006_stocktaking" => "Stocktaking",
        "sys_users" => "Employees",
        "sys_personal" => "Personal Information",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_keys() {
        assert_eq!(tab_label_for_key("a006_stocktaking"), "Stocktaking");
        assert_eq!(tab_label_for_key("zz_unknown"), "zz_unknown");
    }
}
