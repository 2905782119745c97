use contracts::domain::a006_stocktaking::{format_difference, DiscrepancyStatus, StocktakingSession};
use leptos::prelude::*;
use thaw::*;

pub fn status_color(status: DiscrepancyStatus) -> BadgeColor {
    match status {
        DiscrepancyStatus::NotCounted => BadgeColor::Subtle,
        DiscrepancyStatus::Correct => BadgeColor::Success,
        DiscrepancyStatus::Surplus(_) => BadgeColor::Informative,
        DiscrepancyStatus::Shortage(_) => BadgeColor::Danger,
    }
}

pub fn difference_class(status: DiscrepancyStatus) -> &'static str {
    match status {
        DiscrepancyStatus::NotCounted => "count__diff count__diff--none",
        DiscrepancyStatus::Correct => "count__diff count__diff--correct",
        DiscrepancyStatus::Surplus(_) => "count__diff count__diff--surplus",
        DiscrepancyStatus::Shortage(_) => "count__diff count__diff--shortage",
    }
}

/// Blank input means "leave as is"; anything that is not a whole number is ignored.
pub fn parse_count(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<i64>().ok()
}

#[component]
pub fn StatusBadge(status: DiscrepancyStatus) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=status_color(status)>
            {status.to_string()}
        </Badge>
    }
}

/// Product lines of a session. Editable when `on_count` is given.
#[component]
pub fn CountTable(
    #[prop(into)] session: Signal<Option<StocktakingSession>>,
    #[prop(optional)] on_count: Option<Callback<(i64, i64)>>,
    #[prop(optional, into)] saving: Signal<bool>,
) -> impl IntoView {
    let rows = move || {
        session.with(|s| {
            s.as_ref()
                .map(|s| s.products().to_vec())
                .unwrap_or_default()
        })
    };

    view! {
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell min_width=180.0>"Product Name"</TableHeaderCell>
                    <TableHeaderCell min_width=120.0>"Category"</TableHeaderCell>
                    <TableHeaderCell min_width=100.0>"Current Stock"</TableHeaderCell>
                    <TableHeaderCell min_width=120.0>"Counted Quantity"</TableHeaderCell>
                    <TableHeaderCell min_width=90.0>"Difference"</TableHeaderCell>
                    <TableHeaderCell min_width=120.0>"Status"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                <For
                    each=rows
                    key=|p| (p.product_id, p.counted())
                    children=move |product| {
                        let product_id = product.product_id;
                        let status = product.status();
                        let counted_text = product.counted().map(|c| c.to_string()).unwrap_or_default();
                        let counted_cell = match on_count {
                            Some(on_count) => view! {
                                <input
                                    type="number"
                                    min="0"
                                    placeholder="0"
                                    class="form__input form__input--small"
                                    prop:value=move || {
                                        // Follows the stored count, also after a rejected save.
                                        session.with(|s| {
                                            s.as_ref()
                                                .and_then(|s| s.product(product_id))
                                                .and_then(|p| p.counted())
                                                .map(|c| c.to_string())
                                                .unwrap_or_default()
                                        })
                                    }
                                    disabled=move || saving.get()
                                    on:change=move |ev| {
                                        if let Some(value) = parse_count(&event_target_value(&ev)) {
                                            on_count.run((product_id, value));
                                        }
                                    }
                                />
                            }.into_any(),
                            None => view! { <span>{if counted_text.is_empty() { "-".to_string() } else { counted_text }}</span> }.into_any(),
                        };
                        let product_name = product.product_name.clone();
                        let supplier = product.supplier.clone();
                        let category = product.category.clone();
                        let recorded_quantity = product.recorded_quantity;
                        let difference = format_difference(product.discrepancy());
                        view! {
                            <TableRow>
                                <TableCell>
                                    <div class="count__product">
                                        <div>{product_name}</div>
                                        <div class="count__supplier">{supplier}</div>
                                    </div>
                                </TableCell>
                                <TableCell>{category}</TableCell>
                                <TableCell><b>{recorded_quantity}</b></TableCell>
                                <TableCell>{counted_cell}</TableCell>
                                <TableCell>
                                    <span class=difference_class(status)>{difference}</span>
                                </TableCell>
                                <TableCell><StatusBadge status=status /></TableCell>
                            </TableRow>
                        }
                    }
                />
            </TableBody>
        </Table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_input_parsing() {
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("  "), None);
        assert_eq!(parse_count("12"), Some(12));
        assert_eq!(parse_count("-3"), Some(-3));
        assert_eq!(parse_count("1.5"), None);
    }

    #[test]
    fn difference_styles_follow_status() {
        assert_eq!(
            difference_class(DiscrepancyStatus::from_discrepancy(Some(2))),
            "count__diff count__diff--surplus"
        );
        assert_eq!(
            difference_class(DiscrepancyStatus::from_discrepancy(None)),
            "count__diff count__diff--none"
        );
    }
}
