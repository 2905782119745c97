//! Client-side search and sort helpers shared by the list pages.
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::TableHeaderCell;

/// Row types that can be searched by a free-text query.
pub trait Searchable {
    /// Case-insensitive match against the row's visible text columns.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Row types that can be sorted by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sorts in place by `field`.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Rows matching `filter`; a blank filter keeps everything.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Search, then sort.
pub fn filter_and_sort<T: Searchable + Sortable + Clone>(
    items: &[T],
    filter: &str,
    field: &str,
    ascending: bool,
) -> Vec<T> {
    let mut rows = filter_list(items, filter);
    sort_list(&mut rows, field, ascending);
    rows
}

/// Case-insensitive string comparison for `compare_by_field` impls.
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// f64 comparison treating NaN as equal.
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class for a sortable column header
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sortable-header table__sortable-header--active"
    } else {
        "table__sortable-header"
    }
}

/// Next `(field, ascending)` after clicking the header of `field`.
pub fn toggle_sort(current_field: &str, ascending: bool, field: &str) -> (String, bool) {
    if current_field == field {
        (field.to_string(), !ascending)
    } else {
        (field.to_string(), true)
    }
}

/// Sort and load state of a list page.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState {
    pub sort_field: String,
    pub sort_ascending: bool,
    pub is_loaded: bool,
}

impl ListState {
    pub fn sorted_by(field: &str) -> Self {
        Self {
            sort_field: field.to_string(),
            sort_ascending: true,
            is_loaded: false,
        }
    }

    pub fn toggle_sort(&mut self, field: &str) {
        let (field, ascending) = toggle_sort(&self.sort_field, self.sort_ascending, field);
        self.sort_field = field;
        self.sort_ascending = ascending;
    }
}

pub fn create_list_state(default_sort: &str) -> RwSignal<ListState> {
    RwSignal::new(ListState::sorted_by(default_sort))
}

/// Clickable column header bound to a [`ListState`].
#[component]
pub fn SortableHeaderCell(
    label: &'static str,
    field: &'static str,
    state: RwSignal<ListState>,
    #[prop(optional)] min_width: Option<f64>,
) -> impl IntoView {
    view! {
        <TableHeaderCell min_width=min_width.unwrap_or(100.0)>
            <div
                class=move || state.with(|s| get_sort_class(&s.sort_field, field))
                style="cursor:pointer;"
                on:click=move |_| state.update(|s| s.toggle_sort(field))
            >
                {label}
                <span class="table__sort-indicator">
                    {move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))}
                </span>
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        qty: i64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "qty" => self.qty.cmp(&other.qty),
                _ => cmp_text(self.name, other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "bolt", qty: 30 },
            Row { name: "Anchor", qty: 5 },
            Row { name: "washer", qty: 12 },
        ]
    }

    #[test]
    fn sorts_both_directions() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        assert_eq!(items[0].name, "Anchor");
        sort_list(&mut items, "qty", false);
        assert_eq!(items.iter().map(|r| r.qty).collect::<Vec<_>>(), vec![30, 12, 5]);
    }

    #[test]
    fn filter_is_case_insensitive_and_blank_keeps_all() {
        assert_eq!(filter_list(&rows(), "  ").len(), 3);
        let hits = filter_and_sort(&rows(), "AN", "name", true);
        assert_eq!(hits, vec![Row { name: "Anchor", qty: 5 }]);
    }

    #[test]
    fn header_helpers() {
        assert_eq!(get_sort_indicator("qty", "qty", false), " ▼");
        assert_eq!(get_sort_indicator("qty", "name", true), " ⇅");
        assert!(get_sort_class("qty", "qty").ends_with("--active"));
        assert_eq!(toggle_sort("qty", true, "qty"), ("qty".to_string(), false));
        assert_eq!(toggle_sort("qty", false, "name"), ("name".to_string(), true));
    }

    #[test]
    fn list_state_toggles() {
        let mut state = ListState::sorted_by("name");
        state.toggle_sort("name");
        assert!(!state.sort_ascending);
        state.toggle_sort("qty");
        assert_eq!(state.sort_field, "qty");
        assert!(state.sort_ascending);
        assert!(!state.is_loaded);
    }
}
