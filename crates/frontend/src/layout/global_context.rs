use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::layout::tabs::tab_label_for_key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Opens `key` unless already open. Returns `true` when a tab was added.
fn push_tab(tabs: &mut Vec<Tab>, key: &str, title: &str) -> bool {
    if tabs.iter().any(|tab| tab.key == key) {
        return false;
    }
    tabs.push(Tab {
        key: key.to_string(),
        title: title.to_string(),
    });
    true
}

/// Tab to activate after `closed` is removed while it was active: its right
/// neighbour, else the new last tab.
fn next_after_close(tabs_before: &[Tab], closed: &str) -> Option<String> {
    let pos = tabs_before.iter().position(|t| t.key == closed)?;
    tabs_before
        .get(pos + 1)
        .or_else(|| pos.checked_sub(1).and_then(|i| tabs_before.get(i)))
        .map(|t| t.key.clone())
}

fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").cloned().filter(|k| !k.is_empty())
}

/// Workspace state: open tabs, the active tab and the sidebar toggle.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the tab named in `?active=` and keeps the query string in sync
    /// with the active tab from then on.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_key) = active_from_query(&search) {
            self.open_tab(&active_key, tab_label_for_key(&active_key));
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query_string = serde_qs::to_string(&HashMap::from([(
                "active".to_string(),
                active_key,
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("open_tab: key='{}', title='{}'", key, title);
        let mut added = false;
        self.opened.update(|tabs| added = push_tab(tabs, key, title));
        if !added {
            leptos::logging::log!("tab '{}' already open, activating", key);
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        let before = self.opened.get_untracked();
        let was_active = self
            .active
            .with_untracked(|active| active.as_deref() == Some(key));
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if was_active {
            let next = next_after_close(&before, key);
            leptos::logging::log!("next active tab: {:?}", next);
            self.active.set(next);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(keys: &[&str]) -> Vec<Tab> {
        keys.iter()
            .map(|k| Tab {
                key: k.to_string(),
                title: k.to_string(),
            })
            .collect()
    }

    #[test]
    fn push_tab_is_idempotent() {
        let mut open = tabs(&["a001_product"]);
        assert!(!push_tab(&mut open, "a001_product", "Products"));
        assert!(push_tab(&mut open, "a002_supplier", "Suppliers"));
        assert_eq!(open.len(), 2);
    }

    #[test]
    fn closing_picks_neighbour() {
        let open = tabs(&["a", "b", "c"]);
        assert_eq!(next_after_close(&open, "b"), Some("c".into()));
        assert_eq!(next_after_close(&open, "c"), Some("b".into()));
        assert_eq!(next_after_close(&tabs(&["a"]), "a"), None);
        assert_eq!(next_after_close(&open, "zzz"), None);
    }

    #[test]
    fn query_parsing() {
        assert_eq!(
            active_from_query("?active=a006_stocktaking"),
            Some("a006_stocktaking".into())
        );
        assert_eq!(active_from_query(""), None);
        assert_eq!(active_from_query("?active="), None);
    }
}
