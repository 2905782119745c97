//! Sidebar with collapsible menu groups.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    id: &'static str,
    icon: &'static str,
    admin_only: bool,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
}

const fn item(id: &'static str, icon: &'static str) -> MenuItem {
    MenuItem {
        id,
        icon,
        admin_only: false,
    }
}

const fn admin_item(id: &'static str, icon: &'static str) -> MenuItem {
    MenuItem {
        id,
        icon,
        admin_only: true,
    }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "overview",
            label: "Overview",
            icon: "dashboard",
            items: vec![item("d400_metrics", "dashboard")],
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "products",
            items: vec![
                item("a001_product", "products"),
                item("a002_supplier", "suppliers"),
            ],
        },
        MenuGroup {
            id: "warehouse",
            label: "Warehouse",
            icon: "warehouse",
            items: vec![
                item("a003_position", "positions"),
                item("a004_shelf", "shelves"),
                item("a004_location", "positions"),
                admin_item("a006_stocktaking", "stocktaking"),
            ],
        },
        MenuGroup {
            id: "sales",
            label: "Transactions",
            icon: "transactions",
            items: vec![
                item("a005_transaction", "transactions"),
                item("a005_sale", "sale"),
            ],
        },
        MenuGroup {
            id: "account",
            label: "Account",
            icon: "user",
            items: vec![
                admin_item("sys_users", "users"),
                item("sys_personal", "user"),
            ],
        },
    ]
}

/// Menu as seen by the current user: admin-only entries removed for staff,
/// empty groups dropped.
fn visible_groups(is_admin: bool) -> Vec<MenuGroup> {
    get_menu_groups()
        .into_iter()
        .filter_map(|mut group| {
            group.items.retain(|i| is_admin || !i.admin_only);
            (!group.items.is_empty()).then_some(group)
        })
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let expanded_groups: RwSignal<Vec<&'static str>> =
        RwSignal::new(get_menu_groups().iter().map(|g| g.id).collect());

    let is_active = move |id: &'static str| ctx.active.get().as_deref() == Some(id);

    view! {
        <div class="app-sidebar__content">
            {move || visible_groups(auth_state.get().is_admin()).into_iter().map(|group| {
                let group_id = group.id;
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| expanded_groups.update(|items| {
                                if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                    items.remove(pos);
                                } else {
                                    items.push(group_id);
                                }
                            })
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|g| g.contains(&group_id))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|g| g.contains(&group_id))>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|entry| {
                                    let id = entry.id;
                                    let label = tab_label_for_key(id);
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || is_active(id)
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(id, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(entry.icon)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(groups: &[MenuGroup]) -> Vec<&'static str> {
        groups
            .iter()
            .flat_map(|g| g.items.iter().map(|i| i.id))
            .collect()
    }

    #[test]
    fn staff_does_not_see_admin_entries() {
        let staff = ids(&visible_groups(false));
        assert!(!staff.contains(&"sys_users"));
        assert!(!staff.contains(&"a006_stocktaking"));
        assert!(staff.contains(&"a001_product"));
        assert!(staff.contains(&"sys_personal"));
    }

    #[test]
    fn admin_sees_everything() {
        let all = ids(&visible_groups(true));
        assert_eq!(all, ids(&get_menu_groups()));
    }

    #[test]
    fn every_entry_has_a_label() {
        for id in ids(&get_menu_groups()) {
            assert_ne!(tab_label_for_key(id), id, "missing label for {}", id);
        }
    }
}
