use contracts::system::users::Employee;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use super::details::RegisterEmployeeForm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    cmp_text, create_list_state, filter_and_sort, Searchable, Sortable, SortableHeaderCell,
};
use crate::shared::modal::{ConfirmDialog, ErrorAlert};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::use_api;
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api;

impl Searchable for Employee {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter)
            || self.username.to_lowercase().contains(&filter)
            || self.role.as_str().to_lowercase().contains(&filter)
    }
}

impl Sortable for Employee {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => cmp_text(&self.id, &other.id),
            "role" => cmp_text(self.role.as_str(), other.role.as_str()),
            "working_shift" => cmp_text(self.working_shift.code(), other.working_shift.code()),
            _ => cmp_text(&self.name, &other.name),
        }
    }
}

#[component]
pub fn EmployeesListPage() -> impl IntoView {
    view! {
        <RequireAdmin message="User management is restricted to administrators only.">
            <EmployeesList />
        </RequireAdmin>
    }
}

#[component]
fn EmployeesList() -> impl IntoView {
    let state = create_list_state("name");
    let all_employees: RwSignal<Vec<Employee>> = RwSignal::new(Vec::new());
    let search = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let pending_delete: RwSignal<Option<Employee>> = RwSignal::new(None);
    let (deleting, set_deleting) = signal(false);

    let client = StoredValue::new(use_api());

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let client = client.get_value();
        spawn_local(async move {
            match api::fetch_employees(&client).await {
                Ok(data) => {
                    all_employees.set(data);
                    state.update(|s| s.is_loaded = true);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let confirm_delete = move |_| {
        let Some(employee) = pending_delete.get_untracked() else {
            return;
        };
        set_deleting.set(true);
        let client = client.get_value();
        spawn_local(async move {
            match api::delete_employee(&client, &employee.id).await {
                Ok(()) => {
                    pending_delete.set(None);
                    load_data();
                }
                Err(e) => {
                    pending_delete.set(None);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_deleting.set(false);
        });
    };

    let rows = move || {
        let query = search.get();
        state.with(|s| {
            all_employees.with(|items| {
                filter_and_sort(items, &query, &s.sort_field, s.sort_ascending)
            })
        })
    };

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Employees"</h1>
                    <Badge>{move || all_employees.with(|e| e.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_form.set(true)
                    >
                        {icon("plus")}
                        " Register Employee"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorAlert error=error />

                <div class="filter-panel">
                    <div style="max-width: 320px;">
                        <Input value=search placeholder="Search by name, username or role..." />
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="ID" field="id" state=state min_width=60.0 />
                                <SortableHeaderCell label="Name" field="name" state=state min_width=160.0 />
                                <SortableHeaderCell label="Role" field="role" state=state />
                                <SortableHeaderCell label="Working Shift" field="working_shift" state=state />
                                <TableHeaderCell min_width=60.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=rows
                                key=|e| e.id.clone()
                                children=move |employee| {
                                    let for_delete = employee.clone();
                                    let role_class = if employee.role.as_str() == "admin" {
                                        "badge badge--warning"
                                    } else {
                                        "badge badge--neutral"
                                    };
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{employee.id.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{employee.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=role_class>{employee.role.display_name().to_string()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{employee.working_shift.display_name().to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| pending_delete.set(Some(for_delete.clone()))
                                                    attr:title="Delete"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.is_loaded) && all_employees.with(|e| e.is_empty())>
                        <div class="table__empty">"No employees found"</div>
                    </Show>
                </div>

                <Show when=move || show_create_form.get()>
                    <RegisterEmployeeForm
                        on_close=Callback::new(move |_| set_show_create_form.set(false))
                        on_created=Callback::new(move |_| {
                            set_show_create_form.set(false);
                            load_data();
                        })
                    />
                </Show>

                {move || pending_delete.get().map(|employee| view! {
                    <ConfirmDialog
                        message=format!("Delete employee \"{}\"? This cannot be undone.", employee.name)
                        busy=deleting
                        on_cancel=Callback::new(move |_| pending_delete.set(None))
                        on_confirm=Callback::new(confirm_delete)
                    />
                })}
            </div>
        </PageFrame>
    }
}
