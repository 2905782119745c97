use contracts::domain::a004_shelf::{NewShelfDto, Shelf, UpdateShelfDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_shelf::api;
use crate::shared::icons::icon;
use crate::shared::modal::{ConfirmDialog, ErrorAlert, Modal, SuccessAlert};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_api;

#[component]
pub fn ShelfList() -> impl IntoView {
    let shelves: RwSignal<Vec<Shelf>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let adding = RwSignal::new(false);
    let editing: RwSignal<Option<Shelf>> = RwSignal::new(None);
    let pending_delete: RwSignal<Option<Shelf>> = RwSignal::new(None);
    let (deleting, set_deleting) = signal(false);
    let client = StoredValue::new(use_api());

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let client = client.get_value();
        spawn_local(async move {
            match api::fetch_shelves(&client).await {
                Ok(data) => {
                    log::debug!("loaded {} shelves", data.len());
                    shelves.set(data);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };
    load_data();

    let after_save = Callback::new(move |message: String| {
        adding.set(false);
        editing.set(None);
        set_notice.set(Some(message));
        load_data();
    });

    let confirm_delete = move |_| {
        let Some(shelf) = pending_delete.get_untracked() else {
            return;
        };
        set_deleting.set(true);
        let client = client.get_value();
        spawn_local(async move {
            match api::delete_shelf(&client, &shelf.id).await {
                Ok(()) => {
                    set_notice.set(Some("Shelf deleted successfully".to_string()));
                    load_data();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            pending_delete.set(None);
            set_deleting.set(false);
        });
    };

    view! {
        <PageFrame page_id="a004_shelf--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Shelves"</h1>
                    <span class="page__subtitle">"Manage warehouse shelves and their capacities"</span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| adding.set(true)>
                        {icon("plus")}
                        " Add Shelf"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorAlert error=error />
                <SuccessAlert message=notice />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=160.0>"Shelf"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Code"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Area"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Capacity"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || shelves.get()
                                key=|s| (s.id.clone(), s.code.clone(), s.area.clone(), s.capacity)
                                children=move |shelf| {
                                    let for_edit = shelf.clone();
                                    let for_delete = shelf.clone();
                                    let label = shelf.label().to_string();
                                    let code = shelf.code.clone().unwrap_or_else(|| "N/A".to_string());
                                    let area = shelf.area.clone().unwrap_or_else(|| "N/A".to_string());
                                    let capacity = shelf.capacity.map(|c| c.to_string()).unwrap_or_else(|| "N/A".to_string());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{label}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>{code}</TableCell>
                                            <TableCell>{area}</TableCell>
                                            <TableCell>{capacity}</TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(for_edit.clone()))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
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
                    <Show when=move || !loading.get() && shelves.with(|s| s.is_empty())>
                        <div class="table__empty">"No shelves found"</div>
                    </Show>
                </div>

                <Show when=move || adding.get()>
                    <AddShelfDialog on_close=Callback::new(move |_| adding.set(false)) on_saved=after_save />
                </Show>

                {move || editing.get().map(|shelf| view! {
                    <EditShelfDialog
                        shelf=shelf
                        on_close=Callback::new(move |_| editing.set(None))
                        on_saved=after_save
                    />
                })}

                {move || pending_delete.get().map(|shelf| view! {
                    <ConfirmDialog
                        message=format!("Delete shelf \"{}\"?", shelf.label())
                        busy=deleting
                        on_cancel=Callback::new(move |_| pending_delete.set(None))
                        on_confirm=Callback::new(confirm_delete)
                    />
                })}
            </div>
        </PageFrame>
    }
}

#[component]
fn AddShelfDialog(on_close: Callback<()>, on_saved: Callback<String>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let client = StoredValue::new(use_api());

    let on_save = move |_| {
        let dto = NewShelfDto {
            name: name.get_untracked().trim().to_string(),
            product_name: String::new(),
        };
        set_saving.set(true);
        set_error.set(None);
        let client = client.get_value();
        spawn_local(async move {
            match api::add_shelf(&client, &dto).await {
                Ok(()) => on_saved.run("Shelf added successfully".to_string()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_saving.set(false);
        });
    };

    view! {
        <Modal
            title="Add New Shelf".to_string()
            on_close=on_close
            footer=move || view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Adding..." } else { "Add Shelf" }}
                </Button>
            }
        >
            <ErrorAlert error=error />
            <div class="form__group">
                <Label>"Name"</Label>
                <Input value=name />
            </div>
        </Modal>
    }
}

#[component]
fn EditShelfDialog(shelf: Shelf, on_close: Callback<()>, on_saved: Callback<String>) -> impl IntoView {
    let code = RwSignal::new(shelf.code.clone().unwrap_or_default());
    let area = RwSignal::new(shelf.area.clone().unwrap_or_default());
    let capacity = RwSignal::new(shelf.capacity.map(|c| c.to_string()).unwrap_or_default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let client = StoredValue::new(use_api());
    let shelf = StoredValue::new(shelf);

    let on_save = move |_| {
        let dto = match shelf.with_value(|s| {
            UpdateShelfDto::from_inputs(
                s,
                &code.get_untracked(),
                &area.get_untracked(),
                &capacity.get_untracked(),
            )
        }) {
            Ok(dto) => dto,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_saving.set(true);
        set_error.set(None);
        let client = client.get_value();
        spawn_local(async move {
            match api::update_shelf(&client, &dto).await {
                Ok(()) => on_saved.run("Shelf updated successfully".to_string()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_saving.set(false);
        });
    };

    view! {
        <Modal
            title="Edit Shelf".to_string()
            on_close=on_close
            footer=move || view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Saving..." } else { "Update Shelf" }}
                </Button>
            }
        >
            <ErrorAlert error=error />
            <div class="form__group">
                <Label>"Code"</Label>
                <Input value=code />
            </div>
            <div class="form__group">
                <Label>"Area"</Label>
                <Input value=area />
            </div>
            <div class="form__group">
                <Label>"Capacity"</Label>
                <Input value=capacity input_type=InputType::Number />
            </div>
        </Modal>
    }
}
