use contracts::domain::a004_shelf::{AddLocationDto, LocationFilter, ProductLocation};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_shelf::api;
use crate::shared::icons::icon;
use crate::shared::modal::{ConfirmDialog, ErrorAlert, Modal, SuccessAlert};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_api;

/// Placeholder for the id box, which only matters for the by-id filters.
fn id_placeholder(filter_code: &str) -> Option<&'static str> {
    match filter_code {
        "by-product" => Some("Enter Product ID"),
        "by-shelf" | "occupied-shelf" => Some("Enter Shelf ID"),
        _ => None,
    }
}

fn parse_number(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

#[component]
pub fn ProductLocationList() -> impl IntoView {
    let locations: RwSignal<Vec<ProductLocation>> = RwSignal::new(Vec::new());
    let filter_code = RwSignal::new(LocationFilter::All.code().to_string());
    let filter_id = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let adding = RwSignal::new(false);
    let editing: RwSignal<Option<ProductLocation>> = RwSignal::new(None);
    let pending_delete: RwSignal<Option<ProductLocation>> = RwSignal::new(None);
    let (deleting, set_deleting) = signal(false);
    let client = StoredValue::new(use_api());

    let load_data = move || {
        let filter = LocationFilter::from_parts(&filter_code.get_untracked(), &filter_id.get_untracked());
        set_loading.set(true);
        set_error.set(None);
        let client = client.get_value();
        spawn_local(async move {
            match api::fetch_locations(&client, &filter).await {
                Ok(data) => locations.set(data),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    // Refetch whenever the filter changes.
    Effect::new(move |_| {
        filter_code.track();
        filter_id.track();
        load_data();
    });

    let after_save = Callback::new(move |message: String| {
        adding.set(false);
        editing.set(None);
        set_notice.set(Some(message));
        load_data();
    });

    let confirm_delete = move |_| {
        let Some(location) = pending_delete.get_untracked() else {
            return;
        };
        set_deleting.set(true);
        let client = client.get_value();
        spawn_local(async move {
            match api::delete_location(&client, location.id).await {
                Ok(()) => {
                    set_notice.set(Some("Position deleted successfully".to_string()));
                    load_data();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            pending_delete.set(None);
            set_deleting.set(false);
        });
    };

    view! {
        <PageFrame page_id="a004_location--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Product Locations"</h1>
                    <span class="page__subtitle">"Manage product positions in warehouse"</span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| adding.set(true)>
                        {icon("plus")}
                        " Add Position"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorAlert error=error />
                <SuccessAlert message=notice />

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Select value=filter_code>
                            <option value="all">"All Positions"</option>
                            <option value="empty">"Empty Positions"</option>
                            <option value="by-product">"By Product"</option>
                            <option value="by-shelf">"By Shelf"</option>
                            <option value="occupied-shelf">"Occupied Positions"</option>
                        </Select>
                        {move || id_placeholder(&filter_code.get()).map(|placeholder| view! {
                            <div style="max-width: 180px;">
                                <Input value=filter_id input_type=InputType::Number placeholder=placeholder />
                            </div>
                        })}
                        <Show when=move || loading.get()>
                            <Spinner size=SpinnerSize::Tiny />
                        </Show>
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=160.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Product"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Shelf"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Quantity"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || locations.get()
                                key=|l| (l.id, l.quantity)
                                children=move |location| {
                                    let for_edit = location.clone();
                                    let for_delete = location.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{location.name.clone()}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {format!("{} (#{})", location.product_name, location.product_id)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>{format!("{} (#{})", location.shelf_name, location.shelf_id)}</TableCell>
                                            <TableCell>
                                                <Badge appearance=BadgeAppearance::Outline>{location.quantity}</Badge>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(for_edit.clone()))
                                                    attr:title="Update quantity"
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
                    <Show when=move || !loading.get() && locations.with(|l| l.is_empty())>
                        <div class="table__empty">"No positions found"</div>
                    </Show>
                </div>

                <Show when=move || adding.get()>
                    <AddLocationDialog on_close=Callback::new(move |_| adding.set(false)) on_saved=after_save />
                </Show>

                {move || editing.get().map(|location| view! {
                    <UpdateQuantityDialog
                        location=location
                        on_close=Callback::new(move |_| editing.set(None))
                        on_saved=after_save
                    />
                })}

                {move || pending_delete.get().map(|location| view! {
                    <ConfirmDialog
                        message=format!("Delete position \"{}\"?", location.name)
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
fn AddLocationDialog(on_close: Callback<()>, on_saved: Callback<String>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let product_id = RwSignal::new(String::new());
    let shelf_id = RwSignal::new(String::new());
    let quantity = RwSignal::new("0".to_string());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let client = StoredValue::new(use_api());

    let on_save = move |_| {
        let dto = AddLocationDto {
            name: name.get_untracked().trim().to_string(),
            product_id: parse_number(&product_id.get_untracked()),
            shelf_id: parse_number(&shelf_id.get_untracked()),
            quantity: parse_number(&quantity.get_untracked()),
        };
        set_saving.set(true);
        set_error.set(None);
        let client = client.get_value();
        spawn_local(async move {
            match api::add_location(&client, &dto).await {
                Ok(()) => on_saved.run("Position added successfully".to_string()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_saving.set(false);
        });
    };

    view! {
        <Modal
            title="Add New Position".to_string()
            on_close=on_close
            footer=move || view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Adding..." } else { "Add Position" }}
                </Button>
            }
        >
            <ErrorAlert error=error />
            <div class="form__group">
                <Label>"Position Name"</Label>
                <Input value=name />
            </div>
            <div class="form__group">
                <Label>"Product ID"</Label>
                <Input value=product_id input_type=InputType::Number />
            </div>
            <div class="form__group">
                <Label>"Shelf ID"</Label>
                <Input value=shelf_id input_type=InputType::Number />
            </div>
            <div class="form__group">
                <Label>"Quantity"</Label>
                <Input value=quantity input_type=InputType::Number />
            </div>
        </Modal>
    }
}

#[component]
fn UpdateQuantityDialog(
    location: ProductLocation,
    on_close: Callback<()>,
    on_saved: Callback<String>,
) -> impl IntoView {
    let id = location.id;
    let quantity = RwSignal::new(location.quantity.to_string());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let client = StoredValue::new(use_api());

    let on_save = move |_| {
        let Ok(value) = quantity.get_untracked().trim().parse::<i64>() else {
            set_error.set(Some("Please enter a valid quantity".to_string()));
            return;
        };
        set_saving.set(true);
        set_error.set(None);
        let client = client.get_value();
        spawn_local(async move {
            match api::update_location_quantity(&client, id, value).await {
                Ok(()) => on_saved.run("Quantity updated successfully".to_string()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_saving.set(false);
        });
    };

    view! {
        <Modal
            title="Update Quantity".to_string()
            on_close=on_close
            footer=move || view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Saving..." } else { "Update Quantity" }}
                </Button>
            }
        >
            <ErrorAlert error=error />
            <p class="form__hint">{format!("{} at {}", location.product_name, location.shelf_name)}</p>
            <div class="form__group">
                <Label>"Quantity"</Label>
                <Input value=quantity input_type=InputType::Number />
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_box_only_for_by_id_filters() {
        assert_eq!(id_placeholder("all"), None);
        assert_eq!(id_placeholder("empty"), None);
        assert_eq!(id_placeholder("by-product"), Some("Enter Product ID"));
        assert_eq!(id_placeholder("occupied-shelf"), Some("Enter Shelf ID"));
    }

    #[test]
    fn unparseable_numbers_are_zero() {
        assert_eq!(parse_number(" 12 "), 12);
        assert_eq!(parse_number("x"), 0);
    }
}
