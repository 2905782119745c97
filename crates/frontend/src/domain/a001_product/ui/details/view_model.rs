use super::model;
use contracts::domain::a001_product::{Product, ProductForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::ApiClient;

/// ViewModel for the product dialog
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub id: RwSignal<Option<i64>>,
    pub form: RwSignal<ProductForm>,
    pub error: RwSignal<Option<String>>,
    pub busy: RwSignal<bool>,
    client: StoredValue<ApiClient>,
}

impl ProductDetailsViewModel {
    pub fn new(client: ApiClient) -> Self {
        Self {
            id: RwSignal::new(None),
            form: RwSignal::new(ProductForm::default()),
            error: RwSignal::new(None),
            busy: RwSignal::new(false),
            client: StoredValue::new(client),
        }
    }

    /// Prefill from the clicked row; `None` starts an empty "new product" form.
    pub fn load(&self, product: Option<&Product>) {
        self.id.set(product.map(|p| p.id));
        self.form
            .set(product.map(ProductForm::from).unwrap_or_default());
        self.error.set(None);
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.get().is_some()
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.to_dto().is_ok())
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = match self.form.get_untracked().to_dto() {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let id = self.id.get_untracked();
        let (error, busy) = (self.error, self.busy);
        let client = self.client.get_value();
        busy.set(true);
        error.set(None);
        spawn_local(async move {
            match model::save_product(&client, id, &dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    }

    pub fn delete_command(&self, on_deleted: Callback<()>) {
        let Some(id) = self.id.get_untracked() else {
            return;
        };
        let (error, busy) = (self.error, self.busy);
        let client = self.client.get_value();
        busy.set(true);
        error.set(None);
        spawn_local(async move {
            match model::delete_product(&client, id).await {
                Ok(()) => on_deleted.run(()),
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    }
}
