use crate::domain::a001_product::api;
use crate::domain::a001_product::form::{ProductFormState, SaveTarget};
use crate::layout::AppGlobalContext;
use crate::shared::notice::NoticeService;
use leptos::prelude::*;

pub const SAVED: &str = "Producto guardado exitosamente!";
pub const SAVE_FAILED: &str = "Error al guardar el producto";

/// ViewModel for the admin product form
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    ctx: AppGlobalContext,
    notices: NoticeService,
}

impl ProductDetailsViewModel {
    pub fn new(ctx: AppGlobalContext, notices: NoticeService) -> Self {
        Self { ctx, notices }
    }

    pub fn state(&self) -> RwSignal<ProductFormState> {
        self.ctx.product_form
    }

    /// Fetch a product and put the form in edit mode. On failure the form stays as it was.
    pub fn load_command(&self, id: String) {
        let state = self.state();
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(product) => state.update(|s| s.load(&product)),
                Err(e) => log::error!("Error al obtener el producto {}: {}", id, e),
            }
        });
    }

    /// Switch to add mode with an empty form
    pub fn new_command(&self) {
        self.state().update(|s| s.reset());
    }

    /// Create or update depending on edit mode
    pub fn save_command(&self) {
        let state = self.state();
        let ctx = self.ctx;
        let notices = self.notices;

        let (target, dto) = match state.with_untracked(|s| s.submission()) {
            Ok(submission) => submission,
            Err(e) => {
                log::error!("Product form not submitted: {}", e);
                notices.error(SAVE_FAILED);
                return;
            }
        };

        wasm_bindgen_futures::spawn_local(async move {
            let result = match &target {
                SaveTarget::Create => api::create(&dto).await,
                SaveTarget::Update(id) => api::update(id, &dto).await,
            };
            match result {
                Ok(product) => {
                    log::info!("Product {} saved", product.id);
                    notices.info(SAVED);
                    state.update(|s| s.reset());
                    ctx.refresh_admin_list();
                }
                Err(e) => {
                    log::error!("Error al guardar el producto: {}", e);
                    notices.error(SAVE_FAILED);
                }
            }
        });
    }
}
