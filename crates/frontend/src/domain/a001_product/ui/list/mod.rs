use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::details::{ProductDetails, ProductDetailsViewModel};
use crate::layout::use_app_context;
use crate::layout::view_controller::Panel;
use crate::shared::format::format_price;
use crate::shared::modal::Modal;
use crate::shared::notice::use_notice;
use crate::system::auth::guard::RequireAdmin;
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;

pub const DELETED: &str = "Producto eliminado exitosamente!";
pub const DELETE_FAILED: &str = "Error al eliminar el producto";
pub const DELETE_CONFIRM: &str = "¿Estás seguro de que deseas eliminar este producto?";

#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
}

impl From<Product> for ProductRow {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: format_price(p.price),
            stock: p.stock.to_string(),
        }
    }
}

/// One row per product, in response order
pub fn to_rows(products: Vec<Product>) -> Vec<ProductRow> {
    products.into_iter().map(Into::into).collect()
}

#[component]
#[allow(non_snake_case)]
pub fn AdminPanel() -> impl IntoView {
    let ctx = use_app_context();
    let notices = use_notice();
    let vm = ProductDetailsViewModel::new(ctx, notices);

    let (items, set_items) = signal::<Vec<ProductRow>>(Vec::new());
    let pending_delete = ctx.pending_delete;

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_all().await {
                Ok(v) => set_items.set(to_rows(v)),
                // table keeps its previous content
                Err(e) => log::error!("Error al obtener los productos: {}", e),
            }
        });
    };

    // Fetch whenever a transition or a mutation asks for it
    Effect::new(move |_| {
        if ctx.admin_refresh.get() > 0 {
            fetch();
        }
    });

    let confirm_delete = move || {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => {
                    log::info!("Product {} deleted", id);
                    notices.info(DELETED);
                    ctx.refresh_admin_list();
                }
                Err(e) => {
                    log::error!("Error al eliminar el producto {}: {}", id, e);
                    notices.error(DELETE_FAILED);
                }
            }
        });
    };

    view! {
        <section
            id="adminSection"
            class="panel"
            class:hidden=move || !ctx.is_visible(Panel::Admin)
        >
            <RequireAdmin>
                <div class="header">
                    <div class="header__content">
                        <h2 class="header__title">"Administración de productos"</h2>
                    </div>
                    <div class="header__actions">
                        <button class="button button--secondary" on:click=move |_| ctx.refresh_admin_list()>
                            "Actualizar"
                        </button>
                        <button class="button button--secondary" on:click=move |_| ctx.logout_admin()>
                            "Cerrar sesión"
                        </button>
                    </div>
                </div>

                <ProductDetails vm=vm />

                <div class="table">
                    <table id="productTable" class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Nombre"</th>
                                <th class="table__header-cell">"Descripción"</th>
                                <th class="table__header-cell">"Precio"</th>
                                <th class="table__header-cell">"Stock"</th>
                                <th class="table__header-cell">"Acciones"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || items.get().into_iter().map(|row| {
                                let id_for_edit = row.id.clone();
                                let id_for_delete = row.id.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.name}</td>
                                        <td class="table__cell">{row.description}</td>
                                        <td class="table__cell">{row.price}</td>
                                        <td class="table__cell">{row.stock}</td>
                                        <td class="table__cell">
                                            <button
                                                class="button button--secondary"
                                                on:click=move |_| vm.load_command(id_for_edit.clone())
                                            >
                                                "Editar"
                                            </button>
                                            <button
                                                class="button button--danger"
                                                on:click=move |_| pending_delete.set(Some(id_for_delete.clone()))
                                            >
                                                "Eliminar"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </RequireAdmin>

            <Show when=move || pending_delete.with(|p| p.is_some())>
                <Modal
                    title="Eliminar producto".to_string()
                    on_close=Callback::new(move |_| pending_delete.set(None))
                >
                    <p>{DELETE_CONFIRM}</p>
                    <div class="modal-actions">
                        <button class="button button--danger" on:click=move |_| confirm_delete()>
                            "Aceptar"
                        </button>
                        <button class="button button--secondary" on:click=move |_| pending_delete.set(None)>
                            "Cancelar"
                        </button>
                    </div>
                </Modal>
            </Show>
        </section>
    }
}
