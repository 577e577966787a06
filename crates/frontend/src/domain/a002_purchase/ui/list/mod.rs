use crate::domain::a002_purchase::api;
use crate::domain::a002_purchase::order::{
    failure_message, purchase_request, DEFAULT_QUANTITY, PURCHASED, QUANTITY_PROMPT,
};
use crate::layout::use_app_context;
use crate::layout::view_controller::Panel;
use crate::shared::format::format_price_fixed;
use crate::shared::modal::Modal;
use crate::shared::notice::use_notice;
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AvailableProductRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
}

impl From<Product> for AvailableProductRow {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: format_price_fixed(p.price),
            stock: p.stock.to_string(),
        }
    }
}

pub fn to_rows(products: Vec<Product>) -> Vec<AvailableProductRow> {
    products.into_iter().map(Into::into).collect()
}

#[component]
#[allow(non_snake_case)]
pub fn ClientPanel() -> impl IntoView {
    let ctx = use_app_context();
    let notices = use_notice();

    let (items, set_items) = signal::<Vec<AvailableProductRow>>(Vec::new());
    // Product the buy dialog is open for
    let buying = RwSignal::new(None::<AvailableProductRow>);
    let quantity = RwSignal::new(DEFAULT_QUANTITY.to_string());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_available().await {
                Ok(v) => set_items.set(to_rows(v)),
                Err(e) => log::error!("Error al obtener los productos disponibles: {}", e),
            }
        });
    };

    Effect::new(move |_| {
        if ctx.client_refresh.get() > 0 {
            fetch();
        }
    });

    // An open dialog does not outlive the panel
    Effect::new(move |_| {
        if !ctx.is_visible(Panel::Client) {
            buying.set(None);
        }
    });

    let open_dialog = move |row: AvailableProductRow| {
        quantity.set(DEFAULT_QUANTITY.to_string());
        buying.set(Some(row));
    };

    // `answer` is None when the dialog was cancelled
    let finish_dialog = move |answer: Option<String>| {
        let Some(row) = buying.get_untracked() else {
            return;
        };
        buying.set(None);

        let Some(request) = purchase_request(&row.id, answer.as_deref()) else {
            log::debug!("Purchase of {} dropped: no valid quantity", row.id);
            return;
        };

        wasm_bindgen_futures::spawn_local(async move {
            match api::purchase(&request).await {
                Ok(product) => {
                    log::info!(
                        "Bought {} of {}, {} left",
                        request.quantity,
                        product.id,
                        product.stock
                    );
                    notices.info(PURCHASED);
                    ctx.refresh_client_list();
                }
                Err(e) => {
                    log::error!("Purchase of {} failed: {}", request.product_id, e);
                    notices.error(failure_message(&e));
                }
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        finish_dialog(Some(quantity.get_untracked()));
    };

    view! {
        <section
            id="clientSection"
            class="panel"
            class:hidden=move || !ctx.is_visible(Panel::Client)
        >
            <div class="header">
                <div class="header__content">
                    <h2 class="header__title">"Productos disponibles"</h2>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| ctx.back_to_main()>
                        "Volver"
                    </button>
                </div>
            </div>

            <div class="table">
                <table id="clientProductTable" class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Nombre"</th>
                            <th class="table__header-cell">"Descripción"</th>
                            <th class="table__header-cell">"Precio"</th>
                            <th class="table__header-cell">"Disponibles"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let for_dialog = row.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.price}</td>
                                    <td class="table__cell">{row.stock}</td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--primary"
                                            on:click=move |_| open_dialog(for_dialog.clone())
                                        >
                                            "Comprar"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <Show when=move || buying.with(|b| b.is_some())>
                <Modal
                    title=buying.with_untracked(|b| b.as_ref().map(|r| r.name.clone()).unwrap_or_default())
                    on_close=Callback::new(move |_| finish_dialog(None))
                >
                    <form id="buyForm" on:submit=on_submit>
                        <div class="form-group">
                            <label for="buyQuantity">{QUANTITY_PROMPT}</label>
                            <input
                                type="text"
                                id="buyQuantity"
                                inputmode="numeric"
                                prop:value=move || quantity.get()
                                on:input=move |ev| quantity.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="modal-actions">
                            <button type="submit" class="button button--primary">"Aceptar"</button>
                            <button
                                type="button"
                                class="button button--secondary"
                                on:click=move |_| finish_dialog(None)
                            >
                                "Cancelar"
                            </button>
                        </div>
                    </form>
                </Modal>
            </Show>
        </section>
    }
}
