use super::view_model::ProductDetailsViewModel;
use leptos::prelude::*;

#[component]
pub fn ProductDetails(vm: ProductDetailsViewModel) -> impl IntoView {
    let state = vm.state();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command();
    };

    view! {
        <div class="details-container product-details">
            <div class="details-header">
                <h3 id="productFormTitle">{move || state.with(|s| s.title())}</h3>
            </div>

            <form id="productForm" class="details-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="productName">"Nombre"</label>
                    <input
                        type="text"
                        id="productName"
                        prop:value=move || state.with(|s| s.form.name.clone())
                        on:input=move |ev| state.update(|s| s.form.name = event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form-group">
                    <label for="productDesc">"Descripción"</label>
                    <textarea
                        id="productDesc"
                        prop:value=move || state.with(|s| s.form.description.clone())
                        on:input=move |ev| state.update(|s| s.form.description = event_target_value(&ev))
                        rows="3"
                    />
                </div>

                <div class="form-group">
                    <label for="productPrice">"Precio"</label>
                    <input
                        type="number"
                        id="productPrice"
                        step="any"
                        prop:value=move || state.with(|s| s.form.price.clone())
                        on:input=move |ev| state.update(|s| s.form.price = event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form-group">
                    <label for="productStock">"Cantidad en stock"</label>
                    <input
                        type="number"
                        id="productStock"
                        step="1"
                        prop:value=move || state.with(|s| s.form.stock.clone())
                        on:input=move |ev| state.update(|s| s.form.stock = event_target_value(&ev))
                        required
                    />
                </div>

                <div class="details-actions">
                    <button type="submit" class="button button--primary">
                        {move || if state.with(|s| s.is_editing()) { "Guardar cambios" } else { "Crear" }}
                    </button>
                    <button type="button" class="button button--secondary" on:click=move |_| vm.new_command()>
                        "Agregar Producto"
                    </button>
                </div>
            </form>
        </div>
    }
}
