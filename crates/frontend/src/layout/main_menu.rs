use leptos::prelude::*;

use super::global_context::use_app_context;

/// Role selection shown above the panels
#[component]
pub fn MainMenu() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="header main-menu">
            <h1 class="header__title">"Tienda"</h1>
            <nav class="header__actions">
                <button class="button button--primary" on:click=move |_| ctx.show_admin()>
                    "Administrador"
                </button>
                <button class="button button--primary" on:click=move |_| ctx.show_client()>
                    "Cliente"
                </button>
            </nav>
        </header>
    }
}
