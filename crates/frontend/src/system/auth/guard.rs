use leptos::prelude::*;

use crate::layout::use_app_context;

/// Renders its children only while an admin session is open
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show
            when=move || ctx.view.with(|v| v.is_admin_logged_in())
            fallback=|| view! { <div class="warning-box">"Acceso denegado. Inicie sesión como administrador."</div> }
        >
            {children()}
        </Show>
    }
}
