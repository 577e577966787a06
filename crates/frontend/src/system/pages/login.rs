use leptos::prelude::*;

use crate::layout::use_app_context;
use crate::layout::view_controller::Panel;
use crate::shared::notice::use_notice;
use crate::system::auth::StaticCredentialGate;

#[component]
pub fn AdminLoginPanel() -> impl IntoView {
    let ctx = use_app_context();
    let notices = use_notice();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let gate = StaticCredentialGate::default();
        match ctx.login(&gate, &username.get_untracked(), &password.get_untracked()) {
            Ok(()) => {
                notices.dismiss();
                set_password.set(String::new());
            }
            Err(e) => {
                log::warn!("Admin login rejected for {:?}", username.get_untracked());
                notices.error(e.to_string());
            }
        }
    };

    view! {
        <section
            id="adminLoginSection"
            class="panel login-box"
            class:hidden=move || !ctx.is_visible(Panel::AdminLogin)
        >
            <h2>"Acceso de administrador"</h2>

            <form id="adminLoginForm" on:submit=on_submit>
                <div class="form-group">
                    <label for="adminUsername">"Usuario"</label>
                    <input
                        type="text"
                        id="adminUsername"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="adminPassword">"Contraseña"</label>
                    <input
                        type="password"
                        id="adminPassword"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>

                <div class="details-actions">
                    <button type="submit" class="button button--primary">"Entrar"</button>
                    <button type="button" class="button button--secondary" on:click=move |_| ctx.back_to_main()>
                        "Volver"
                    </button>
                </div>
            </form>
        </section>
    }
}
