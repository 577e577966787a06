use leptos::ev;
use leptos::prelude::*;

/// Overlay dialog used instead of the browser's blocking confirm/prompt
#[component]
pub fn Modal(
    /// Title of the modal
    title: String,
    /// Callback when modal should close (overlay click, Escape, close button)
    on_close: Callback<()>,
    /// Modal content, action buttons included
    children: Children,
) -> impl IntoView {
    // Escape closes the dialog; the listener goes away with the modal
    let handle = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
