use leptos::prelude::*;

use super::view_controller::{Panel, Refresh, ViewController};
use crate::domain::a001_product::form::ProductFormState;
use crate::system::auth::{AuthError, AuthGate};

/// App-wide state: visible panel, admin session, admin form and refresh ticks.
///
/// List components watch the tick counters and fetch again whenever one moves.
/// `pending_delete` holds the product awaiting delete confirmation.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub view: RwSignal<ViewController>,
    pub product_form: RwSignal<ProductFormState>,
    pub pending_delete: RwSignal<Option<String>>,
    pub admin_refresh: RwSignal<u32>,
    pub client_refresh: RwSignal<u32>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(ViewController::new()),
            product_form: RwSignal::new(ProductFormState::new()),
            pending_delete: RwSignal::new(None),
            admin_refresh: RwSignal::new(0),
            client_refresh: RwSignal::new(0),
        }
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.view.with(|v| v.is_visible(panel))
    }

    pub fn refresh_admin_list(&self) {
        self.admin_refresh.update(|n| *n = n.wrapping_add(1));
    }

    pub fn refresh_client_list(&self) {
        self.client_refresh.update(|n| *n = n.wrapping_add(1));
    }

    fn apply(&self, refresh: Refresh) {
        match refresh {
            Refresh::Admin => self.refresh_admin_list(),
            Refresh::Client => self.refresh_client_list(),
            Refresh::None => {}
        }
    }

    /// Forget a half-done edit and any unanswered delete confirmation
    fn drop_admin_drafts(&self) {
        self.product_form.update(|f| f.reset());
        self.pending_delete.set(None);
    }

    /// Run a transition; navigation always drops admin drafts
    fn navigate(&self, transition: impl FnOnce(&mut ViewController) -> Refresh) {
        let refresh = self.view.try_update(transition).unwrap_or(Refresh::None);
        self.drop_admin_drafts();
        self.apply(refresh);
    }

    pub fn show_admin_login(&self) {
        self.navigate(ViewController::show_admin_login);
    }

    pub fn show_admin(&self) {
        self.navigate(ViewController::show_admin);
    }

    pub fn show_client(&self) {
        self.navigate(ViewController::show_client);
    }

    pub fn back_to_main(&self) {
        self.navigate(ViewController::back_to_main);
    }

    pub fn logout_admin(&self) {
        log::info!("Admin session closed");
        self.navigate(ViewController::logout_admin);
    }

    /// Open the admin session and show the admin panel; a rejected login changes nothing
    pub fn login(&self, gate: &dyn AuthGate, username: &str, password: &str) -> Result<(), AuthError> {
        let mut next = self.view.get_untracked();
        let refresh = next.login(gate, username, password)?;
        log::info!("Admin session opened for {}", username);
        self.view.set(next);
        self.drop_admin_drafts();
        self.apply(refresh);
        Ok(())
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context")
}
