use crate::domain::a001_product::ui::list::AdminPanel;
use crate::domain::a002_purchase::ui::list::ClientPanel;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::main_menu::MainMenu;
use crate::shared::notice::{NoticeBanner, NoticeService};
use crate::system::pages::login::AdminLoginPanel;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Navigation, session and form state shared by every panel
    provide_context(AppGlobalContext::new());
    provide_context(NoticeService::new());

    view! {
        <MainMenu />
        <NoticeBanner />
        <main class="container">
            <AdminLoginPanel />
            <AdminPanel />
            <ClientPanel />
        </main>
    }
}
