use leptos::*;

use crate::services::logout;
use crate::state::use_app_state;
use crate::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    let state = use_app_state();

    // Local state is cleared whether or not the backend saw the logout.
    let on_logout = move |_| {
        log::info!("👋 Logging out...");
        spawn_local(async move {
            if let Err(e) = logout().await {
                log::warn!("Logout request failed: {}", e);
            }
            state.logout();
        });
    };

    view! {
        <header>
            <div class="header-left">
                <span class="logo-mark">"✨"</span>
                <a href="#" class="logo">{APP_NAME}</a>
            </div>
            <div class="header-right">
                <a href="#como-usar" class="header-link">"❔ Como Usar"</a>
                <a href="#contato" class="header-link">"✉️ Contato"</a>
                <button class="btn btn-secondary" on:click=on_logout>"Sair"</button>
            </div>
        </header>
    }
}
