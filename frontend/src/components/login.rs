//! Password login form shown when there is no valid session.

use leptos::*;
use web_sys::SubmitEvent;

use crate::services::login;
use crate::state::use_app_state;
use crate::APP_NAME;

const LOGIN_FAILED: &str = "Senha incorreta";

#[component]
pub fn LoginForm() -> impl IntoView {
    let state = use_app_state();
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (is_submitting, set_is_submitting) = create_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let password = password.get_untracked();
        set_error.set(None);
        set_is_submitting.set(true);

        spawn_local(async move {
            match login(&password).await {
                Ok(()) => {
                    set_is_submitting.set(false);
                    state.login();
                }
                Err(e) => {
                    log::warn!("🔒 Login refused: {}", e);
                    set_error.set(Some(e.user_message(LOGIN_FAILED)));
                    set_is_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <div class="logo">"✨ " {APP_NAME}</div>
                <p class="subtitle">"Digite a senha para acessar"</p>

                <input
                    type="password"
                    placeholder="Senha"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                <Show when=move || error.get().is_some()>
                    <div class="error-message">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <button type="submit" class="btn btn-primary btn-block" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Entrando..." } else { "Entrar" }}
                </button>
            </form>
        </div>
    }
}
