//! Description + hashtags, with local-only editing.

use leptos::*;

use crate::components::results::copy_with_ack;
use crate::feedback::CopyAck;
use crate::state::use_app_state;
use crate::types::{description_clipboard_text, ContentField};

const COPY_KEY: &str = "description";

#[component]
pub fn DescriptionTab(
    ack: RwSignal<CopyAck>,
    /// Description as last saved by the user
    edited: RwSignal<String>,
    editing: RwSignal<bool>,
    #[prop(into)] on_regenerate: Callback<ContentField>,
) -> impl IntoView {
    let state = use_app_state();
    let draft = create_rw_signal(String::new());

    let hashtags = create_memo(move |_| {
        state
            .generated_content
            .with(|content| content.as_ref().and_then(|c| c.hashtags().map(str::to_string)))
    });
    let regenerating = move || state.regenerating.get().is_some();

    let toggle_edit = move |_| {
        if !editing.get_untracked() {
            draft.set(edited.get_untracked());
        }
        editing.update(|e| *e = !*e);
    };

    // Saving only keeps the text locally; nothing is sent to the backend.
    let on_save = move |_| {
        edited.set(draft.get_untracked());
        editing.set(false);
    };

    let on_copy = move |_| {
        let text = hashtags.with_untracked(|tags| description_clipboard_text(&edited.get_untracked(), tags.as_deref()));
        copy_with_ack(ack, COPY_KEY.to_string(), text);
    };

    view! {
        <div class="result-card">
            <div class="result-header">
                <h3>"💬 Descrição Otimizada"</h3>
                <div class="result-actions">
                    <button class="btn btn-secondary" on:click=toggle_edit>
                        {move || if editing.get() { "Cancelar" } else { "✏️ Editar" }}
                    </button>
                    <button
                        class="btn btn-secondary"
                        disabled=regenerating
                        on:click=move |_| on_regenerate.call(ContentField::Description)
                    >
                        {move || if state.regenerating.get() == Some(ContentField::Description) {
                            "Regenerando..."
                        } else {
                            "✨ Regenerar"
                        }}
                    </button>
                </div>
            </div>

            {move || if editing.get() {
                view! {
                    <div class="description-editor">
                        <textarea
                            placeholder="Digite sua descrição..."
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                        ></textarea>
                        <div class="result-actions">
                            <button class="btn btn-primary" on:click=on_save>"✓ Salvar"</button>
                            <button class="btn btn-secondary" on:click=move |_| editing.set(false)>
                                "Cancelar"
                            </button>
                        </div>
                    </div>
                }.into_view()
            } else {
                view! {
                    <div class="description-view">
                        <p class="description-text">{move || edited.get()}</p>

                        {move || hashtags.get().map(|tags| view! {
                            <div class="hashtags">
                                <h4>"Hashtags:"</h4>
                                <p>{tags}</p>
                            </div>
                        })}

                        <button class="btn btn-primary btn-block" on:click=on_copy>
                            {move || if ack.with(|a| a.is_copied(COPY_KEY)) {
                                "✓ Copiado!"
                            } else {
                                "📋 Copiar Descrição"
                            }}
                        </button>
                    </div>
                }.into_view()
            }}
        </div>
    }
}
