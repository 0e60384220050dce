//! Keywords, posting tips, best time and trends.
//!
//! Each block renders only when its field is present and non-empty.

use leptos::*;

use crate::components::results::copy_with_ack;
use crate::feedback::{keyword_key, CopyAck};
use crate::state::use_app_state;
use crate::types::ContentField;

const COPY_ALL_KEY: &str = "all-keywords";

#[component]
pub fn KeywordsTab(
    ack: RwSignal<CopyAck>,
    #[prop(into)] on_regenerate: Callback<ContentField>,
) -> impl IntoView {
    let state = use_app_state();
    let bundle = create_memo(move |_| {
        state
            .generated_content
            .with(|content| content.as_ref().and_then(|c| c.keyword_bundle().cloned()))
    });

    let keywords = move || bundle.with(|b| b.as_ref().and_then(|b| b.keywords().map(<[String]>::to_vec)));
    let tips = move || bundle.with(|b| b.as_ref().and_then(|b| b.tips().map(<[String]>::to_vec)));
    let best_time = move || bundle.with(|b| b.as_ref().and_then(|b| b.best_time().map(str::to_string)));
    let trends = move || bundle.with(|b| b.as_ref().and_then(|b| b.trends().map(<[String]>::to_vec)));

    let on_copy_all = move |_| {
        if let Some(all) = bundle.with_untracked(|b| b.as_ref().and_then(|b| b.joined_keywords())) {
            copy_with_ack(ack, COPY_ALL_KEY.to_string(), all);
        }
    };

    view! {
        <div class="result-card">
            <div class="result-header">
                <h3>"#️⃣ Palavras-chave e Dicas"</h3>
                <button
                    class="btn btn-secondary"
                    disabled=move || state.regenerating.get().is_some()
                    on:click=move |_| on_regenerate.call(ContentField::Keywords)
                >
                    {move || if state.regenerating.get() == Some(ContentField::Keywords) {
                        "Regenerando..."
                    } else {
                        "✨ Regenerar"
                    }}
                </button>
            </div>

            {move || keywords().map(|keywords| view! {
                <div class="keyword-block">
                    <h4>"Palavras-chave:"</h4>
                    <div class="chips">
                        {keywords.into_iter().enumerate().map(|(idx, keyword)| {
                            let key = keyword_key(idx);
                            let copied_key = key.clone();
                            let text = keyword.clone();
                            view! {
                                <span
                                    class="chip chip-keyword"
                                    class:copied=move || ack.with(|a| a.is_copied(&copied_key))
                                    on:click=move |_| copy_with_ack(ack, key.clone(), text.clone())
                                >
                                    {keyword}
                                </span>
                            }
                        }).collect_view()}
                    </div>
                    <button class="btn btn-secondary" on:click=on_copy_all>
                        {move || if ack.with(|a| a.is_copied(COPY_ALL_KEY)) {
                            "✓ Copiado!"
                        } else {
                            "📋 Copiar Todas"
                        }}
                    </button>
                </div>
            })}

            {move || tips().map(|tips| view! {
                <div class="keyword-block">
                    <h4>"Dicas de Postagem:"</h4>
                    <ul class="tips">
                        {tips.into_iter().map(|tip| view! { <li>{tip}</li> }).collect_view()}
                    </ul>
                </div>
            })}

            {move || best_time().map(|time| view! {
                <div class="keyword-block">
                    <h4>"Melhor Horário:"</h4>
                    <p class="best-time">{time}</p>
                </div>
            })}

            {move || trends().map(|trends| view! {
                <div class="keyword-block">
                    <h4>"Tendências Atuais:"</h4>
                    <div class="chips">
                        {trends.into_iter().map(|trend| view! {
                            <span class="chip chip-trend">{trend}</span>
                        }).collect_view()}
                    </div>
                </div>
            })}

            <Show when=move || bundle.with(Option::is_none)>
                <p class="empty-hint">"Nenhuma palavra-chave gerada."</p>
            </Show>
        </div>
    }
}
