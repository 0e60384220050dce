//! Tabbed viewer for the generated content.
//!
//! Reads the content from [`AppState`]; the only writes back are the
//! single-field regenerations.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::components::{DescriptionTab, KeywordsTab, SubtitlesTab};
use crate::config::COPY_FEEDBACK_MS;
use crate::feedback::CopyAck;
use crate::services::{copy_to_clipboard, regenerate, REGENERATE_FAILED};
use crate::state::{use_app_state, AppState};
use crate::types::ContentField;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ResultsTab {
    Description,
    Subtitles,
    Keywords,
}

/// Copy `text`, then show the "copied" state for `key` for a couple of seconds.
pub(crate) fn copy_with_ack(ack: RwSignal<CopyAck>, key: String, text: String) {
    spawn_local(async move {
        match copy_to_clipboard(&text).await {
            Ok(()) => {
                let mut generation = 0;
                ack.update(|a| generation = a.acknowledge(&key));
                TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                // The panel may be gone by now.
                ack.try_update(|a| a.expire(generation));
            }
            Err(e) => log::error!("📋 Copy failed: {}", e),
        }
    });
}

/// Ask the backend for a fresh version of one field group.
pub(crate) fn regenerate_field(state: AppState, field: ContentField, set_error: WriteSignal<Option<String>>) {
    let Some((epoch, request)) = state.begin_regeneration(field) else {
        return;
    };
    set_error.set(None);

    spawn_local(async move {
        match regenerate(field, &request).await {
            Ok(update) => {
                log::info!("✅ Regenerated {}", field.name());
                state.finish_regeneration(epoch, update);
            }
            Err(e) => {
                log::error!("❌ Regenerating {} failed: {}", field.name(), e);
                set_error.try_set(Some(e.user_message(REGENERATE_FAILED)));
                state.abort_regeneration(epoch);
            }
        }
    });
}

#[component]
pub fn ResultsPanel() -> impl IntoView {
    let state = use_app_state();
    let (tab, set_tab) = create_signal(ResultsTab::Description);
    let ack = create_rw_signal(CopyAck::default());
    let (regen_error, set_regen_error) = create_signal(None::<String>);

    // Local edits survive tab switches; a regenerated description replaces them.
    let description = create_memo(move |_| {
        state
            .generated_content
            .with(|content| content.as_ref().map(|c| c.description.clone()).unwrap_or_default())
    });
    let edited_description = create_rw_signal(description.get_untracked());
    let editing = create_rw_signal(false);
    create_effect(move |_| {
        edited_description.set(description.get());
        editing.set(false);
    });

    let on_regenerate = Callback::new(move |field: ContentField| {
        regenerate_field(state, field, set_regen_error);
    });

    let tab_button = move |target: ResultsTab, label: &'static str| {
        view! {
            <button
                class="tab"
                class:active=move || tab.get() == target
                on:click=move |_| set_tab.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="results-panel">
            <div class="tabs">
                {tab_button(ResultsTab::Description, "💬 Descrição")}
                {tab_button(ResultsTab::Subtitles, "🔤 Legendas")}
                {tab_button(ResultsTab::Keywords, "#️⃣ Palavras-chave")}
            </div>

            <Show when=move || regen_error.get().is_some()>
                <div class="error-message">{move || regen_error.get().unwrap_or_default()}</div>
            </Show>

            <div class="tab-content">
                {move || match tab.get() {
                    ResultsTab::Description => view! {
                        <DescriptionTab
                            ack=ack
                            edited=edited_description
                            editing=editing
                            on_regenerate=on_regenerate
                        />
                    }.into_view(),
                    ResultsTab::Subtitles => view! { <SubtitlesTab/> }.into_view(),
                    ResultsTab::Keywords => view! {
                        <KeywordsTab ack=ack on_regenerate=on_regenerate/>
                    }.into_view(),
                }}
            </div>
        </div>
    }
}
