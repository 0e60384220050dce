//! Subtitle list with SRT export.

use leptos::*;

use crate::config::{SRT_FILENAME, SRT_MIME_TYPE};
use crate::services::download_text;
use crate::srt::{format_timestamp, to_srt};
use crate::state::use_app_state;

#[component]
pub fn SubtitlesTab() -> impl IntoView {
    let state = use_app_state();
    let subtitles = create_memo(move |_| {
        state
            .generated_content
            .with(|content| content.as_ref().map(|c| c.subtitles.clone()).unwrap_or_default())
    });

    let on_download = move |_| {
        let srt = subtitles.with_untracked(|subs| (!subs.is_empty()).then(|| to_srt(subs)));
        let Some(srt) = srt else {
            return;
        };
        match download_text(&srt, SRT_FILENAME, SRT_MIME_TYPE) {
            Ok(()) => log::info!("💾 Exported {}", SRT_FILENAME),
            Err(e) => log::error!("❌ SRT export failed: {}", e),
        }
    };

    view! {
        <div class="result-card">
            <div class="result-header">
                <h3>"🔤 Legendas"</h3>
                <button
                    class="btn btn-secondary"
                    disabled=move || subtitles.with(|subs| subs.is_empty())
                    on:click=on_download
                >
                    "⬇️ Baixar .SRT"
                </button>
            </div>

            <div class="subtitle-list">
                <For
                    each=move || subtitles.get().into_iter().enumerate()
                    key=|(idx, _)| *idx
                    children=move |(_, cue)| {
                        view! {
                            <div class="subtitle-item">
                                <span class="subtitle-time">{format_timestamp(cue.start)}</span>
                                <span class="subtitle-text">{cue.text}</span>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
