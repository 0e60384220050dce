//! Video upload form with drag & drop support.
//!
//! Collects the video, the required theme and the optional description,
//! validates them locally, then posts everything to the backend.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::services::{upload_video, UPLOAD_FAILED};
use crate::state::use_app_state;
use crate::types::{SessionStatus, UploadResult};
use crate::validation::{format_size_mb, Submission, UploadForm};

const FILE_INPUT_ID: &str = "videoInput";

#[component]
pub fn UploadSection(
    /// Called with the merged upload result once the backend accepted the video
    #[prop(into)]
    on_upload_complete: Callback<UploadResult>,
) -> impl IntoView {
    let state = use_app_state();
    let form = create_rw_signal(UploadForm::<File>::new());
    let (drag_active, set_drag_active) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let (is_uploading, set_is_uploading) = create_signal(false);
    // Coarse 0/100: fetch does not report upload progress.
    let (upload_progress, set_upload_progress) = create_signal(0u8);

    // Validate and keep the file, or show why it was refused.
    let handle_file = move |file: File| {
        set_error.set(None);
        let mime_type = file.type_();
        let size = file.size();
        let name = file.name();

        let mut outcome = Ok(());
        form.update(|f| outcome = f.select(file, &mime_type, size));

        match outcome {
            Ok(()) => log::info!("🎬 Selected {} ({}, {})", name, mime_type, format_size_mb(size)),
            Err(e) => {
                log::warn!("Rejected {}: {}", name, e);
                set_error.set(Some(e.user_message(UPLOAD_FAILED)));
            }
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            handle_file(file);
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            handle_file(file);
        }
        // Allow picking the same file again after a rejection.
        input.set_value("");
    };

    let trigger_file_input = move |_| {
        if let Some(input) = document().get_element_by_id(FILE_INPUT_ID) {
            if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                html_input.click();
            }
        }
    };

    let on_submit = move |_| {
        if is_uploading.get_untracked() {
            return;
        }

        let prepared = form.with_untracked(|f| {
            f.submission().map(|s| (s.file.clone(), s.theme.to_string(), s.description.to_string()))
        });
        let (file, theme, description) = match prepared {
            Ok(parts) => parts,
            Err(e) => {
                set_error.set(Some(e.user_message(UPLOAD_FAILED)));
                return;
            }
        };

        set_error.set(None);
        set_upload_progress.set(0);
        set_is_uploading.set(true);

        spawn_local(async move {
            let submission = Submission {
                file: &file,
                theme: &theme,
                description: &description,
            };

            let outcome = upload_video(submission).await;

            // Logout swaps the workspace out while the upload runs; the form
            // and its callback are gone by then.
            if is_uploading.try_get_untracked().is_none() {
                log::warn!("Upload finished after the form was closed, discarding result");
                return;
            }
            if state.session.get_untracked() != SessionStatus::Authenticated {
                log::warn!("Upload finished after logout, discarding result");
                set_is_uploading.set(false);
                return;
            }

            match outcome {
                Ok(result) => {
                    set_upload_progress.set(100);
                    set_is_uploading.set(false);
                    // The parent swaps this form out, so hand over last.
                    on_upload_complete.call(result);
                }
                Err(e) => {
                    log::error!("❌ Upload failed: {}", e);
                    set_error.set(Some(e.user_message(UPLOAD_FAILED)));
                    set_upload_progress.set(0);
                    set_is_uploading.set(false);
                }
            }
        });
    };

    let selected = move || {
        form.with(|f| f.file().map(|file| (file.name(), format_size_mb(file.size()))))
    };
    let busy = move || is_uploading.get() || state.is_processing.get();
    let can_submit = move || form.with(|f| f.is_ready()) && !busy();

    view! {
        <div class="upload-form">
            <div class="info-box">
                <h3>"Como funciona o processamento"</h3>
                <p>
                    "1. Faça upload do seu vídeo e informe o tema" <br/>
                    "2. Nossa IA analisa o conteúdo automaticamente" <br/>
                    "3. Receba legendas, descrições otimizadas e palavras-chave" <br/>
                    "4. Copie e use o conteúdo nas suas redes sociais"
                </p>
            </div>

            <div class="form-field">
                <label for="theme">"🎯 Tema do Vídeo *"</label>
                <input
                    id="theme"
                    type="text"
                    placeholder="Ex: Produto de emagrecimento, Curso de marketing digital, App de investimentos..."
                    prop:value=move || form.with(|f| f.theme.clone())
                    on:input=move |ev| form.update(|f| f.theme = event_target_value(&ev))
                />
                <p class="field-hint">
                    "Informe o tema para uma análise mais precisa e conteúdo otimizado"
                </p>
            </div>

            <div class="form-field">
                <label for="description">"Descrição Adicional (Opcional)"</label>
                <textarea
                    id="description"
                    placeholder="Adicione informações extras sobre o produto, público-alvo, benefícios principais..."
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
            </div>

            <div
                class="upload-section"
                class:drag-active=move || drag_active.get()
                class:has-file=move || selected().is_some()
                on:dragenter=on_drag_over
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <input
                    type="file"
                    id=FILE_INPUT_ID
                    accept="video/mp4,video/mov,video/avi,video/quicktime"
                    style="display:none"
                    on:change=on_file_change
                />

                {move || match selected() {
                    Some((name, size)) => view! {
                        <div class="upload-icon">"🎞️"</div>
                        <div class="upload-text">"Vídeo selecionado!"</div>
                        <div class="upload-hint">{name} " (" {size} ")"</div>
                        <button class="btn btn-secondary" on:click=trigger_file_input>
                            "Escolher outro vídeo"
                        </button>
                    }.into_view(),
                    None => view! {
                        <div class="upload-icon">"📤"</div>
                        <div class="upload-text">"Arraste seu vídeo aqui"</div>
                        <div class="upload-hint">"ou clique para selecionar um arquivo"</div>
                        <div class="upload-hint">"Formatos: MP4, MOV, AVI • Tamanho máx: 100MB"</div>
                        <button class="btn btn-secondary" on:click=trigger_file_input>
                            "Selecionar Vídeo"
                        </button>
                    }.into_view(),
                }}

                <Show when=move || is_uploading.get() && upload_progress.get() < 100>
                    <div class="upload-hint">"⏳ Enviando..."</div>
                </Show>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">
                    "⚠️ " {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <button
                class="btn btn-primary btn-block"
                on:click=on_submit
                disabled=move || !can_submit()
            >
                {move || if busy() {
                    view! { <span class="spinner"></span> " Processando..." }.into_view()
                } else {
                    "✨ Processar Vídeo e Gerar Conteúdo".into_view()
                }}
            </button>

            <div class="deliverables">
                <h4>"O que você receberá:"</h4>
                <ul>
                    <li>"Legendas formatadas (.SRT)"</li>
                    <li>"Descrição otimizada"</li>
                    <li>"Palavras-chave relevantes"</li>
                    <li>"Dicas de postagem"</li>
                </ul>
            </div>
        </div>
    }
}
