//! ViralAffiliateAI - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads affiliate marketing videos and
//! presents the subtitles, descriptions, hashtags and keywords the backend
//! generates from them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (AppState context)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Checking      → loading screen                             │
//! │  Anonymous     → LoginForm                                  │
//! │  Authenticated → Workspace                                  │
//! │    ├── Header (logout)                                      │
//! │    ├── Hero + UploadSection       (no upload result yet)    │
//! │    ├── ProcessingProgress         (generation in flight)    │
//! │    ├── ResultsPanel               (content available)       │
//! │    ├── HowItWorks                                           │
//! │    └── Footer                                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (UploadResult, GeneratedContent, AppError, etc.)
//! - [`state`] - Application state shared through context
//! - [`validation`] - Client-side upload checks
//! - [`srt`] - SubRip export
//! - [`feedback`] - "Copied!" acknowledgment
//! - [`components`] - UI components
//! - [`services`] - Backend and browser communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod validation;
pub mod srt;
pub mod feedback;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Session
    SessionStatus,
    // API
    UploadResult, GenerateAllRequest, RegenerateRequest,
    // Content
    GeneratedContent, Subtitle, KeywordBundle, ContentField, FieldUpdate,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{use_app_state, AppState};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = AppState::new();
    provide_context(state);

    // Session gate: one status check per page load.
    spawn_local(async move {
        let authenticated = services::check_status().await;
        log::info!("🔐 Session check: authenticated={}", authenticated);
        state.set_session_checked(authenticated);
    });

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=SessionGate/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn SessionGate() -> impl IntoView {
    let state = use_app_state();

    move || match state.session.get() {
        SessionStatus::Checking => view! {
            <div class="loading-screen">
                <span class="spinner"></span>
                <p>"Carregando..."</p>
            </div>
        }
        .into_view(),
        SessionStatus::Anonymous => view! { <LoginForm/> }.into_view(),
        SessionStatus::Authenticated => view! { <Workspace/> }.into_view(),
    }
}

#[component]
fn Workspace() -> impl IntoView {
    let state = use_app_state();

    // Generation only ever starts from a successful upload.
    let on_upload_complete = move |result: UploadResult| {
        let Some((epoch, request)) = state.start_generation(result) else {
            return;
        };
        spawn_local(async move {
            let outcome = services::generate_all(&request).await;
            state.finish_generation(epoch, outcome);
        });
    };

    view! {
        <Header/>

        <div class="container">
            <Show
                when=move || state.upload_result.with(Option::is_none)
                fallback=|| view! { <ResultsArea/> }
            >
                <Hero/>
                <UploadSection on_upload_complete=on_upload_complete/>
            </Show>

            <HowItWorks/>
        </div>

        <Footer/>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ResultsPhase {
    Processing,
    Ready,
    Failed,
}

/// Progress, results, or a retry prompt once an upload has succeeded.
#[component]
fn ResultsArea() -> impl IntoView {
    let state = use_app_state();

    // Memo so regenerating a field does not rebuild the panel.
    let phase = create_memo(move |_| {
        if state.is_processing.get() {
            ResultsPhase::Processing
        } else if state.generated_content.with(Option::is_some) {
            ResultsPhase::Ready
        } else {
            ResultsPhase::Failed
        }
    });

    let on_reset = move |_| state.reset();

    move || match phase.get() {
        // The upload response already covers upload, extraction and transcription.
        ResultsPhase::Processing => view! {
            <ProcessingProgress current_step="generate"/>
        }
        .into_view(),
        ResultsPhase::Ready => view! {
            <div class="results-area">
                <div class="results-header">
                    <h2>"Conteúdo Gerado com Sucesso! 🎉"</h2>
                    <button class="btn btn-secondary" on:click=on_reset>"Processar Novo Vídeo"</button>
                </div>
                <ResultsPanel/>
            </div>
        }
        .into_view(),
        ResultsPhase::Failed => view! {
            <div class="results-error">
                <p>"Erro ao processar o vídeo. Tente novamente."</p>
                <button class="btn btn-primary" on:click=on_reset>"Tentar Novamente"</button>
            </div>
        }
        .into_view(),
    }
}
