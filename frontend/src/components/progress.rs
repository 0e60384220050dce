//! Step tracker shown while the backend works on the video.
//!
//! Purely presentational: the caller says which step is current, nothing
//! here talks to the backend.

use leptos::*;

/// One named phase of the processing pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessingStep {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Upload, extract audio, transcribe, generate.
pub const DEFAULT_STEPS: [ProcessingStep; 4] = [
    ProcessingStep { id: "upload", label: "Enviando vídeo", icon: "📹" },
    ProcessingStep { id: "extract", label: "Extraindo áudio", icon: "🎵" },
    ProcessingStep { id: "transcribe", label: "Transcrevendo áudio", icon: "🎙️" },
    ProcessingStep { id: "generate", label: "Gerando conteúdo", icon: "✨" },
];

/// Rendering state of a step relative to the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    InProgress,
    Pending,
}

impl StepStatus {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            StepStatus::Completed => "step-completed",
            StepStatus::InProgress => "step-current",
            StepStatus::Pending => "step-pending",
        }
    }
}

/// Position of `current` in `steps`; `None` when nothing matches.
pub fn current_index(steps: &[ProcessingStep], current: Option<&str>) -> Option<usize> {
    let current = current?;
    steps.iter().position(|step| step.id == current)
}

pub fn step_status(index: usize, current: Option<usize>) -> StepStatus {
    match current {
        Some(cur) if index < cur => StepStatus::Completed,
        Some(cur) if index == cur => StepStatus::InProgress,
        _ => StepStatus::Pending,
    }
}

/// `(current + 1) / total * 100`, rounded. No current step means 0%.
pub fn progress_percent(current: Option<usize>, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let done = current.map_or(0, |idx| idx + 1);
    (done as f64 / total as f64 * 100.0).round() as u32
}

#[component]
pub fn ProcessingProgress(
    /// Id of the step in progress
    #[prop(optional)]
    current_step: Option<&'static str>,
    /// Steps to show, defaults to [`DEFAULT_STEPS`]
    #[prop(optional)]
    steps: Option<Vec<ProcessingStep>>,
) -> impl IntoView {
    let steps = steps.unwrap_or_else(|| DEFAULT_STEPS.to_vec());
    let current = current_index(&steps, current_step);
    let percent = progress_percent(current, steps.len());

    view! {
        <div class="processing-progress">
            <h3 class="processing-title">"Processando seu vídeo..."</h3>

            <div class="processing-steps">
                {steps.into_iter().enumerate().map(|(idx, step)| {
                    let status = step_status(idx, current);
                    view! {
                        <div class=format!("processing-step {}", status.css_class())>
                            <div class="step-icon">
                                {match status {
                                    StepStatus::Completed => "✓".into_view(),
                                    StepStatus::InProgress => view! { <span class="spinner"></span> }.into_view(),
                                    StepStatus::Pending => step.icon.into_view(),
                                }}
                            </div>
                            <div class="step-body">
                                <p class="step-label">{step.label}</p>
                                {match status {
                                    StepStatus::InProgress => view! {
                                        <p class="step-note">"Em andamento..."</p>
                                    }.into_view(),
                                    StepStatus::Completed => view! {
                                        <p class="step-note done">"Concluído ✓"</p>
                                    }.into_view(),
                                    StepStatus::Pending => ().into_view(),
                                }}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="progress-summary">
                <span>"Progresso"</span>
                <span>{format!("{}%", percent)}</span>
            </div>
            <div class="progress-bar">
                <div class="progress-fill" style=format!("width: {}%;", percent)></div>
            </div>

            <p class="processing-hint">
                "Isso pode levar alguns minutos dependendo do tamanho do vídeo"
            </p>
        </div>
    }
}
