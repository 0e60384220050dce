//! Application state shared through Leptos context.
//!
//! `App` creates one [`AppState`] at startup and provides it with
//! `provide_context`; components fetch it with [`use_app_state`]. Each
//! field is owned by one flow: the session gate writes `session`, the
//! upload/generation flow writes `upload_result`, `generated_content` and
//! `is_processing`, the results panel writes `regenerating`.

use leptos::*;

use crate::types::{
    AppResult, ContentField, FieldUpdate, GenerateAllRequest, GeneratedContent, RegenerateRequest,
    SessionStatus, UploadResult,
};

#[derive(Clone, Copy)]
pub struct AppState {
    pub session: RwSignal<SessionStatus>,
    pub upload_result: RwSignal<Option<UploadResult>>,
    pub generated_content: RwSignal<Option<GeneratedContent>>,
    pub is_processing: RwSignal<bool>,
    /// Field currently being regenerated, if any
    pub regenerating: RwSignal<Option<ContentField>>,
    /// Bumped by every new upload and every reset; async results carry the
    /// value they were started under and are dropped on mismatch.
    epoch: RwSignal<u64>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: create_rw_signal(SessionStatus::Checking),
            upload_result: create_rw_signal(None),
            generated_content: create_rw_signal(None),
            is_processing: create_rw_signal(false),
            regenerating: create_rw_signal(None),
            epoch: create_rw_signal(0),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.get() == SessionStatus::Authenticated
    }

    /// Apply the outcome of the status check.
    pub fn set_session_checked(&self, authenticated: bool) {
        self.session.set(if authenticated {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Anonymous
        });
    }

    /// Called by the login form once the backend accepted the password.
    pub fn login(&self) {
        self.session.set(SessionStatus::Authenticated);
    }

    /// Forget the session and everything produced under it.
    pub fn logout(&self) {
        self.session.set(SessionStatus::Anonymous);
        self.reset();
    }

    /// Back to the upload screen, keeping the session.
    pub fn reset(&self) {
        self.epoch.update(|e| *e += 1);
        self.upload_result.set(None);
        self.generated_content.set(None);
        self.is_processing.set(false);
        self.regenerating.set(None);
    }

    fn is_current(&self, epoch: u64) -> bool {
        self.epoch.get_untracked() == epoch
    }

    /// Record a finished upload and build the generate-all request for it.
    ///
    /// Returns the epoch to hand back to [`finish_generation`](Self::finish_generation),
    /// or `None` when the session ended while the upload was running.
    pub fn start_generation(&self, result: UploadResult) -> Option<(u64, GenerateAllRequest)> {
        if self.session.get_untracked() != SessionStatus::Authenticated {
            log::warn!("Discarding upload result: session is no longer authenticated");
            return None;
        }

        let request = GenerateAllRequest::from(&result);
        self.epoch.update(|e| *e += 1);
        self.generated_content.set(None);
        self.regenerating.set(None);
        self.upload_result.set(Some(result));
        self.is_processing.set(true);
        Some((self.epoch.get_untracked(), request))
    }

    /// Store the generate-all outcome. Failures leave the content unset,
    /// which the page renders as a retry prompt.
    pub fn finish_generation(&self, epoch: u64, outcome: AppResult<GeneratedContent>) {
        // Logout, reset or a newer upload happened while the request was in flight.
        if !self.is_current(epoch) {
            log::warn!("Discarding stale generation result");
            return;
        }
        match outcome {
            Ok(content) => {
                log::info!("✨ Content generated: {} subtitles", content.subtitles.len());
                self.generated_content.set(Some(content));
            }
            Err(e) => {
                log::error!("❌ Content generation failed: {}", e);
                self.generated_content.set(None);
            }
        }
        self.is_processing.set(false);
    }

    /// Build the regenerate request for `field` and mark it in flight.
    ///
    /// Returns `None` when there is nothing to regenerate yet or another
    /// regeneration is already running.
    pub fn begin_regeneration(&self, field: ContentField) -> Option<(u64, RegenerateRequest)> {
        if self.regenerating.get_untracked().is_some() {
            return None;
        }
        let request = self.upload_result.with_untracked(|upload| {
            self.generated_content.with_untracked(|content| match (upload, content) {
                (Some(upload), Some(content)) => Some(RegenerateRequest::new(upload, content)),
                _ => None,
            })
        })?;
        self.regenerating.set(Some(field));
        Some((self.epoch.get_untracked(), request))
    }

    /// Merge a regenerated field into the current content.
    pub fn finish_regeneration(&self, epoch: u64, update: FieldUpdate) {
        if !self.is_current(epoch) {
            log::warn!("Discarding stale regeneration result");
            return;
        }
        self.generated_content.update(|content| {
            if let Some(content) = content {
                content.apply(update);
            }
        });
        self.regenerating.set(None);
    }

    /// Leave the content unchanged after a failed regeneration.
    pub fn abort_regeneration(&self, epoch: u64) {
        if !self.is_current(epoch) {
            return;
        }
        self.regenerating.set(None);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the state provided by `App`.
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AppError, KeywordBundle, Subtitle};
    use serde_json::json;

    fn with_runtime(test: impl FnOnce(AppState)) {
        let runtime = create_runtime();
        test(AppState::new());
        runtime.dispose();
    }

    /// Logged-in state, as the workspace sees it.
    fn with_session(test: impl FnOnce(AppState)) {
        with_runtime(|state| {
            state.login();
            test(state);
        });
    }

    fn upload_named(theme: &str) -> UploadResult {
        UploadResult {
            theme: theme.into(),
            ..upload_result()
        }
    }

    fn content_named(description: &str) -> GeneratedContent {
        GeneratedContent {
            description: description.into(),
            ..content()
        }
    }

    fn upload_result() -> UploadResult {
        UploadResult {
            transcription: json!({"text": "Olá"}),
            theme: "Emagrecimento".into(),
            user_description: String::new(),
            extra: Default::default(),
        }
    }

    fn content() -> GeneratedContent {
        GeneratedContent {
            description: "Descrição".into(),
            hashtags: Some("#fit".into()),
            subtitles: vec![Subtitle { start: 0.0, end: 2.0, text: "Olá".into() }],
            keywords: None,
            analysis: Some(json!({"produto": "Emagrecimento"})),
        }
    }

    #[test]
    fn test_initial_state() {
        with_runtime(|state| {
            assert_eq!(state.session.get(), SessionStatus::Checking);
            assert!(!state.is_authenticated());
            assert!(state.upload_result.get().is_none());
            assert!(state.generated_content.get().is_none());
            assert!(!state.is_processing.get());
        });
    }

    #[test]
    fn test_session_check() {
        with_runtime(|state| {
            state.set_session_checked(false);
            assert_eq!(state.session.get(), SessionStatus::Anonymous);
            state.login();
            assert!(state.is_authenticated());
        });
    }

    #[test]
    fn test_logout_clears_everything() {
        with_session(|state| {
            let (epoch, _) = state.start_generation(upload_result()).unwrap();
            state.finish_generation(epoch, Ok(content()));

            state.logout();
            assert!(!state.is_authenticated());
            assert!(state.upload_result.get().is_none());
            assert!(state.generated_content.get().is_none());
            assert!(!state.is_processing.get());
        });
    }

    #[test]
    fn test_generation_flow() {
        with_session(|state| {
            let (epoch, request) = state.start_generation(upload_result()).unwrap();
            assert!(state.is_processing.get());
            assert_eq!(state.upload_result.get(), Some(upload_result()));
            assert_eq!(
                serde_json::to_value(&request).unwrap(),
                json!({"transcription": {"text": "Olá"}, "theme": "Emagrecimento", "userDescription": ""})
            );

            state.finish_generation(epoch, Ok(content()));
            assert!(!state.is_processing.get());
            assert_eq!(state.generated_content.get(), Some(content()));
        });
    }

    #[test]
    fn test_failed_generation_leaves_content_unset() {
        with_session(|state| {
            let (epoch, _) = state.start_generation(upload_result()).unwrap();
            state.finish_generation(epoch, Err(AppError::Network("offline".into())));
            assert!(!state.is_processing.get());
            assert!(state.generated_content.get().is_none());
            assert!(state.upload_result.get().is_some());
        });
    }

    #[test]
    fn test_upload_finished_after_logout_is_dropped() {
        with_session(|state| {
            state.logout();
            assert!(state.start_generation(upload_result()).is_none());
            assert!(state.upload_result.get().is_none());
            assert!(!state.is_processing.get());
        });
    }

    #[test]
    fn test_late_generation_after_logout_is_dropped() {
        with_session(|state| {
            let (first, _) = state.start_generation(upload_named("A")).unwrap();
            state.logout();
            state.finish_generation(first, Ok(content_named("for A")));
            assert!(state.generated_content.get().is_none());

            // Log back in and upload again before the old response lands.
            state.login();
            let (second, _) = state.start_generation(upload_named("B")).unwrap();
            state.finish_generation(first, Ok(content_named("for A")));
            assert!(state.generated_content.get().is_none());
            assert!(state.is_processing.get());
            assert_eq!(state.upload_result.get().map(|u| u.theme), Some("B".to_string()));

            state.finish_generation(second, Ok(content_named("for B")));
            assert_eq!(state.generated_content.get().map(|c| c.description), Some("for B".to_string()));
            assert!(!state.is_processing.get());
        });
    }

    #[test]
    fn test_late_regeneration_after_reset_is_dropped() {
        with_session(|state| {
            let (epoch, _) = state.start_generation(upload_named("A")).unwrap();
            state.finish_generation(epoch, Ok(content_named("for A")));
            let (stale, _) = state.begin_regeneration(ContentField::Description).unwrap();

            state.reset();
            let (epoch, _) = state.start_generation(upload_named("B")).unwrap();
            state.finish_generation(epoch, Ok(content_named("for B")));
            let (current, _) = state.begin_regeneration(ContentField::Keywords).unwrap();

            state.finish_regeneration(
                stale,
                FieldUpdate::Description { description: "regenerated A".into(), hashtags: None },
            );
            state.abort_regeneration(stale);
            assert_eq!(state.generated_content.get().map(|c| c.description), Some("for B".to_string()));
            assert_eq!(state.regenerating.get(), Some(ContentField::Keywords));

            state.abort_regeneration(current);
            assert_eq!(state.regenerating.get(), None);
        });
    }

    #[test]
    fn test_reset_keeps_session() {
        with_session(|state| {
            state.start_generation(upload_result()).unwrap();
            state.reset();
            assert!(state.is_authenticated());
            assert!(state.upload_result.get().is_none());
        });
    }

    #[test]
    fn test_regeneration_needs_content() {
        with_session(|state| {
            assert!(state.begin_regeneration(ContentField::Keywords).is_none());

            state.start_generation(upload_result()).unwrap();
            assert!(state.begin_regeneration(ContentField::Keywords).is_none());
        });
    }

    #[test]
    fn test_regeneration_merges_one_field() {
        with_session(|state| {
            let (epoch, _) = state.start_generation(upload_result()).unwrap();
            state.finish_generation(epoch, Ok(content()));

            let (epoch, request) = state.begin_regeneration(ContentField::Keywords).unwrap();
            assert_eq!(serde_json::to_value(&request).unwrap()["analysis"], json!({"produto": "Emagrecimento"}));
            assert_eq!(state.regenerating.get(), Some(ContentField::Keywords));
            // A second request while one is running is refused.
            assert!(state.begin_regeneration(ContentField::Description).is_none());

            let bundle = KeywordBundle {
                palavras_chave: Some(vec!["dieta".into()]),
                ..Default::default()
            };
            state.finish_regeneration(epoch, FieldUpdate::Keywords(Some(bundle.clone())));

            let current = state.generated_content.get().unwrap();
            assert_eq!(current.keywords, Some(bundle));
            assert_eq!(current.description, "Descrição");
            assert_eq!(state.regenerating.get(), None);
        });
    }

    #[test]
    fn test_abort_regeneration_keeps_content() {
        with_session(|state| {
            let (epoch, _) = state.start_generation(upload_result()).unwrap();
            state.finish_generation(epoch, Ok(content()));
            let (epoch, _) = state.begin_regeneration(ContentField::Description).unwrap();
            state.abort_regeneration(epoch);
            assert_eq!(state.generated_content.get(), Some(content()));
            assert_eq!(state.regenerating.get(), None);
        });
    }
}
