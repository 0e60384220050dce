//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Session Types** - Authentication state
//! - **API Types** - Backend request/response structures
//! - **Content Types** - Generated description, subtitles and keywords
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::config::{GENERATE_DESCRIPTION_PATH, GENERATE_KEYWORDS_PATH};

// =============================================================================
// Session Types
// =============================================================================

/// Authentication state, derived on each load from the status endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Status request still in flight
    #[default]
    Checking,
    /// Backend accepted the session cookie
    Authenticated,
    /// No valid session (or the check failed)
    Anonymous,
}

// =============================================================================
// API Types
// =============================================================================

/// Result of a successful upload, annotated with the user's own inputs.
///
/// Everything the backend returns besides the transcription is kept
/// untouched in `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    /// Opaque transcription (`{text, words[]}` on the current backend)
    pub transcription: Value,
    /// Theme typed by the user
    pub theme: String,
    /// Optional free-text description typed by the user
    #[serde(rename = "userDescription")]
    pub user_description: String,
    /// Remaining server fields (video_id, platform, message...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UploadResult {
    /// Merge the upload response body with the user-supplied fields.
    ///
    /// User values win over whatever the server echoed back.
    pub fn from_response(
        mut body: Map<String, Value>,
        theme: &str,
        user_description: &str,
    ) -> AppResult<Self> {
        let transcription = body
            .remove("transcription")
            .ok_or_else(|| AppError::Parse("upload response has no transcription".to_string()))?;
        body.remove("theme");
        body.remove("userDescription");

        Ok(Self {
            transcription,
            theme: theme.to_string(),
            user_description: user_description.to_string(),
            extra: body,
        })
    }

    /// Plain transcription text, when the backend provided one.
    pub fn transcription_text(&self) -> Option<&str> {
        match &self.transcription {
            Value::String(text) => Some(text.as_str()),
            other => other.get("text").and_then(|t| t.as_str()),
        }
    }

    /// Human-readable server message, if any.
    pub fn message(&self) -> Option<&str> {
        self.extra.get("message").and_then(|m| m.as_str())
    }
}

/// Body of the generate-all request.
///
/// Only constructible from an [`UploadResult`], so generation can never be
/// requested before an upload succeeded.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAllRequest {
    transcription: Value,
    theme: String,
    user_description: String,
}

impl From<&UploadResult> for GenerateAllRequest {
    fn from(result: &UploadResult) -> Self {
        Self {
            transcription: result.transcription.clone(),
            theme: result.theme.clone(),
            user_description: result.user_description.clone(),
        }
    }
}

/// Context sent to the single-field regenerate endpoints.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenerateRequest {
    analysis: Option<Value>,
    transcription: Value,
    theme: String,
    user_description: String,
}

impl RegenerateRequest {
    pub fn new(upload: &UploadResult, content: &GeneratedContent) -> Self {
        Self {
            analysis: content.analysis.clone(),
            transcription: upload.transcription.clone(),
            theme: upload.theme.clone(),
            user_description: upload.user_description.clone(),
        }
    }
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Extract the backend's `error` message from a response body.
pub fn backend_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|msg| !msg.trim().is_empty())
}

// =============================================================================
// Content Types
// =============================================================================

/// One subtitle cue, times in seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subtitle {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Keyword and posting guidance.
///
/// The field names match the backend payload. Every field may be missing;
/// use the accessors, which treat empty values as absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordBundle {
    pub palavras_chave: Option<Vec<String>>,
    pub dicas_postagem: Option<Vec<String>>,
    pub melhor_horario: Option<String>,
    pub tendencias: Option<Vec<String>>,
}

fn non_empty_list(list: &Option<Vec<String>>) -> Option<&[String]> {
    list.as_deref().filter(|items| !items.is_empty())
}

impl KeywordBundle {
    /// Keywords to render as chips.
    pub fn keywords(&self) -> Option<&[String]> {
        non_empty_list(&self.palavras_chave)
    }

    /// Posting tips.
    pub fn tips(&self) -> Option<&[String]> {
        non_empty_list(&self.dicas_postagem)
    }

    /// Best time to post.
    pub fn best_time(&self) -> Option<&str> {
        self.melhor_horario
            .as_deref()
            .filter(|time| !time.trim().is_empty())
    }

    /// Current trends.
    pub fn trends(&self) -> Option<&[String]> {
        non_empty_list(&self.tendencias)
    }

    /// All keywords as a single comma-separated string.
    pub fn joined_keywords(&self) -> Option<String> {
        self.keywords().map(|keywords| keywords.join(", "))
    }

    /// True when no block would be rendered at all.
    pub fn is_empty(&self) -> bool {
        self.keywords().is_none()
            && self.tips().is_none()
            && self.best_time().is_none()
            && self.trends().is_none()
    }
}

/// Everything the generate-all endpoint produces.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hashtags: Option<String>,
    #[serde(default)]
    pub subtitles: Vec<Subtitle>,
    #[serde(default)]
    pub keywords: Option<KeywordBundle>,
    /// Backend analysis, echoed back on regenerate requests
    #[serde(default)]
    pub analysis: Option<Value>,
}

impl GeneratedContent {
    /// Hashtags, treating an empty string as absent.
    pub fn hashtags(&self) -> Option<&str> {
        self.hashtags.as_deref().filter(|tags| !tags.trim().is_empty())
    }

    /// Keyword bundle, treating a bundle with nothing to show as absent.
    pub fn keyword_bundle(&self) -> Option<&KeywordBundle> {
        self.keywords.as_ref().filter(|bundle| !bundle.is_empty())
    }

    /// Replace the field group covered by `update`, leaving the rest intact.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Description { description, hashtags } => {
                self.description = description;
                self.hashtags = hashtags;
            }
            FieldUpdate::Keywords(keywords) => {
                self.keywords = keywords;
            }
        }
    }
}

/// Text copied by the description tab: description, blank line, hashtags.
pub fn description_clipboard_text(description: &str, hashtags: Option<&str>) -> String {
    format!("{}\n\n{}", description, hashtags.unwrap_or_default())
}

/// Content that can be regenerated on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentField {
    /// Description and hashtags
    Description,
    /// Keyword bundle
    Keywords,
}

impl ContentField {
    /// Backend path of the regenerate endpoint.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ContentField::Description => GENERATE_DESCRIPTION_PATH,
            ContentField::Keywords => GENERATE_KEYWORDS_PATH,
        }
    }

    /// Name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            ContentField::Description => "description",
            ContentField::Keywords => "keywords",
        }
    }
}

/// Replacement for one field group, produced by a regenerate call.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldUpdate {
    Description {
        description: String,
        hashtags: Option<String>,
    },
    Keywords(Option<KeywordBundle>),
}

/// Response of the description regenerate endpoint.
#[derive(Debug, Deserialize)]
pub struct DescriptionResponse {
    pub description: String,
    #[serde(default)]
    pub hashtags: Option<String>,
}

/// Response of the keywords regenerate endpoint.
#[derive(Debug, Deserialize)]
pub struct KeywordsResponse {
    #[serde(default)]
    pub keywords: Option<KeywordBundle>,
}

impl From<DescriptionResponse> for FieldUpdate {
    fn from(resp: DescriptionResponse) -> Self {
        FieldUpdate::Description {
            description: resp.description,
            hashtags: resp.hashtags,
        }
    }
}

impl From<KeywordsResponse> for FieldUpdate {
    fn from(resp: KeywordsResponse) -> Self {
        FieldUpdate::Keywords(resp.keywords)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Generic message for transport failures.
pub const NETWORK_ERROR_MESSAGE: &str = "Erro de conexão. Tente novamente.";

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Input rejected before any network call.
    Validation(String),
    /// Network/HTTP transport error.
    Network(String),
    /// Backend answered with a non-2xx status.
    Backend { status: u16, message: Option<String> },
    /// Response body was not the expected JSON.
    Parse(String),
    /// A browser API (clipboard, Blob, FormData) failed.
    Browser(String),
}

impl AppError {
    /// Text shown to the user.
    ///
    /// Backend messages are shown verbatim; `backend_fallback` is used when
    /// the backend did not provide one.
    pub fn user_message(&self, backend_fallback: &str) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            AppError::Backend { message: Some(msg), .. } => msg.clone(),
            AppError::Backend { message: None, .. } => backend_fallback.to_string(),
            AppError::Parse(_) => "Resposta inesperada do servidor.".to_string(),
            AppError::Browser(_) => "Operação não suportada pelo navegador.".to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Backend { status, message } => write!(
                f,
                "Server error ({}): {}",
                status,
                message.as_deref().unwrap_or("no message")
            ),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AppError::Browser(msg) => write!(f, "Browser error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        if let gloo_net::Error::SerdeError(inner) = &err {
            return AppError::Parse(inner.to_string());
        }
        AppError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn upload_result() -> UploadResult {
        let body = json!({
            "success": true,
            "video_id": "demo-123",
            "transcription": {"text": "Olá pessoal!", "words": []},
            "theme": "server theme",
            "user_description": "server echo",
            "message": "Vídeo processado com sucesso!"
        });
        let map = body.as_object().cloned().unwrap();
        UploadResult::from_response(map, "Curso de marketing", "Para iniciantes").unwrap()
    }

    #[test]
    fn test_upload_result_prefers_user_fields() {
        let result = upload_result();
        assert_eq!(result.theme, "Curso de marketing");
        assert_eq!(result.user_description, "Para iniciantes");
        assert_eq!(result.transcription_text(), Some("Olá pessoal!"));
        assert_eq!(result.message(), Some("Vídeo processado com sucesso!"));
        assert_eq!(result.extra.get("video_id"), Some(&json!("demo-123")));
        assert!(!result.extra.contains_key("transcription"));
    }

    #[test]
    fn test_upload_result_requires_transcription() {
        let map = json!({"success": true}).as_object().cloned().unwrap();
        let err = UploadResult::from_response(map, "tema", "").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_generate_all_request_shape() {
        let request = GenerateAllRequest::from(&upload_result());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "transcription": {"text": "Olá pessoal!", "words": []},
                "theme": "Curso de marketing",
                "userDescription": "Para iniciantes"
            })
        );
    }

    #[test]
    fn test_generated_content_deserialization() {
        let json = r##"{
            "success": true,
            "analysis": {"produto": "Curso"},
            "description": "🔥 DESCOBERTA INCRÍVEL",
            "hashtags": "#afiliados #renda",
            "subtitles": [
                {"start": 0.0, "end": 2.0, "text": "Olá pessoal!"},
                {"start": 2.0, "end": 4.5, "text": "Hoje vou falar"}
            ],
            "keywords": {
                "palavras_chave": ["afiliados", "vendas"],
                "dicas_postagem": [],
                "melhor_horario": "18h-21h"
            },
            "platform": "Produto Digital"
        }"##;

        let content: GeneratedContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.subtitles.len(), 2);
        assert_eq!(content.hashtags(), Some("#afiliados #renda"));

        let bundle = content.keyword_bundle().unwrap();
        assert_eq!(bundle.keywords().map(|k| k.len()), Some(2));
        assert_eq!(bundle.tips(), None);
        assert_eq!(bundle.best_time(), Some("18h-21h"));
        assert_eq!(bundle.trends(), None);
    }

    #[test]
    fn test_missing_fields_are_absent() {
        let content: GeneratedContent = serde_json::from_str(r#"{"hashtags": "  ", "keywords": {"tendencias": null}}"#).unwrap();
        assert_eq!(content.description, "");
        assert!(content.subtitles.is_empty());
        assert_eq!(content.hashtags(), None);
        assert_eq!(content.keyword_bundle(), None);
    }

    #[test]
    fn test_joined_keywords() {
        let bundle = KeywordBundle {
            palavras_chave: Some(vec!["a".into(), "b".into(), "c".into()]),
            ..Default::default()
        };
        assert_eq!(bundle.joined_keywords().as_deref(), Some("a, b, c"));
        assert_eq!(KeywordBundle::default().joined_keywords(), None);
    }

    #[test]
    fn test_description_clipboard_text() {
        assert_eq!(description_clipboard_text("Desc", Some("#a #b")), "Desc\n\n#a #b");
        assert_eq!(description_clipboard_text("Desc", None), "Desc\n\n");
    }

    #[test]
    fn test_apply_replaces_only_its_field_group() {
        let mut content = GeneratedContent {
            description: "old".into(),
            hashtags: Some("#old".into()),
            subtitles: vec![Subtitle { start: 0.0, end: 1.0, text: "Oi".into() }],
            keywords: Some(KeywordBundle {
                melhor_horario: Some("18h".into()),
                ..Default::default()
            }),
            analysis: None,
        };

        let resp: DescriptionResponse =
            serde_json::from_str(r##"{"success": true, "description": "new", "hashtags": "#new"}"##).unwrap();
        content.apply(resp.into());
        assert_eq!(content.description, "new");
        assert_eq!(content.hashtags(), Some("#new"));
        assert_eq!(content.subtitles.len(), 1);
        assert_eq!(content.keyword_bundle().and_then(|k| k.best_time()), Some("18h"));

        let resp: KeywordsResponse =
            serde_json::from_str(r#"{"keywords": {"palavras_chave": ["x"]}}"#).unwrap();
        content.apply(resp.into());
        assert_eq!(content.description, "new");
        let bundle = content.keyword_bundle().unwrap();
        assert_eq!(bundle.joined_keywords().as_deref(), Some("x"));
        assert_eq!(bundle.best_time(), None);
    }

    #[test]
    fn test_regenerate_request_carries_analysis() {
        let content = GeneratedContent {
            analysis: Some(json!({"nicho": "Vendas Online"})),
            ..Default::default()
        };
        let value = serde_json::to_value(RegenerateRequest::new(&upload_result(), &content)).unwrap();
        assert_eq!(value["analysis"], json!({"nicho": "Vendas Online"}));
        assert_eq!(value["theme"], json!("Curso de marketing"));
        assert_eq!(value["userDescription"], json!("Para iniciantes"));
    }

    #[test]
    fn test_backend_error_message() {
        assert_eq!(
            backend_error_message(r#"{"error": "Tema do vídeo é obrigatório"}"#).as_deref(),
            Some("Tema do vídeo é obrigatório")
        );
        assert_eq!(backend_error_message(r#"{"success": false}"#), None);
        assert_eq!(backend_error_message("<html>502</html>"), None);
    }

    #[test]
    fn test_user_message() {
        let backend = AppError::Backend { status: 400, message: Some("Senha incorreta".into()) };
        assert_eq!(backend.user_message("fallback"), "Senha incorreta");

        let silent = AppError::Backend { status: 500, message: None };
        assert_eq!(silent.user_message("Erro no upload"), "Erro no upload");

        let network = AppError::Network("connection refused".into());
        assert_eq!(network.user_message("Erro no upload"), NETWORK_ERROR_MESSAGE);
        assert_eq!(network.to_string(), "Network error: connection refused");
    }
}
