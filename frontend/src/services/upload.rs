//! Video upload to the backend.

use gloo_net::http::Request;
use serde_json::{Map, Value};
use web_sys::{File, FormData, RequestCredentials};

use crate::config::{api_url, VIDEO_UPLOAD_PATH};
use crate::services::http::ensure_success;
use crate::types::{AppError, AppResult, UploadResult};
use crate::validation::Submission;

/// Shown when the backend rejects the upload without a message.
pub const UPLOAD_FAILED: &str = "Erro no upload";

/// Upload the video with its theme and description.
///
/// The backend extracts the audio and transcribes it before answering, so a
/// successful response already carries the transcription.
pub async fn upload_video(submission: Submission<'_, File>) -> AppResult<UploadResult> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Browser(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob("video", submission.file)
        .map_err(|e| AppError::Browser(format!("Failed to append video: {:?}", e)))?;
    form_data
        .append_with_str("theme", submission.theme)
        .map_err(|e| AppError::Browser(format!("Failed to append theme: {:?}", e)))?;
    form_data
        .append_with_str("description", submission.description)
        .map_err(|e| AppError::Browser(format!("Failed to append description: {:?}", e)))?;

    log::info!(
        "📤 Uploading {} ({} bytes), theme: {}",
        submission.file.name(),
        submission.file.size(),
        submission.theme
    );

    let response = Request::post(&api_url(VIDEO_UPLOAD_PATH))
        .credentials(RequestCredentials::Include)
        .body(form_data)?
        .send()
        .await?;
    let response = ensure_success(response).await?;

    let body = response.json::<Map<String, Value>>().await?;
    let result = UploadResult::from_response(body, submission.theme, submission.description)?;

    log::info!(
        "✅ Upload complete: {}",
        result.message().unwrap_or("transcription received")
    );
    Ok(result)
}
