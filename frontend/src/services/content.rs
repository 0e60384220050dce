//! Content generation endpoints.

use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::config::{api_url, GENERATE_ALL_PATH};
use crate::services::http::ensure_success;
use crate::types::{
    AppResult, ContentField, DescriptionResponse, FieldUpdate, GenerateAllRequest,
    GeneratedContent, KeywordsResponse, RegenerateRequest,
};

/// Shown when a regeneration fails without a backend message.
pub const REGENERATE_FAILED: &str = "Não foi possível regenerar o conteúdo.";

/// Generate description, hashtags, subtitles and keywords in one call.
pub async fn generate_all(request: &GenerateAllRequest) -> AppResult<GeneratedContent> {
    log::info!("🤖 Requesting content generation...");

    let response = Request::post(&api_url(GENERATE_ALL_PATH))
        .credentials(RequestCredentials::Include)
        .json(request)?
        .send()
        .await?;
    let response = ensure_success(response).await?;

    Ok(response.json::<GeneratedContent>().await?)
}

/// Regenerate a single field group.
///
/// The returned update replaces only that group; see
/// [`GeneratedContent::apply`].
pub async fn regenerate(field: ContentField, request: &RegenerateRequest) -> AppResult<FieldUpdate> {
    log::info!("🔄 Regenerating {}...", field.name());

    let response = Request::post(&api_url(field.endpoint()))
        .credentials(RequestCredentials::Include)
        .json(request)?
        .send()
        .await?;
    let response = ensure_success(response).await?;

    let update = match field {
        ContentField::Description => response.json::<DescriptionResponse>().await?.into(),
        ContentField::Keywords => response.json::<KeywordsResponse>().await?.into(),
    };
    Ok(update)
}
