//! Response handling shared by all backend calls.

use gloo_net::http::Response;

use crate::types::{backend_error_message, AppError, AppResult};

/// Turn a non-2xx response into [`AppError::Backend`].
///
/// The backend reports failures as `{"error": "..."}`; when the body has no
/// such field the message is left empty for the caller's fallback.
pub async fn ensure_success(response: Response) -> AppResult<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(AppError::Backend {
        status,
        message: backend_error_message(&body),
    })
}
