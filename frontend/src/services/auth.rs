//! Session endpoints: status check, password login, logout.

use gloo_net::http::Request;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::config::{api_url, AUTH_LOGIN_PATH, AUTH_LOGOUT_PATH, AUTH_STATUS_PATH};
use crate::services::http::ensure_success;
use crate::types::{AppError, AppResult};

pub const MISSING_PASSWORD: &str = "Digite a senha.";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    password: &'a str,
}

/// Ask the backend whether the session cookie is still valid.
///
/// Any failure (network or non-2xx) counts as "not authenticated"; it is
/// logged and never shown to the user.
pub async fn check_status() -> bool {
    match fetch_status().await {
        Ok(()) => true,
        Err(e) => {
            log::warn!("🔒 Auth status check failed: {}", e);
            false
        }
    }
}

async fn fetch_status() -> AppResult<()> {
    let response = Request::get(&api_url(AUTH_STATUS_PATH))
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    ensure_success(response).await?;
    Ok(())
}

/// Submit the password. On success the backend sets the session cookie.
pub async fn login(password: &str) -> AppResult<()> {
    if password.is_empty() {
        return Err(AppError::Validation(MISSING_PASSWORD.to_string()));
    }

    let response = Request::post(&api_url(AUTH_LOGIN_PATH))
        .credentials(RequestCredentials::Include)
        .json(&LoginRequest { password })?
        .send()
        .await?;
    ensure_success(response).await?;

    log::info!("🔑 Login accepted");
    Ok(())
}

/// Best-effort logout. Callers clear local state whatever this returns.
pub async fn logout() -> AppResult<()> {
    let response = Request::post(&api_url(AUTH_LOGOUT_PATH))
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    ensure_success(response).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_body() {
        let body = serde_json::to_string(&LoginRequest { password: "viral2025" }).unwrap();
        assert_eq!(body, r#"{"password":"viral2025"}"#);
    }
}
