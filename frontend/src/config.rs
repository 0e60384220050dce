//! Application configuration.
//!
//! Centralized configuration for the ViralAffiliateAI frontend.
//! The backend serves this bundle, so the API is reached same-origin
//! and every path below is relative to [`API_BASE_URL`].

/// Backend API base URL.
///
/// Empty means same-origin (the Flask server also hosts the static bundle).
pub const API_BASE_URL: &str = "";

/// Session status check (GET).
pub const AUTH_STATUS_PATH: &str = "/api/auth/status";

/// Password login (POST, JSON).
pub const AUTH_LOGIN_PATH: &str = "/api/auth/login";

/// Logout (POST, best-effort).
pub const AUTH_LOGOUT_PATH: &str = "/api/auth/logout";

/// Video upload (POST, multipart).
pub const VIDEO_UPLOAD_PATH: &str = "/api/video/upload";

/// Generate description, hashtags, subtitles and keywords in one call.
pub const GENERATE_ALL_PATH: &str = "/api/content/generate-all";

/// Regenerate description + hashtags.
pub const GENERATE_DESCRIPTION_PATH: &str = "/api/content/generate-description";

/// Regenerate the keyword bundle.
pub const GENERATE_KEYWORDS_PATH: &str = "/api/content/generate-keywords";

/// Application name, used for the page title and header.
pub const APP_NAME: &str = "ViralAffiliateAI";

/// Maximum video size for upload (in bytes).
///
/// 100 MiB limit, same as the backend's `MAX_CONTENT_LENGTH`.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Accepted video MIME types.
pub const ALLOWED_VIDEO_TYPES: &[&str] = &["video/mp4", "video/mov", "video/avi", "video/quicktime"];

/// How long a "copied" acknowledgment stays visible.
pub const COPY_FEEDBACK_MS: u32 = 2_000;

/// Name of the exported subtitle file.
pub const SRT_FILENAME: &str = "legendas.srt";

/// MIME type of the exported subtitle file.
pub const SRT_MIME_TYPE: &str = "text/plain";

/// Build an absolute endpoint URL from a path.
pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE_URL, path)
}
