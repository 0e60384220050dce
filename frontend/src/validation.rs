//! Client-side checks for the upload form.
//!
//! These checks are advisory: the backend validates again. Their only job is
//! to stop obviously bad submissions before any bytes leave the browser.

use crate::config::{ALLOWED_VIDEO_TYPES, MAX_FILE_SIZE};
use crate::types::{AppError, AppResult};

pub const UNSUPPORTED_FORMAT: &str = "Formato não suportado. Use MP4, MOV ou AVI.";
pub const FILE_TOO_LARGE: &str = "Arquivo muito grande. Máximo 100MB.";
pub const MISSING_FILE: &str = "Selecione um vídeo primeiro.";
pub const MISSING_THEME: &str = "Digite o tema do vídeo para melhor análise.";

/// Check a candidate video's MIME type, then its size in bytes.
///
/// Size is taken as `f64` because that is what `Blob.size` reports.
pub fn validate_video(mime_type: &str, size: f64) -> AppResult<()> {
    if !ALLOWED_VIDEO_TYPES.contains(&mime_type) {
        return Err(AppError::Validation(UNSUPPORTED_FORMAT.to_string()));
    }
    if size.is_nan() || size > MAX_FILE_SIZE as f64 {
        return Err(AppError::Validation(FILE_TOO_LARGE.to_string()));
    }
    Ok(())
}

/// Theme must contain something other than whitespace.
pub fn validate_theme(theme: &str) -> AppResult<()> {
    if theme.trim().is_empty() {
        return Err(AppError::Validation(MISSING_THEME.to_string()));
    }
    Ok(())
}

/// Size in megabytes with one decimal, as shown next to the file name.
pub fn format_size_mb(size: f64) -> String {
    format!("{:.1} MB", size / (1024.0 * 1024.0))
}

/// Validated upload payload, ready to be turned into multipart form data.
#[derive(Debug)]
pub struct Submission<'a, F> {
    pub file: &'a F,
    pub theme: &'a str,
    pub description: &'a str,
}

/// State of the upload form.
///
/// Generic over the file handle so the rules can be exercised without a
/// browser; the component instantiates it with `web_sys::File`.
#[derive(Clone, Debug)]
pub struct UploadForm<F> {
    file: Option<F>,
    pub theme: String,
    pub description: String,
}

impl<F> Default for UploadForm<F> {
    fn default() -> Self {
        Self {
            file: None,
            theme: String::new(),
            description: String::new(),
        }
    }
}

impl<F> UploadForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected file.
    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    /// Offer a file to the form.
    ///
    /// The file is only stored when it passes validation; a rejected file
    /// leaves the previous selection untouched.
    pub fn select(&mut self, file: F, mime_type: &str, size: f64) -> AppResult<()> {
        validate_video(mime_type, size)?;
        self.file = Some(file);
        Ok(())
    }

    /// True when the submit button should be enabled.
    pub fn is_ready(&self) -> bool {
        self.file.is_some() && !self.theme.trim().is_empty()
    }

    /// Validate the whole form and borrow the payload for submission.
    pub fn submission(&self) -> AppResult<Submission<'_, F>> {
        let file = self
            .file
            .as_ref()
            .ok_or_else(|| AppError::Validation(MISSING_FILE.to_string()))?;
        validate_theme(&self.theme)?;

        Ok(Submission {
            file,
            theme: &self.theme,
            description: &self.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: f64 = 1024.0 * 1024.0;

    fn rejected_with(result: AppResult<()>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_allowed_types_pass() {
        for mime in ALLOWED_VIDEO_TYPES {
            assert!(validate_video(mime, 10.0 * MIB).is_ok(), "{} should pass", mime);
        }
    }

    #[test]
    fn test_unknown_types_rejected() {
        for mime in ["video/webm", "image/png", "", "VIDEO/MP4", "application/octet-stream"] {
            assert_eq!(rejected_with(validate_video(mime, 1.0)), UNSUPPORTED_FORMAT);
        }
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        assert!(validate_video("video/mp4", 100.0 * MIB).is_ok());
        assert_eq!(rejected_with(validate_video("video/mp4", 100.0 * MIB + 1.0)), FILE_TOO_LARGE);
        assert!(validate_video("video/mp4", f64::NAN).is_err());
    }

    #[test]
    fn test_oversized_rejected_regardless_of_type() {
        for mime in ["video/mp4", "video/quicktime", "video/webm"] {
            assert!(validate_video(mime, 250.0 * MIB).is_err());
        }
    }

    #[test]
    fn test_rejected_file_is_not_stored() {
        let mut form = UploadForm::<&str>::new();
        assert!(form.select("clip.webm", "video/webm", 1.0).is_err());
        assert!(form.file().is_none());

        assert!(form.select("big.mp4", "video/mp4", 101.0 * MIB).is_err());
        assert!(form.file().is_none());
    }

    #[test]
    fn test_rejected_file_keeps_previous_selection() {
        let mut form = UploadForm::new();
        form.select("ok.mov", "video/quicktime", MIB).unwrap();
        assert!(form.select("bad.gif", "image/gif", MIB).is_err());
        assert_eq!(form.file(), Some(&"ok.mov"));
    }

    #[test]
    fn test_submission_requires_file_and_theme() {
        let mut form = UploadForm::new();
        form.theme = "Curso".into();
        assert_eq!(rejected_with(form.submission().map(|_| ())), MISSING_FILE);

        form.select("ok.mp4", "video/mp4", MIB).unwrap();
        form.theme = "   ".into();
        assert!(!form.is_ready());
        assert_eq!(rejected_with(form.submission().map(|_| ())), MISSING_THEME);

        form.theme = "App de investimentos".into();
        form.description = "Para jovens".into();
        assert!(form.is_ready());
        let submission = form.submission().unwrap();
        assert_eq!(*submission.file, "ok.mp4");
        assert_eq!(submission.theme, "App de investimentos");
        assert_eq!(submission.description, "Para jovens");
    }

    #[test]
    fn test_format_size_mb() {
        assert_eq!(format_size_mb(15.0 * MIB + 0.3 * MIB), "15.3 MB");
        assert_eq!(format_size_mb(0.0), "0.0 MB");
    }
}
