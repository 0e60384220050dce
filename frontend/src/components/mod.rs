//! UI Components for the ViralAffiliateAI application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Brand, help links and logout
//! - [`Hero`] / [`HowItWorks`] - Landing copy
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`LoginForm`] - Password login
//! - [`UploadSection`] - Video upload with drag & drop
//! - [`ProcessingProgress`] - Step tracker while the backend works
//! - [`ResultsPanel`] - Tabbed generated content
//!   - `DescriptionTab`, `SubtitlesTab`, `KeywordsTab`

mod header;
mod hero;
mod login;
mod upload;
mod progress;
mod results;
mod description_tab;
mod subtitles_tab;
mod keywords_tab;
mod footer;

pub use header::*;
pub use hero::*;
pub use login::*;
pub use upload::*;
pub use progress::*;
pub use results::*;
pub use description_tab::*;
pub use subtitles_tab::*;
pub use keywords_tab::*;
pub use footer::*;
