//! Backend and browser services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`http`] - Shared response handling for backend calls
//! - [`auth`] - Session status, login and logout
//! - [`upload`] - Multipart video upload
//! - [`content`] - Content generation and single-field regeneration
//! - [`browser`] - Clipboard writes and file downloads
//!
//! Every backend request carries the session cookie
//! (`RequestCredentials::Include`).

pub mod http;
pub mod auth;
pub mod upload;
pub mod content;
pub mod browser;

pub use auth::*;
pub use upload::*;
pub use content::*;
pub use browser::*;
