//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Toast Types** - User-visible notifications
//! - **API Types** - Auth request/response structures
//! - **Upload Types** - Selected file metadata
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GENERIC_FAILURE;

// =============================================================================
// Toast Types
// =============================================================================

/// Identifier handed out for every toast, used to dismiss it later.
pub type ToastId = u64;

/// Toast kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Request in progress, stays until dismissed
    Loading,
    /// Completed action
    Success,
    /// Failed action
    Error,
}

impl ToastKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Loading => "toast toast-loading",
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }

    /// Get icon prefix for display.
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Loading => "⏳",
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
        }
    }

    /// Loading toasts are dismissed by their owner, the others expire.
    pub fn expires(&self) -> bool {
        !matches!(self, ToastKind::Loading)
    }
}

/// A single notification on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
}

// =============================================================================
// API Types
// =============================================================================

/// Email/password pair sent to the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Reject the pair if either field is blank.
    ///
    /// The email is trimmed; the password is sent exactly as entered.
    pub fn validated(email: &str, password: &str) -> AppResult<Self> {
        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            return Err(AppError::MissingFields);
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

/// Response body of the sign-up and log-in endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub token: Option<String>,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// Upload Types
// =============================================================================

/// Metadata of the file picked in the dropzone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations. The `Display` output is
/// what the user sees in the error toast.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    /// Email or password left empty.
    #[error("Please fill in all fields")]
    MissingFields,

    /// Server answered with `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// Network failure or non-2xx response, with the server message if any.
    #[error("{}", server_message_or_fallback(.0.as_deref()))]
    Transport(Option<String>),

    /// A request from the same form is still outstanding.
    #[error("A request is already in progress")]
    Busy,

    /// Dropped file is not an acceptable PDF.
    #[error("{0}")]
    InvalidFile(String),

    /// Ingestion endpoint failed.
    #[error("Upload failed: {0}")]
    Ingest(String),

    /// Same-tab navigation could not be started.
    #[error("{0}")]
    Navigation(String),

    /// Browser API unavailable or threw.
    #[error("Browser error: {0}")]
    Browser(String),
}

/// A blank server message counts as no message.
fn server_message_or_fallback(message: Option<&str>) -> &str {
    message
        .filter(|message| !message.trim().is_empty())
        .unwrap_or(GENERIC_FAILURE)
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
