//! Application configuration.
//!
//! Centralized configuration for the AskPDF frontend.
//! Values are compile-time constants; the backend URL can be overridden
//! at build time with the `ASKPDF_BACKEND_URL` environment variable.

/// Backend API base URL.
///
/// Hosts the auth service, the OAuth entry points and the PDF ingestion
/// endpoint.
pub const BACKEND_URL: &str = match option_env!("ASKPDF_BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Application name shown in the navigation bar and page title.
pub const APP_NAME: &str = "PlacePrep";

// =============================================================================
// Endpoints
// =============================================================================

/// Sign-up endpoint path.
pub const SIGNUP_PATH: &str = "/auth/signup";

/// Log-in endpoint path.
pub const LOGIN_PATH: &str = "/auth/login";

/// PDF ingestion endpoint path (multipart, field `file`).
pub const INGEST_PATH: &str = "/askPDF/uploadPDF";

/// Google OAuth redirect entry point.
pub const GOOGLE_AUTH_PATH: &str = "/auth/google";

/// Github OAuth redirect entry point.
pub const GITHUB_AUTH_PATH: &str = "/auth/github";

/// Build an absolute backend URL from an endpoint path.
pub fn backend_url(path: &str) -> String {
    format!("{}{}", BACKEND_URL, path)
}

// =============================================================================
// Cookies
// =============================================================================

/// Cookie holding the opaque session token.
pub const TOKEN_COOKIE: &str = "token";

/// Cookie holding the JSON-encoded user profile.
pub const USER_COOKIE: &str = "user";

// =============================================================================
// Upload
// =============================================================================

/// Maximum file size for upload (in bytes).
///
/// 4 MB limit.
pub const MAX_FILE_SIZE: u64 = 4 * 1024 * 1024;

/// MIME type accepted by the dropzone.
pub const ACCEPTED_MIME: &str = "application/pdf";

/// Interval between two simulated progress ticks.
pub const PROGRESS_TICK_MS: u32 = 50;

/// Progress added on every tick.
pub const PROGRESS_STEP: u8 = 10;

/// Once progress reaches this value the ticker stops.
pub const PROGRESS_HOLD_AT: u8 = 95;

/// Pause after the ingest request settles, so the bar visibly completes.
pub const FINALIZE_DELAY_MS: u32 = 1500;

// =============================================================================
// Notifications
// =============================================================================

/// How long success and error toasts stay on screen.
pub const TOAST_LIFETIME_MS: u32 = 4000;

/// Maximum toasts kept in memory.
pub const MAX_TOASTS: usize = 5;

/// Message shown when a failed request carries no server message.
pub const GENERIC_FAILURE: &str = "An error occurred, please try again";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_url_joins_path() {
        assert_eq!(
            backend_url(INGEST_PATH),
            format!("{}/askPDF/uploadPDF", BACKEND_URL)
        );
    }

    #[test]
    fn test_progress_constants_are_consistent() {
        assert!(PROGRESS_HOLD_AT <= 100);
        assert!(PROGRESS_STEP > 0);
    }
}
