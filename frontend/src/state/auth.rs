//! Auth-session state for the current browser user.
//!
//! Written only by the auth flow after a successful sign-up/log-in, or by
//! the OAuth landing page once the backend has set the session cookie.

use crate::config::TOKEN_COOKIE;
use crate::services::CookieJar;

/// Whether the current session is authenticated, and its token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub token: Option<String>,
}

impl AuthState {
    /// State after a successful auth response.
    ///
    /// A response without a token still counts as authenticated.
    pub fn signed_in(token: Option<String>) -> Self {
        Self {
            is_authenticated: true,
            token,
        }
    }

    /// Rehydrate from an existing `token` cookie, if any.
    pub fn from_cookies(cookies: &impl CookieJar) -> Self {
        match cookies.get(TOKEN_COOKIE) {
            Some(token) if !token.is_empty() => Self::signed_in(Some(token)),
            _ => Self::default(),
        }
    }
}
