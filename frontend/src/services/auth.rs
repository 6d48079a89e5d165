//! Email/password sign-up and log-in.
//!
//! # Ordering
//!
//! For one submission the user sees, in order: the loading toast, the
//! outcome toast (success, server rejection or transport failure), then the
//! loading toast is dismissed. Validation failures show a toast and never
//! reach the network.
//!
//! A second submission while one is outstanding is ignored.

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;

use crate::config::{backend_url, LOGIN_PATH, SIGNUP_PATH, TOKEN_COOKIE};
use crate::services::{CookieJar, Notifier};
use crate::state::{AuthState, StateCell};
use crate::types::{AppError, AppResult, AuthResponse, Credentials, ErrorBody};

/// Which auth form is being submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignUp,
    LogIn,
}

impl AuthMode {
    pub fn endpoint(&self) -> String {
        match self {
            AuthMode::SignUp => backend_url(SIGNUP_PATH),
            AuthMode::LogIn => backend_url(LOGIN_PATH),
        }
    }

    pub fn pending_message(&self) -> &'static str {
        match self {
            AuthMode::SignUp => "Signing up...",
            AuthMode::LogIn => "Logging in...",
        }
    }

    /// Shown when a successful response carries no message.
    pub fn success_message(&self) -> &'static str {
        match self {
            AuthMode::SignUp => "Signed up successfully",
            AuthMode::LogIn => "Logged in successfully",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::SignUp => "Sign Up",
            AuthMode::LogIn => "Log In",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            AuthMode::SignUp => "Enter your details to create an account.",
            AuthMode::LogIn => "Enter your details to access your account.",
        }
    }

    /// Prompt, label and route of the link to the other form.
    pub fn alternate(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            AuthMode::SignUp => ("Already have an account?", "Login", "/login"),
            AuthMode::LogIn => ("Don't have an account?", "Sign up", "/signup"),
        }
    }
}

// =============================================================================
// API
// =============================================================================

/// Remote auth service.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// POST the credentials. `Err` is always [`AppError::Transport`].
    async fn authenticate(&self, mode: AuthMode, credentials: &Credentials) -> AppResult<AuthResponse>;
}

/// Auth service over HTTP.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

impl AuthApi for HttpAuthApi {
    async fn authenticate(&self, mode: AuthMode, credentials: &Credentials) -> AppResult<AuthResponse> {
        let url = mode.endpoint();
        log::info!("🔐 POST {}", url);

        let response = Request::post(&url)
            .json(credentials)
            .map_err(|e| {
                log::error!("Failed to build auth request: {}", e);
                AppError::Transport(None)
            })?
            .send()
            .await
            .map_err(|e| {
                log::error!("Auth request failed: {}", e);
                AppError::Transport(None)
            })?;

        if !response.ok() {
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            log::error!("Auth server error ({}): {:?}", response.status(), body.message);
            let message = body.message.filter(|m| !m.trim().is_empty());
            return Err(AppError::Transport(message));
        }

        response.json::<AuthResponse>().await.map_err(|e| {
            log::error!("Failed to parse auth response: {}", e);
            AppError::Transport(None)
        })
    }
}

// =============================================================================
// Flow
// =============================================================================

/// Clears the in-flight flag even if the submission future is dropped.
struct PendingGuard(Rc<Cell<bool>>);

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Form controller shared by the sign-up and log-in pages.
#[derive(Clone)]
pub struct AuthFlow<A, C, N, S> {
    api: A,
    cookies: C,
    notifier: N,
    auth: S,
    in_flight: Rc<Cell<bool>>,
}

impl<A, C, N, S> AuthFlow<A, C, N, S>
where
    A: AuthApi,
    C: CookieJar,
    N: Notifier,
    S: StateCell<AuthState>,
{
    pub fn new(api: A, cookies: C, notifier: N, auth: S) -> Self {
        Self {
            api,
            cookies,
            notifier,
            auth,
            in_flight: Rc::new(Cell::new(false)),
        }
    }

    /// Whether a submission is outstanding.
    pub fn is_pending(&self) -> bool {
        self.in_flight.get()
    }

    /// Validate, call the auth endpoint and apply the outcome.
    ///
    /// Returns the new auth state on success. [`AppError::Busy`] means the
    /// call was ignored because another one is outstanding.
    pub async fn submit(&self, mode: AuthMode, email: &str, password: &str) -> AppResult<AuthState> {
        if self.in_flight.get() {
            log::warn!("Ignoring auth submission, one is already pending");
            return Err(AppError::Busy);
        }

        let credentials = match Credentials::validated(email, password) {
            Ok(credentials) => credentials,
            Err(e) => {
                self.notifier.error(&e.to_string());
                return Err(e);
            }
        };

        self.in_flight.set(true);
        let _pending = PendingGuard(Rc::clone(&self.in_flight));
        let toast = self.notifier.loading(mode.pending_message());

        let outcome = match self.api.authenticate(mode, &credentials).await {
            Ok(response) if response.success => Ok(self.apply(mode, response)),
            Ok(response) => Err(AppError::Rejected(response.message)),
            Err(e) => Err(e),
        };

        if let Err(e) = &outcome {
            self.notifier.error(&e.to_string());
        }
        self.notifier.dismiss(toast);

        outcome
    }

    fn apply(&self, mode: AuthMode, response: AuthResponse) -> AuthState {
        if let Some(token) = &response.token {
            if let Err(e) = self.cookies.set(TOKEN_COOKIE, token) {
                log::error!("Could not persist session token: {}", e);
            }
        }

        let state = AuthState::signed_in(response.token);
        self.auth.replace(state.clone());
        if response.message.trim().is_empty() {
            self.notifier.success(mode.success_message());
        } else {
            self.notifier.success(&response.message);
        }
        state
    }
}
