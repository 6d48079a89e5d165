//! OAuth sign-in through backend redirects.
//!
//! Starting OAuth is a same-tab navigation to the backend, which unloads the
//! page. Completion is confirmed on the `/auth/callback` landing route the
//! backend redirects back to, once it has set the `token` cookie.

use crate::config::{backend_url, GITHUB_AUTH_PATH, GOOGLE_AUTH_PATH, TOKEN_COOKIE};
use crate::services::{CookieJar, Notifier};
use crate::state::{AuthState, StateCell};
use crate::types::{AppError, AppResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Github,
}

impl OAuthProvider {
    pub const ALL: [OAuthProvider; 2] = [OAuthProvider::Google, OAuthProvider::Github];

    pub fn label(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "Google",
            OAuthProvider::Github => "Github",
        }
    }

    pub fn url(&self) -> String {
        match self {
            OAuthProvider::Google => backend_url(GOOGLE_AUTH_PATH),
            OAuthProvider::Github => backend_url(GITHUB_AUTH_PATH),
        }
    }
}

/// Same-tab navigation.
pub trait Navigator {
    fn assign(&self, url: &str) -> AppResult<()>;
}

/// `window.location` navigation.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn assign(&self, url: &str) -> AppResult<()> {
        web_sys::window()
            .ok_or_else(|| AppError::Browser("no window".to_string()))?
            .location()
            .set_href(url)
            .map_err(|e| AppError::Navigation(format!("{:?}", e)))
    }
}

/// Navigate to the provider's backend entry point.
pub fn begin_oauth(provider: OAuthProvider, navigator: &impl Navigator, notifier: &impl Notifier) -> AppResult<()> {
    let toast = notifier.loading(&format!("Signing up with {}...", provider.label()));
    log::info!("🔑 Redirecting to {} sign-in", provider.label());

    let result = navigator.assign(&provider.url());
    if let Err(e) = &result {
        log::error!("{} redirect failed: {}", provider.label(), e);
        notifier.error(&format!("Failed to login with {}", provider.label()));
    }
    notifier.dismiss(toast);

    result
}

/// Confirm the session established by the backend after an OAuth redirect.
pub fn confirm_oauth_return(
    cookies: &impl CookieJar,
    auth: &impl StateCell<AuthState>,
    notifier: &impl Notifier,
) -> AppResult<AuthState> {
    match cookies.get(TOKEN_COOKIE).filter(|token| !token.is_empty()) {
        Some(token) => {
            let state = AuthState::signed_in(Some(token));
            auth.replace(state.clone());
            notifier.success("Logged in successfully");
            Ok(state)
        }
        None => {
            let e = AppError::Navigation("Sign in did not complete".to_string());
            notifier.error(&e.to_string());
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::testing::{MemoryCookies, Notice, RecordingNotifier};

    struct FakeNavigator {
        fail: bool,
        visited: RefCell<Vec<String>>,
    }

    impl FakeNavigator {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                visited: RefCell::new(Vec::new()),
            }
        }
    }

    impl Navigator for FakeNavigator {
        fn assign(&self, url: &str) -> AppResult<()> {
            if self.fail {
                return Err(AppError::Navigation("blocked".to_string()));
            }
            self.visited.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_begin_navigates_to_provider() {
        let navigator = FakeNavigator::new(false);
        let notifier = RecordingNotifier::default();

        begin_oauth(OAuthProvider::Github, &navigator, &notifier).unwrap();

        assert_eq!(*navigator.visited.borrow(), vec![backend_url(GITHUB_AUTH_PATH)]);
        assert_eq!(
            notifier.notices(),
            vec![
                Notice::Loading(1, "Signing up with Github...".to_string()),
                Notice::Dismiss(1),
            ]
        );
    }

    #[test]
    fn test_begin_reports_navigation_failure() {
        let notifier = RecordingNotifier::default();

        let result = begin_oauth(OAuthProvider::Google, &FakeNavigator::new(true), &notifier);

        assert!(result.is_err());
        assert_eq!(
            notifier.notices(),
            vec![
                Notice::Loading(1, "Signing up with Google...".to_string()),
                Notice::Error("Failed to login with Google".to_string()),
                Notice::Dismiss(1),
            ]
        );
    }

    #[test]
    fn test_return_with_token_signs_in() {
        let cookies = MemoryCookies::default().with(TOKEN_COOKIE, "oauth-token");
        let auth = Rc::new(RefCell::new(AuthState::default()));
        let notifier = RecordingNotifier::default();

        confirm_oauth_return(&cookies, &auth, &notifier).unwrap();

        assert_eq!(*auth.borrow(), AuthState::signed_in(Some("oauth-token".to_string())));
        assert_eq!(notifier.notices(), vec![Notice::Success("Logged in successfully".to_string())]);
    }

    #[test]
    fn test_return_without_token_leaves_state() {
        let auth = Rc::new(RefCell::new(AuthState::default()));
        let notifier = RecordingNotifier::default();

        assert!(confirm_oauth_return(&MemoryCookies::default(), &auth, &notifier).is_err());
        assert_eq!(*auth.borrow(), AuthState::default());
        assert_eq!(notifier.notices(), vec![Notice::Error("Sign in did not complete".to_string())]);
    }
}
