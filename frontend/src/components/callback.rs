//! Landing route the backend redirects to after OAuth.

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

use crate::services::{confirm_oauth_return, BrowserCookies};
use crate::AppState;

#[component]
pub fn AuthCallback() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    create_effect(move |_| {
        let target = match confirm_oauth_return(&BrowserCookies, &state.auth, &state.toasts) {
            Ok(_) => "/",
            Err(_) => "/login",
        };
        navigate(target, NavigateOptions::default());
    });

    view! {
        <div class="auth-callback">
            <p class="hint">"Completing sign in..."</p>
        </div>
    }
}
