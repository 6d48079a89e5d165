//! Sign-up and log-in pages.
//!
//! Both forms share [`AuthFlow`]; the page also offers Google/Github
//! sign-in through backend redirects.

use leptos::*;
use leptos_router::A;

use crate::services::{begin_oauth, AuthFlow, AuthMode, BrowserCookies, BrowserNavigator, HttpAuthApi, OAuthProvider};
use crate::{AppState, APP_NAME};

#[component]
pub fn SignupForm() -> impl IntoView {
    view! { <AuthPage mode=AuthMode::SignUp/> }
}

#[component]
pub fn LoginForm() -> impl IntoView {
    view! { <AuthPage mode=AuthMode::LogIn/> }
}

#[component]
fn AuthPage(mode: AuthMode) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-welcome">
                <h1>"Welcome to " {APP_NAME}</h1>
                <p class="subtitle">"Sign up or log in to get started"</p>
                <OAuthButtons/>
            </div>
            <div class="auth-panel">
                <AuthForm mode=mode/>
            </div>
        </div>
    }
}

#[component]
fn AuthForm(mode: AuthMode) -> impl IntoView {
    let state = expect_context::<AppState>();
    let flow = store_value(AuthFlow::new(HttpAuthApi, BrowserCookies, state.toasts, state.auth));

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (show_password, set_show_password) = create_signal(false);
    let (pending, set_pending) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let flow = flow.get_value();
        let email = email.get_untracked();
        let password = password.get_untracked();

        spawn_local(async move {
            set_pending.set(true);
            // Errors were already shown as toasts.
            let _ = flow.submit(mode, &email, &password).await;
            set_pending.set(flow.is_pending());
        });
    };

    let (prompt, link_label, link_href) = mode.alternate();

    view! {
        <div class="auth-card">
            <div class="auth-card-header">
                <h2>{mode.title()}</h2>
                <p class="hint">{mode.subtitle()}</p>
            </div>
            <form class="auth-form" on:submit=on_submit>
                <label for="email">"Email"</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    placeholder="Enter your email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <label for="password">"Password"</label>
                <div class="password-field">
                    <input
                        id="password"
                        name="password"
                        type=move || if show_password.get() { "text" } else { "password" }
                        placeholder="Enter your password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="password-toggle"
                        on:click=move |_| set_show_password.update(|shown| *shown = !*shown)
                    >
                        {move || if show_password.get() { "🙈" } else { "👁" }}
                    </button>
                </div>
                <button type="submit" class="submit-button" disabled=move || pending.get()>
                    {mode.title()}
                </button>
            </form>
            <div class="auth-switch">
                {prompt}
                <A href=link_href class="auth-switch-link">{link_label}</A>
            </div>
        </div>
    }
}

#[component]
fn OAuthButtons() -> impl IntoView {
    let toasts = expect_context::<AppState>().toasts;

    view! {
        <div class="oauth-buttons">
            {OAuthProvider::ALL
                .into_iter()
                .map(move |provider| {
                    view! {
                        <button
                            type="button"
                            class="oauth-button"
                            on:click=move |_| {
                                // Failures are reported by `begin_oauth`.
                                let _ = begin_oauth(provider, &BrowserNavigator, &toasts);
                            }
                        >
                            "Signup with " {provider.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
