use leptos::*;
use leptos_router::A;

use crate::{AppState, APP_NAME};

#[component]
pub fn NavBar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let auth = state.auth;
    let user = state.user;

    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">{APP_NAME}</A>
            </div>
            <div class="header-right">
                <Show
                    when=move || auth.with(|a| a.is_authenticated)
                    fallback=|| view! {
                        <A href="/login" class="nav-link">"Login"</A>
                        <A href="/signup" class="nav-link">"Sign Up"</A>
                    }
                >
                    <div class="session-status connected">
                        <span class="session-dot connected"></span>
                        <span>
                            {move || user.with(|u| u.email.clone()).unwrap_or_else(|| "Signed in".to_string())}
                        </span>
                        <Show when=move || user.with(|u| u.is_subscribed) fallback=|| view! {}>
                            <span class="badge">"PRO"</span>
                        </Show>
                    </div>
                </Show>
            </div>
        </header>
    }
}
