//! Toast notifications overlay.
//!
//! Renders the queue held by [`Toasts`](crate::services::Toasts); success
//! and error toasts expire on their own, loading toasts are dismissed by
//! the flow that opened them.

use leptos::*;

use crate::services::Notifier;
use crate::AppState;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<AppState>().toasts;

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.items()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() on:click=move |_| toasts.dismiss(id)>
                            <span class="toast-icon">{toast.kind.icon()}</span>
                            <span class="toast-message">{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
