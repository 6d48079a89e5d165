use leptos::*;

/// Horizontal progress bar, `value` in percent.
#[component]
pub fn ProgressBar(#[prop(into)] value: Signal<u8>) -> impl IntoView {
    view! {
        <div class="progress-bar" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=move || value.get()>
            <div class="progress-fill" style=move || format!("width: {}%;", value.get())></div>
        </div>
    }
}
