//! Hero section component

use leptos::*;

use crate::UploadButton;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Chat with your PDF"</h1>
            <p class="subtitle">
                "Upload a document and ask it questions. "
                "PDF files up to 4 MB are supported."
            </p>
            <UploadButton/>
        </div>
    }
}
