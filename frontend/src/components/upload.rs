//! PDF upload dialog with drag & drop support.
//!
//! `UploadButton` owns the modal, `UploadDropzone` owns one
//! [`UploadSession`] and hands files to [`UploadFlow`].
//!
//! The progress bar is cosmetic: it is driven by a timer while the request
//! is outstanding, not by bytes sent.

use leptos::*;
use web_sys::{File, HtmlInputElement};

use crate::components::ProgressBar;
use crate::services::{file_info, BrowserTimers, HttpIngestor, UploadFlow};
use crate::state::{UploadDialog, UploadSession};
use crate::{AppState, ACCEPTED_MIME};

#[component]
pub fn UploadButton() -> impl IntoView {
    let dialog = create_rw_signal(UploadDialog::default());
    let close = move |_: ev::MouseEvent| dialog.update(|d| d.request_change(false));

    view! {
        <button class="upload-button" on:click=move |_| dialog.update(UploadDialog::trigger)>
            "Upload PDF"
        </button>

        <Show when=move || dialog.with(UploadDialog::is_open) fallback=|| view! {}>
            <div class="dialog-overlay" on:click=close>
                <div class="dialog-content" on:click=|ev| ev.stop_propagation()>
                    <button class="dialog-close" aria-label="Close" on:click=close>"×"</button>
                    <UploadDropzone/>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn UploadDropzone() -> impl IntoView {
    let state = expect_context::<AppState>();
    let session = create_rw_signal(UploadSession::default());
    let flow = store_value(UploadFlow::new(
        HttpIngestor::default(),
        BrowserTimers,
        state.toasts,
        session,
    ));
    let (dragging, set_dragging) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let start_upload = move |file: File| {
        let flow = flow.get_value();
        let info = file_info(&file);
        log::info!("📄 Selected {} ({} bytes)", info.name, info.size);

        spawn_local(async move {
            // Failures were already shown as toasts.
            let _ = flow.upload(file, info).await;
        });
    };

    let on_file_change = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            start_upload(file);
        }
        // Allow picking the same file again.
        input.set_value("");
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
        if let Some(file) = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0))
        {
            start_upload(file);
        }
    };

    let trigger_file_input = move |_| {
        if session.with_untracked(UploadSession::is_uploading) {
            return;
        }
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let is_uploading = move || session.with(UploadSession::is_uploading);
    let selected_name = move || session.with(|s| s.file().map(|f| f.name.clone()));

    view! {
        <div
            class="dropzone"
            class:dragging=move || dragging.get()
            on:click=trigger_file_input
            on:dragover=move |ev: ev::DragEvent| {
                ev.prevent_default();
                set_dragging.set(true);
            }
            on:dragleave=move |_| set_dragging.set(false)
            on:drop=on_drop
        >
            <div class="upload-icon">"☁️"</div>
            <p class="upload-text">
                <span class="strong">"Click to upload"</span>
                " or drag and drop"
            </p>
            <p class="upload-hint">"PDF (up to 4MB)"</p>

            <Show when=move || selected_name().is_some() fallback=|| view! {}>
                <div class="file-chip">
                    <span class="file-icon">"📄"</span>
                    <span class="file-name">{move || selected_name().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show when=is_uploading fallback=|| view! {}>
                <div class="upload-progress">
                    <ProgressBar value=Signal::derive(move || session.with(UploadSession::progress))/>
                </div>
            </Show>

            <input
                type="file"
                accept=ACCEPTED_MIME
                style="display:none"
                node_ref=file_input
                on:click=|ev| ev.stop_propagation()
                on:change=on_file_change
            />
        </div>
    }
}
