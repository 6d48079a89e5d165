//! AskPDF - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for signing in and uploading PDF documents to
//! the "chat with your PDF" backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  NavBar (session status)                                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /               Hero + UploadButton ─▶ UploadDropzone   │
//! │  ├── /signup, /login AuthForm + OAuth buttons                │
//! │  └── /auth/callback  OAuth landing confirmation              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Toaster · Footer                                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Toast, Credentials, AppError, etc.)
//! - [`state`] - Auth, user and upload state, provided through context
//! - [`components`] - UI components
//! - [`services`] - Backend and browser communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod state;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Toasts
    Toast, ToastId, ToastKind,
    // API
    AuthResponse, Credentials, ErrorBody,
    // Upload
    FileInfo,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{AppState, AuthState, UserState};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the application. Called from the WASM binary.
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 AskPDF - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    AppState::bootstrap(&services::BrowserCookies).provide();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <NavBar/>
            <main class="container">
                <Routes>
                    <Route path="/" view=Hero/>
                    <Route path="/signup" view=SignupForm/>
                    <Route path="/login" view=LoginForm/>
                    <Route path="/auth/callback" view=AuthCallback/>
                </Routes>
            </main>
            <Toaster/>
            <Footer/>
        </Router>
    }
}
