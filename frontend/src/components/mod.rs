//! UI Components for the AskPDF application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`NavBar`] - Navigation bar with session status
//! - [`Hero`] - Home page title and upload entry point
//! - [`Footer`] - Page footer
//! - [`Toaster`] - Notification overlay
//!
//! # Feature Components
//! - [`SignupForm`] / [`LoginForm`] - Email/password and OAuth sign-in
//! - [`AuthCallback`] - Landing page after an OAuth redirect
//! - [`UploadButton`] - Upload dialog hosting [`UploadDropzone`]
//! - [`ProgressBar`] - Upload progress indicator

mod auth_form;
mod callback;
mod footer;
mod hero;
mod navbar;
mod progress;
mod toaster;
mod upload;

pub use auth_form::*;
pub use callback::*;
pub use footer::*;
pub use hero::*;
pub use navbar::*;
pub use progress::*;
pub use toaster::*;
pub use upload::*;
