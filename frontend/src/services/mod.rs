//! Backend and browser services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`auth`] - Email/password sign-up and log-in against the auth backend
//! - [`oauth`] - Google/Github redirects and the landing-page confirmation
//! - [`upload`] - PDF upload to the ingestion backend
//! - [`cookies`] - `document.cookie` access
//! - [`notify`] - Toast notifications
//! - [`timers`] - Interval/timeout glue for the progress simulation
//!
//! Each browser dependency sits behind a small trait so the flows can be
//! exercised natively in tests.

pub mod auth;
pub mod cookies;
pub mod notify;
pub mod oauth;
pub mod timers;
pub mod upload;

pub use auth::*;
pub use cookies::*;
pub use notify::*;
pub use oauth::*;
pub use timers::*;
pub use upload::*;
