//! Cookie storage backed by `document.cookie`.
//!
//! Values are URI-component encoded, which keeps them readable by
//! `js-cookie` on the same origin.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::types::{AppError, AppResult};

/// Read/write access to cookies.
pub trait CookieJar {
    /// Decoded value of `name`, if set.
    fn get(&self, name: &str) -> Option<String>;

    /// Set `name` for the whole site.
    fn set(&self, name: &str, value: &str) -> AppResult<()>;
}

/// The browser's cookie store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

impl BrowserCookies {
    fn document() -> AppResult<HtmlDocument> {
        web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| AppError::Browser("no document".to_string()))?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| AppError::Browser("document is not an HTML document".to_string()))
    }
}

impl CookieJar for BrowserCookies {
    fn get(&self, name: &str) -> Option<String> {
        let raw = Self::document().ok()?.cookie().ok()?;
        let value = parse_cookie(&raw, name)?;
        js_sys::decode_uri_component(value).ok().map(String::from)
    }

    fn set(&self, name: &str, value: &str) -> AppResult<()> {
        let encoded = String::from(js_sys::encode_uri_component(value));
        Self::document()?
            .set_cookie(&format!("{}={}; path=/", name, encoded))
            .map_err(|e| AppError::Browser(format!("Failed to set cookie {}: {:?}", name, e)))
    }
}

/// Find the raw (still encoded) value of `name` in a `document.cookie` string.
pub fn parse_cookie<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key.trim() != name {
            return None;
        }
        let value = value.trim();
        Some(
            value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value),
        )
    })
}
