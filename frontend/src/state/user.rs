//! User profile state, seeded once from the `user` cookie.
//!
//! The cookie holds a JSON object `{id, email, isSubscribed}`. A missing or
//! unparsable cookie yields the anonymous default. Nothing in this crate
//! writes the cookie back.

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::USER_COOKIE;
use crate::services::CookieJar;

/// Signed-in user's profile fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserState {
    #[serde(deserialize_with = "string_or_number")]
    pub id: Option<String>,
    pub email: Option<String>,
    pub is_subscribed: bool,
}

impl UserState {
    /// Parse a raw cookie value, falling back to the default record.
    pub fn from_cookie_value(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        match serde_json::from_str::<Option<UserState>>(raw) {
            Ok(user) => user.unwrap_or_default(),
            Err(e) => {
                log::warn!("Ignoring malformed user cookie: {}", e);
                Self::default()
            }
        }
    }

    /// Read the `user` cookie.
    pub fn from_cookies(cookies: &impl CookieJar) -> Self {
        Self::from_cookie_value(cookies.get(USER_COOKIE).as_deref())
    }
}

/// Backends disagree on whether ids are strings or numbers; accept both.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Id>::deserialize(deserializer)?.map(|id| match id {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    }))
}
