//! Session flags carried in cookies
//!
//! The "hint already shown" marker is session-scoped (no expiry) and lasts
//! until the browser is closed. The debug override travels in the URL.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use crodash_app::SessionFlags;

pub const HINT_COOKIE: &str = "crodash_hint";

const HINT_SEEN: &str = "crodash_hint=seen; Path=/; HttpOnly; SameSite=Lax";

/// Read the session flags from the request's `Cookie` headers
///
/// Unknown cookies and unexpected values are ignored.
pub fn read_flags(headers: &HeaderMap) -> SessionFlags {
    let mut flags = SessionFlags::default();
    for value in headers.get_all(COOKIE) {
        let Ok(value) = value.to_str() else {
            continue;
        };
        for pair in value.split(';') {
            let Some((name, value)) = pair.trim().split_once('=') else {
                continue;
            };
            if (name, value) == (HINT_COOKIE, "seen") {
                flags.hint_seen = true;
            }
        }
    }
    flags
}

/// `Set-Cookie` value that persists `flags`, if any
pub fn cookie_value(flags: SessionFlags) -> Option<HeaderValue> {
    flags
        .hint_seen
        .then(|| HeaderValue::from_static(HINT_SEEN))
}

/// Append the `Set-Cookie` header for `flags`
pub fn write_flags(headers: &mut HeaderMap, flags: SessionFlags) {
    if let Some(value) = cookie_value(flags) {
        headers.append(SET_COOKIE, value);
    }
}
