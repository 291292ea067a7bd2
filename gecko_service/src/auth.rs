//! API key extraction from HTTP Basic authentication.
//!
//! The dashboard sends the API key as the user name of a Basic
//! credential, but clients are inconsistent about the exact format. The
//! parse here is best effort: anything malformed yields an empty key and
//! never an error. Whether an empty key is acceptable is up to the
//! authorizer.

use base64::{Engine, engine::general_purpose::STANDARD};

/// Scheme prefix, matched ignoring case. Note the trailing space.
const BASIC_SCHEME: &str = "basic ";

/// Returns the API key carried by an `Authorization` header value, or an
/// empty string when there is none.
#[must_use]
pub fn api_key_from_authorization(header: &str) -> String {
    let Some(encoded) = strip_basic_scheme(header) else {
        tracing::debug!("authorization header is not basic, no api key");
        return String::new();
    };

    decode_user_name(encoded).unwrap_or_else(|| {
        tracing::warn!("ignoring malformed basic authorization credential");
        String::new()
    })
}

fn strip_basic_scheme(header: &str) -> Option<&str> {
    let scheme = header.get(..BASIC_SCHEME.len())?;
    if !scheme.eq_ignore_ascii_case(BASIC_SCHEME) {
        return None;
    }
    header.get(BASIC_SCHEME.len()..)
}

fn decode_user_name(encoded: &str) -> Option<String> {
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let credential = String::from_utf8(decoded).ok()?;

    let user_name = credential
        .split_once(':')
        .map_or(credential.as_str(), |(user, _)| user);

    Some(user_name.to_string())
}
