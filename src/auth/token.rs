//! Credential decoding — splits a compact three-segment token and parses the
//! claims payload.
//!
//! ERROR HANDLING
//! ==============
//! `decode` returns a [`DecodeError`] for every malformed input, including the
//! empty string. Callers treat a failed decode as "no usable session", which is
//! an ordinary outcome at startup, so nothing here panics.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

/// Claims decoded from a credential's payload segment.
///
/// `roles` defaults to empty when the issuer omits it; an empty list is a
/// valid low-privilege session, not an error. Issuer fields this client does
/// not model are kept verbatim in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Standard subject claim, usually the account email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Role strings as issued, e.g. `"ROLE_ADMIN"`. Order matters: the first
    /// entry decides the effective role.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Passthrough of any additional issuer-supplied fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Why a credential string could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("credential must be three non-empty dot-separated segments")]
    Malformed,
    #[error("payload segment is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not a claims object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode an opaque credential into [`Claims`].
///
/// The string must split on `'.'` into exactly three non-empty segments; the
/// middle segment must be base64url-encoded JSON. No signature verification is
/// performed — this is a display/UX decoder only.
///
/// # Errors
///
/// Returns [`DecodeError`] on any malformed input. Deterministic: the same
/// input always yields the same result.
pub fn decode(credential: &str) -> Result<Claims, DecodeError> {
    let mut segments = credential.split('.');
    let (Some(header), Some(payload), Some(signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(DecodeError::Malformed);
    };
    if header.is_empty() || payload.is_empty() || signature.is_empty() {
        return Err(DecodeError::Malformed);
    }

    let bytes = decode_base64url(payload)?;
    let claims = serde_json::from_slice::<Claims>(&bytes)?;
    Ok(claims)
}

/// Issuers emit unpadded base64url, but tolerate padded input.
fn decode_base64url(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| URL_SAFE.decode(segment))
}
