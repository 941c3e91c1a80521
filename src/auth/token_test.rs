use super::*;

fn token_with_payload(payload: &serde_json::Value) -> String {
    let encoded = URL_SAFE_NO_PAD.encode(serde_json::to_vec(payload).expect("payload json"));
    format!("hdr.{encoded}.sig")
}

// =============================================================
// Malformed inputs
// =============================================================

#[test]
fn decode_rejects_empty_string() {
    assert!(matches!(decode(""), Err(DecodeError::Malformed)));
}

#[test]
fn decode_rejects_wrong_segment_counts() {
    for bad in ["abc", "a.b", "a.b.c.d", "no-dots-at-all"] {
        assert!(matches!(decode(bad), Err(DecodeError::Malformed)), "input: {bad}");
    }
}

#[test]
fn decode_rejects_empty_segments() {
    for bad in [".b.c", "a..c", "a.b.", "..", "a.b.c."] {
        assert!(matches!(decode(bad), Err(DecodeError::Malformed)), "input: {bad}");
    }
}

#[test]
fn decode_rejects_non_base64_payload() {
    assert!(matches!(decode("hdr.!!not-base64!!.sig"), Err(DecodeError::Base64(_))));
}

#[test]
fn decode_rejects_non_json_payload() {
    let garbage = URL_SAFE_NO_PAD.encode(b"plain text");
    let token = format!("hdr.{garbage}.sig");
    assert!(matches!(decode(&token), Err(DecodeError::Json(_))));
}

#[test]
fn decode_rejects_json_that_is_not_an_object() {
    let array = URL_SAFE_NO_PAD.encode(b"[1,2,3]");
    let token = format!("hdr.{array}.sig");
    assert!(matches!(decode(&token), Err(DecodeError::Json(_))));
}

// =============================================================
// Well-formed inputs
// =============================================================

#[test]
fn decode_reads_subject_and_roles() {
    let token = token_with_payload(&serde_json::json!({
        "sub": "a@b.com",
        "roles": ["ROLE_USER"],
    }));
    let claims = decode(&token).expect("valid token");
    assert_eq!(claims.sub.as_deref(), Some("a@b.com"));
    assert_eq!(claims.roles, vec!["ROLE_USER"]);
}

#[test]
fn decode_defaults_missing_roles_to_empty() {
    let token = token_with_payload(&serde_json::json!({ "sub": "a@b.com" }));
    let claims = decode(&token).expect("valid token");
    assert!(claims.roles.is_empty());
}

#[test]
fn decode_allows_missing_subject() {
    let token = token_with_payload(&serde_json::json!({ "roles": ["ROLE_ADMIN"] }));
    let claims = decode(&token).expect("valid token");
    assert!(claims.sub.is_none());
}

#[test]
fn decode_keeps_unknown_fields_in_extra() {
    let token = token_with_payload(&serde_json::json!({
        "sub": "a@b.com",
        "roles": [],
        "iat": 1_700_000_000,
        "iss": "petclinic",
    }));
    let claims = decode(&token).expect("valid token");
    assert_eq!(claims.extra.get("iat"), Some(&serde_json::json!(1_700_000_000)));
    assert_eq!(claims.extra.get("iss"), Some(&serde_json::json!("petclinic")));
}

#[test]
fn decode_accepts_padded_base64url() {
    // `{"sub":"x"}` is 11 bytes, so its base64 form carries padding.
    let encoded = URL_SAFE.encode(b"{\"sub\":\"x\"}");
    assert!(encoded.ends_with('='));
    let token = format!("hdr.{encoded}.sig");
    let claims = decode(&token).expect("padded payload");
    assert_eq!(claims.sub.as_deref(), Some("x"));
}

#[test]
fn decode_matches_documented_vector() {
    let token = "abc.eyJyb2xlcyI6WyJST0xFX1VTRVIiXSwic3ViIjoiYUBiLmNvbSJ9.sig";
    let claims = decode(token).expect("documented vector");
    assert_eq!(claims.sub.as_deref(), Some("a@b.com"));
    assert_eq!(claims.roles, vec!["ROLE_USER"]);
}

#[test]
fn decode_is_deterministic() {
    let token = token_with_payload(&serde_json::json!({ "sub": "a@b.com", "roles": ["ROLE_ADMIN"] }));
    assert_eq!(decode(&token).expect("first"), decode(&token).expect("second"));
}
