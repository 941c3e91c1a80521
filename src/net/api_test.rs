use super::*;
use crate::auth::slot::MemorySlot;

#[test]
fn bearer_formats_the_header_value() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn api_url_prefixes_the_backend_mount() {
    assert_eq!(api_url("/owners"), "/api/owners");
    assert_eq!(api_url("/visits/7"), "/api/visits/7");
}

#[test]
fn unauthenticated_session_exposes_no_credential_to_attach() {
    // The header is attached iff `Session::credential()` is present; a fresh
    // session must therefore produce unauthorized requests.
    assert!(Session::default().credential().is_none());
}

#[test]
fn authenticated_session_exposes_the_raw_credential() {
    let slot = MemorySlot::default();
    let mut session = Session::default();
    let token = "abc.eyJyb2xlcyI6WyJST0xFX1VTRVIiXSwic3ViIjoiYUBiLmNvbSJ9.sig";
    session.login(&slot, token).expect("valid credential");
    assert_eq!(session.credential().map(bearer).as_deref(), Some(format!("Bearer {token}").as_str()));
}
