use super::*;
use crate::auth::identity::Role;
use crate::auth::slot::MemorySlot;

// Payload: {"roles":["ROLE_USER"],"sub":"a@b.com"}
const USER_TOKEN: &str = "abc.eyJyb2xlcyI6WyJST0xFX1VTRVIiXSwic3ViIjoiYUBiLmNvbSJ9.sig";
// Payload: {"roles":["ROLE_ADMIN"],"sub":"admin@clinic.io"}
const ADMIN_TOKEN: &str =
    "abc.eyJyb2xlcyI6WyJST0xFX0FETUlOIl0sInN1YiI6ImFkbWluQGNsaW5pYy5pbyJ9.sig";

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_with_empty_slot_is_unauthenticated() {
    let slot = MemorySlot::default();
    let session = Session::initialize(&slot);
    assert!(!session.is_authenticated());
    assert!(session.credential().is_none());
    assert!(session.identity().is_none());
}

#[test]
fn initialize_with_stored_credential_is_authenticated() {
    let slot = MemorySlot::holding(USER_TOKEN);
    let session = Session::initialize(&slot);
    let identity = session.identity().expect("authenticated");
    assert_eq!(identity.subject, "a@b.com");
    assert_eq!(identity.role, Role::User);
    assert_eq!(session.credential(), Some(USER_TOKEN));
}

#[test]
fn initialize_clears_a_corrupt_slot() {
    let slot = MemorySlot::holding("not-a-token");
    let session = Session::initialize(&slot);
    assert!(!session.is_authenticated());
    // The corrupt credential must not linger and fail on every future start.
    assert!(slot.is_empty());
}

// =============================================================
// login
// =============================================================

#[test]
fn login_persists_and_authenticates() {
    let slot = MemorySlot::default();
    let mut session = Session::default();

    let identity = session.login(&slot, ADMIN_TOKEN).expect("valid credential");
    assert_eq!(identity.subject, "admin@clinic.io");
    assert_eq!(identity.role, Role::Admin);
    assert_eq!(slot.load().as_deref(), Some(ADMIN_TOKEN));
    assert_eq!(session.credential(), Some(ADMIN_TOKEN));
}

#[test]
fn login_agrees_with_an_independent_decode() {
    let slot = MemorySlot::default();
    let mut session = Session::default();
    session.login(&slot, USER_TOKEN).expect("valid credential");

    let claims = crate::auth::token::decode(USER_TOKEN).expect("decodable");
    let expected = crate::auth::identity::Identity::from_claims(claims);
    assert_eq!(session.identity(), Some(&expected));
}

#[test]
fn login_rejects_malformed_credential_without_persisting() {
    let slot = MemorySlot::default();
    let mut session = Session::default();

    let err = session.login(&slot, "not-a-token");
    assert!(err.is_err());
    assert!(!session.is_authenticated());
    // Reject-before-persist: the slot is untouched.
    assert!(slot.is_empty());
}

#[test]
fn failed_login_leaves_an_existing_session_intact() {
    let slot = MemorySlot::default();
    let mut session = Session::default();
    session.login(&slot, USER_TOKEN).expect("valid credential");

    assert!(session.login(&slot, "...").is_err());
    assert_eq!(session.credential(), Some(USER_TOKEN));
    assert_eq!(slot.load().as_deref(), Some(USER_TOKEN));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_slot_and_state() {
    let slot = MemorySlot::default();
    let mut session = Session::default();
    session.login(&slot, USER_TOKEN).expect("valid credential");

    session.logout(&slot);
    assert!(!session.is_authenticated());
    assert!(session.credential().is_none());
    assert!(slot.is_empty());
}

#[test]
fn logout_is_idempotent() {
    let slot = MemorySlot::default();
    let mut session = Session::default();

    session.logout(&slot);
    session.logout(&slot);
    assert_eq!(session, Session::default());
    assert!(slot.is_empty());
}

// =============================================================
// lifecycle round trips
// =============================================================

#[test]
fn login_logout_login_cycles() {
    let slot = MemorySlot::default();
    let mut session = Session::default();

    session.login(&slot, USER_TOKEN).expect("first login");
    session.logout(&slot);
    let identity = session.login(&slot, ADMIN_TOKEN).expect("second login");
    assert_eq!(identity.role, Role::Admin);
}

#[test]
fn restart_after_login_restores_the_session() {
    let slot = MemorySlot::default();
    let mut session = Session::default();
    session.login(&slot, USER_TOKEN).expect("valid credential");

    // Simulated process restart: a fresh initialize over the same slot.
    let restored = Session::initialize(&slot);
    assert_eq!(restored, session);
}

// Session state is captured by event handlers and `Show` children, which the
// view layer requires to be thread-shareable. A non-shareable field (an `Rc`,
// a `RefCell`) would break every page that closes over the session signal.
#[test]
fn session_is_shareable_across_view_handlers() {
    fn assert_shareable<T: Send + Sync>() {}
    assert_shareable::<Session>();
    assert_shareable::<crate::auth::identity::Identity>();
}

#[test]
fn restart_after_external_tamper_goes_unauthenticated() {
    let slot = MemorySlot::default();
    let mut session = Session::default();
    session.login(&slot, USER_TOKEN).expect("valid credential");

    slot.store("tampered");
    let restored = Session::initialize(&slot);
    assert!(!restored.is_authenticated());
    assert!(slot.is_empty());
}
