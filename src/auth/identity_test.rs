use super::*;

fn claims(sub: Option<&str>, roles: &[&str]) -> Claims {
    Claims {
        sub: sub.map(ToOwned::to_owned),
        roles: roles.iter().map(|r| (*r).to_owned()).collect(),
        extra: serde_json::Map::new(),
    }
}

// =============================================================
// Role mapping
// =============================================================

#[test]
fn role_from_claim_strips_prefix_and_normalizes_case() {
    assert_eq!(Role::from_claim("ROLE_USER"), Role::User);
    assert_eq!(Role::from_claim("ROLE_admin"), Role::Admin);
    assert_eq!(Role::from_claim("superadmin"), Role::SuperAdmin);
    assert_eq!(Role::from_claim("Admin"), Role::Admin);
}

#[test]
fn role_from_claim_keeps_unknown_verbatim_after_prefix_strip() {
    assert_eq!(Role::from_claim("ROLE_AUDITOR"), Role::Other("AUDITOR".to_owned()));
    // Case normalization applies to the match only; the stored string (and so
    // the badge label) keeps whatever casing the issuer used.
    assert_eq!(Role::from_claim("janitor"), Role::Other("janitor".to_owned()));
    assert_eq!(Role::from_claim("janitor").label(), "janitor");
}

#[test]
fn unknown_role_gates_as_user_but_labels_verbatim() {
    let role = Role::from_claim("ROLE_AUDITOR");
    assert_eq!(role.gating_role(), Role::User);
    assert_eq!(role.label(), "AUDITOR");
    assert!(!role.is_admin());
}

#[test]
fn dashboard_paths_per_role() {
    assert_eq!(Role::User.dashboard_path(), "/user/dashboard");
    assert_eq!(Role::Admin.dashboard_path(), "/admin/dashboard");
    assert_eq!(Role::SuperAdmin.dashboard_path(), "/superadmin/dashboard");
    assert_eq!(Role::Other("AUDITOR".to_owned()).dashboard_path(), "/user/dashboard");
}

// =============================================================
// Identity derivation
// =============================================================

#[test]
fn empty_roles_derive_the_default_user_role() {
    let identity = Identity::from_claims(claims(Some("a@b.com"), &[]));
    assert_eq!(identity.role, Role::User);
    assert_eq!(identity.subject, "a@b.com");
}

#[test]
fn first_role_wins() {
    let identity = Identity::from_claims(claims(Some("a@b.com"), &["ROLE_ADMIN", "ROLE_EXTRA"]));
    assert_eq!(identity.role, Role::Admin);
}

#[test]
fn missing_subject_becomes_empty_string() {
    let identity = Identity::from_claims(claims(None, &["ROLE_USER"]));
    assert!(identity.subject.is_empty());
}

#[test]
fn derivation_keeps_raw_claims() {
    let c = claims(Some("a@b.com"), &["ROLE_SUPERADMIN"]);
    let identity = Identity::from_claims(c.clone());
    assert_eq!(identity.claims, c);
}
