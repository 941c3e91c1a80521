use super::*;
use crate::auth::token::Claims;

fn identity(role: &str) -> Identity {
    Identity::from_claims(Claims {
        sub: Some("a@b.com".to_owned()),
        roles: vec![role.to_owned()],
        extra: serde_json::Map::new(),
    })
}

// =============================================================
// Requirement lookup
// =============================================================

#[test]
fn public_routes_are_declared_public() {
    for path in ["/", "/login", "/register"] {
        assert_eq!(requirement_for(path), RouteRequirement::Public, "path: {path}");
    }
}

#[test]
fn param_segments_match_concrete_ids() {
    assert_eq!(
        requirement_for("/owner/edit/42"),
        RouteRequirement::RoleIn(&[Role::Admin, Role::SuperAdmin])
    );
    assert_eq!(requirement_for("/vets/7"), RouteRequirement::Authenticated);
}

#[test]
fn vets_add_is_not_swallowed_by_the_id_pattern() {
    // Both "/vets/add" and "/vets/:id" match; the explicit rule is declared
    // first and must win.
    assert_eq!(requirement_for("/vets/add"), RouteRequirement::Authenticated);
}

#[test]
fn trailing_slash_is_ignored() {
    assert_eq!(
        requirement_for("/owner/"),
        RouteRequirement::RoleIn(&[Role::Admin, Role::SuperAdmin])
    );
}

#[test]
fn undeclared_paths_fail_closed() {
    for path in ["/nope", "/owner/edit", "/admin", "/user/dashboard/extra"] {
        assert_eq!(requirement_for(path), RouteRequirement::RoleIn(&[]), "path: {path}");
        assert_eq!(check_path(path, Some(&identity("ROLE_SUPERADMIN"))), Access::Redirect("/superadmin/dashboard"));
    }
}

#[test]
fn every_table_entry_matches_itself() {
    // Exhaustiveness: each declared pattern resolves to its own requirement
    // (with ":id" filled in), i.e. no rule is shadowed into a different one.
    for rule in ROUTE_TABLE {
        let concrete = rule.pattern.replace(":id", "123");
        assert_eq!(requirement_for(&concrete), rule.requirement, "pattern: {}", rule.pattern);
    }
}

// =============================================================
// Evaluation
// =============================================================

#[test]
fn public_is_granted_without_identity() {
    assert_eq!(check_path("/login", None), Access::Granted);
}

#[test]
fn authenticated_routes_redirect_anonymous_to_login() {
    assert_eq!(check_path("/pets", None), Access::RedirectToLogin);
    assert_eq!(check_path("/admin/dashboard", None), Access::RedirectToLogin);
}

#[test]
fn insufficient_role_redirects_to_own_dashboard_not_login() {
    let user = identity("ROLE_USER");
    assert_eq!(check_path("/admin/dashboard", Some(&user)), Access::Redirect("/user/dashboard"));
    assert_eq!(check_path("/owner", Some(&user)), Access::Redirect("/user/dashboard"));
}

#[test]
fn admin_reaches_admin_but_not_superadmin_routes() {
    let admin = identity("ROLE_ADMIN");
    assert_eq!(check_path("/admin/dashboard", Some(&admin)), Access::Granted);
    assert_eq!(check_path("/owner/add", Some(&admin)), Access::Granted);
    assert_eq!(
        check_path("/superadmin/dashboard", Some(&admin)),
        Access::Redirect("/admin/dashboard")
    );
}

#[test]
fn superadmin_reaches_everything_declared() {
    let superadmin = identity("ROLE_SUPERADMIN");
    for rule in ROUTE_TABLE {
        let concrete = rule.pattern.replace(":id", "123");
        assert_eq!(check_path(&concrete, Some(&superadmin)), Access::Granted, "pattern: {}", rule.pattern);
    }
}

#[test]
fn unknown_role_gates_like_user() {
    let auditor = identity("ROLE_AUDITOR");
    assert_eq!(check_path("/user/dashboard", Some(&auditor)), Access::Granted);
    assert_eq!(check_path("/pets", Some(&auditor)), Access::Granted);
    assert_eq!(check_path("/owner", Some(&auditor)), Access::Redirect("/user/dashboard"));
}
