//! Declarative route guard: a static table of path patterns and requirements,
//! evaluated by one pure function.
//!
//! DESIGN
//! ======
//! Every navigable path is declared once in [`ROUTE_TABLE`]. Lookups for paths
//! missing from the table fail closed — they resolve to `RoleIn(&[])`, which
//! no identity satisfies. A negative check is an expected UX event, never an
//! error page: it resolves to a redirect, either to the login page (no
//! identity) or to the identity's own dashboard (insufficient role).

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::auth::identity::{Identity, Role};

/// Who may render a navigable path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RouteRequirement {
    /// Always accessible.
    Public,
    /// Any authenticated identity.
    Authenticated,
    /// Authenticated identities whose gating role is in the set.
    RoleIn(&'static [Role]),
}

/// One route table entry: a `/`-segmented pattern where `:name` segments
/// match any single non-empty segment.
pub struct RouteRule {
    pub pattern: &'static str,
    pub requirement: RouteRequirement,
}

const ADMIN_UP: &[Role] = &[Role::Admin, Role::SuperAdmin];
const SUPERADMIN_ONLY: &[Role] = &[Role::SuperAdmin];
const ANY_ROLE: &[Role] = &[Role::User, Role::Admin, Role::SuperAdmin];

/// The complete navigable surface, declared once at startup.
pub static ROUTE_TABLE: &[RouteRule] = &[
    RouteRule { pattern: "/", requirement: RouteRequirement::Public },
    RouteRule { pattern: "/login", requirement: RouteRequirement::Public },
    RouteRule { pattern: "/register", requirement: RouteRequirement::Public },
    // Dashboards
    RouteRule { pattern: "/user/dashboard", requirement: RouteRequirement::RoleIn(ANY_ROLE) },
    RouteRule { pattern: "/admin/dashboard", requirement: RouteRequirement::RoleIn(ADMIN_UP) },
    RouteRule {
        pattern: "/superadmin/dashboard",
        requirement: RouteRequirement::RoleIn(SUPERADMIN_ONLY),
    },
    // Owner management is staff-only
    RouteRule { pattern: "/owner", requirement: RouteRequirement::RoleIn(ADMIN_UP) },
    RouteRule { pattern: "/owner/add", requirement: RouteRequirement::RoleIn(ADMIN_UP) },
    RouteRule { pattern: "/owner/edit/:id", requirement: RouteRequirement::RoleIn(ADMIN_UP) },
    // Pets
    RouteRule { pattern: "/pets", requirement: RouteRequirement::Authenticated },
    RouteRule { pattern: "/pets/add", requirement: RouteRequirement::Authenticated },
    RouteRule { pattern: "/pets/edit/:id", requirement: RouteRequirement::Authenticated },
    // Vets
    RouteRule { pattern: "/vets", requirement: RouteRequirement::Authenticated },
    RouteRule { pattern: "/vets/add", requirement: RouteRequirement::Authenticated },
    RouteRule { pattern: "/vets/edit/:id", requirement: RouteRequirement::Authenticated },
    RouteRule { pattern: "/vets/:id", requirement: RouteRequirement::Authenticated },
    // Visits (appointments)
    RouteRule { pattern: "/visits", requirement: RouteRequirement::Authenticated },
    RouteRule { pattern: "/visits/add", requirement: RouteRequirement::Authenticated },
    RouteRule { pattern: "/visits/edit/:id", requirement: RouteRequirement::Authenticated },
];

/// Guard verdict for a path/identity pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Access {
    Granted,
    /// No identity present: go authenticate.
    RedirectToLogin,
    /// Identity present but insufficiently privileged: go to its own
    /// dashboard, never an error page.
    Redirect(&'static str),
}

/// Look up the requirement for a concrete path. Paths not in the table are
/// never accessible.
#[must_use]
pub fn requirement_for(path: &str) -> RouteRequirement {
    ROUTE_TABLE
        .iter()
        .find(|rule| pattern_matches(rule.pattern, path))
        .map_or(RouteRequirement::RoleIn(&[]), |rule| rule.requirement)
}

/// Evaluate a requirement against the current identity. Pure and total.
#[must_use]
pub fn check(requirement: RouteRequirement, identity: Option<&Identity>) -> Access {
    match (requirement, identity) {
        (RouteRequirement::Public, _) => Access::Granted,
        (RouteRequirement::Authenticated, Some(_)) => Access::Granted,
        (RouteRequirement::RoleIn(allowed), Some(identity)) => {
            if allowed.contains(&identity.role.gating_role()) {
                Access::Granted
            } else {
                Access::Redirect(identity.role.dashboard_path())
            }
        }
        (RouteRequirement::Authenticated | RouteRequirement::RoleIn(_), None) => {
            Access::RedirectToLogin
        }
    }
}

/// Convenience: table lookup plus evaluation.
#[must_use]
pub fn check_path(path: &str, identity: Option<&Identity>) -> Access {
    check(requirement_for(path), identity)
}

/// Match a concrete path against a pattern, segment by segment. `:name`
/// matches any single non-empty segment; trailing slashes are ignored.
fn pattern_matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = pattern.trim_matches('/').split('/');
    let mut path_segments = path.trim_matches('/').split('/');
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(p), Some(s)) => {
                let matched = if p.starts_with(':') { !s.is_empty() } else { p == s };
                if !matched {
                    return false;
                }
            }
            _ => return false,
        }
    }
}
