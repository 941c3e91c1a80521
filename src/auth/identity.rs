//! Role and identity derivation from decoded claims.
//!
//! The role mapping is total: every raw role string lands on a variant, with
//! [`Role::Other`] carrying unrecognized names verbatim. `Other` gates like
//! the lowest privilege but still displays its raw string in the UI badge.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use crate::auth::token::Claims;

/// Marker prefix the issuer puts on every role claim.
pub const ROLE_PREFIX: &str = "ROLE_";

/// Closed role enumeration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
    SuperAdmin,
    /// Role string the client does not recognize. Treated as [`Role::User`]
    /// for gating, displayed verbatim.
    Other(String),
}

impl Role {
    /// Map a raw role claim (`"ROLE_ADMIN"`, `"admin"`, ...) onto the enum.
    /// Total: strips the prefix, matches case-insensitively, and falls back
    /// to `Other` carrying the stripped string as issued.
    #[must_use]
    pub fn from_claim(raw: &str) -> Self {
        let name = raw.strip_prefix(ROLE_PREFIX).unwrap_or(raw);
        match name.to_ascii_uppercase().as_str() {
            "USER" => Self::User,
            "ADMIN" => Self::Admin,
            "SUPERADMIN" => Self::SuperAdmin,
            _ => Self::Other(name.to_owned()),
        }
    }

    /// The role used for route gating. Unknown roles collapse to the lowest
    /// privilege so a typo in an issued claim can never widen access.
    #[must_use]
    pub fn gating_role(&self) -> Self {
        match self {
            Self::Other(_) => Self::User,
            known => known.clone(),
        }
    }

    /// Default dashboard path for this role.
    #[must_use]
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Self::Admin => "/admin/dashboard",
            Self::SuperAdmin => "/superadmin/dashboard",
            Self::User | Self::Other(_) => "/user/dashboard",
        }
    }

    /// Label for the navbar role badge. Unknown roles show as issued.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::SuperAdmin => "superadmin",
            Self::Other(raw) => raw,
        }
    }

    /// True for roles with admin-level affordances (edit forms, owner list).
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }
}

/// The identity derived from a decoded credential.
///
/// Derived in exactly one place — the session store — so gating and display
/// always agree.
#[derive(Clone, Debug, PartialEq)]
pub struct Identity {
    /// Subject claim, usually the account email. Empty if the issuer omitted it.
    pub subject: String,
    /// Effective role: first `roles` entry, prefix stripped, case-normalized.
    /// Defaults to [`Role::User`] when no roles were issued.
    pub role: Role,
    /// The full decoded claims, kept for display and diagnostics.
    pub claims: Claims,
}

impl Identity {
    /// Derive an identity from decoded claims. Deterministic and total: an
    /// empty `roles` list is a normal low-privilege session.
    #[must_use]
    pub fn from_claims(claims: Claims) -> Self {
        let role = claims
            .roles
            .first()
            .map_or(Role::User, |raw| Role::from_claim(raw));
        let subject = claims.sub.clone().unwrap_or_default();
        Self { subject, role, claims }
    }
}
