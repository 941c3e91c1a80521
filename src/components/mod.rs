//! Shared UI components: layout chrome and the route-guard wrapper.

pub mod guarded;
pub mod layout;
pub mod navbar;
pub mod sidebar;
pub mod stat_card;
