//! Network layer: REST DTOs and the HTTP client helpers.

pub mod api;
pub mod types;
