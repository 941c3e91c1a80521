//! Client-side authentication and authorization.
//!
//! DESIGN
//! ======
//! One pipeline, one direction: raw credential string -> [`token::decode`] ->
//! [`identity::Identity`] -> [`session::Session`] -> route guard and views.
//! The session owns the only identity derivation in the app; no view re-decodes
//! the credential on its own, so gating and display can never disagree.
//!
//! Nothing in this module verifies signatures. The backend enforces
//! permissions; the decoding here only drives navigation and which buttons
//! are shown.

pub mod guard;
pub mod identity;
pub mod session;
pub mod slot;
pub mod token;
