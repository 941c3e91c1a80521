//! The per-process session: current credential plus its derived identity.
//!
//! STATE MACHINE
//! =============
//! Two states: unauthenticated `{None, None}` and authenticated
//! `{Some(credential), Some(identity)}`. `initialize` picks the starting state
//! from the durable slot; `login` and `logout` cycle between the two for the
//! life of the process. No state is terminal.
//!
//! OWNERSHIP
//! =========
//! Exactly one `Session` exists per running client, provided to the component
//! tree as an `RwSignal<Session>` context by the root `App`. Views read it;
//! only [`login_session`] / [`logout_session`] (and the constructor-time
//! `initialize`) write it, so the slot and the in-memory state cannot diverge
//! even when nested UI callbacks re-enter.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{GetUntracked, RwSignal, Set};

use crate::auth::identity::Identity;
use crate::auth::slot::CredentialSlot;
use crate::auth::token::{self, DecodeError};

/// Current credential and derived identity. Both present or both absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    credential: Option<String>,
    identity: Option<Identity>,
}

impl Session {
    /// Build the starting session from the durable slot.
    ///
    /// A present, decodable credential yields an authenticated session. A
    /// credential that no longer decodes is dropped from the slot as well —
    /// a corrupt persisted token must not fail again on every future start.
    #[must_use]
    pub fn initialize(slot: &dyn CredentialSlot) -> Self {
        let Some(credential) = slot.load() else {
            return Self::default();
        };
        match token::decode(&credential) {
            Ok(claims) => Self {
                credential: Some(credential),
                identity: Some(Identity::from_claims(claims)),
            },
            Err(err) => {
                leptos::logging::warn!("dropping undecodable stored credential: {err}");
                slot.clear();
                Self::default()
            }
        }
    }

    /// Log in with a freshly issued credential.
    ///
    /// Decodes first and persists only on success: a credential this client
    /// cannot parse is never written to the slot, and the session is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns the [`DecodeError`] for a malformed credential.
    pub fn login(
        &mut self,
        slot: &dyn CredentialSlot,
        credential: &str,
    ) -> Result<Identity, DecodeError> {
        let claims = token::decode(credential)?;
        slot.store(credential);
        let identity = Identity::from_claims(claims);
        self.credential = Some(credential.to_owned());
        self.identity = Some(identity.clone());
        Ok(identity)
    }

    /// Clear the slot and reset to unauthenticated. Idempotent.
    pub fn logout(&mut self, slot: &dyn CredentialSlot) {
        slot.clear();
        self.credential = None;
        self.identity = None;
    }

    /// The raw credential, if authenticated.
    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// The derived identity, if authenticated.
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

/// Log in through the shared session signal.
///
/// All session mutation after startup goes through these two helpers; each is
/// a single read-modify-write of the signal, which keeps slot writes and
/// signal updates in step.
///
/// # Errors
///
/// Returns the [`DecodeError`] for a malformed credential; the signal is not
/// written in that case.
pub fn login_session(
    session: RwSignal<Session>,
    slot: &dyn CredentialSlot,
    credential: &str,
) -> Result<Identity, DecodeError> {
    let mut next = session.get_untracked();
    let identity = next.login(slot, credential)?;
    session.set(next);
    Ok(identity)
}

/// Log out through the shared session signal.
pub fn logout_session(session: RwSignal<Session>, slot: &dyn CredentialSlot) {
    let mut next = session.get_untracked();
    next.logout(slot);
    session.set(next);
}
