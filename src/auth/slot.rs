//! Durable credential slot — one named key persisted across page loads.
//!
//! Only the session store reads or writes the slot. Browser storage I/O is
//! best-effort: a failed read counts as "absent" and a failed write leaves the
//! in-memory session authoritative for the rest of the process, so auth never
//! crashes on storage errors.

use std::cell::RefCell;

/// localStorage key holding the raw credential string.
#[cfg(feature = "hydrate")]
const CREDENTIAL_KEY: &str = "petclinic_token";

/// A single named key-value slot for the raw credential.
pub trait CredentialSlot {
    /// Read the stored credential, `None` if absent or unreadable.
    fn load(&self) -> Option<String>;
    /// Persist the credential. Silent best-effort.
    fn store(&self, credential: &str);
    /// Remove the credential. Silent best-effort.
    fn clear(&self);
}

/// Browser-backed slot over `localStorage`. Outside the browser (SSR) every
/// operation is a no-op and reads return `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSlot;

impl CredentialSlot for BrowserSlot {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(CREDENTIAL_KEY).ok()?
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store(&self, credential: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
                let _ = storage.set_item(CREDENTIAL_KEY, credential);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credential;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
                let _ = storage.remove_item(CREDENTIAL_KEY);
            }
        }
    }
}

/// In-memory slot for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemorySlot(RefCell<Option<String>>);

impl MemorySlot {
    /// A slot pre-loaded with a credential, as if persisted by a prior run.
    #[must_use]
    pub fn holding(credential: &str) -> Self {
        Self(RefCell::new(Some(credential.to_owned())))
    }

    /// Whether the slot currently holds a credential.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_none()
    }
}

impl CredentialSlot for MemorySlot {
    fn load(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn store(&self, credential: &str) {
        *self.0.borrow_mut() = Some(credential.to_owned());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}
