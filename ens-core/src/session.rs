//! Mock session gate backed by a [`KeyValueStore`].
//!
//! The flag is a presence check only: no expiry, no server corroboration, and
//! no propagation between tabs. It must never be treated as a credential.

use crate::config::{REMEMBERED_IDENTIFIER_KEY, SESSION_FLAG_KEY, SESSION_FLAG_VALUE};
use crate::locale::Locale;
use crate::routes::Page;
use crate::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
}

/// What a protected page should do on mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    /// Navigate (replacing history) to this path; render nothing meanwhile.
    Redirect(String),
}

pub struct SessionGate<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionGate<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Whether a non-empty session flag is present. Its value is not inspected.
    ///
    /// A store that cannot be read counts as unauthenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        match self.store.get(SESSION_FLAG_KEY) {
            Ok(flag) => flag.is_some_and(|value| !value.is_empty()),
            Err(err) => {
                log::warn!("session flag unreadable: {err}");
                false
            }
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.is_authenticated() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }

    /// Decide how a protected page for `locale` proceeds.
    #[must_use]
    pub fn check(&self, locale: Locale) -> GateDecision {
        match self.state() {
            SessionState::Authenticated => GateDecision::Render,
            SessionState::Unauthenticated => {
                let target = Page::Login.path(locale);
                log::debug!("no session; redirecting to {target}");
                GateDecision::Redirect(target)
            }
        }
    }

    /// Set the session flag.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the flag cannot be written.
    pub fn login(&self) -> Result<(), S::Error> {
        self.store.set(SESSION_FLAG_KEY, SESSION_FLAG_VALUE)
    }

    /// Clear the session flag and return the home path to navigate to.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the flag cannot be removed.
    pub fn logout(&self, locale: Locale) -> Result<String, S::Error> {
        self.store.remove(SESSION_FLAG_KEY)?;
        log::info!("session cleared");
        Ok(Page::Home.path(locale))
    }

    /// Identifier saved by a previous "remember me" login.
    #[must_use]
    pub fn remembered_identifier(&self) -> Option<String> {
        self.store
            .get(REMEMBERED_IDENTIFIER_KEY)
            .unwrap_or_else(|err| {
                log::warn!("remembered identifier unreadable: {err}");
                None
            })
            .filter(|value| !value.is_empty())
    }

    /// Persist the identifier when `remember` is set, otherwise clear it.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write or removal fails.
    pub fn remember(&self, identifier: &str, remember: bool) -> Result<(), S::Error> {
        if remember {
            self.store.set(REMEMBERED_IDENTIFIER_KEY, identifier)
        } else {
            self.store.remove(REMEMBERED_IDENTIFIER_KEY)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn login_then_logout_round_trips() {
        let gate = SessionGate::new(MemoryStore::new());
        assert_eq!(gate.state(), SessionState::Unauthenticated);
        gate.login().unwrap();
        assert_eq!(gate.state(), SessionState::Authenticated);
        assert_eq!(gate.check(Locale::En), GateDecision::Render);
        assert_eq!(gate.logout(Locale::En).unwrap(), "/en");
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn any_non_empty_flag_counts_as_present() {
        let store = MemoryStore::new();
        store.set(SESSION_FLAG_KEY, "false").unwrap();
        let gate = SessionGate::new(store.clone());
        assert!(gate.is_authenticated());
        store.set(SESSION_FLAG_KEY, "").unwrap();
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn empty_remembered_identifier_is_ignored() {
        let store = MemoryStore::new();
        store.set(REMEMBERED_IDENTIFIER_KEY, "").unwrap();
        let gate = SessionGate::new(store);
        assert_eq!(gate.remembered_identifier(), None);
        gate.remember("a@b.com", true).unwrap();
        assert_eq!(gate.remembered_identifier().as_deref(), Some("a@b.com"));
        gate.remember("a@b.com", false).unwrap();
        assert_eq!(gate.remembered_identifier(), None);
    }
}
