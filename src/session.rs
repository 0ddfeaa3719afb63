//! Single-slot session holder.
//!
//! At most one identity is logged in at a time. [`Session::login`] installs an
//! identity when the slot is empty and otherwise hands back the live one, ignoring
//! the credentials it was given. [`Session::logout`] empties the slot.
//!
//! The slot is one process-wide `Mutex`, so every thread sees the same
//! identity. A poisoned lock is recovered rather than propagated: every write is a
//! single assignment, so the guarded value is never left half-updated.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::error::SessionError;

struct Credentials {
    username: String,
    password: String,
}

lazy_static::lazy_static! {
    static ref LIVE: Mutex<Option<Credentials>> = Mutex::new(None);
}

fn live() -> MutexGuard<'static, Option<Credentials>> {
    LIVE.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
        warn!("session slot lock was poisoned, recovering");
        poisoned.into_inner()
    })
}

/// Handle to the live session.
///
/// Field reads always go through the slot, so a handle taken before a
/// logout/login cycle reports whoever is logged in now.
#[derive(Clone)]
pub struct Session {
    _private: (),
}

impl Session {
    fn handle() -> Self {
        Session { _private: () }
    }

    /// Returns the live session, creating it from the given credentials if the
    /// slot is empty.
    pub fn login(username: impl Into<String>, password: impl Into<String>) -> Session {
        Self::new(username, password).unwrap_or_else(|_| {
            debug!("session already live, supplied credentials ignored");
            Self::handle()
        })
    }

    /// Installs a new session directly. Fails if one is already live.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Session, SessionError> {
        let username = username.into();
        let mut slot = live();
        if slot.is_some() {
            return Err(SessionError::AlreadyLoggedIn);
        }
        info!(%username, "user logged in");
        *slot = Some(Credentials {
            username,
            password: password.into(),
        });
        Ok(Self::handle())
    }

    /// Clears the live session. Does nothing if none is live.
    pub fn logout() {
        let previous = live().take();
        if let Some(credentials) = previous {
            info!(username = %credentials.username, "user logged out");
        }
    }

    pub fn is_active() -> bool {
        live().is_some()
    }

    fn with_live<T>(f: impl FnOnce(&mut Credentials) -> T) -> Result<T, SessionError> {
        live().as_mut().map(f).ok_or(SessionError::NoActiveSession)
    }

    pub fn username(&self) -> Result<String, SessionError> {
        Self::with_live(|c| c.username.clone())
    }

    pub fn password(&self) -> Result<String, SessionError> {
        Self::with_live(|c| c.password.clone())
    }

    pub fn set_username(&self, username: impl Into<String>) -> Result<(), SessionError> {
        let username = username.into();
        Self::with_live(|c| c.username = username)
    }

    pub fn set_password(&self, password: impl Into<String>) -> Result<(), SessionError> {
        let password = password.into();
        Self::with_live(|c| c.password = password)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let username = self.username().ok();
        f.debug_struct("Session")
            .field("username", &username)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serial_test::serial;
    use std::thread;

    fn fresh() {
        Session::logout();
    }

    #[test]
    #[serial]
    fn test_login_creates_session() {
        fresh();
        let session = Session::login("Franco", "123");
        assert!(Session::is_active());
        assert_eq!(session.username().unwrap(), "Franco");
        assert_eq!(session.password().unwrap(), "123");
    }

    #[test]
    #[serial]
    fn test_second_login_returns_first_identity() {
        fresh();
        Session::login("Franco", "123");
        let second = Session::login("Pauline", "pkt");
        assert_eq!(second.username().unwrap(), "Franco");
        assert_eq!(second.password().unwrap(), "123");
    }

    #[test]
    #[serial]
    fn test_login_after_logout_uses_new_credentials() {
        fresh();
        Session::login("Franco", "123");
        Session::logout();
        let session = Session::login("A", "B");
        assert_eq!(session.username().unwrap(), "A");
        assert_eq!(session.password().unwrap(), "B");
    }

    #[test]
    #[serial]
    fn test_direct_construction_while_live_fails() {
        fresh();
        Session::login("Franco", "123");
        assert_eq!(Session::new("Oliver", "pasd").unwrap_err(), SessionError::AlreadyLoggedIn);
        assert_eq!(Session::login("x", "y").username().unwrap(), "Franco");
    }

    #[test]
    #[serial]
    fn test_direct_construction_when_empty() {
        fresh();
        let session = Session::new("Oliver", "pasd").unwrap();
        assert_eq!(session.username().unwrap(), "Oliver");
    }

    #[test]
    #[serial]
    fn test_reads_without_session_fail() {
        fresh();
        let session = Session::login("Franco", "123");
        Session::logout();
        assert_eq!(session.username().unwrap_err(), SessionError::NoActiveSession);
        assert_eq!(session.password().unwrap_err(), SessionError::NoActiveSession);
    }

    #[test]
    #[serial]
    fn test_logout_is_idempotent() {
        fresh();
        Session::logout();
        Session::logout();
        assert!(!Session::is_active());
    }

    #[test]
    #[serial]
    fn test_stale_handle_sees_new_identity() {
        fresh();
        let old = Session::login("Franco", "123");
        Session::logout();
        Session::login("Pauline", "pkt");
        assert_eq!(old.username().unwrap(), "Pauline");
    }

    #[test]
    #[serial]
    fn test_setters_update_live_session() {
        fresh();
        let session = Session::login("Franco", "123");
        session.set_username("Frank").unwrap();
        session.set_password("456").unwrap();
        let again = Session::login("ignored", "ignored");
        assert_eq!(again.username().unwrap(), "Frank");
        assert_eq!(again.password().unwrap(), "456");

        Session::logout();
        assert_eq!(session.set_username("x").unwrap_err(), SessionError::NoActiveSession);
    }

    #[test]
    #[serial]
    fn test_debug_hides_password() {
        fresh();
        let session = Session::login("Franco", "secret-pw");
        let rendered = format!("{session:?}");
        assert!(rendered.contains("Franco"));
        assert!(!rendered.contains("secret-pw"));
    }

    #[test]
    #[serial]
    fn test_slot_is_shared_across_threads() {
        fresh();
        Session::login("Franco", "123");

        let (active, direct, relogin) = thread::spawn(|| {
            let active = Session::is_active();
            let direct = Session::new("Mallory", "x").map(|_| ());
            let relogin = Session::login("Mallory", "x").username();
            (active, direct, relogin)
        })
        .join()
        .unwrap();

        assert!(active);
        assert_eq!(direct, Err(SessionError::AlreadyLoggedIn));
        assert_eq!(relogin.unwrap(), "Franco");
        assert_eq!(Session::login("x", "y").username().unwrap(), "Franco");
        fresh();
    }

    #[test]
    #[serial]
    fn test_logout_on_another_thread_clears_slot() {
        fresh();
        let session = Session::login("Franco", "123");
        thread::spawn(Session::logout).join().unwrap();
        assert!(!Session::is_active());
        assert_eq!(session.username().unwrap_err(), SessionError::NoActiveSession);
    }

    proptest! {
        #[test]
        #[serial]
        fn prop_logins_without_logout_keep_first_identity(
            first in ("[a-z]{1,8}", "[a-z0-9]{1,8}"),
            later in prop::collection::vec(("[a-z]{1,8}", "[a-z0-9]{1,8}"), 1..10),
        ) {
            fresh();
            Session::login(first.0.clone(), first.1.clone());
            for (user, pass) in later {
                let session = Session::login(user, pass);
                prop_assert_eq!(session.username().unwrap(), first.0.clone());
                prop_assert_eq!(session.password().unwrap(), first.1.clone());
            }
            fresh();
        }
    }
}
