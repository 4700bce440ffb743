//! Session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one `RwSignal<SessionState>` exists, provided via context from
//! `App`. Route guards and user-aware components read it to coordinate
//! login redirects and identity-dependent rendering; only the async auth
//! flows (restore, login, logout, expiry) mutate it, and always through the
//! transition methods here.
//!
//! DESIGN
//! ======
//! The store is a tagged state machine rather than ad hoc bool/null
//! combinations: `Restoring` gates the whole UI until the one-shot cookie
//! restore resolves, after which the status flips permanently to
//! `Authenticated` or `Anonymous` until an explicit login/logout/expiry.
//! A generation counter lets a newer operation invalidate the resolution
//! of a slower, older one (a logout during a slow restore wins).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Session;

/// Where the store sits in the auth lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// The initial cookie restore has not resolved yet.
    #[default]
    Restoring,
    /// A session is populated.
    Authenticated,
    /// Restore resolved (or login/logout completed) with no identity.
    Anonymous,
}

/// Fixed user-facing auth failures. Backend error detail never leaks past
/// this enum; views render the `Display` text verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Login failed. Please check your credentials.")]
    InvalidCredentials,
    #[error("Logout failed.")]
    LogoutFailed,
    #[error("Your session has expired. Please sign in again.")]
    SessionExpired,
}

/// Auth-session state consumed by guards, layout chrome, and the login page.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub status: SessionStatus,
    pub session: Option<Session>,
    pub error: Option<AuthError>,
    /// A login or logout round trip is in flight; submit controls disable.
    pub busy: bool,
    generation: u64,
}

impl SessionState {
    /// True until the one-shot restore resolves.
    pub fn is_restoring(&self) -> bool {
        matches!(self.status, SessionStatus::Restoring)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.status, SessionStatus::Authenticated)
    }

    /// Login/logout controls stay disabled while restore or another auth
    /// round trip is in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_restoring() && !self.busy
    }

    /// Current generation, captured by async flows so their resolution can
    /// be discarded if the store has moved on.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start an explicit auth mutation (login/logout). Bumps the generation
    /// so any still-pending older resolution becomes stale.
    pub fn begin_mutation(&mut self) -> u64 {
        self.generation += 1;
        self.busy = true;
        self.generation
    }

    /// Resolve the one-shot restore. A stale generation means a login or
    /// logout raced past the restore; its resolution is ignored.
    ///
    /// Restore failure is silent: `Anonymous` with no recorded error.
    pub fn apply_restore(&mut self, generation: u64, session: Option<Session>) {
        if generation != self.generation {
            return;
        }
        match session {
            Some(session) => {
                self.status = SessionStatus::Authenticated;
                self.session = Some(session);
            }
            None => {
                self.status = SessionStatus::Anonymous;
                self.session = None;
            }
        }
    }

    /// Resolve a login attempt. Failure maps to the fixed
    /// invalid-credentials message regardless of what the backend said.
    pub fn apply_login(&mut self, generation: u64, session: Option<Session>) {
        if generation != self.generation {
            return;
        }
        self.busy = false;
        match session {
            Some(session) => {
                self.status = SessionStatus::Authenticated;
                self.session = Some(session);
                self.error = None;
            }
            None => {
                self.status = SessionStatus::Anonymous;
                self.session = None;
                self.error = Some(AuthError::InvalidCredentials);
            }
        }
    }

    /// Resolve a logout attempt. The local session clears unconditionally;
    /// a backend failure only adds the logout-failed notice, since the
    /// cookie's server-side validity is outside client control.
    pub fn apply_logout(&mut self, generation: u64, backend_ok: bool) {
        if generation != self.generation {
            return;
        }
        self.busy = false;
        self.status = SessionStatus::Anonymous;
        self.session = None;
        self.error = if backend_ok { None } else { Some(AuthError::LogoutFailed) };
    }

    /// A 401 outlived its single silent refresh: drop the identity and
    /// record the session-expired notice. Bumps the generation so any
    /// in-flight auth flow resolves as stale.
    pub fn apply_expired(&mut self) {
        self.generation += 1;
        self.busy = false;
        self.status = SessionStatus::Anonymous;
        self.session = None;
        self.error = Some(AuthError::SessionExpired);
    }
}
