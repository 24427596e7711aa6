//! Simulated sign-in and sign-up.
//!
//! There is no account backend. [`StubAuthGateway`] accepts every request
//! and answers after a fixed delay. The answer is a [`PendingRequest`] owned
//! by the page that asked; the page polls it from its `tick` and acts on the
//! outcome. Dropping the page drops the request, which cancels it: a
//! cancelled request never resolves, so a redirect can never fire after the
//! user has already navigated elsewhere.

use std::task::Poll;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SignupDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accepted_terms: bool,
}

/// What a successful request hands back. Held only for logging; nothing is
/// persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthSession {
    pub email: String,
    pub display_name: String,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum AuthError {
    #[error("{0}")]
    Rejected(String),
}

/// A request whose outcome is already decided but not yet visible.
///
/// `poll` counts down in clock ticks and yields the outcome exactly once.
pub struct PendingRequest<T> {
    label: &'static str,
    remaining: u32,
    outcome: Option<Result<T, AuthError>>,
}

impl<T> PendingRequest<T> {
    pub fn new(label: &'static str, delay_ticks: u32, outcome: Result<T, AuthError>) -> Self {
        Self {
            label,
            remaining: delay_ticks,
            outcome: Some(outcome),
        }
    }

    pub fn poll(&mut self, delta_ticks: u32) -> Poll<Result<T, AuthError>> {
        if self.outcome.is_none() {
            return Poll::Pending;
        }
        self.remaining = self.remaining.saturating_sub(delta_ticks);
        if self.remaining > 0 {
            return Poll::Pending;
        }
        match self.outcome.take() {
            Some(outcome) => Poll::Ready(outcome),
            None => Poll::Pending,
        }
    }

    /// True until the outcome has been delivered.
    pub fn is_pending(&self) -> bool {
        self.outcome.is_some()
    }
}

impl<T> Drop for PendingRequest<T> {
    fn drop(&mut self) {
        if self.outcome.is_some() {
            log::debug!(
                "{} cancelled with {} ticks remaining",
                self.label,
                self.remaining
            );
        }
    }
}

/// Where the login and signup pages send their drafts.
pub trait AuthGateway {
    fn sign_in(&self, credentials: &Credentials) -> PendingRequest<AuthSession>;
    fn sign_up(&self, draft: &SignupDraft) -> PendingRequest<AuthSession>;
}

/// Accepts everything after `delay_ticks`. Placeholder until a real
/// identity service exists.
#[derive(Clone, Debug)]
pub struct StubAuthGateway {
    pub delay_ticks: u32,
}

impl StubAuthGateway {
    pub fn new(delay_ticks: u32) -> Self {
        Self { delay_ticks }
    }
}

impl AuthGateway for StubAuthGateway {
    fn sign_in(&self, credentials: &Credentials) -> PendingRequest<AuthSession> {
        let email = credentials.email.trim().to_string();
        let display_name = email.split('@').next().unwrap_or_default().to_string();
        PendingRequest::new(
            "sign-in",
            self.delay_ticks,
            Ok(AuthSession {
                email,
                display_name,
            }),
        )
    }

    fn sign_up(&self, draft: &SignupDraft) -> PendingRequest<AuthSession> {
        PendingRequest::new(
            "sign-up",
            self.delay_ticks,
            Ok(AuthSession {
                email: draft.email.trim().to_string(),
                display_name: draft.name.trim().to_string(),
            }),
        )
    }
}
