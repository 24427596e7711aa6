//! Login validation and sign-in polling.

use std::task::Poll;

use crate::auth::AuthGateway;
use crate::forms::{require, validate_email, Validation};
use crate::pages::Route;

use super::state::{LoginField, LoginState};

pub fn validate(state: &LoginState) -> Validation<LoginField> {
    let mut v = Validation::new();
    v.check(LoginField::Email, validate_email(state.email.value()));
    v.check(LoginField::Password, require(state.password.value()));
    v
}

/// Validate and start a sign-in. Ignored while one is already running.
pub fn submit(state: &mut LoginState, auth: &dyn AuthGateway) {
    if state.is_busy() {
        return;
    }
    let v = validate(state);
    if !v.is_ok() {
        if let Some(first) = v.first_field() {
            state.focus.focus(first);
        }
        state.errors = v;
        return;
    }
    state.errors = Validation::new();
    state.auth_error = None;
    state.focus.blur();
    log::info!("sign-in requested (remember_me={})", state.remember_me);
    state.pending = Some(auth.sign_in(&state.credentials()));
}

/// Advance the in-flight sign-in. Success redirects to the dashboard.
pub fn poll(state: &mut LoginState, delta_ticks: u32) -> Option<Route> {
    let request = state.pending.as_mut()?;
    match request.poll(delta_ticks) {
        Poll::Pending => None,
        Poll::Ready(Ok(session)) => {
            state.pending = None;
            log::info!("signed in as {}", session.email);
            Some(Route::Dashboard)
        }
        Poll::Ready(Err(e)) => {
            state.pending = None;
            log::warn!("sign-in failed: {}", e);
            state.auth_error = Some(e.to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FieldError;

    #[test]
    fn blank_form_reports_both_fields() {
        let v = validate(&LoginState::new());
        assert_eq!(v.for_field(LoginField::Email), Some(&FieldError::Required));
        assert_eq!(v.for_field(LoginField::Password), Some(&FieldError::Required));
    }

    #[test]
    fn credentials_trim_email_only() {
        let mut s = LoginState::new();
        for c in " ada@example.com ".chars() {
            s.email.insert(c);
        }
        for c in " pw ".chars() {
            s.password.insert(c);
        }
        let creds = s.credentials();
        assert_eq!(creds.email, "ada@example.com");
        assert_eq!(creds.password, " pw ");
    }
}
