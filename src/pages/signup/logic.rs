//! Signup validation and account-creation polling.

use std::task::Poll;

use crate::auth::AuthGateway;
use crate::forms::{require, validate_email, FieldError, Validation};
use crate::pages::Route;

use super::state::{SignupField, SignupState};

pub fn validate(state: &SignupState) -> Validation<SignupField> {
    let mut v = Validation::new();
    v.check(SignupField::Name, require(state.name.value()));
    v.check(SignupField::Email, validate_email(state.email.value()));
    v.check(SignupField::Password, require(state.password.value()));
    v.check(SignupField::Confirm, require(state.confirm.value()));
    if state.confirm.value() != state.password.value() {
        v.check(SignupField::Confirm, Err(FieldError::Mismatch));
    }
    if !state.accepted_terms {
        v.check(SignupField::Terms, Err(FieldError::TermsNotAccepted));
    }
    v
}

/// Validate and start account creation. Ignored while one is running.
pub fn submit(state: &mut SignupState, auth: &dyn AuthGateway) {
    if state.is_busy() {
        return;
    }
    let v = validate(state);
    if !v.is_ok() {
        match v.first_field() {
            Some(SignupField::Terms) | None => state.focus.blur(),
            Some(first) => state.focus.focus(first),
        }
        state.errors = v;
        return;
    }
    state.errors = Validation::new();
    state.auth_error = None;
    state.focus.blur();
    log::info!("sign-up requested");
    state.pending = Some(auth.sign_up(&state.draft()));
}

/// Advance the in-flight sign-up. Success continues to the profile.
pub fn poll(state: &mut SignupState, delta_ticks: u32) -> Option<Route> {
    let request = state.pending.as_mut()?;
    match request.poll(delta_ticks) {
        Poll::Pending => None,
        Poll::Ready(Ok(session)) => {
            state.pending = None;
            log::info!("account created for {}", session.display_name);
            Some(Route::Profile)
        }
        Poll::Ready(Err(e)) => {
            state.pending = None;
            log::warn!("sign-up failed: {}", e);
            state.auth_error = Some(e.to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(field: &mut crate::forms::TextField, text: &str) {
        field.clear();
        for c in text.chars() {
            field.insert(c);
        }
    }

    fn valid() -> SignupState {
        let mut s = SignupState::new();
        set(&mut s.name, "Ada");
        set(&mut s.email, "ada@example.com");
        set(&mut s.password, "pw123");
        set(&mut s.confirm, "pw123");
        s.accepted_terms = true;
        s
    }

    #[test]
    fn valid_draft_passes() {
        assert!(validate(&valid()).is_ok());
    }

    #[test]
    fn mismatched_confirmation() {
        let mut s = valid();
        set(&mut s.confirm, "pw124");
        let v = validate(&s);
        assert_eq!(v.len(), 1);
        assert_eq!(v.for_field(SignupField::Confirm), Some(&FieldError::Mismatch));
    }

    #[test]
    fn blank_confirmation_is_required_not_mismatch() {
        let mut s = valid();
        s.confirm.clear();
        assert_eq!(
            validate(&s).for_field(SignupField::Confirm),
            Some(&FieldError::Required)
        );
    }

    #[test]
    fn terms_must_be_accepted() {
        let mut s = valid();
        s.accepted_terms = false;
        let v = validate(&s);
        assert_eq!(v.for_field(SignupField::Terms), Some(&FieldError::TermsNotAccepted));
    }

    #[test]
    fn terms_error_alone_leaves_focus_free() {
        let mut s = valid();
        s.accepted_terms = false;
        s.focus.focus(SignupField::Email);
        submit(&mut s, &crate::auth::StubAuthGateway::new(1));
        assert_eq!(s.focus.focused(), None);
        assert!(!s.is_busy());
    }
}
