//! Contact form validation and submission.

use crate::forms::{require, validate_email, Validation};

use super::state::{ContactField, ContactState, THANK_YOU};

pub fn validate(state: &ContactState) -> Validation<ContactField> {
    let mut v = Validation::new();
    v.check(ContactField::Name, require(state.name.value()));
    v.check(ContactField::Email, validate_email(state.email.value()));
    v.check(ContactField::Subject, require(state.subject.value()));
    v.check(ContactField::Message, require(state.message.value()));
    v
}

/// Validate and "send" the draft. Returns true if it was accepted.
pub fn submit(state: &mut ContactState) -> bool {
    let v = validate(state);
    if !v.is_ok() {
        log::debug!("contact form rejected: {} field errors", v.len());
        if let Some(first) = v.first_field() {
            state.focus.focus(first);
        }
        state.errors = v;
        state.notice = None;
        return false;
    }
    let category = state.category.map(|c| c.label()).unwrap_or("General Inquiry");
    log::info!(
        "contact message sent: category={} subject_len={} message_len={}",
        category,
        state.subject.value().chars().count(),
        state.message.value().chars().count()
    );
    state.reset();
    state.notice = Some(THANK_YOU);
    true
}
