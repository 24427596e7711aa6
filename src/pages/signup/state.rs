//! Signup form state, including the in-flight account creation.

use crate::auth::{AuthSession, PendingRequest, SignupDraft};
use crate::forms::{FocusRing, TextField, Validation};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupField {
    Name,
    Email,
    Password,
    Confirm,
    /// The terms checkbox. Never focused; only carries an error.
    Terms,
}

pub static FIELD_ORDER: [SignupField; 4] = [
    SignupField::Name,
    SignupField::Email,
    SignupField::Password,
    SignupField::Confirm,
];

impl SignupField {
    pub fn label(self) -> &'static str {
        match self {
            SignupField::Name => "Full Name",
            SignupField::Email => "Email",
            SignupField::Password => "Password",
            SignupField::Confirm => "Confirm",
            SignupField::Terms => "Terms",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            SignupField::Name => "John Doe",
            SignupField::Email => "you@example.com",
            SignupField::Password => "Create a password",
            SignupField::Confirm => "Re-enter your password",
            SignupField::Terms => "",
        }
    }
}

pub struct SignupState {
    pub name: TextField,
    pub email: TextField,
    pub password: TextField,
    pub confirm: TextField,
    pub reveal_password: bool,
    pub reveal_confirm: bool,
    pub accepted_terms: bool,
    pub focus: FocusRing<SignupField>,
    pub errors: Validation<SignupField>,
    pub pending: Option<PendingRequest<AuthSession>>,
    pub auth_error: Option<String>,
}

impl SignupState {
    pub fn new() -> Self {
        Self {
            name: TextField::new(60),
            email: TextField::new(80),
            password: TextField::password(64),
            confirm: TextField::password(64),
            reveal_password: false,
            reveal_confirm: false,
            accepted_terms: false,
            focus: FocusRing::new(&FIELD_ORDER),
            errors: Validation::new(),
            pending: None,
            auth_error: None,
        }
    }

    /// The text input behind `field`; `None` for the checkbox.
    pub fn field(&self, field: SignupField) -> Option<&TextField> {
        match field {
            SignupField::Name => Some(&self.name),
            SignupField::Email => Some(&self.email),
            SignupField::Password => Some(&self.password),
            SignupField::Confirm => Some(&self.confirm),
            SignupField::Terms => None,
        }
    }

    pub fn field_mut(&mut self, field: SignupField) -> Option<&mut TextField> {
        match field {
            SignupField::Name => Some(&mut self.name),
            SignupField::Email => Some(&mut self.email),
            SignupField::Password => Some(&mut self.password),
            SignupField::Confirm => Some(&mut self.confirm),
            SignupField::Terms => None,
        }
    }

    pub fn is_revealed(&self, field: SignupField) -> bool {
        match field {
            SignupField::Password => self.reveal_password,
            SignupField::Confirm => self.reveal_confirm,
            _ => true,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.as_ref().is_some_and(|req| req.is_pending())
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() {
            "Creating Account..."
        } else {
            "Create Account"
        }
    }

    pub fn draft(&self) -> SignupDraft {
        SignupDraft {
            name: self.name.value().trim().to_string(),
            email: self.email.value().trim().to_string(),
            password: self.password.value().to_string(),
            confirm_password: self.confirm.value().to_string(),
            accepted_terms: self.accepted_terms,
        }
    }
}
