//! Login form state, including the in-flight sign-in.

use crate::auth::{AuthSession, Credentials, PendingRequest};
use crate::forms::{FocusRing, TextField, Validation};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

pub static FIELD_ORDER: [LoginField; 2] = [LoginField::Email, LoginField::Password];

pub struct LoginState {
    pub email: TextField,
    pub password: TextField,
    pub reveal_password: bool,
    pub remember_me: bool,
    pub focus: FocusRing<LoginField>,
    pub errors: Validation<LoginField>,
    /// Set while a sign-in is in flight. Dropped with the page.
    pub pending: Option<PendingRequest<AuthSession>>,
    /// Message from a rejected sign-in.
    pub auth_error: Option<String>,
}

impl LoginState {
    pub fn new() -> Self {
        Self {
            email: TextField::new(80),
            password: TextField::password(64),
            reveal_password: false,
            remember_me: false,
            focus: FocusRing::new(&FIELD_ORDER),
            errors: Validation::new(),
            pending: None,
            auth_error: None,
        }
    }

    pub fn field_mut(&mut self, field: LoginField) -> &mut TextField {
        match field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.as_ref().is_some_and(|req| req.is_pending())
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() {
            "Signing in..."
        } else {
            "Sign In"
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.value().trim().to_string(),
            password: self.password.value().to_string(),
            remember_me: self.remember_me,
        }
    }
}
