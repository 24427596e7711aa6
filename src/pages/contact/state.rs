//! Contact form draft.

use crate::forms::{FocusRing, TextField, Validation};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

pub static FIELD_ORDER: [ContactField; 4] = [
    ContactField::Name,
    ContactField::Email,
    ContactField::Subject,
    ContactField::Message,
];

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Full Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Enter your full name",
            ContactField::Email => "Enter your email",
            ContactField::Subject => "Brief subject line",
            ContactField::Message => "Tell us how we can help you...",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactCategory {
    General,
    Assessment,
    CareerAdvice,
    Technical,
    Partnership,
    Feedback,
}

pub const CATEGORIES: [ContactCategory; 6] = [
    ContactCategory::General,
    ContactCategory::Assessment,
    ContactCategory::CareerAdvice,
    ContactCategory::Technical,
    ContactCategory::Partnership,
    ContactCategory::Feedback,
];

impl ContactCategory {
    pub fn label(self) -> &'static str {
        match self {
            ContactCategory::General => "General Inquiry",
            ContactCategory::Assessment => "Assessment Help",
            ContactCategory::CareerAdvice => "Career Advice",
            ContactCategory::Technical => "Technical Support",
            ContactCategory::Partnership => "Partnership",
            ContactCategory::Feedback => "Feedback",
        }
    }
}

pub const THANK_YOU: &str = "Thank you for your message! We'll get back to you within 24 hours.";

pub struct ContactState {
    pub name: TextField,
    pub email: TextField,
    pub subject: TextField,
    pub message: TextField,
    /// Optional; an unset category is sent as a general inquiry.
    pub category: Option<ContactCategory>,
    pub focus: FocusRing<ContactField>,
    pub errors: Validation<ContactField>,
    pub notice: Option<&'static str>,
}

impl ContactState {
    pub fn new() -> Self {
        Self {
            name: TextField::new(60),
            email: TextField::new(80),
            subject: TextField::new(80),
            message: TextField::new(1000),
            category: None,
            focus: FocusRing::new(&FIELD_ORDER),
            errors: Validation::new(),
            notice: None,
        }
    }

    pub fn field(&self, field: ContactField) -> &TextField {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut TextField {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// Back to an empty draft. The thank-you notice survives.
    pub fn reset(&mut self) {
        for f in FIELD_ORDER {
            self.field_mut(f).clear();
        }
        self.category = None;
        self.focus.blur();
        self.errors = Validation::new();
    }
}
