//! Text inputs, focus handling and field-level validation shared by the
//! login, signup, contact and profile pages.
//!
//! Validation runs on submit only. A failed submit produces a
//! [`Validation`] that maps each offending field to one [`FieldError`];
//! pages render those inline next to the field.

use thiserror::Error;

use crate::flow::debounce::Debouncer;
use crate::input::InputEvent;

/// A single-line text input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextField {
    value: String,
    max_len: usize,
    masked: bool,
}

impl TextField {
    pub fn new(max_len: usize) -> Self {
        Self {
            value: String::new(),
            max_len,
            masked: false,
        }
    }

    /// A password input. Rendered as bullets unless revealed.
    pub fn password(max_len: usize) -> Self {
        Self {
            masked: true,
            ..Self::new(max_len)
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Append a character. Control characters and input past `max_len` are
    /// rejected.
    pub fn insert(&mut self, c: char) -> bool {
        if c.is_control() || self.value.chars().count() >= self.max_len {
            return false;
        }
        self.value.push(c);
        true
    }

    pub fn backspace(&mut self) -> bool {
        self.value.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Text to draw. Masked fields show one bullet per character unless
    /// `reveal` is set.
    pub fn display(&self, reveal: bool) -> String {
        if self.masked && !reveal {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// Why a single form field was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required")]
    Required,

    #[error("Enter a valid email address")]
    InvalidEmail,

    #[error("Must be a whole number")]
    NotANumber,

    #[error("Must be between {min} and {max}")]
    OutOfRange { min: u32, max: u32 },

    #[error("Passwords do not match")]
    Mismatch,

    #[error("You must accept the Terms of Service")]
    TermsNotAccepted,

    #[error("Select at least {min} interests ({got} selected)")]
    TooFewInterests { min: usize, got: usize },

    #[error("Please choose an option")]
    NotSelected,
}

/// Outcome of validating a whole form: at most one error per field, in the
/// order the checks ran.
#[derive(Clone, Debug, PartialEq)]
pub struct Validation<F> {
    errors: Vec<(F, FieldError)>,
}

impl<F: Copy + PartialEq> Validation<F> {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record the result of one check against `field`. A field that already
    /// failed keeps its first error.
    pub fn check(&mut self, field: F, result: Result<(), FieldError>) {
        if let Err(e) = result {
            if self.for_field(field).is_none() {
                self.errors.push((field, e));
            }
        }
    }

    pub fn for_field(&self, field: F) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, e)| e)
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First failing field, used to move focus after a rejected submit.
    pub fn first_field(&self) -> Option<F> {
        self.errors.first().map(|(f, _)| *f)
    }
}

impl<F: Copy + PartialEq> Default for Validation<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyboard focus over a fixed list of fields. `None` means nothing is
/// focused and character keys act as page shortcuts.
#[derive(Clone, Debug)]
pub struct FocusRing<F: 'static> {
    order: &'static [F],
    current: Option<usize>,
}

impl<F: Copy + PartialEq + 'static> FocusRing<F> {
    pub fn new(order: &'static [F]) -> Self {
        Self {
            order,
            current: None,
        }
    }

    pub fn focused(&self) -> Option<F> {
        self.current.and_then(|i| self.order.get(i).copied())
    }

    /// Move to the next field, wrapping around. From "nothing focused" this
    /// lands on the first field.
    pub fn next(&mut self) {
        if self.order.is_empty() {
            return;
        }
        self.current = Some(match self.current {
            Some(i) => (i + 1) % self.order.len(),
            None => 0,
        });
    }

    pub fn focus(&mut self, field: F) {
        if let Some(i) = self.order.iter().position(|f| *f == field) {
            self.current = Some(i);
        }
    }

    pub fn blur(&mut self) {
        self.current = None;
    }

    /// Tab moves to the next field; Esc leaves the focused one. Returns true
    /// if the event was a focus change.
    pub fn handle_nav(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Tab => {
                self.next();
                true
            }
            InputEvent::Esc if self.current.is_some() => {
                self.blur();
                true
            }
            _ => false,
        }
    }
}

/// Apply a typing event to `field`. Returns true if the event was an edit.
pub fn apply_edit(field: &mut TextField, event: &InputEvent) -> bool {
    match event {
        InputEvent::Key(c) => {
            field.insert(*c);
            true
        }
        InputEvent::Backspace => {
            field.backspace();
            true
        }
        _ => false,
    }
}

// ── Search box ──────────────────────────────────────────────────────

/// A search input whose applied query trails typing by a quiet window.
///
/// Every edit restarts the window; only the text present when it elapses
/// becomes the applied query. Filters read [`SearchBox::applied`], never the
/// live text.
#[derive(Clone, Debug)]
pub struct SearchBox {
    text: TextField,
    debouncer: Debouncer<String>,
    applied: String,
    focused: bool,
}

impl SearchBox {
    pub fn new(max_len: usize, quiet_ticks: u32) -> Self {
        Self {
            text: TextField::new(max_len),
            debouncer: Debouncer::new(quiet_ticks),
            applied: String::new(),
            focused: false,
        }
    }

    pub fn text(&self) -> &TextField {
        &self.text
    }

    pub fn applied(&self) -> &str {
        &self.applied
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// True while typed text has not been applied yet.
    pub fn is_settling(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Apply a typing event and restart the quiet window.
    pub fn handle_edit(&mut self, event: &InputEvent) -> bool {
        if !apply_edit(&mut self.text, event) {
            return false;
        }
        self.debouncer.push(self.text.value().to_string());
        true
    }

    /// Advance time. Returns the newly applied query, if one was released.
    pub fn tick(&mut self, delta_ticks: u32) -> Option<&str> {
        let query = self.debouncer.tick(delta_ticks)?;
        self.applied = query;
        Some(&self.applied)
    }

    /// Empty the input and the applied query, dropping any pending value.
    pub fn clear(&mut self) {
        self.text.clear();
        self.debouncer.cancel();
        self.applied.clear();
    }
}

// ── Field rules ─────────────────────────────────────────────────────

pub fn require(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(())
    }
}

/// Required, then one `@` with a non-empty local part and a dotted domain.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    require(value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(FieldError::InvalidEmail);
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(FieldError::InvalidEmail);
    };
    let domain_ok = domain
        .split_once('.')
        .is_some_and(|(head, tail)| !head.is_empty() && !tail.is_empty());
    if local.is_empty() || !domain_ok {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// Optional whole number in `min..=max`. Blank input is `Ok(None)`.
pub fn parse_optional_in_range(value: &str, min: u32, max: u32) -> Result<Option<u32>, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let n: u32 = value.parse().map_err(|_| FieldError::NotANumber)?;
    if n < min || n > max {
        return Err(FieldError::OutOfRange { min, max });
    }
    Ok(Some(n))
}

pub fn require_choice<T>(choice: &Option<T>) -> Result<(), FieldError> {
    if choice.is_some() {
        Ok(())
    } else {
        Err(FieldError::NotSelected)
    }
}
