//! Startup error types.
//!
//! Everything that can go wrong before the first frame is drawn ends up in
//! [`AppError`]. Form validation problems are not errors in this sense; they
//! live in [`crate::forms::FieldError`] and never abort anything.

use thiserror::Error;

/// A bundled JSON fixture that failed to parse or validate.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("{file}: malformed JSON: {source}")]
    Malformed {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{file}: fixture is empty")]
    Empty { file: &'static str },

    #[error("{file}: duplicate id {id}")]
    DuplicateId { file: &'static str, id: u32 },

    #[error("{file}: record {id} has an empty {field}")]
    EmptyField {
        file: &'static str,
        id: u32,
        field: &'static str,
    },

    #[error("{file}: record {id} has {field} = {value}, expected {min}..={max}")]
    OutOfRange {
        file: &'static str,
        id: u32,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Invalid values in `assets/config.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config.json: malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("config.json: {field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("config.json: unknown log level {0:?}")]
    UnknownLogLevel(String),
}

/// Fatal startup failure. Shown full-screen instead of the site.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load fixture: {0}")]
    Fixture(#[from] FixtureError),

    #[error("logger already installed")]
    Logger(#[from] log::SetLoggerError),
}
