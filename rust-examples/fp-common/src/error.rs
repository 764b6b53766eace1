use thiserror::Error;

/// Errors raised by the fallible helpers in this crate.
///
/// The core combinators (`reduce`, `map`, `filter`, `pipe`) cannot fail; these
/// variants belong to record access and the checked helpers built on top.
#[derive(Debug, Error)]
pub enum FpError {
    #[error("missing field `{name}`")]
    MissingField { name: String },

    #[error("field `{field}` holds {found}, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FpError>;
