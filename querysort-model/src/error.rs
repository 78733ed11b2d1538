use std::fmt::{self, Display};

/// Errors produced by model parsing and conversion routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A direction string that is neither `asc` nor `desc`.
    InvalidDirection(String),
    /// Request parameters were built from a JSON value that is not an object.
    NotAnObject,
    /// A request parameter held a nested array or object.
    UnsupportedValue { key: String },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidDirection(raw) => {
                write!(f, "invalid sort direction: {raw:?}")
            }
            ModelError::NotAnObject => {
                write!(f, "request parameters must be a key/value object")
            }
            ModelError::UnsupportedValue { key } => {
                write!(f, "unsupported value for request parameter {key:?}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
