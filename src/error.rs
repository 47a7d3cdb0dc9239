//! Error types for calc-api

use thiserror::Error;

use crate::calculator::VALID_SYMBOLS;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Invalid operation '{operation}'. Supported operations: {}",
        VALID_SYMBOLS.join(", ")
    )]
    InvalidOperation { operation: String },

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn invalid_operation(symbol: impl Into<String>) -> Self {
        Error::InvalidOperation {
            operation: symbol.into(),
        }
    }
}
