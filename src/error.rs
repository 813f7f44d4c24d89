//! Error types for calculator operations.

use thiserror::Error;

use crate::models::Number;

/// Errors produced by calculator operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// The divisor of a division was zero.
    #[error("division by zero: cannot divide {dividend} by zero")]
    DivisionByZero { dividend: Number },
}

/// Result alias used by fallible calculator operations.
pub type Result<T> = std::result::Result<T, CalcError>;
