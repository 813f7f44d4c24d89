//! The four arithmetic operations as a value.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::calculator;
use crate::error::Result;
use crate::models::Number;

/// One of the four elementary arithmetic operations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// The infix symbol conventionally used for this operation.
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    /// Whether swapping the operands leaves the result unchanged.
    pub fn is_commutative(self) -> bool {
        matches!(self, Operation::Add | Operation::Multiply)
    }

    /// Apply the operation to two operands. Only `Divide` can fail.
    pub fn apply(self, a: impl Into<Number>, b: impl Into<Number>) -> Result<Number> {
        match self {
            Operation::Add => Ok(calculator::add(a, b)),
            Operation::Subtract => Ok(calculator::subtract(a, b)),
            Operation::Multiply => Ok(calculator::multiply(a, b)),
            Operation::Divide => calculator::divide(a, b),
        }
    }
}
