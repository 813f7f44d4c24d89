//! Value types shared by the calculator functions.

pub mod number;
pub mod operation;

pub use number::{Number, ParseNumberError};
pub use operation::Operation;
