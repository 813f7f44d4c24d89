//! calculator — four-function arithmetic and a hello-world program (library crate).
//!
//! Re-exports public modules for integration tests and the `hello_world` binary.

pub mod calculator;
pub mod constants;
pub mod env;
pub mod error;
pub mod greeting;
pub mod logging;
pub mod models;

pub use calculator::{add, divide, multiply, subtract};
pub use error::{CalcError, Result};
pub use models::{Number, Operation};
