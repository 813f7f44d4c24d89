//! The four elementary arithmetic operations.
//!
//! All functions are pure. Integer operands stay integers for `add`,
//! `subtract` and `multiply` as long as the result fits in an `i64`;
//! on overflow, or when either operand is a float, the operation is
//! carried out in `f64`. `divide` is true division and always returns a
//! float, so `divide(5, 2)` is `2.5`.

use tracing::debug;

use crate::error::{CalcError, Result};
use crate::models::{Number, Operation};

/// Returns `a + b`.
pub fn add(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    let (a, b) = (a.into(), b.into());
    trace(Operation::Add, a, b);
    combine(a, b, i64::checked_add, |x, y| x + y)
}

/// Returns `a - b`.
pub fn subtract(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    let (a, b) = (a.into(), b.into());
    trace(Operation::Subtract, a, b);
    combine(a, b, i64::checked_sub, |x, y| x - y)
}

/// Returns `a * b`.
pub fn multiply(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    let (a, b) = (a.into(), b.into());
    trace(Operation::Multiply, a, b);
    combine(a, b, i64::checked_mul, |x, y| x * y)
}

/// Returns `a / b`.
///
/// # Errors
///
/// Returns [`CalcError::DivisionByZero`] when `b` is zero (`0`, `0.0` or
/// `-0.0`).
pub fn divide(a: impl Into<Number>, b: impl Into<Number>) -> Result<Number> {
    let (a, b) = (a.into(), b.into());
    trace(Operation::Divide, a, b);
    if b.is_zero() {
        return Err(CalcError::DivisionByZero { dividend: a });
    }
    Ok(Number::Float(a.as_f64() / b.as_f64()))
}

fn trace(op: Operation, a: Number, b: Number) {
    debug!(%op, "{a} {} {b}", op.symbol());
}

fn combine(
    a: Number,
    b: Number,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Number {
    if let (Number::Int(x), Number::Int(y)) = (a, b) {
        if let Some(r) = int_op(x, y) {
            return Number::Int(r);
        }
    }
    Number::Float(float_op(a.as_f64(), b.as_f64()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_integers() {
        assert_eq!(add(1, 2), 3);
        assert_eq!(add(-1, 1), 0);
        assert!(matches!(add(1, 2), Number::Int(3)));
    }

    #[test]
    fn subtract_integers() {
        assert_eq!(subtract(2, 1), 1);
        assert_eq!(subtract(0, 1), -1);
    }

    #[test]
    fn multiply_integers() {
        assert_eq!(multiply(2, 3), 6);
        assert_eq!(multiply(-1, 2), -2);
    }

    #[test]
    fn divide_is_true_division() {
        assert_eq!(divide(6, 3).unwrap(), 2);
        assert_eq!(divide(5, 2).unwrap(), 2.5);
        assert!(matches!(divide(6, 3), Ok(Number::Float(_))));
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        assert_eq!(
            divide(1, 0),
            Err(CalcError::DivisionByZero {
                dividend: Number::Int(1)
            })
        );
        assert!(divide(1.5, 0.0).is_err());
        assert!(divide(0, -0.0).is_err());
    }

    #[test]
    fn mixed_operands_use_floats() {
        assert!(matches!(add(1, 0.5), Number::Float(f) if f == 1.5));
        assert_eq!(multiply(2.5, 4), 10);
    }

    #[test]
    fn integer_overflow_widens_to_float() {
        assert!(matches!(add(i64::MAX, 1), Number::Float(_)));
        assert!(matches!(subtract(i64::MIN, 1), Number::Float(_)));
        assert!(matches!(multiply(i64::MAX, 2), Number::Float(_)));
        assert_eq!(add(i64::MAX, 1), i64::MAX as f64 + 1.0);
    }

    #[test]
    fn integer_results_keep_full_precision() {
        let two_53 = 1_i64 << 53;
        let sum = add(two_53, 1);
        assert!(matches!(sum, Number::Int(n) if n == two_53 + 1));
        assert_ne!(sum, Number::Float(two_53 as f64));
        assert!(sum > Number::Float(two_53 as f64));
    }

    #[test]
    fn accepts_collection_lengths() {
        let items = vec!["a", "b", "c"];
        assert_eq!(add(items.len(), 1), 4);
    }

    #[test]
    fn float_specials_propagate() {
        assert_eq!(add(f64::INFINITY, 1), f64::INFINITY);
        assert!(matches!(multiply(f64::NAN, 2), Number::Float(f) if f.is_nan()));
        assert!(matches!(divide(1, f64::NAN), Ok(Number::Float(f)) if f.is_nan()));
    }
}
