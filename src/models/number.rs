//! Numeric operand type shared by every calculator operation.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;
use thiserror::Error;

/// A calculator operand or result: either an integer or a float.
///
/// Equality and ordering are numeric across variants, so `Int(2)` equals
/// `Float(2.0)`. NaN compares unequal to everything, itself included.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// Error returned when a string is not a single numeric literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid number literal: {input:?}")]
pub struct ParseNumberError {
    input: String,
}

impl Number {
    /// Widen to `f64`. Integers beyond 2^53 lose precision.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Returns `true` for integer zero and for both signed float zeros.
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Int(i), Number::Float(f)) | (Number::Float(f), Number::Int(i)) => {
                cmp_int_float(i, f) == Some(Ordering::Equal)
            }
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Int(i), Number::Float(f)) => cmp_int_float(i, f),
            (Number::Float(f), Number::Int(i)) => cmp_int_float(i, f).map(Ordering::reverse),
        }
    }
}

/// Exact comparison of an integer with a float, without rounding either.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    // 2^63, the first float above i64::MAX
    const BOUND: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return None;
    }
    if f >= BOUND {
        return Some(Ordering::Less);
    }
    if f < -BOUND {
        return Some(Ordering::Greater);
    }
    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(f - whole)),
        ord => Some(ord),
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            // -i64::MIN does not fit
            Number::Int(i) => i
                .checked_neg()
                .map_or(Number::Float(-(i as f64)), Number::Int),
            Number::Float(f) => Number::Float(-f),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            // Debug keeps the trailing `.0` on whole floats.
            Number::Float(x) if x.is_finite() => write!(f, "{x:?}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Ok(Number::Int(i));
        }
        trimmed
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| ParseNumberError {
                input: s.to_string(),
            })
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::Int(i64::from(value))
                }
            }

            impl PartialEq<$t> for Number {
                fn eq(&self, other: &$t) -> bool {
                    *self == Number::from(*other)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide_int {
    ($($t:ty),*) => {
        $(
            /// Values that do not fit in an `i64` become floats.
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    i64::try_from(value).map_or(Number::Float(value as f64), Number::Int)
                }
            }
        )*
    };
}

impl_from_wide_int!(u64, usize, isize);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        *self == Number::Float(*other)
    }
}

impl PartialEq<f32> for Number {
    fn eq(&self, other: &f32) -> bool {
        *self == Number::from(*other)
    }
}
