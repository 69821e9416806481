use std::cmp::Ordering;
use std::fmt;

use rust_decimal::prelude::{ToPrimitive, Zero};
use rust_decimal::Decimal;

use crate::Value;

/// A coerced scalar number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Decimal(Decimal),
}

impl Number {
    /// Returns a human readable name for the type of this number.
    pub fn human(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Decimal(_) => "decimal",
        }
    }

    /// Returns the integer if this is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Self::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// Returns `true` if this is an integer.
    ///
    /// Integral floats and decimals are *not* integers.
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Converts this number to the nearest float.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Integer(i) => i as f64,
            Self::Float(f) => f,
            Self::Decimal(d) => d.to_f64().unwrap_or(f64::NAN),
        }
    }

    /// Compares this number with zero.
    ///
    /// Returns `None` for NaN.
    pub fn cmp_zero(&self) -> Option<Ordering> {
        match *self {
            Self::Integer(i) => Some(i.cmp(&0)),
            Self::Float(f) => f.partial_cmp(&0.0),
            Self::Decimal(d) => Some(d.cmp(&Decimal::zero())),
        }
    }

    /// Returns `true` if this number is less than zero.
    pub fn is_negative(&self) -> bool {
        self.cmp_zero() == Some(Ordering::Less)
    }

    /// Returns `true` if this number is less than or equal to zero.
    pub fn is_non_positive(&self) -> bool {
        matches!(self.cmp_zero(), Some(Ordering::Less | Ordering::Equal))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(n) => fmt_float(f, *n),
            Self::Decimal(d) => write!(f, "{d}"),
        }
    }
}

/// Formats a float the way template output expects it: integral values keep
/// a trailing `.0`, non-finite values are lowercase, and very large or small
/// magnitudes use a signed exponent of at least two digits (`1e+16`, `1e-05`).
fn fmt_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return write!(f, "nan");
    }
    if n.is_infinite() {
        return write!(f, "{}", if n > 0.0 { "inf" } else { "-inf" });
    }
    // `{:e}` gives the shortest round-trip digits, e.g. `1.5e20` or `1e-5`
    let sci = format!("{n:e}");
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if n != 0.0 && !(-4..16).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exp.abs())
    } else if n.fract() == 0.0 {
        write!(f, "{n:.1}")
    } else {
        write!(f, "{n}")
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Integer(i) => Self::Integer(i),
            Number::Float(f) => Self::Float(f),
            Number::Decimal(d) => Self::Decimal(d),
        }
    }
}
