//! Defines the [`Value`] enum, representing any value a template can pass to
//! a filter, and the coerced [`Number`] scalar.

mod from;
mod number;
#[cfg(feature = "serde")]
mod ser;

pub use std::collections::BTreeMap as Map;
use std::mem;
pub use std::vec::Vec as List;

pub use rust_decimal::Decimal;

pub use crate::value::number::Number;

/// Loosely typed template data represented as a recursive enum.
///
/// Values usually originate from a template context, so a number may just as
/// well arrive as [`Value::String`]. The [`coerce`][crate::coerce] function
/// turns such values into one of the numeric variants.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absent marker.
    None,
    Bool(bool),
    Integer(i64),
    Float(f64),
    /// An arbitrary precision decimal.
    Decimal(Decimal),
    String(String),
    List(List<Value>),
    Map(Map<String, Value>),
}

impl Default for Value {
    fn default() -> Self {
        Self::None
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(s), Self::Bool(o)) => s == o,
            (Self::Integer(s), Self::Integer(o)) => s == o,
            (Self::Float(s), Self::Float(o)) => s == o,
            (Self::Decimal(s), Self::Decimal(o)) => s == o,
            (Self::String(s), Self::String(o)) => s == o,
            (Self::List(s), Self::List(o)) => s == o,
            (Self::Map(s), Self::Map(o)) => s == o,
            _ => mem::discriminant(self) == mem::discriminant(other),
        }
    }
}

impl Value {
    /// Returns a human readable name for the type of this value.
    pub fn human(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Returns `true` if this is the absent marker.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns the scalar number held by this value, if any.
    ///
    /// Booleans are treated as the integers `0` and `1`.
    pub fn as_number(&self) -> Option<Number> {
        match *self {
            Value::Bool(b) => Some(Number::Integer(i64::from(b))),
            Value::Integer(i) => Some(Number::Integer(i)),
            Value::Float(f) => Some(Number::Float(f)),
            Value::Decimal(d) => Some(Number::Decimal(d)),
            _ => None,
        }
    }
}
