//! Turns loosely typed template values into numbers.

use crate::{Error, Result, Value};

/// Coerces a value into a number or a list of numbers.
///
/// - [`Value::None`], [`Value::Bool`], [`Value::Integer`], [`Value::Float`]
///   and [`Value::Decimal`] are returned unchanged.
/// - [`Value::List`] is coerced element-wise, preserving order.
/// - [`Value::String`] is parsed as an integer first and as a float if that
///   fails. Text that is neither is an error.
/// - [`Value::Map`] can not be coerced.
///
/// Note that the result type depends on the textual form: `"5"` becomes an
/// integer while `"5.0"` becomes a float.
///
/// # Examples
///
/// ```
/// use extra_filters::{coerce, Value};
///
/// assert_eq!(coerce(Value::from("42"))?, Value::Integer(42));
/// assert_eq!(coerce(Value::from("3.14"))?, Value::Float(3.14));
/// assert!(coerce(Value::from("abc")).is_err());
/// # Ok::<(), extra_filters::Error>(())
/// ```
pub fn coerce(value: Value) -> Result<Value> {
    tracing::debug!(kind = value.human(), "coercing value");
    match value {
        v @ (Value::None
        | Value::Bool(_)
        | Value::Integer(_)
        | Value::Float(_)
        | Value::Decimal(_)) => Ok(v),
        Value::List(list) => list
            .into_iter()
            .map(coerce)
            .collect::<Result<_>>()
            .map(Value::List),
        Value::String(s) => parse(&s),
        Value::Map(_) => Err(Error::coerce("cannot coerce map to a number")),
    }
}

/// Parses text as an integer, falling back to a float.
///
/// Surrounding whitespace is ignored and single underscores may separate
/// digits, so `" 1_000 "` parses as `1000`.
pub fn parse(s: &str) -> Result<Value> {
    let err = || Error::coerce(format!("could not convert string to number: '{}'", s));
    let text = strip_separators(s.trim()).ok_or_else(err)?;
    if let Ok(i) = text.parse::<i64>() {
        return Ok(Value::Integer(i));
    }
    match text.parse::<f64>() {
        Ok(f) => Ok(Value::Float(f)),
        Err(_) => Err(err()),
    }
}

/// Removes single underscores placed between two digits.
///
/// Returns `None` if an underscore appears anywhere else.
fn strip_separators(text: &str) -> Option<String> {
    if !text.contains('_') {
        return Some(text.to_owned());
    }
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let prev = i.checked_sub(1).and_then(|j| chars.get(j));
            let next = chars.get(i + 1);
            match (prev, next) {
                (Some(p), Some(n)) if p.is_ascii_digit() && n.is_ascii_digit() => continue,
                _ => return None,
            }
        }
        out.push(c);
    }
    Some(out)
}
