//! Formats filter results for template output.
//!
//! A template engine usually renders a filter result by converting it to a
//! string. The [`default`] formatter implements that conversion for
//! [`Value`], so `3.0` renders as `3.0` and not `3`.

use std::fmt::Write;

use crate::{Error, Number, Result, Value};

/// The default value formatter.
///
/// Values are formatted as follows:
/// - [`Value::None`]: empty string
/// - [`Value::Bool`]: `true` or `false`
/// - [`Value::Integer`]: the integer formatted using [`Display`][std::fmt::Display]
/// - [`Value::Float`]: the float, always with a fractional part, or `inf`,
///   `-inf` or `nan`
/// - [`Value::Decimal`]: the decimal with its scale, e.g. `1.50`
/// - [`Value::String`]: the string, unescaped
/// - [`Value::List`]: the elements in brackets, strings quoted, e.g.
///   `[1, 2.5, 'a']`
///
/// Errors if the value is or contains a [`Value::Map`].
pub fn default<W>(f: &mut W, value: &Value) -> Result<()>
where
    W: Write + ?Sized,
{
    match value {
        Value::None => {}
        Value::Bool(b) => write!(f, "{b}")?,
        Value::String(s) => write!(f, "{s}")?,
        Value::List(list) => format_list(f, list)?,
        value => format_scalar(f, value)?,
    }
    Ok(())
}

/// Formats a value to a new string using the [`default`] formatter.
pub fn to_string(value: &Value) -> Result<String> {
    let mut s = String::new();
    default(&mut s, value)?;
    Ok(s)
}

fn format_list<W>(f: &mut W, list: &[Value]) -> Result<()>
where
    W: Write + ?Sized,
{
    f.write_char('[')?;
    for (i, value) in list.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        match value {
            Value::None => f.write_str("none")?,
            Value::String(s) => write!(f, "'{s}'")?,
            Value::List(list) => format_list(f, list)?,
            value => format_scalar(f, value)?,
        }
    }
    f.write_char(']')?;
    Ok(())
}

fn format_scalar<W>(f: &mut W, value: &Value) -> Result<()>
where
    W: Write + ?Sized,
{
    match value {
        Value::Bool(b) => write!(f, "{b}")?,
        Value::Integer(n) => write!(f, "{n}")?,
        Value::Float(n) => write!(f, "{}", Number::Float(*n))?,
        Value::Decimal(d) => write!(f, "{}", Number::Decimal(*d))?,
        value => {
            return Err(Error::type_(format!(
                "filter returned unformattable type {}",
                value.human()
            )));
        }
    }
    Ok(())
}
