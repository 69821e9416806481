//! Builtin string filters.

use crate::{Error, Library, Result, Value};

pub(crate) fn register(library: &mut Library<'_>) {
    library.add_filter("reverse", "Reverse a string or a list.", reverse);
}

/// Reverses a string or a list.
///
/// Strings are reversed by character.
#[cfg_attr(docsrs, doc(cfg(feature = "builtins")))]
pub fn reverse(value: Value) -> Result<Value> {
    match value {
        Value::String(string) => Ok(Value::String(string.chars().rev().collect())),
        Value::List(list) => Ok(Value::List(list.into_iter().rev().collect())),
        value => Err(Error::type_(format!(
            "filter expected string or list value, found {}",
            value.human()
        ))),
    }
}
