use crate::filters::FilterArg;
use crate::{Number, Value};

pub type Result<T> = std::result::Result<T, Error>;

pub enum Error {
    /// When there is a type mismatch.
    Type(
        /// Expected
        &'static str,
        /// Got
        &'static str,
    ),
    /// When a list element has the wrong type.
    Element(
        /// Expected
        &'static str,
        /// Got
        &'static str,
    ),
}

impl FilterArg for Value {
    fn from_value(v: Value) -> Result<Self> {
        Ok(v)
    }
}

impl FilterArg for Number {
    fn from_value(v: Value) -> Result<Self> {
        v.as_number().ok_or_else(|| Error::Type("number", v.human()))
    }
}

impl FilterArg for i64 {
    fn from_value(v: Value) -> Result<Self> {
        match v {
            Value::Integer(i) => Ok(i),
            Value::Bool(b) => Ok(i64::from(b)),
            v => Err(Error::Type("integer", v.human())),
        }
    }
}

impl FilterArg for f64 {
    fn from_value(v: Value) -> Result<Self> {
        match v.as_number() {
            Some(n) => Ok(n.as_f64()),
            None => Err(Error::Type("number", v.human())),
        }
    }
}

impl FilterArg for String {
    fn from_value(v: Value) -> Result<Self> {
        match v {
            Value::String(s) => Ok(s),
            v => Err(Error::Type("string", v.human())),
        }
    }
}

impl FilterArg for Vec<Value> {
    fn from_value(v: Value) -> Result<Self> {
        match v {
            Value::List(l) => Ok(l),
            v => Err(Error::Type("list", v.human())),
        }
    }
}

impl FilterArg for Vec<Number> {
    fn from_value(v: Value) -> Result<Self> {
        match v {
            Value::List(l) => l
                .iter()
                .map(|v| v.as_number().ok_or_else(|| Error::Element("numbers", v.human())))
                .collect(),
            v => Err(Error::Type("list", v.human())),
        }
    }
}

impl<T> FilterArg for Option<T>
where
    T: FilterArg,
{
    fn from_value(v: Value) -> Result<Self> {
        match v {
            Value::None => Ok(None),
            v => T::from_value(v).map(Some),
        }
    }

    fn missing() -> Option<Self> {
        Some(None)
    }
}
