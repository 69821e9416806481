#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Value {
    None,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Decimal(i64, u8),
    String(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl From<Value> for extra_filters::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::None => Self::None,
            Value::Bool(b) => Self::Bool(b),
            Value::Integer(i) => Self::Integer(i),
            Value::Float(f) => Self::Float(f),
            Value::Decimal(m, scale) => {
                Self::Decimal(extra_filters::Decimal::new(m, u32::from(scale % 29)))
            }
            Value::String(s) => Self::String(s),
            Value::List(list) => Self::List(list.into_iter().map(Into::into).collect()),
            Value::Map(map) => Self::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect()),
        }
    }
}

fuzz_target!(|data: (u8, Value, Option<Value>)| {
    let (index, value, arg) = data;
    let library = extra_filters::Library::new();
    let names: Vec<_> = library.names().collect();
    let name = names[usize::from(index) % names.len()];
    if let Ok(result) = library.apply(name, value.into(), arg.map(Into::into)) {
        let _ = extra_filters::fmt::to_string(&result);
    }
});
