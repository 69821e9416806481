use extra_filters::{Library, Value};

use crate::context;

#[test]
fn random_context_is_summable() {
    let ctx = context::random(10);
    let value = match context::to_value(&ctx) {
        Value::Map(mut map) => map.remove("prices").unwrap(),
        v => panic!("expected map, found {:?}", v),
    };
    let library = Library::new();
    assert!(matches!(library.apply("fsum", value.clone(), None), Ok(Value::Float(_))));
    assert!(matches!(library.apply("sum", value, None), Ok(Value::Float(_))));
}
