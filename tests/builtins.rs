#![cfg(feature = "builtins")]

use extra_filters::{ErrorKind, Library, Value};

#[test]
fn reverse_string() {
    let result = Library::new()
        .apply("reverse", Value::from("hello"), None)
        .unwrap();
    assert_eq!(result, Value::from("olleh"));
}

#[test]
fn reverse_string_by_char() {
    let result = Library::new()
        .apply("reverse", Value::from("añb"), None)
        .unwrap();
    assert_eq!(result, Value::from("bña"));
}

#[test]
fn reverse_list() {
    let result = Library::new()
        .apply("reverse", Value::from(vec![1, 2, 3]), None)
        .unwrap();
    assert_eq!(result, Value::from(vec![3, 2, 1]));
}

#[test]
fn reverse_does_not_coerce() {
    let result = Library::new()
        .render("reverse", Value::from("12"), None)
        .unwrap();
    assert_eq!(result, "21");
}

#[test]
fn reverse_err_integer() {
    let err = Library::new()
        .apply("reverse", Value::from(12), None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(
        err.to_string(),
        "filter `reverse`: filter expected string or list value, found integer"
    );
}

#[test]
fn reverse_err_argument() {
    let err = Library::new()
        .apply("reverse", Value::from("ab"), Some(Value::from(1)))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Arity);
}
