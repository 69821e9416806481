use extra_filters::{ErrorKind, Library, Value};

const MATH_FILTERS: &[&str] = &[
    "abs", "ceil", "copysign", "exp", "expm1", "factorial", "floor", "fmod", "fsum", "gcd",
    "isqrt", "lcm", "ldexp", "log", "log10", "log1p", "log2", "mod", "perm", "pow", "sqrt",
    "sum", "trunc",
];

#[test]
fn library_new_registers_math_filters() {
    let library = Library::new();
    for name in MATH_FILTERS {
        let def = library.get(name).unwrap_or_else(|| panic!("missing `{}`", name));
        assert_eq!(def.name(), *name);
        assert!(!def.description().is_empty(), "`{}` has no description", name);
    }
}

#[test]
fn library_names_are_sorted() {
    let library = Library::new();
    let names: Vec<_> = library.names().collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[cfg(feature = "builtins")]
#[test]
fn library_new_registers_builtins() {
    let library = Library::new();
    let names: Vec<_> = library.names().collect();
    assert!(names.contains(&"reverse"));
    assert_eq!(names.len(), MATH_FILTERS.len() + 1);
}

#[test]
fn library_empty() {
    let library = Library::empty();
    assert_eq!(library.names().count(), 0);
    assert!(library.get("sqrt").is_none());
}

#[test]
fn library_add_filter_replaces() {
    let mut library = Library::new();
    library.add_numeric_filter("abs", "Always one", |_: f64| 1);
    assert_eq!(
        library.apply("abs", Value::from(-5), None).unwrap(),
        Value::Integer(1)
    );
    assert_eq!(library.get("abs").unwrap().description(), "Always one");
}

#[test]
fn library_add_filter_does_not_coerce() {
    let mut library = Library::empty();
    library.add_filter("kind", "Type name", |v: Value| v.human());
    assert_eq!(library.render("kind", Value::from("1"), None).unwrap(), "string");

    library.add_numeric_filter("nkind", "Type name", |v: Value| v.human());
    assert_eq!(library.render("nkind", Value::from("1"), None).unwrap(), "integer");
}

#[test]
fn library_apply_err_unknown_filter() {
    let err = Library::new()
        .apply("nope", Value::from(1), None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownFilter);
    assert_eq!(err.to_string(), "unknown filter `nope`");
    assert_eq!(err.filter(), None);
}

#[test]
fn library_render_float() {
    let library = Library::new();
    assert_eq!(library.render("abs", Value::from("-3"), None).unwrap(), "3.0");
    assert_eq!(library.render("exp", Value::from(0), None).unwrap(), "1.0");
    assert_eq!(library.render("copysign", Value::from(0.25), Some(Value::from(-1))).unwrap(), "-0.25");
}

#[test]
fn library_render_integer() {
    let library = Library::new();
    assert_eq!(library.render("factorial", Value::from("5"), None).unwrap(), "120");
    assert_eq!(
        library.render("sum", Value::from(vec!["1", "2", "3"]), None).unwrap(),
        "6"
    );
}

#[test]
fn library_render_float_large() {
    let library = Library::new();
    assert_eq!(library.render("pow", Value::from(10), Some(Value::from(20))).unwrap(), "1e+20");
}

#[test]
fn library_render_err_is_not_rendered() {
    let err = Library::new()
        .render("sqrt", Value::from("abc"), None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Coerce);
    assert_eq!(err.filter(), Some("sqrt"));
}

#[test]
fn library_custom_filter_with_optional_argument() {
    let mut library = Library::empty();
    library.add_numeric_filter("round", "Round to n digits", |x: f64, n: Option<i64>| {
        let factor = 10f64.powi(n.unwrap_or(0) as i32);
        (x * factor).round() / factor
    });
    assert_eq!(library.render("round", Value::from("2.5"), None).unwrap(), "3.0");
    assert_eq!(
        library.render("round", Value::from("3.14159"), Some(Value::from("2"))).unwrap(),
        "3.14"
    );
}

#[test]
fn library_debug_lists_names() {
    let mut library = Library::empty();
    library.add_numeric_filter("one", "One", |_: Value| 1);
    assert_eq!(format!("{:?}", library), r#"Library { filters: ["one"] }"#);
}
