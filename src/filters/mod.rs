//! Wraps plain Rust functions as template filters.

mod args;
#[cfg(feature = "builtins")]
pub mod builtins;
pub mod math;

use crate::{coerce, Error, Result, Value};

pub type FilterFn = dyn Fn(Value, Option<Value>) -> Result<Value> + Send + Sync + 'static;

/// Wraps a filter without touching its inputs.
pub fn new<F, R, A>(f: F) -> Box<FilterFn>
where
    F: Filter<R, A> + Send + Sync + 'static,
    R: FilterReturn,
    A: FilterArgs,
{
    Box::new(move |value: Value, arg: Option<Value>| -> Result<Value> {
        let args = A::from_args(value, arg)?;
        let result = Filter::filter(&f, args);
        FilterReturn::to_value(result)
    })
}

/// Wraps a numeric filter so that its inputs are coerced first.
///
/// The piped value is always coerced using [`coerce`]. The argument is only
/// coerced if one was supplied; otherwise the filter is called exactly as if
/// the template had omitted it. Whether the filter accepts a missing argument
/// is decided by its own signature.
pub fn coercing<F, R, A>(f: F) -> Box<FilterFn>
where
    F: Filter<R, A> + Send + Sync + 'static,
    R: FilterReturn,
    A: FilterArgs,
{
    let inner = new(f);
    Box::new(move |value: Value, arg: Option<Value>| -> Result<Value> {
        let value = coerce(value)?;
        let arg = arg.map(coerce).transpose()?;
        inner(value, arg)
    })
}

/// Represents any filter function.
///
/// This trait is used by [`Library::add_filter`][crate::Library::add_filter]
/// and [`Library::add_numeric_filter`][crate::Library::add_numeric_filter] to
/// abstract over functions and closures with one or two parameters. The first
/// parameter always receives the piped value, the second receives the filter
/// argument. The number and the type of the arguments are checked when the
/// filter is called.
///
/// [`Filter`] is implemented for functions that return any of the following
/// types.
///
/// - `R` where `R` implements `Into<Value>`
/// - `Result<R>` where `R` implements `Into<Value>`
///
/// [`Filter`] is implemented for functions that take any of the following
/// types as arguments.
/// - [`i64`]
/// - [`f64`]
/// - [`Number`][crate::Number]
/// - [`String`]
/// - [`Vec<Value>`]
/// - [`Vec<Number>`][crate::Number]
/// - [`Value`]
/// - [`Option<T>`] for any of the above, which makes the argument optional.
///
/// # Examples
///
/// ```
/// use extra_filters::{Library, Value};
///
/// let mut library = Library::empty();
/// library.add_numeric_filter("double", "Double a number", |x: f64| x * 2.0);
///
/// let result = library.apply("double", Value::from("2.5"), None)?;
/// assert_eq!(result, Value::Float(5.0));
/// # Ok::<(), extra_filters::Error>(())
/// ```
pub trait Filter<R, A>
where
    A: FilterArgs,
{
    #[doc(hidden)]
    fn filter(&self, args: A) -> R;
}

pub trait FilterArgs: Sized {
    fn from_args(value: Value, arg: Option<Value>) -> Result<Self>;
}

pub trait FilterArg: Sized {
    fn from_value(v: Value) -> args::Result<Self>;

    /// The value to use when the argument was not supplied.
    fn missing() -> Option<Self> {
        None
    }
}

pub trait FilterReturn {
    fn to_value(self) -> Result<Value>;
}

////////////////////////////////////////////////////////////////////////////////
// Filter
////////////////////////////////////////////////////////////////////////////////

impl<Func, R, V> Filter<R, (V,)> for Func
where
    Func: Fn(V) -> R,
    R: FilterReturn,
    V: FilterArg,
{
    #[doc(hidden)]
    fn filter(&self, (v,): (V,)) -> R {
        self(v)
    }
}

impl<Func, R, V, A> Filter<R, (V, A)> for Func
where
    Func: Fn(V, A) -> R,
    R: FilterReturn,
    V: FilterArg,
    A: FilterArg,
{
    #[doc(hidden)]
    fn filter(&self, (v, a): (V, A)) -> R {
        self(v, a)
    }
}

////////////////////////////////////////////////////////////////////////////////
// FilterArgs
////////////////////////////////////////////////////////////////////////////////

impl<V> FilterArgs for (V,)
where
    V: FilterArg,
{
    fn from_args(value: Value, arg: Option<Value>) -> Result<Self> {
        if arg.is_some() {
            return Err(Error::arity("filter expected 0 arguments"));
        }
        let v = V::from_value(value).map_err(err_expected_val)?;
        Ok((v,))
    }
}

impl<V, A> FilterArgs for (V, A)
where
    V: FilterArg,
    A: FilterArg,
{
    fn from_args(value: Value, arg: Option<Value>) -> Result<Self> {
        let v = V::from_value(value).map_err(err_expected_val)?;
        let a = match arg {
            Some(arg) => A::from_value(arg).map_err(err_expected_arg)?,
            None => A::missing().ok_or_else(|| Error::arity("filter expected 1 argument"))?,
        };
        Ok((v, a))
    }
}

fn err_expected_arg(err: args::Error) -> Error {
    match err {
        args::Error::Type(exp, got) => {
            Error::type_(format!("filter expected {} argument, found {}", exp, got))
        }
        args::Error::Element(exp, got) => err_expected_element(exp, got),
    }
}

fn err_expected_val(err: args::Error) -> Error {
    match err {
        args::Error::Type(exp, got) => {
            Error::type_(format!("filter expected {} value, found {}", exp, got))
        }
        args::Error::Element(exp, got) => err_expected_element(exp, got),
    }
}

fn err_expected_element(exp: &str, got: &str) -> Error {
    Error::type_(format!("filter expected list of {}, found {} element", exp, got))
}

////////////////////////////////////////////////////////////////////////////////
// FilterReturn
////////////////////////////////////////////////////////////////////////////////

impl<T> FilterReturn for T
where
    T: Into<Value>,
{
    fn to_value(self) -> Result<Value> {
        Ok(self.into())
    }
}

impl<T> FilterReturn for Result<T>
where
    T: Into<Value>,
{
    fn to_value(self) -> Result<Value> {
        self.map(Into::into)
    }
}
