//! Math and string filters for template engines.
//!
//! Template values are loosely typed: a number in a template context may just
//! as well arrive as the text `"42"`. This crate provides a set of math
//! filters that coerce their inputs into numbers before doing anything else,
//! and a small [`Library`] that stores each filter alongside its name and
//! description so that a template engine can look them up.
//!
//! # Features
//!
//! - Value coercion: `"42"` → `42`, `"3.14"` → `3.14`, lists element-wise
//! - Rounding: `ceil`, `floor`, `trunc`
//! - Arithmetic: `abs`, `copysign`, `factorial`, `fmod`, `mod`, `gcd`, `lcm`,
//!   `perm`, `ldexp`
//! - Sums: `sum`, `fsum`
//! - Powers and logarithms: `sqrt`, `isqrt`, `exp`, `expm1`, `log`, `log1p`,
//!   `log2`, `log10`, `pow`
//! - Builtin string filters: `reverse`
//!
//! # Getting started
//!
//! Your entry point is the [`Library`] struct. A new library contains all the
//! builtin filters.
//!
//! ```
//! use extra_filters::{Library, Value};
//!
//! let library = Library::new();
//! let result = library.apply("gcd", Value::from("12"), Some(Value::from(8)))?;
//! assert_eq!(result, Value::Integer(4));
//! # Ok::<(), extra_filters::Error>(())
//! ```
//!
//! Filter results can be rendered the way a template would show them using
//! [`.render`][Library::render].
//!
//! ```
//! # use extra_filters::{Library, Value};
//! # let library = Library::new();
//! let result = library.render("sqrt", Value::from("16"), None)?;
//! assert_eq!(result, "4.0");
//! # Ok::<(), extra_filters::Error>(())
//! ```
//!
//! ### Handling errors
//!
//! Every failure is returned as an [`Error`]. It is up to the template engine
//! to decide how to display a failed filter, typically as empty output. The
//! [`ErrorKind`] tells a parse failure apart from a validation failure.
//!
//! ```
//! use extra_filters::{ErrorKind, Library, Value};
//!
//! let library = Library::new();
//!
//! let err = library.apply("sqrt", Value::from("abc"), None).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Coerce);
//!
//! let err = library.apply("sqrt", Value::from(-1), None).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Validation);
//! assert_eq!(err.to_string(), "filter `sqrt`: Expected non-negative number. Received -1.");
//! ```
//!
//! ### Add a custom filter
//!
//! ```
//! use extra_filters::{Library, Value};
//!
//! let mut library = Library::empty();
//! library.add_numeric_filter("half", "Divide x by two", |x: f64| x / 2.0);
//!
//! assert_eq!(library.render("half", Value::from("5"), None)?, "2.5");
//! # Ok::<(), extra_filters::Error>(())
//! ```
//!
//! See the [`Filter`] trait documentation for more information on filters.

mod coerce;
mod error;
pub mod filters;
pub mod fmt;
mod value;

use std::collections::BTreeMap;

pub use crate::coerce::{coerce, parse};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::filters::Filter;
pub use crate::value::{Decimal, Number, Value};

use crate::filters::{FilterArgs, FilterFn, FilterReturn};

/// A registry of filters, keyed by name.
pub struct Library<'lib> {
    filters: BTreeMap<&'lib str, FilterDef<'lib>>,
}

/// A registered filter together with its name and description.
pub struct FilterDef<'lib> {
    name: &'lib str,
    description: &'lib str,
    func: Box<FilterFn>,
}

impl Default for Library<'_> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'lib> Library<'lib> {
    /// Construct a new library containing all the builtin filters.
    #[inline]
    pub fn new() -> Self {
        let mut library = Self::empty();
        filters::math::register(&mut library);
        #[cfg(feature = "builtins")]
        filters::builtins::register(&mut library);
        library
    }

    /// Construct a library without any filters.
    #[inline]
    pub fn empty() -> Self {
        Self {
            filters: BTreeMap::new(),
        }
    }

    /// Add a new filter to the library.
    ///
    /// The filter receives the template values as they are. A filter with the
    /// same name is replaced.
    #[inline]
    pub fn add_filter<F, R, A>(&mut self, name: &'lib str, description: &'lib str, f: F)
    where
        F: Filter<R, A> + Send + Sync + 'static,
        R: FilterReturn,
        A: FilterArgs,
    {
        self.insert(name, description, filters::new(f));
    }

    /// Add a new numeric filter to the library.
    ///
    /// The piped value and the argument, if any, are coerced using
    /// [`coerce`] before the filter is called. A filter with the same name is
    /// replaced.
    #[inline]
    pub fn add_numeric_filter<F, R, A>(&mut self, name: &'lib str, description: &'lib str, f: F)
    where
        F: Filter<R, A> + Send + Sync + 'static,
        R: FilterReturn,
        A: FilterArgs,
    {
        self.insert(name, description, filters::coercing(f));
    }

    fn insert(&mut self, name: &'lib str, description: &'lib str, func: Box<FilterFn>) {
        let def = FilterDef {
            name,
            description,
            func,
        };
        if self.filters.insert(name, def).is_some() {
            tracing::debug!(name, "replaced filter");
        }
    }

    /// Lookup a filter by name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&FilterDef<'lib>> {
        self.filters.get(name)
    }

    /// Returns the names of all registered filters in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'lib str> + '_ {
        self.filters.keys().copied()
    }

    /// Apply the named filter to a value and an optional argument.
    pub fn apply(&self, name: &str, value: Value, arg: Option<Value>) -> Result<Value> {
        let def = self.get(name).ok_or_else(|| {
            Error::new(ErrorKind::UnknownFilter, format!("unknown filter `{}`", name))
        })?;
        def.call(value, arg)
    }

    /// Apply the named filter and format the result using the
    /// [default formatter][fmt::default].
    pub fn render(&self, name: &str, value: Value, arg: Option<Value>) -> Result<String> {
        let result = self.apply(name, value, arg)?;
        fmt::to_string(&result).map_err(|err| err.with_filter(name))
    }
}

impl std::fmt::Debug for Library<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("filters", &self.filters.keys())
            .finish()
    }
}

impl<'lib> FilterDef<'lib> {
    /// Returns the name the filter is registered under.
    #[inline]
    pub fn name(&self) -> &'lib str {
        self.name
    }

    /// Returns the description of the filter.
    #[inline]
    pub fn description(&self) -> &'lib str {
        self.description
    }

    /// Call the filter with a value and an optional argument.
    pub fn call(&self, value: Value, arg: Option<Value>) -> Result<Value> {
        tracing::trace!(filter = self.name, "applying filter");
        (self.func)(value, arg).map_err(|err| {
            tracing::debug!(filter = self.name, error = %err, "filter failed");
            err.with_filter(self.name)
        })
    }
}

impl std::fmt::Debug for FilterDef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterDef")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
