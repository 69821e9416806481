use std::fmt;

/// A convenient type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that can occur while coercing values or applying a filter.
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    msg: String,
    filter: Option<String>,
}

/// The category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A textual value could not be parsed as an integer or a float, or the
    /// value can not be turned into a number at all.
    Coerce,
    /// A filter precondition was violated.
    Validation,
    /// A filter received a value of the wrong type.
    Type,
    /// A filter received the wrong number of arguments.
    Arity,
    /// The underlying math primitive rejected its input or overflowed.
    Math,
    /// No filter is registered under the requested name.
    UnknownFilter,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            kind,
            msg: msg.into(),
            filter: None,
        }
    }

    pub(crate) fn coerce(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Coerce, msg)
    }

    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, msg)
    }

    pub(crate) fn type_(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Type, msg)
    }

    pub(crate) fn arity(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Arity, msg)
    }

    pub(crate) fn math(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Math, msg)
    }

    /// Attaches the name of the filter that raised this error.
    pub(crate) fn with_filter(mut self, name: &str) -> Self {
        if self.filter.is_none() {
            self.filter = Some(name.to_owned());
        }
        self
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message without the filter name.
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Returns the name of the filter that raised this error, if known.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filter {
            Some(name) => write!(f, "filter `{}`: {}", name, self.msg),
            None => write!(f, "{}", self.msg),
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Self::new(ErrorKind::Type, "format error")
    }
}
