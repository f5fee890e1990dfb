//! Failure descriptors and the label that names them
//!
//! This module provides the vocabulary for describing a failed check:
//! [`Cause`] (why it failed), [`Failure`] (which argument failed, and why),
//! and [`Label`] (the polymorphic final argument every check constructor
//! accepts).
//!
//! # Examples
//!
//! ```
//! use argus::failure::{Cause, Failure};
//!
//! let named = Failure::named("port", Cause::OutOfRange);
//! assert_eq!(named.to_string(), "port: value out of range");
//!
//! let unnamed = Failure::new(Cause::EmptyString);
//! assert_eq!(unnamed.to_string(), "string is empty");
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// The underlying reason a check failed.
///
/// Each built-in check constructor has a default sentinel here; the numeric
/// string checks forward one of two sentinels ([`Cause::Syntax`] or
/// [`Cause::Overflow`]) so callers can branch on which occurred. The
/// [`Cause::Custom`] variant carries any caller-supplied error verbatim.
///
/// # Examples
///
/// ```
/// use argus::failure::Cause;
///
/// assert_eq!(Cause::NotEqual.to_string(), "values not equal");
/// assert_eq!(Cause::Nil.to_string(), "value is nil/empty");
/// ```
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum Cause {
    /// The two values compared unequal ([`eq`](crate::check::eq) default).
    #[error("values not equal")]
    NotEqual,
    /// The two values compared equal ([`ne`](crate::check::ne) default).
    #[error("values equal")]
    Equal,
    /// The value is absent ([`not_nil`](crate::check::not_nil) default).
    #[error("value is nil/empty")]
    Nil,
    /// The value fell outside an inclusive range
    /// ([`in_range`](crate::check::in_range) default).
    #[error("value out of range")]
    OutOfRange,
    /// The value was not below its bound ([`lt`](crate::check::lt) default).
    #[error("value not less than bound")]
    NotLess,
    /// The value was above its bound ([`le`](crate::check::le) default).
    #[error("value not less-or-equal to bound")]
    NotLessOrEqual,
    /// The value was not above its bound ([`gt`](crate::check::gt) default).
    #[error("value not greater than bound")]
    NotGreater,
    /// The value was below its bound ([`ge`](crate::check::ge) default).
    #[error("value not greater-or-equal to bound")]
    NotGreaterOrEqual,
    /// The string was empty ([`not_empty`](crate::check::not_empty) default).
    #[error("string is empty")]
    EmptyString,
    /// The string was not a canonical boolean spelling
    /// ([`is_bool_str`](crate::check::is_bool_str) default).
    #[error("not a boolean string")]
    NotBool,
    /// A numeric string was malformed.
    #[error("malformed number")]
    Syntax,
    /// A numeric string was well-formed but outside the target type's range.
    #[error("number out of representable range")]
    Overflow,
    /// A collection's length fell outside an inclusive range
    /// ([`len_in_range`](crate::check::len_in_range) default).
    #[error("length out of range")]
    WrongLength,
    /// A negated check passed ([`negate`](crate::check::negate) default).
    #[error("negated check unexpectedly passed")]
    NegatedPass,
    /// A caller-supplied cause, carried verbatim.
    #[error("{0}")]
    Custom(Arc<dyn StdError + Send + Sync>),
}

impl Cause {
    /// Wrap an arbitrary error as a custom cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::fmt;
    /// use argus::failure::Cause;
    ///
    /// #[derive(Debug)]
    /// struct TooNoisy;
    ///
    /// impl fmt::Display for TooNoisy {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         write!(f, "signal-to-noise ratio too low")
    ///     }
    /// }
    ///
    /// impl std::error::Error for TooNoisy {}
    ///
    /// let cause = Cause::custom(TooNoisy);
    /// assert_eq!(cause.to_string(), "signal-to-noise ratio too low");
    /// ```
    pub fn custom<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Cause::Custom(Arc::new(err))
    }
}

/// One failed check: an optional argument name plus the [`Cause`].
///
/// Immutable once constructed. Renders as `"<name>: <cause>"` when named and
/// as `"<cause>"` otherwise.
#[derive(Debug, Clone)]
pub struct Failure {
    name: Option<String>,
    cause: Cause,
}

impl Failure {
    /// Create an unnamed failure.
    #[inline]
    pub fn new(cause: Cause) -> Self {
        Failure { name: None, cause }
    }

    /// Create a failure naming the argument or condition that failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use argus::failure::{Cause, Failure};
    ///
    /// let failure = Failure::named("user_id", Cause::Nil);
    /// assert_eq!(failure.name(), Some("user_id"));
    /// assert_eq!(failure.to_string(), "user_id: value is nil/empty");
    /// ```
    #[inline]
    pub fn named(name: impl Into<String>, cause: Cause) -> Self {
        Failure {
            name: Some(name.into()),
            cause,
        }
    }

    /// The argument name, if one was given.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The underlying cause.
    #[inline]
    pub fn cause(&self) -> &Cause {
        &self.cause
    }

    /// Consume the failure and return its cause.
    #[inline]
    pub fn into_cause(self) -> Cause {
        self.cause
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name}: {}", self.cause),
            None => fmt::Display::fmt(&self.cause, f),
        }
    }
}

impl StdError for Failure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.cause)
    }
}

/// The polymorphic `name`-or-cause argument of every check constructor.
///
/// Three forms are accepted, dispatched at compile time through `From`:
///
/// - a plain name (`&str` or `String`) pairs the name with the check's
///   default cause;
/// - a pre-built [`Failure`] is passed through verbatim, bypassing the
///   default entirely;
/// - a raw [`Cause`] produces an unnamed failure with exactly that cause.
///
/// Caller-authored checks can reuse the same contract through
/// [`Check::from_verdict`](crate::Check::from_verdict) or
/// [`Label::into_failure`].
///
/// # Examples
///
/// ```
/// use argus::failure::{Cause, Failure, Label};
///
/// // A name pairs with the default cause.
/// let failure = Label::from("count").into_failure(Cause::OutOfRange);
/// assert_eq!(failure.to_string(), "count: value out of range");
///
/// // A raw cause overrides the default and stays unnamed.
/// let failure = Label::from(Cause::Equal).into_failure(Cause::OutOfRange);
/// assert_eq!(failure.to_string(), "values equal");
///
/// // A pre-built failure passes through untouched.
/// let custom = Failure::named("count", Cause::Equal);
/// let failure = Label::from(custom).into_failure(Cause::OutOfRange);
/// assert_eq!(failure.to_string(), "count: values equal");
/// ```
#[derive(Debug, Clone)]
pub enum Label {
    /// An argument name; pairs with the check's default cause.
    Name(String),
    /// A pre-built failure, passed through verbatim.
    Failure(Failure),
    /// A raw cause; produces an unnamed failure.
    Cause(Cause),
}

impl Label {
    /// Resolve the label into the [`Failure`] it stands for, given the
    /// check's default cause.
    pub fn into_failure(self, default: Cause) -> Failure {
        match self {
            Label::Name(name) => Failure::named(name, default),
            Label::Failure(failure) => failure,
            Label::Cause(cause) => Failure::new(cause),
        }
    }
}

impl From<&str> for Label {
    #[inline]
    fn from(name: &str) -> Self {
        Label::Name(name.to_string())
    }
}

impl From<String> for Label {
    #[inline]
    fn from(name: String) -> Self {
        Label::Name(name)
    }
}

impl From<Failure> for Label {
    #[inline]
    fn from(failure: Failure) -> Self {
        Label::Failure(failure)
    }
}

impl From<Cause> for Label {
    #[inline]
    fn from(cause: Cause) -> Self {
        Label::Cause(cause)
    }
}
