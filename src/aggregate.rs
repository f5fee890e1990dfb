//! The composite error a validation session reports
//!
//! An [`AggregateError`] owns every [`Failure`] a session recorded, in
//! evaluation order across all batches. It renders as a fixed header line
//! followed by one descriptor per line:
//!
//! ```text
//! parameter validation failed:
//!   host: string is empty
//!   port: value out of range
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::failure::Failure;
use crate::nonempty::NonEmptyVec;

/// Every failure recorded by a validation session, in evaluation order.
///
/// Non-empty by construction: a session with nothing to report returns
/// `Ok(())` instead of an empty aggregate, so holding one of these means at
/// least one check failed.
///
/// # Examples
///
/// ```
/// use argus::prelude::*;
///
/// let err = begin()
///     .run([not_empty("", "host"), in_range(7, 1, 5, "retries")])
///     .finish()
///     .unwrap_err();
///
/// assert_eq!(err.len(), 2);
/// assert_eq!(err.failures()[0].name(), Some("host"));
/// assert_eq!(
///     err.to_string(),
///     "parameter validation failed:\n  host: string is empty\n  retries: value out of range"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct AggregateError {
    failures: NonEmptyVec<Failure>,
}

impl AggregateError {
    /// Build an aggregate from recorded failures; `None` when there is
    /// nothing to report.
    pub(crate) fn from_failures(failures: Vec<Failure>) -> Option<Self> {
        NonEmptyVec::from_vec(failures).map(|failures| AggregateError { failures })
    }

    /// The recorded failures, in evaluation order.
    #[inline]
    pub fn failures(&self) -> &[Failure] {
        self.failures.as_slice()
    }

    /// The first recorded failure.
    #[inline]
    pub fn first(&self) -> &Failure {
        self.failures.first()
    }

    /// How many checks failed; always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Consume the aggregate, returning the failures.
    #[inline]
    pub fn into_failures(self) -> Vec<Failure> {
        self.failures.into_vec()
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parameter validation failed:")?;
        for failure in &self.failures {
            write!(f, "\n  {failure}")?;
        }
        Ok(())
    }
}

impl StdError for AggregateError {}
