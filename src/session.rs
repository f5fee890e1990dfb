//! The validation session: batch execution, reporting, and the abort boundary
//!
//! A [`Session`] accumulates failures across one or more batches of checks.
//! Every check in a batch runs, with no short-circuit on first failure, so
//! the caller learns about *all* bad arguments in one report.
//!
//! # Examples
//!
//! ## Single batch
//!
//! ```
//! use argus::prelude::*;
//!
//! fn open_stream(host: &str, port: u16, window: u32) -> Result<(), AggregateError> {
//!     begin()
//!         .run([
//!             not_empty(host, "host"),
//!             gt(port, 0, "port"),
//!             in_range(window, 1, 1024, "window"),
//!         ])
//!         .finish()
//! }
//!
//! assert!(open_stream("example.com", 443, 64).is_ok());
//!
//! let err = open_stream("", 0, 4096).unwrap_err();
//! assert_eq!(err.len(), 3);
//! ```
//!
//! ## Tiered batches
//!
//! A [`checkpoint`](Session::checkpoint) aborts the session when anything
//! has failed so far, so a later tier can safely dereference what an earlier
//! tier proved present:
//!
//! ```
//! use argus::prelude::*;
//!
//! let name: Option<&str> = Some("");
//!
//! let result = catch_abort(|| {
//!     begin()
//!         .run([not_nil(&name, "name")])
//!         .checkpoint() // would abort here if `name` were None
//!         .run([not_empty(name.unwrap(), "name")])
//!         .finish()
//! });
//!
//! let err = result.expect("tier 1 passed, no abort").unwrap_err();
//! assert_eq!(err.to_string(), "parameter validation failed:\n  name: string is empty");
//! ```

use std::panic::{self, AssertUnwindSafe};

use crate::aggregate::AggregateError;
use crate::check::Check;
use crate::failure::Failure;

/// Start a validation session with nothing recorded.
pub fn begin() -> Session {
    Session::default()
}

/// A single validation session: the failures recorded so far.
///
/// Obtained from [`begin`], fed batches through [`run`](Session::run), and
/// closed by one of the terminal operations ([`finish`](Session::finish),
/// [`checkpoint`](Session::checkpoint),
/// [`checkpoint_capture`](Session::checkpoint_capture)). A session that
/// never recorded a failure behaves identically to one that never ran a
/// batch: every terminal operation reports success.
///
/// Single-owner: one caller drives the session from start to finish. Hosts
/// validating concurrently run one session per task.
#[derive(Debug, Default)]
#[must_use = "a session reports nothing until a terminal operation runs"]
pub struct Session {
    failures: Vec<Failure>,
}

impl Session {
    /// Run a batch of checks, recording every failure.
    ///
    /// All checks run, left to right, regardless of how many fail; failures
    /// append to the session in evaluation order. Returns the session so
    /// batches chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use argus::prelude::*;
    ///
    /// let err = begin()
    ///     .run([eq(1, 2, "a"), ne(3, 3, "b")])
    ///     .run([not_empty("", "c")])
    ///     .finish()
    ///     .unwrap_err();
    ///
    /// let names: Vec<_> = err.failures().iter().filter_map(|f| f.name()).collect();
    /// assert_eq!(names, vec!["a", "b", "c"]);
    /// ```
    pub fn run<I>(mut self, checks: I) -> Self
    where
        I: IntoIterator<Item = Check>,
    {
        #[cfg(feature = "tracing")]
        let recorded = self.failures.len();

        for check in checks {
            if let Some(failure) = check.eval() {
                #[cfg(feature = "tracing")]
                tracing::debug!(%failure, "check failed");
                self.failures.push(failure);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            batch_failures = self.failures.len() - recorded,
            total_failures = self.failures.len(),
            "batch complete"
        );

        self
    }

    /// Report the session's outcome.
    ///
    /// `Ok(())` when no check failed; otherwise the [`AggregateError`]
    /// holding every failure in evaluation order.
    pub fn finish(self) -> Result<(), AggregateError> {
        match AggregateError::from_failures(self.failures) {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }

    /// Abort-or-continue barrier between tiers.
    ///
    /// With nothing recorded, returns the session unchanged so the next
    /// tier's `run` proceeds. Otherwise aborts by panicking with the same
    /// [`AggregateError`] that [`finish`](Session::finish) would have
    /// returned; the panic unwinds until a [`catch_abort`] boundary (or the
    /// host's own recovery) converts it back into an error value.
    ///
    /// # Panics
    ///
    /// When at least one failure has been recorded. The payload is the
    /// [`AggregateError`].
    pub fn checkpoint(self) -> Self {
        match AggregateError::from_failures(self.failures) {
            None => Session::default(),
            Some(err) => panic::panic_any(err),
        }
    }

    /// Like [`checkpoint`](Session::checkpoint), but writes the aggregate
    /// into a caller-owned slot before aborting.
    ///
    /// A host that recovers the unwind without unpacking the payload still
    /// finds the error in the slot it already owns:
    ///
    /// ```
    /// use argus::prelude::*;
    ///
    /// let mut captured = None;
    /// let outcome = catch_abort(|| {
    ///     begin()
    ///         .run([eq("expected", "actual", "token")])
    ///         .checkpoint_capture(&mut captured)
    ///         .finish()
    /// });
    ///
    /// let aborted = outcome.unwrap_err();
    /// assert_eq!(captured.unwrap().to_string(), aborted.to_string());
    /// ```
    ///
    /// # Panics
    ///
    /// When at least one failure has been recorded, after filling the slot.
    pub fn checkpoint_capture(self, slot: &mut Option<AggregateError>) -> Self {
        match AggregateError::from_failures(self.failures) {
            None => Session::default(),
            Some(err) => {
                *slot = Some(err.clone());
                panic::panic_any(err)
            }
        }
    }
}

/// Recovery boundary for [`Session::checkpoint`] aborts.
///
/// Runs `f`, converting an abort raised inside it back into an ordinary
/// `Err(AggregateError)`. Any other panic resumes unwinding untouched. The
/// library never installs this boundary itself; the host decides where
/// aborts stop.
///
/// # Examples
///
/// ```
/// use argus::prelude::*;
///
/// let result: Result<&str, AggregateError> = catch_abort(|| {
///     let _session = begin()
///         .run([gt(0, 1, "retries")])
///         .checkpoint(); // aborts
///     "unreachable"
/// });
///
/// assert_eq!(result.unwrap_err().len(), 1);
/// ```
pub fn catch_abort<T, F>(f: F) -> Result<T, AggregateError>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<AggregateError>() {
            Ok(err) => Err(*err),
            Err(payload) => panic::resume_unwind(payload),
        },
    }
}
