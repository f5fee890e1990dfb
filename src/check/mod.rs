//! The unit of validation and the built-in check constructors
//!
//! A [`Check`] is a single, self-contained unit of validation: its operands
//! are bound at construction, and running it yields either nothing (pass) or
//! one [`Failure`]. The constructors in this module cover the common cases
//! (comparisons, ranges, absence, string content, numeric-string parsing),
//! and [`negate`] inverts any of them.
//!
//! Every constructor takes the value(s) to check plus a final
//! [`Label`]-convertible argument: an argument name, a pre-built
//! [`Failure`], or a raw [`Cause`] override. See [`Label`] for the dispatch
//! rules.
//!
//! # Extending
//!
//! Any zero-argument closure returning `Option<Failure>` can be wrapped as
//! a check, with no trait to implement and nothing to register:
//!
//! ```
//! use argus::prelude::*;
//!
//! fn fits_quota(used: u64, quota: u64) -> Check {
//!     Check::from_verdict(used <= quota, "quota", Cause::OutOfRange)
//! }
//!
//! let err = begin()
//!     .run([fits_quota(10, 5), Check::new(|| None)])
//!     .finish()
//!     .unwrap_err();
//! assert_eq!(err.len(), 1);
//! ```

mod compare;
mod length;
mod nil;
mod string;

pub use compare::{eq, ge, gt, in_range, le, lt, ne};
pub use length::{len_in_range, Measured};
pub use nil::{not_nil, Nilable};
pub use string::{
    is_bool_str, is_float_str, is_int_str, is_uint_str, not_empty, Float, SignedInt, UnsignedInt,
};

use std::fmt;

use crate::failure::{Cause, Failure, Label};

/// A single unit of validation.
///
/// Takes no arguments when run (everything it needs was captured at
/// construction) and produces at most one [`Failure`]. Checks are consumed
/// by [`Session::run`](crate::Session::run), which invokes each exactly
/// once.
#[must_use = "a check does nothing until a session runs it"]
pub struct Check(Box<dyn FnOnce() -> Option<Failure>>);

impl Check {
    /// Wrap a closure as a check.
    ///
    /// # Examples
    ///
    /// ```
    /// use argus::{Check, Failure, Cause};
    ///
    /// let passing = Check::new(|| None);
    /// assert!(passing.eval().is_none());
    ///
    /// let failing = Check::new(|| Some(Failure::named("x", Cause::Nil)));
    /// assert_eq!(failing.eval().unwrap().name(), Some("x"));
    /// ```
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<Failure> + 'static,
    {
        Check(Box::new(f))
    }

    /// Build a check from an already-computed verdict.
    ///
    /// This is the error-shaping seam shared by every built-in constructor:
    /// a passing verdict yields no failure; a failing one resolves `label`
    /// against `default` per the three-way [`Label`] dispatch. Caller-defined
    /// checks reuse it to get the same naming and override behavior as the
    /// built-ins.
    ///
    /// # Examples
    ///
    /// ```
    /// use argus::{Check, Cause};
    ///
    /// let check = Check::from_verdict(false, "attempts", Cause::OutOfRange);
    /// assert_eq!(
    ///     check.eval().unwrap().to_string(),
    ///     "attempts: value out of range"
    /// );
    /// ```
    pub fn from_verdict(passed: bool, label: impl Into<Label>, default: Cause) -> Self {
        let label = label.into();
        Check::new(move || {
            if passed {
                None
            } else {
                Some(label.into_failure(default))
            }
        })
    }

    /// Run the check, consuming it.
    #[inline]
    pub fn eval(self) -> Option<Failure> {
        (self.0)()
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Check(..)")
    }
}

/// Invert a check: passes when the wrapped check fails.
///
/// On failure (the wrapped check passed), the produced cause is always
/// [`Cause::NegatedPass`]. The inner check's cause is never forwarded,
/// because a check that failed as intended has nothing to report.
///
/// # Examples
///
/// ```
/// use argus::prelude::*;
///
/// // eq fails, so the negation passes.
/// assert!(negate(eq(1, 2, "x"), "x").eval().is_none());
///
/// // eq passes, so the negation fails with its own cause.
/// let failure = negate(eq(1, 1, "x"), "x").eval().unwrap();
/// assert_eq!(failure.to_string(), "x: negated check unexpectedly passed");
/// ```
pub fn negate(check: Check, label: impl Into<Label>) -> Check {
    let label = label.into();
    Check::new(move || match check.eval() {
        Some(_) => None,
        None => Some(label.into_failure(Cause::NegatedPass)),
    })
}
