//! # Argus
//!
//! > *"The hundred-eyed watchman: every argument is seen before judgment is
//! > passed."*
//!
//! Fluent, accumulating argument validation.
//!
//! ## Philosophy
//!
//! Guard clauses short-circuit: the caller learns about one bad argument per
//! round trip. **Argus** runs *every* check in a batch before reporting and
//! returns the failures as one ordered aggregate, so a caller that passed
//! three bad arguments hears about all three at once.
//!
//! ## Quick example
//!
//! ```rust
//! use argus::prelude::*;
//!
//! fn create_user(name: &str, email: Option<&str>, age: u8) -> Result<(), AggregateError> {
//!     begin()
//!         .run([
//!             not_empty(name, "name"),
//!             not_nil(&email, "email"),
//!             in_range(age, 13, 120, "age"),
//!         ])
//!         .finish()
//! }
//!
//! assert!(create_user("ada", Some("ada@example.com"), 36).is_ok());
//!
//! let err = create_user("", None, 7).unwrap_err();
//! assert_eq!(err.len(), 3);
//! assert_eq!(
//!     err.to_string(),
//!     "parameter validation failed:\n  \
//!      name: string is empty\n  \
//!      email: value is nil/empty\n  \
//!      age: value out of range"
//! );
//! ```
//!
//! ## Tiers
//!
//! Batches chain, and a [`checkpoint`](Session::checkpoint) between them
//! aborts the whole session if anything has failed so far, so a later tier
//! only runs once an earlier tier held. The abort is an unwind carrying the
//! aggregate; [`catch_abort`] is the boundary that turns it back into an
//! ordinary error:
//!
//! ```rust
//! use argus::prelude::*;
//!
//! let payload: Option<Vec<u8>> = None;
//!
//! let result = catch_abort(|| {
//!     begin()
//!         .run([not_nil(&payload, "payload")])
//!         .checkpoint() // aborts: payload is absent
//!         .run([len_in_range(payload.as_deref().unwrap(), 1, 512, "payload")])
//!         .finish()
//! });
//!
//! assert_eq!(result.unwrap_err().first().name(), Some("payload"));
//! ```
//!
//! Custom checks are plain closures; see [`Check`] and
//! [`Check::from_verdict`] for the extension contract.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod aggregate;
pub mod check;
pub mod failure;
pub mod nonempty;
pub mod session;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use aggregate::AggregateError;
pub use check::Check;
pub use failure::{Cause, Failure, Label};
pub use nonempty::NonEmptyVec;
pub use session::{begin, catch_abort, Session};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::aggregate::AggregateError;
    pub use crate::check::{
        eq, ge, gt, in_range, is_bool_str, is_float_str, is_int_str, is_uint_str, le,
        len_in_range, lt, ne, negate, not_empty, not_nil, Check, Measured, Nilable,
    };
    pub use crate::failure::{Cause, Failure, Label};
    pub use crate::session::{begin, catch_abort, Session};
}
