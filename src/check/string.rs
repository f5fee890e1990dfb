//! String-content checks: emptiness, boolean spellings, numeric parsing
//!
//! The numeric checks distinguish two failure modes as two distinct causes:
//! [`Cause::Syntax`] for malformed input and [`Cause::Overflow`] for
//! well-formed input that does not fit the target type. The target type is
//! a type parameter (`is_int_str::<i8>(..)` replaces a runtime bit-width
//! argument), constrained so that e.g. a signed type cannot be passed where
//! an unsigned one is required.

use std::num::{IntErrorKind, ParseFloatError, ParseIntError};
use std::str::FromStr;

use super::Check;
use crate::failure::{Cause, Label};

/// Passes when the string is non-empty.
///
/// # Examples
///
/// ```
/// use argus::check::not_empty;
///
/// assert!(not_empty("abc", "name").eval().is_none());
///
/// let failure = not_empty("", "name").eval().unwrap();
/// assert_eq!(failure.to_string(), "name: string is empty");
/// ```
pub fn not_empty(s: &str, label: impl Into<Label>) -> Check {
    Check::from_verdict(!s.is_empty(), label, Cause::EmptyString)
}

/// Passes when the string is one of the canonical boolean spellings:
/// `1`, `t`, `T`, `TRUE`, `true`, `True`, `0`, `f`, `F`, `FALSE`, `false`,
/// `False`. No other casing is accepted.
///
/// # Examples
///
/// ```
/// use argus::check::is_bool_str;
///
/// assert!(is_bool_str("True", "flag").eval().is_none());
/// assert!(is_bool_str("0", "flag").eval().is_none());
/// assert!(is_bool_str("yes", "flag").eval().is_some());
/// ```
pub fn is_bool_str(s: &str, label: impl Into<Label>) -> Check {
    let pass = matches!(
        s,
        "1" | "t" | "T" | "TRUE" | "true" | "True" | "0" | "f" | "F" | "FALSE" | "false" | "False"
    );
    Check::from_verdict(pass, label, Cause::NotBool)
}

mod sealed {
    pub trait Sealed {}
}

/// Signed integer targets accepted by [`is_int_str`].
pub trait SignedInt: FromStr<Err = ParseIntError> + sealed::Sealed {}

/// Unsigned integer targets accepted by [`is_uint_str`].
pub trait UnsignedInt: FromStr<Err = ParseIntError> + sealed::Sealed {}

macro_rules! impl_int_marker {
    ($marker:ident: $($ty:ty),+) => {
        $(
            impl sealed::Sealed for $ty {}
            impl $marker for $ty {}
        )+
    };
}

impl_int_marker!(SignedInt: i8, i16, i32, i64, i128, isize);
impl_int_marker!(UnsignedInt: u8, u16, u32, u64, u128, usize);

/// Float targets accepted by [`is_float_str`].
pub trait Float: FromStr<Err = ParseFloatError> + Copy + sealed::Sealed {
    /// Whether the parsed value is an infinity.
    fn is_infinite(self) -> bool;
}

impl sealed::Sealed for f32 {}
impl Float for f32 {
    #[inline]
    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }
}

impl sealed::Sealed for f64 {}
impl Float for f64 {
    #[inline]
    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }
}

/// Passes when the string parses as a base-10 signed integer of type `T`.
///
/// Malformed input fails with [`Cause::Syntax`]; well-formed input outside
/// `T`'s range fails with [`Cause::Overflow`].
///
/// # Examples
///
/// ```
/// use argus::{check::is_int_str, Cause};
///
/// assert!(is_int_str::<i8>("127", "level").eval().is_none());
///
/// let overflow = is_int_str::<i8>("128", "level").eval().unwrap();
/// assert!(matches!(overflow.cause(), Cause::Overflow));
///
/// let syntax = is_int_str::<i8>("", "level").eval().unwrap();
/// assert!(matches!(syntax.cause(), Cause::Syntax));
/// ```
pub fn is_int_str<T: SignedInt>(s: &str, label: impl Into<Label>) -> Check {
    int_check(s.parse::<T>(), label)
}

/// Passes when the string parses as a base-10 unsigned integer of type `T`.
///
/// Same two-way [`Cause::Syntax`] / [`Cause::Overflow`] distinction as
/// [`is_int_str`]; a leading minus sign is a syntax failure.
pub fn is_uint_str<T: UnsignedInt>(s: &str, label: impl Into<Label>) -> Check {
    int_check(s.parse::<T>(), label)
}

fn int_check<T>(parsed: Result<T, ParseIntError>, label: impl Into<Label>) -> Check {
    let cause = parsed.err().map(|err| int_cause(&err));
    let label = label.into();
    Check::new(move || cause.map(|cause| label.into_failure(cause)))
}

fn int_cause(err: &ParseIntError) -> Cause {
    match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Cause::Overflow,
        _ => Cause::Syntax,
    }
}

/// Passes when the string parses as a finite float of type `T`, or spells an
/// infinity explicitly (`inf`, `infinity`, any sign, any case).
///
/// Rust's float parser saturates to infinity instead of erroring, so
/// overflow is detected as "parsed to an infinity the input did not spell"
/// and reported as [`Cause::Overflow`]; anything malformed is
/// [`Cause::Syntax`].
///
/// # Examples
///
/// ```
/// use argus::{check::is_float_str, Cause};
///
/// assert!(is_float_str::<f32>("1.25", "ratio").eval().is_none());
///
/// // Exceeds f32::MAX, fits f64.
/// let overflow = is_float_str::<f32>("1e39", "ratio").eval().unwrap();
/// assert!(matches!(overflow.cause(), Cause::Overflow));
/// assert!(is_float_str::<f64>("1e39", "ratio").eval().is_none());
///
/// let syntax = is_float_str::<f64>("1,25", "ratio").eval().unwrap();
/// assert!(matches!(syntax.cause(), Cause::Syntax));
/// ```
pub fn is_float_str<T: Float>(s: &str, label: impl Into<Label>) -> Check {
    let cause = match s.parse::<T>() {
        Ok(value) if value.is_infinite() && !spells_infinity(s) => Some(Cause::Overflow),
        Ok(_) => None,
        Err(_) => Some(Cause::Syntax),
    };
    let label = label.into();
    Check::new(move || cause.map(|cause| label.into_failure(cause)))
}

fn spells_infinity(s: &str) -> bool {
    let unsigned = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
