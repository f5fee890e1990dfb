//! Comparison and range checks

use super::Check;
use crate::failure::{Cause, Label};

/// Passes when `lhs == rhs`.
///
/// # Examples
///
/// ```
/// use argus::check::eq;
///
/// assert!(eq("v2", "v2", "api_version").eval().is_none());
/// assert!(eq(1, 2, "replica_count").eval().is_some());
/// ```
pub fn eq<T: PartialEq>(lhs: T, rhs: T, label: impl Into<Label>) -> Check {
    Check::from_verdict(lhs == rhs, label, Cause::NotEqual)
}

/// Passes when `lhs != rhs`.
pub fn ne<T: PartialEq>(lhs: T, rhs: T, label: impl Into<Label>) -> Check {
    Check::from_verdict(lhs != rhs, label, Cause::Equal)
}

/// Passes when `value < bound`.
pub fn lt<T: PartialOrd>(value: T, bound: T, label: impl Into<Label>) -> Check {
    Check::from_verdict(value < bound, label, Cause::NotLess)
}

/// Passes when `value <= bound`.
pub fn le<T: PartialOrd>(value: T, bound: T, label: impl Into<Label>) -> Check {
    Check::from_verdict(value <= bound, label, Cause::NotLessOrEqual)
}

/// Passes when `value > bound`.
pub fn gt<T: PartialOrd>(value: T, bound: T, label: impl Into<Label>) -> Check {
    Check::from_verdict(value > bound, label, Cause::NotGreater)
}

/// Passes when `value >= bound`.
pub fn ge<T: PartialOrd>(value: T, bound: T, label: impl Into<Label>) -> Check {
    Check::from_verdict(value >= bound, label, Cause::NotGreaterOrEqual)
}

/// Passes when `min <= value && value <= max`, inclusive at both ends.
///
/// # Examples
///
/// ```
/// use argus::check::in_range;
///
/// assert!(in_range(3, 2, 5, "workers").eval().is_none());
/// assert!(in_range(2, 2, 5, "workers").eval().is_none());
/// assert!(in_range(5, 2, 5, "workers").eval().is_none());
/// assert!(in_range(0, 1, 1, "workers").eval().is_some());
/// ```
pub fn in_range<T: PartialOrd>(value: T, min: T, max: T, label: impl Into<Label>) -> Check {
    Check::from_verdict(min <= value && value <= max, label, Cause::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_on_matching_values() {
        assert!(eq("foo", "foo", "foo").eval().is_none());
        let failure = eq("foo", "bar", "foo").eval().unwrap();
        assert!(matches!(failure.cause(), Cause::NotEqual));
    }

    #[test]
    fn ne_on_differing_values() {
        assert!(ne("foo", "bar", "foo").eval().is_none());
        let failure = ne("foo", "foo", "foo").eval().unwrap();
        assert!(matches!(failure.cause(), Cause::Equal));
    }

    #[test]
    fn lt_is_strict() {
        assert!(lt(0, 1, "a").eval().is_none());
        assert!(lt(1, 1, "a").eval().is_some());
        assert!(lt(1, 0, "a").eval().is_some());
    }

    #[test]
    fn le_admits_equality() {
        assert!(le(0, 1, "a").eval().is_none());
        assert!(le(1, 1, "a").eval().is_none());
        assert!(le(2, 1, "a").eval().is_some());
    }

    #[test]
    fn gt_is_strict() {
        assert!(gt(1, 0, "a").eval().is_none());
        assert!(gt(0, 0, "a").eval().is_some());
        assert!(gt(0, 1, "a").eval().is_some());
    }

    #[test]
    fn ge_admits_equality() {
        assert!(ge(1, 1, "a").eval().is_none());
        assert!(ge(2, 1, "a").eval().is_none());
        assert!(ge(0, 1, "a").eval().is_some());
    }

    #[test]
    fn in_range_is_inclusive_at_both_ends() {
        assert!(in_range(3, 2, 5, "n").eval().is_none());
        assert!(in_range(2, 2, 5, "n").eval().is_none());
        assert!(in_range(5, 2, 5, "n").eval().is_none());
        let failure = in_range(0, 1, 1, "n").eval().unwrap();
        assert!(matches!(failure.cause(), Cause::OutOfRange));
    }

    #[test]
    fn ordering_checks_work_with_floats() {
        assert!(in_range(0.5_f64, 0.0, 1.0, "ratio").eval().is_none());
        assert!(lt(0.1_f64, 0.2, "ratio").eval().is_none());
    }
}
