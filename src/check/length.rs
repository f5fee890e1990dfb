//! Collection-length checks

use std::collections::{BTreeMap, HashMap};

use super::Check;
use crate::failure::{Cause, Label};

/// Types with a measurable length.
pub trait Measured {
    /// The number of elements (bytes, for string types).
    fn length(&self) -> usize;
}

impl Measured for str {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl Measured for String {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Measured for [T] {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Measured for [T; N] {
    #[inline]
    fn length(&self) -> usize {
        N
    }
}

impl<T> Measured for Vec<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Measured for HashMap<K, V, S> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> Measured for BTreeMap<K, V> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<M: Measured + ?Sized> Measured for &M {
    #[inline]
    fn length(&self) -> usize {
        (**self).length()
    }
}

/// Passes when the value's length lies in `[min, max]`, inclusive.
///
/// # Examples
///
/// ```
/// use argus::check::len_in_range;
///
/// assert!(len_in_range(&[1, 2], 2, 2, "pair").eval().is_none());
/// assert!(len_in_range("", 0, 0, "blank").eval().is_none());
///
/// let failure = len_in_range(&vec![1, 2, 3], 4, 8, "batch").eval().unwrap();
/// assert_eq!(failure.to_string(), "batch: length out of range");
/// ```
pub fn len_in_range<M: Measured + ?Sized>(
    value: &M,
    min: usize,
    max: usize,
    label: impl Into<Label>,
) -> Check {
    let len = value.length();
    Check::from_verdict(min <= len && len <= max, label, Cause::WrongLength)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_boundaries_pass() {
        assert!(len_in_range(&[1, 2], 2, 2, "a").eval().is_none());
        assert!(len_in_range(&Vec::<i32>::new(), 0, 0, "b").eval().is_none());
        assert!(len_in_range("1", 1, 1, "c").eval().is_none());
    }

    #[test]
    fn out_of_range_lengths_fail() {
        let failure = len_in_range("", 1, 1, "c").eval().unwrap();
        assert!(matches!(failure.cause(), Cause::WrongLength));
        assert!(len_in_range(&[1, 2, 3], 2, 5, "c").eval().is_none());
    }

    #[test]
    fn maps_measure_entry_count() {
        let mut map = HashMap::new();
        map.insert("k", 1);
        assert!(len_in_range(&map, 1, 1, "m").eval().is_none());
        assert!(len_in_range(&map, 2, 3, "m").eval().is_some());
    }
}
