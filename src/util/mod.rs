use std::{cmp::Ordering, convert::Infallible};

use crate::SortError;

/// Generates the `x`, `x_by`, `x_by_key` and `partial_x` entry points of an
/// in-place sort from its fallible `try_x_by` core.
macro_rules! in_place_sort_entry_points {
    ($name:literal, $try_by:ident, $plain:ident, $by:ident, $by_key:ident, $partial:ident) => {
        #[doc = concat!("Sorts `v` in ascending order with ", $name, ".")]
        #[inline]
        pub fn $plain<T>(v: &mut [T])
        where
            T: Ord,
        {
            $by(v, T::lt);
        }

        #[doc = concat!("Sorts `v` with ", $name, " using `is_less` as a strict weak order.")]
        #[inline]
        pub fn $by<T, F>(v: &mut [T], is_less: F)
        where
            F: $crate::Less<T>,
        {
            $crate::util::into_ok($try_by(v, &|a: &T, b: &T| Ok(is_less(a, b))));
            debug_assert!($crate::is_sorted_by(v, &is_less));
        }

        #[doc = concat!("Sorts `v` with ", $name, " by the key `f` extracts.")]
        #[inline]
        pub fn $by_key<T, K, F>(v: &mut [T], f: F)
        where
            F: Fn(&T) -> K,
            K: Ord,
        {
            $by(v, |a: &T, b: &T| f(a).lt(&f(b)));
        }

        #[doc = concat!("Sorts `v` with ", $name, " using `PartialOrd`.")]
        ///
        /// Fails with [`SortError::IncomparableElements`](crate::SortError) at the
        /// first pair `partial_cmp` cannot order; `v` is left partially sorted.
        #[inline]
        pub fn $partial<T>(v: &mut [T]) -> Result<(), $crate::SortError>
        where
            T: PartialOrd,
        {
            $try_by(v, &$crate::util::partial_less::<T>)
        }
    };
}

pub(crate) use in_place_sort_entry_points;

pub(crate) fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

pub(crate) fn partial_less<T>(a: &T, b: &T) -> Result<bool, SortError>
where
    T: PartialOrd,
{
    match a.partial_cmp(b) {
        Some(ord) => Ok(ord == Ordering::Less),
        None => Err(SortError::IncomparableElements),
    }
}
