use crate::{util::partial_less, Less, SortError, TryLess};

/// Returns true iff `v[i] <= v[i + 1]` for every adjacent pair.
/// Empty and single element slices are sorted.
#[inline]
pub fn is_sorted<T>(v: &[T]) -> bool
where
    T: Ord,
{
    is_sorted_by(v, T::lt)
}

/// Returns true iff no element is less than its predecessor under `is_less`.
pub fn is_sorted_by<T, F>(v: &[T], is_less: F) -> bool
where
    F: Less<T>,
{
    v.windows(2).all(|pair| !is_less(&pair[1], &pair[0]))
}

#[inline]
pub fn is_sorted_by_key<T, K, F>(v: &[T], f: F) -> bool
where
    F: Fn(&T) -> K,
    K: Ord,
{
    is_sorted_by(v, |a: &T, b: &T| f(a).lt(&f(b)))
}

/// Fallible [`is_sorted_by`]; stops at the first failed comparison.
pub fn try_is_sorted_by<T, E, F>(v: &[T], is_less: &F) -> Result<bool, E>
where
    F: TryLess<T, E>,
{
    for pair in v.windows(2) {
        if is_less(&pair[1], &pair[0])? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// [`is_sorted`] for `PartialOrd` types, failing on the first incomparable pair.
#[inline]
pub fn partial_is_sorted<T>(v: &[T]) -> Result<bool, SortError>
where
    T: PartialOrd,
{
    try_is_sorted_by(v, &partial_less::<T>)
}
