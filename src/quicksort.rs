//! Out-of-place quicksort with the first element as pivot.
//!
//! Every level of recursion moves its elements into two freshly allocated
//! partitions, so the sort needs *O*(*n*) auxiliary space. Sorted and reverse
//! sorted inputs hit the *O*(*n*^2) worst case with recursion depth *n*.

use crate::{
    util::{into_ok, partial_less},
    Less, SortError, TryLess,
};

/// Sorts `v` with quicksort and returns the sorted elements.
///
/// Elements equal to the pivot go to the upper partition, behind the pivot.
pub fn try_quicksort_by<T, E, F>(mut v: Vec<T>, is_less: &F) -> Result<Vec<T>, E>
where
    F: TryLess<T, E>,
{
    if v.len() <= 1 {
        return Ok(v);
    }
    let pivot = v.remove(0);
    let (lesser, greater) = partition(v.into_iter(), &pivot, is_less)?;

    // No frame may hold reserved but unused capacity while deeper levels run.
    let mut greater = try_quicksort_by(greater, is_less)?;
    let mut sorted = try_quicksort_by(lesser, is_less)?;
    sorted.reserve_exact(greater.len() + 1);
    sorted.push(pivot);
    sorted.append(&mut greater);
    Ok(sorted)
}

/// Splits `elements` into those strictly less than `pivot` and all others,
/// keeping their relative order. Both partitions grow on demand.
fn partition<T, E, F, I>(elements: I, pivot: &T, is_less: &F) -> Result<(Vec<T>, Vec<T>), E>
where
    I: Iterator<Item = T>,
    F: TryLess<T, E>,
{
    let mut lesser = Vec::new();
    let mut greater = Vec::new();
    for elem in elements {
        if is_less(&elem, pivot)? {
            lesser.push(elem);
        } else {
            greater.push(elem);
        }
    }
    Ok((lesser, greater))
}

#[inline]
pub fn quicksort<T>(v: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    quicksort_by(v, T::lt)
}

#[inline]
pub fn quicksort_by<T, F>(v: Vec<T>, is_less: F) -> Vec<T>
where
    F: Less<T>,
{
    let sorted = into_ok(try_quicksort_by(v, &|a: &T, b: &T| Ok(is_less(a, b))));
    debug_assert!(crate::is_sorted_by(&sorted, &is_less));
    sorted
}

#[inline]
pub fn quicksort_by_key<T, K, F>(v: Vec<T>, f: F) -> Vec<T>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    quicksort_by(v, |a: &T, b: &T| f(a).lt(&f(b)))
}

/// Quicksort for `PartialOrd` types. Fails with
/// [`SortError::IncomparableElements`] if any comparison has no answer; the
/// input is consumed either way.
#[inline]
pub fn partial_quicksort<T>(v: Vec<T>) -> Result<Vec<T>, SortError>
where
    T: PartialOrd,
{
    try_quicksort_by(v, &partial_less::<T>)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    #[test]
    fn concrete() {
        assert_eq!(quicksort(vec![5, 3, 4, 1, 2]), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn base_cases() {
        assert!(quicksort(Vec::<u8>::new()).is_empty());
        assert_eq!(quicksort(vec![9]), [9]);
    }

    #[test]
    fn equal_elements_follow_the_pivot() {
        let v = vec![(2, 'a'), (2, 'b'), (1, 'c'), (1, 'd')];
        assert_eq!(
            quicksort_by_key(v, |x| x.0),
            [(1, 'c'), (1, 'd'), (2, 'a'), (2, 'b')]
        );
    }

    #[test]
    fn partition_keeps_order() {
        let (lesser, greater) =
            partition(vec![7, 1, 5, 3, 5].into_iter(), &5, &|a: &i32, b: &i32| {
                Ok::<_, SortError>(a < b)
            })
            .unwrap();
        assert_eq!(lesser, [1, 3]);
        assert_eq!(greater, [7, 5, 5]);
    }

    #[test]
    fn worst_case_reverse_sorted() {
        let n = 1000;
        let comparisons = Cell::new(0usize);
        let v: Vec<u32> = (0..n).rev().collect();
        // every comparison is against the maximum, so each level peels off one element
        let sorted = quicksort_by(v, |a: &u32, b: &u32| {
            comparisons.set(comparisons.get() + 1);
            a < b
        });
        assert_eq!(sorted, (0..n).collect::<Vec<_>>());
        assert!(comparisons.get() >= (n as usize) * (n as usize - 1) / 2);
    }

    #[test]
    fn already_sorted() {
        let n = 1000u32;
        let comparisons = Cell::new(0usize);
        let sorted = quicksort_by((0..n).collect(), |a: &u32, b: &u32| {
            comparisons.set(comparisons.get() + 1);
            a < b
        });
        assert_eq!(sorted, (0..n).collect::<Vec<_>>());
        assert!(comparisons.get() >= (n as usize) * (n as usize - 1) / 2);
    }

    #[test]
    fn random_inputs() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let len = rng.gen_range(0..500);
            let v: Vec<i64> = (0..len).map(|_| rng.gen_range(-100..100)).collect();
            let mut expected = v.clone();
            expected.sort();
            assert_eq!(quicksort(v), expected);
        }
    }

    #[test]
    fn partial() {
        assert_eq!(partial_quicksort(vec![0.3, 0.1, 0.2]), Ok(vec![0.1, 0.2, 0.3]));
        assert_eq!(
            partial_quicksort(vec![0.3, f64::NAN, 0.2]),
            Err(SortError::IncomparableElements)
        );
    }
}
