use crate::{util::in_place_sort_entry_points, TryLess};

/// Sorts a slice using selection sort: always *O*(*n*^2) comparisons, at most
/// *n* - 1 swaps. Not stable.
///
/// The minimum of the unsorted suffix is its first occurrence, and swapping it
/// into place can carry the displaced element past its equals.
pub fn try_selection_sort_by<T, E, F>(v: &mut [T], is_less: &F) -> Result<(), E>
where
    F: TryLess<T, E>,
{
    let len = v.len();
    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..len {
            if is_less(&v[j], &v[min])? {
                min = j;
            }
        }
        if min != i {
            v.swap(i, min);
        }
    }
    Ok(())
}

in_place_sort_entry_points!(
    "selection sort",
    try_selection_sort_by,
    selection_sort,
    selection_sort_by,
    selection_sort_by_key,
    partial_selection_sort
);
