use crate::{util::in_place_sort_entry_points, TryLess};

/// Sorts a slice using insertion sort, which is *O*(*n*^2) worst-case and
/// *O*(*n*) on sorted input. Stable.
///
/// Each new element is moved left past every strictly greater element of the
/// sorted prefix, so equal elements never overtake each other.
pub fn try_insertion_sort_by<T, E, F>(v: &mut [T], is_less: &F) -> Result<(), E>
where
    F: TryLess<T, E>,
{
    for current in 1..v.len() {
        let mut insert = current;
        while insert > 0 && is_less(&v[current], &v[insert - 1])? {
            insert -= 1;
        }
        v[insert..=current].rotate_right(1);
    }
    Ok(())
}

in_place_sort_entry_points!(
    "insertion sort",
    try_insertion_sort_by,
    insertion_sort,
    insertion_sort_by,
    insertion_sort_by_key,
    partial_insertion_sort
);
