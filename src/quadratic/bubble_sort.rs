use crate::{util::in_place_sort_entry_points, TryLess};

/// Sorts a slice using bubble sort. Stable, *O*(*n*) on sorted input.
///
/// Everything behind the last swap of a pass is already in its final place,
/// so the next pass stops there. A pass without swaps ends the sort.
pub fn try_bubble_sort_by<T, E, F>(v: &mut [T], is_less: &F) -> Result<(), E>
where
    F: TryLess<T, E>,
{
    let mut active = v.len();
    while active > 0 {
        let mut last_swap = 0;
        for i in 1..active {
            if is_less(&v[i], &v[i - 1])? {
                v.swap(i - 1, i);
                last_swap = i;
            }
        }
        active = last_swap;
    }
    Ok(())
}

in_place_sort_entry_points!(
    "bubble sort",
    try_bubble_sort_by,
    bubble_sort,
    bubble_sort_by,
    bubble_sort_by_key,
    partial_bubble_sort
);
