use crate::{util::in_place_sort_entry_points, TryLess};

/// Sorts a slice using gnome sort: a single cursor walks right while the
/// neighbours are in order and swaps its way back left when they are not.
/// Stable, *O*(*n*^2) worst-case and *O*(*n*) on sorted input.
pub fn try_gnome_sort_by<T, E, F>(v: &mut [T], is_less: &F) -> Result<(), E>
where
    F: TryLess<T, E>,
{
    let mut pos = 1;
    while pos < v.len() {
        if is_less(&v[pos], &v[pos - 1])? {
            v.swap(pos - 1, pos);
            if pos > 1 {
                pos -= 1;
            }
        } else {
            pos += 1;
        }
    }
    Ok(())
}

in_place_sort_entry_points!(
    "gnome sort",
    try_gnome_sort_by,
    gnome_sort,
    gnome_sort_by,
    gnome_sort_by_key,
    partial_gnome_sort
);
