//! In-place *O*(*n*^2) sorts. All of them need *O*(1) auxiliary space.

pub(crate) mod bubble_sort;
pub(crate) mod gnome_sort;
pub(crate) mod insertion_sort;
pub(crate) mod selection_sort;
