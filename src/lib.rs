//! Classic comparison sorts: insertion, selection, bubble, gnome, quicksort
//! and bogosort, plus the [`is_sorted`] checker they are all tested against.
//!
//! Every algorithm comes in the same set of flavours:
//!
//! * `x(v)` for `T: Ord`,
//! * `x_by(v, is_less)` with a strict weak order,
//! * `x_by_key(v, key)`,
//! * `partial_x(v)` for `T: PartialOrd`, failing with
//!   [`SortError::IncomparableElements`],
//! * `try_x_by(v, is_less)` with a fallible comparator.
//!
//! [`Algorithm`] dispatches to any of them by name.
mod algorithm;
mod bogosort;
mod checker;
mod constants;
mod error;
mod quadratic;
mod quicksort;
mod util;

pub use algorithm::Algorithm;
pub use bogosort::{
    bogosort, bogosort_by, bogosort_by_key, partial_bogosort, try_bogosort_by,
    try_bogosort_with_rng, BogosortConfig,
};
pub use checker::{is_sorted, is_sorted_by, is_sorted_by_key, partial_is_sorted, try_is_sorted_by};
pub use constants::{DEFAULT_MAX_SHUFFLES, MAX_BOGOSORT_LEN};
pub use error::SortError;
pub use quadratic::{
    bubble_sort::{bubble_sort, bubble_sort_by, bubble_sort_by_key, partial_bubble_sort, try_bubble_sort_by},
    gnome_sort::{gnome_sort, gnome_sort_by, gnome_sort_by_key, partial_gnome_sort, try_gnome_sort_by},
    insertion_sort::{
        insertion_sort, insertion_sort_by, insertion_sort_by_key, partial_insertion_sort,
        try_insertion_sort_by,
    },
    selection_sort::{
        partial_selection_sort, selection_sort, selection_sort_by, selection_sort_by_key,
        try_selection_sort_by,
    },
};
pub use quicksort::{partial_quicksort, quicksort, quicksort_by, quicksort_by_key, try_quicksort_by};

/// Strict weak order: `is_less(a, b)` is true iff `a` must be placed before `b`.
pub trait Less<T>: Fn(&T, &T) -> bool {}
impl<T, F: Fn(&T, &T) -> bool> Less<T> for F {}

/// Like [`Less`], but the comparison itself may fail.
pub trait TryLess<T, E>: Fn(&T, &T) -> Result<bool, E> {}
impl<T, E, F: Fn(&T, &T) -> Result<bool, E>> TryLess<T, E> for F {}
