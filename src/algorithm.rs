use std::fmt;

use crate::{
    bogosort::{try_bogosort_by, BogosortConfig},
    quadratic::{
        bubble_sort::try_bubble_sort_by, gnome_sort::try_gnome_sort_by,
        insertion_sort::try_insertion_sort_by, selection_sort::try_selection_sort_by,
    },
    quicksort::try_quicksort_by,
    util::partial_less,
    Less, SortError, TryLess,
};

/// The sorting algorithms of this crate, for picking one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Insertion,
    Selection,
    Bubble,
    Gnome,
    Quicksort,
    /// Runs with [`BogosortConfig::default`].
    Bogosort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Bubble,
        Algorithm::Gnome,
        Algorithm::Quicksort,
        Algorithm::Bogosort,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Insertion => "insertion sort",
            Algorithm::Selection => "selection sort",
            Algorithm::Bubble => "bubble sort",
            Algorithm::Gnome => "gnome sort",
            Algorithm::Quicksort => "quicksort",
            Algorithm::Bogosort => "bogosort",
        }
    }

    /// Whether equal elements are guaranteed to keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Insertion | Algorithm::Bubble | Algorithm::Gnome
        )
    }

    /// Sorts `v` in place with a fallible comparator.
    ///
    /// Quicksort works on a copy of `v`, which is written back only once it is
    /// sorted. The in-place algorithms leave `v` partially sorted on error.
    pub fn try_sort_by<T, E, F>(self, v: &mut [T], is_less: &F) -> Result<(), E>
    where
        T: Clone,
        F: TryLess<T, E>,
        E: From<SortError>,
    {
        match self {
            Algorithm::Insertion => try_insertion_sort_by(v, is_less),
            Algorithm::Selection => try_selection_sort_by(v, is_less),
            Algorithm::Bubble => try_bubble_sort_by(v, is_less),
            Algorithm::Gnome => try_gnome_sort_by(v, is_less),
            Algorithm::Quicksort => {
                let sorted = try_quicksort_by(v.to_vec(), is_less)?;
                for (slot, elem) in v.iter_mut().zip(sorted) {
                    *slot = elem;
                }
                Ok(())
            }
            Algorithm::Bogosort => {
                try_bogosort_by(v, is_less, &BogosortConfig::default()).map(|_shuffles| ())
            }
        }
    }

    /// Sorts `v` in ascending order. Only [`Algorithm::Bogosort`] can fail.
    #[inline]
    pub fn sort<T>(self, v: &mut [T]) -> Result<(), SortError>
    where
        T: Ord + Clone,
    {
        self.sort_by(v, T::lt)
    }

    #[inline]
    pub fn sort_by<T, F>(self, v: &mut [T], is_less: F) -> Result<(), SortError>
    where
        T: Clone,
        F: Less<T>,
    {
        self.try_sort_by(v, &|a: &T, b: &T| Ok::<_, SortError>(is_less(a, b)))?;
        debug_assert!(crate::is_sorted_by(v, &is_less));
        Ok(())
    }

    #[inline]
    pub fn partial_sort<T>(self, v: &mut [T]) -> Result<(), SortError>
    where
        T: PartialOrd + Clone,
    {
        self.try_sort_by(v, &partial_less::<T>)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
