//! Bogosort: shuffle until sorted.
//!
//! The expected number of shuffles for `n` distinct elements is `n!`, so every
//! run is bounded by [`BogosortConfig::max_shuffles`].

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::{debug, trace, warn};

use crate::{
    checker::try_is_sorted_by,
    constants::{DEFAULT_MAX_SHUFFLES, MAX_BOGOSORT_LEN},
    util::partial_less,
    Less, SortError, TryLess,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BogosortConfig {
    /// Number of shuffles after which the sort gives up.
    pub max_shuffles: usize,
    /// Seed for the shuffle RNG. `None` seeds a fresh generator from entropy
    /// on every call.
    pub seed: Option<u64>,
}

impl Default for BogosortConfig {
    fn default() -> Self {
        Self {
            max_shuffles: DEFAULT_MAX_SHUFFLES,
            seed: None,
        }
    }
}

impl BogosortConfig {
    pub fn with_max_shuffles(mut self, max_shuffles: usize) -> Self {
        self.max_shuffles = max_shuffles;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Shuffles `v` with `rng` until it is sorted under `is_less`, returning the
/// number of shuffles performed.
///
/// Already sorted input returns `Ok(0)` without touching `rng`. If the slice
/// is still unsorted after `max_shuffles` shuffles, fails with
/// [`SortError::BogosortExceededRetryLimit`] and leaves `v` in its last
/// shuffled order.
pub fn try_bogosort_with_rng<T, E, F, R>(
    v: &mut [T],
    is_less: &F,
    rng: &mut R,
    max_shuffles: usize,
) -> Result<usize, E>
where
    F: TryLess<T, E>,
    R: Rng + ?Sized,
    E: From<SortError>,
{
    if v.len() > MAX_BOGOSORT_LEN {
        warn!(
            len = v.len(),
            max_shuffles, "bogosort is unlikely to finish on an input this long"
        );
    }

    let mut shuffles = 0;
    while !try_is_sorted_by(v, is_less)? {
        if shuffles == max_shuffles {
            warn!(limit = max_shuffles, len = v.len(), "bogosort gave up");
            return Err(SortError::BogosortExceededRetryLimit {
                limit: max_shuffles,
            }
            .into());
        }
        v.shuffle(rng);
        shuffles += 1;
        trace!(shuffles, "shuffled");
    }
    debug!(shuffles, len = v.len(), "bogosort finished");
    Ok(shuffles)
}

#[inline]
pub fn try_bogosort_by<T, E, F>(
    v: &mut [T],
    is_less: &F,
    config: &BogosortConfig,
) -> Result<usize, E>
where
    F: TryLess<T, E>,
    E: From<SortError>,
{
    try_bogosort_with_rng(v, is_less, &mut config.rng(), config.max_shuffles)
}

#[inline]
pub fn bogosort<T>(v: &mut [T], config: &BogosortConfig) -> Result<usize, SortError>
where
    T: Ord,
{
    bogosort_by(v, T::lt, config)
}

#[inline]
pub fn bogosort_by<T, F>(
    v: &mut [T],
    is_less: F,
    config: &BogosortConfig,
) -> Result<usize, SortError>
where
    F: Less<T>,
{
    try_bogosort_by(v, &|a: &T, b: &T| Ok(is_less(a, b)), config)
}

#[inline]
pub fn bogosort_by_key<T, K, F>(
    v: &mut [T],
    f: F,
    config: &BogosortConfig,
) -> Result<usize, SortError>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    bogosort_by(v, |a: &T, b: &T| f(a).lt(&f(b)), config)
}

#[inline]
pub fn partial_bogosort<T>(v: &mut [T], config: &BogosortConfig) -> Result<usize, SortError>
where
    T: PartialOrd,
{
    try_bogosort_by(v, &partial_less::<T>, config)
}
