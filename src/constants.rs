/// Shuffle cap used by [`crate::BogosortConfig::default`].
pub const DEFAULT_MAX_SHUFFLES: usize = 1_000_000;

/// Above this length bogosort is expected to run for a very long time.
pub const MAX_BOGOSORT_LEN: usize = 10;
