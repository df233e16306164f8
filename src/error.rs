use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// A comparison between two elements had no defined result.
    #[error("elements cannot be ordered relative to each other")]
    IncomparableElements,
    /// Bogosort performed `limit` shuffles without reaching sorted order.
    #[error("bogosort did not reach sorted order within {limit} shuffles")]
    BogosortExceededRetryLimit { limit: usize },
}
