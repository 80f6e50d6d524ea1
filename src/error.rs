//! Error types for the `flagsort` crate

/// Errors returned by the checked sort entry points
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SortError {
    /// The requested range does not lie within the buffer.
    ///
    /// A valid range satisfies `start <= end <= len`.
    #[error("invalid sort range {start}..{end} for buffer of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
}
