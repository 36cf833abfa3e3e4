use thiserror::Error;

/// Errors reported by the fallible (`try_*`) constructors and accessors of
/// [`BitSet`](crate::BitSet).
///
/// The plain accessors panic on the same conditions instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitSetError {
    /// A bit set was requested with a capacity of zero.
    #[error("capacity must be greater than zero")]
    InvalidCapacity,

    /// An index was outside the inclusive range `0..=capacity`.
    #[error("bit index {index} out of bounds for capacity {capacity}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Capacity of the bit set that rejected it.
        capacity: usize,
    },
}
