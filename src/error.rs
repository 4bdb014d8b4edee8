use thiserror::Error;

/// Errors returned by [`StoutList`](crate::StoutList) and its cursor.
///
/// Every operation checks its arguments before touching the list, so an
/// `Err` always leaves the list exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The node size given at construction is zero or odd.
    #[error("node size must be a positive even number, got {0}")]
    InvalidNodeSize(usize),

    /// A position argument lies outside the valid range of the operation:
    /// `0..len` for access and removal, `0..=len` for insertion.
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// `remove` or `set` was called on a cursor without a preceding
    /// `next` or `previous`.
    #[error("cursor has no current element, call `next` or `previous` first")]
    InvalidCursorState,

    /// `next` was called at the end of the list, or `previous` at the start.
    #[error("cursor moved past the end of the list")]
    EndOfSequence,
}

pub type Result<T> = std::result::Result<T, Error>;
