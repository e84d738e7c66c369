//! Error types for bufkit operations.
//!
//! Most operations have no error conditions at all. The two that do are
//! bounded writes into a [`CharBuf`](crate::CharBuf) and the sequence
//! generator, which refuses negative indices.

use std::error::Error;
use std::fmt;

/// Errors from fixed-capacity character buffer operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufError {
    /// A write would leave no room for the NUL terminator.
    CapacityExceeded {
        /// Content length in bytes the write would have produced.
        requested: usize,
        /// Maximum content length the buffer can hold (terminator excluded).
        capacity: usize,
    },
    /// A raw buffer handed to the library contains no NUL terminator.
    MissingTerminator {
        /// Size of the buffer that was scanned.
        len: usize,
    },
    /// Content contains an interior NUL, which would silently shorten it.
    InteriorNul {
        /// Byte offset of the first NUL.
        position: usize,
    },
}

impl fmt::Display for BufError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "buffer capacity exceeded: requested {requested} bytes, capacity {capacity} bytes"
                )
            }
            Self::MissingTerminator { len } => {
                write!(f, "no NUL terminator within {len} bytes")
            }
            Self::InteriorNul { position } => {
                write!(f, "interior NUL at byte {position}")
            }
        }
    }
}

impl Error for BufError {}

/// Errors from sequence generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// The requested term index is negative.
    NegativeIndex {
        /// The rejected index.
        n: i32,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeIndex { n } => write!(f, "sequence index {n} is negative"),
        }
    }
}

impl Error for SequenceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_exceeded_message_names_both_sizes() {
        let err = BufError::CapacityExceeded {
            requested: 36,
            capacity: 31,
        };
        assert_eq!(
            err.to_string(),
            "buffer capacity exceeded: requested 36 bytes, capacity 31 bytes"
        );
    }

    #[test]
    fn negative_index_message() {
        let err = SequenceError::NegativeIndex { n: -3 };
        assert_eq!(err.to_string(), "sequence index -3 is negative");
    }
}
