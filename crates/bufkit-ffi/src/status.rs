//! C-compatible status codes.
//!
//! [`BufkitStatus`] is a `repr(i32)` enum covering every error condition
//! in bufkit. Conversions from the Rust error types are provided.

use bufkit_core::{BufError, SequenceError};
use bufkit_ops::ConfigError;

/// C-compatible status code returned by all FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufkitStatus {
    /// Success.
    Ok = 0,
    /// An argument is null, out of range, or otherwise invalid.
    InvalidArgument = -1,
    /// A character buffer has no NUL terminator within its capacity.
    MissingTerminator = -2,
    /// A write would not fit in a fixed-capacity buffer.
    CapacityExceeded = -3,
    /// A sequence index is negative.
    NegativeIndex = -4,
    /// Record-update configuration is invalid.
    ConfigError = -5,
    /// Matrix operands overlap in a way that is not exact aliasing.
    OverlappingBuffers = -6,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&BufError> for BufkitStatus {
    fn from(e: &BufError) -> Self {
        match e {
            BufError::CapacityExceeded { .. } => BufkitStatus::CapacityExceeded,
            BufError::MissingTerminator { .. } => BufkitStatus::MissingTerminator,
            BufError::InteriorNul { .. } => BufkitStatus::InvalidArgument,
        }
    }
}

impl From<&SequenceError> for BufkitStatus {
    fn from(e: &SequenceError) -> Self {
        match e {
            SequenceError::NegativeIndex { .. } => BufkitStatus::NegativeIndex,
        }
    }
}

impl From<&ConfigError> for BufkitStatus {
    fn from(_e: &ConfigError) -> Self {
        BufkitStatus::ConfigError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_values_are_stable() {
        assert_eq!(BufkitStatus::Ok as i32, 0);
        assert_eq!(BufkitStatus::InvalidArgument as i32, -1);
        assert_eq!(BufkitStatus::MissingTerminator as i32, -2);
        assert_eq!(BufkitStatus::CapacityExceeded as i32, -3);
        assert_eq!(BufkitStatus::NegativeIndex as i32, -4);
        assert_eq!(BufkitStatus::ConfigError as i32, -5);
        assert_eq!(BufkitStatus::OverlappingBuffers as i32, -6);
        assert_eq!(BufkitStatus::Panicked as i32, -128);
    }

    #[test]
    fn buf_error_to_status() {
        assert_eq!(
            BufkitStatus::from(&BufError::CapacityExceeded {
                requested: 40,
                capacity: 31
            }),
            BufkitStatus::CapacityExceeded
        );
        assert_eq!(
            BufkitStatus::from(&BufError::MissingTerminator { len: 32 }),
            BufkitStatus::MissingTerminator
        );
        assert_eq!(
            BufkitStatus::from(&BufError::InteriorNul { position: 1 }),
            BufkitStatus::InvalidArgument
        );
    }

    #[test]
    fn sequence_and_config_errors_to_status() {
        assert_eq!(
            BufkitStatus::from(&SequenceError::NegativeIndex { n: -1 }),
            BufkitStatus::NegativeIndex
        );
        assert_eq!(
            BufkitStatus::from(&ConfigError::EmptySuffix { parity: "odd" }),
            BufkitStatus::ConfigError
        );
    }
}
