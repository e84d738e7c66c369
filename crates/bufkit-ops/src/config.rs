//! Record-update configuration, validation, and error types.
//!
//! [`RecordUpdateConfig`] describes how [`update_records_with`] changes
//! each record. [`Default`] reproduces the fixed legacy behaviour:
//! `value += id * 3`, then append `"_EVEN"` or `"_ODD"`, truncating the
//! suffix if the name is nearly full.
//!
//! [`update_records_with`]: crate::records::update_records_with

use std::error::Error;
use std::fmt;

use bufkit_core::RecordName;

// ── OverflowPolicy ─────────────────────────────────────────────────

/// What to do when a suffix does not fit in the remaining name capacity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Append as many suffix bytes as fit, then stop.
    #[default]
    Truncate,
    /// Leave the name unchanged. The value update still applies.
    Reject,
}

// ── RecordUpdateConfig ─────────────────────────────────────────────

/// Parameters for a batch record update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordUpdateConfig {
    /// Each record's `value` grows by `id * id_multiplier`. Default: 3.
    pub id_multiplier: i32,
    /// Appended when the updated value is even. Default: `"_EVEN"`.
    pub even_suffix: String,
    /// Appended when the updated value is odd. Default: `"_ODD"`.
    pub odd_suffix: String,
    /// Behaviour when a suffix would overflow the name. Default: truncate.
    pub overflow: OverflowPolicy,
}

impl RecordUpdateConfig {
    /// Default multiplier applied to `id`.
    pub const DEFAULT_ID_MULTIPLIER: i32 = 3;

    /// Default suffix for even values.
    pub const DEFAULT_EVEN_SUFFIX: &'static str = "_EVEN";

    /// Default suffix for odd values.
    pub const DEFAULT_ODD_SUFFIX: &'static str = "_ODD";

    /// Check the configuration before any record is touched.
    ///
    /// A suffix must be non-empty, free of NUL bytes, and short enough to
    /// fit in an empty name; otherwise it could never be appended intact.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (parity, suffix) in [("even", &self.even_suffix), ("odd", &self.odd_suffix)] {
            if suffix.is_empty() {
                return Err(ConfigError::EmptySuffix { parity });
            }
            if suffix.as_bytes().contains(&0) {
                return Err(ConfigError::NulInSuffix { parity });
            }
            if suffix.len() > RecordName::CAPACITY {
                return Err(ConfigError::SuffixTooLong {
                    parity,
                    len: suffix.len(),
                    capacity: RecordName::CAPACITY,
                });
            }
        }
        Ok(())
    }

    /// The suffix for a value of the given parity.
    pub fn suffix_for(&self, value: i32) -> &str {
        if value % 2 == 0 {
            &self.even_suffix
        } else {
            &self.odd_suffix
        }
    }
}

impl Default for RecordUpdateConfig {
    fn default() -> Self {
        Self {
            id_multiplier: Self::DEFAULT_ID_MULTIPLIER,
            even_suffix: Self::DEFAULT_EVEN_SUFFIX.to_string(),
            odd_suffix: Self::DEFAULT_ODD_SUFFIX.to_string(),
            overflow: OverflowPolicy::default(),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`RecordUpdateConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A suffix is the empty string.
    EmptySuffix {
        /// `"even"` or `"odd"`.
        parity: &'static str,
    },
    /// A suffix contains a NUL byte.
    NulInSuffix {
        /// `"even"` or `"odd"`.
        parity: &'static str,
    },
    /// A suffix is longer than a whole record name.
    SuffixTooLong {
        /// `"even"` or `"odd"`.
        parity: &'static str,
        /// Suffix length in bytes.
        len: usize,
        /// Name capacity in bytes, terminator excluded.
        capacity: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySuffix { parity } => write!(f, "{parity} suffix is empty"),
            Self::NulInSuffix { parity } => write!(f, "{parity} suffix contains a NUL byte"),
            Self::SuffixTooLong {
                parity,
                len,
                capacity,
            } => write!(
                f,
                "{parity} suffix is {len} bytes, name capacity is {capacity}"
            ),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_legacy_update() {
        let cfg = RecordUpdateConfig::default();
        assert_eq!(cfg.id_multiplier, 3);
        assert_eq!(cfg.even_suffix, "_EVEN");
        assert_eq!(cfg.odd_suffix, "_ODD");
        assert_eq!(cfg.overflow, OverflowPolicy::Truncate);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn suffix_for_negative_values() {
        let cfg = RecordUpdateConfig::default();
        assert_eq!(cfg.suffix_for(-4), "_EVEN");
        assert_eq!(cfg.suffix_for(-3), "_ODD");
        assert_eq!(cfg.suffix_for(0), "_EVEN");
    }

    #[test]
    fn empty_suffix_rejected() {
        let cfg = RecordUpdateConfig {
            odd_suffix: String::new(),
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::EmptySuffix { parity: "odd" })
        );
    }

    #[test]
    fn nul_suffix_rejected() {
        let cfg = RecordUpdateConfig {
            even_suffix: "_E\0".to_string(),
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NulInSuffix { parity: "even" })
        );
    }

    #[test]
    fn oversized_suffix_rejected() {
        let cfg = RecordUpdateConfig {
            even_suffix: "x".repeat(32),
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::SuffixTooLong {
                parity: "even",
                len: 32,
                capacity: 31
            }
        );
        assert_eq!(err.to_string(), "even suffix is 32 bytes, name capacity is 31");
    }
}
