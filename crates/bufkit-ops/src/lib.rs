//! Stateless operations over caller-owned fixed-size buffers.
//!
//! Every function borrows its inputs for the duration of the call and
//! keeps no state between calls, so any two calls on disjoint buffers
//! are independent.
//!
//! # Operations
//!
//! | Module | Operations |
//! |--------|------------|
//! | [`numeric`] | [`sum_array`], [`scale_array`], [`find_max`], [`try_find_max`] |
//! | [`text`] | [`reverse_chars`], [`count_matches`] |
//! | [`checksum`] | [`compute_checksum`] |
//! | [`matrix`] | [`matrix_add`], [`matrix_add_assign`] |
//! | [`sort`] | [`bubble_sort`] |
//! | [`sequence`] | [`fibonacci`] |
//! | [`records`] | [`update_records`], [`update_records_with`] |
//!
//! Integer arithmetic wraps on overflow throughout. Slices shorter than
//! a stated shape are a caller bug and panic through ordinary indexing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod checksum;
pub mod config;
pub mod matrix;
pub mod numeric;
pub mod records;
pub mod report;
pub mod sequence;
pub mod sort;
pub mod text;

pub use checksum::compute_checksum;
pub use config::{ConfigError, OverflowPolicy, RecordUpdateConfig};
pub use matrix::{matrix_add, matrix_add_assign};
pub use numeric::{find_max, scale_array, sum_array, try_find_max, FIND_MAX_EMPTY};
pub use records::{update_records, update_records_with};
pub use report::{AppendOutcome, UpdateReport};
pub use sequence::fibonacci;
pub use sort::bubble_sort;
pub use text::{count_matches, reverse_chars};
