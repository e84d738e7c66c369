//! bufkit: stateless utilities over caller-owned fixed-size buffers.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the bufkit sub-crates. For most users, adding `bufkit` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use bufkit::prelude::*;
//!
//! let arr = [5, 9, 2];
//! assert_eq!(sum_array(&arr), 16);
//! assert_eq!(try_find_max(&arr), Some(9));
//!
//! let mut word = CharBuf::<32>::try_from("hello").unwrap();
//! word.with_content_mut(reverse_chars);
//! assert_eq!(word, "olleh");
//!
//! let mut records = [Record::new(3, 7, "third").unwrap()];
//! let report = update_records(&mut records);
//! assert_eq!(records[0].value, 16);
//! assert_eq!(records[0].name, "third_EVEN");
//! assert!(report.is_clean());
//!
//! assert_eq!(fibonacci(15), Ok(610));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `bufkit-core` | `CharBuf`, `Record`, error types |
//! | [`ops`] | `bufkit-ops` | The operations, record-update config, reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core data shapes and errors (`bufkit-core`).
///
/// [`types::CharBuf`] is the bounded NUL-terminated string every string
/// operation works through; [`types::Record`] is the record shape.
pub use bufkit_core as types;

/// Buffer operations (`bufkit-ops`).
///
/// Numeric reducers, string helpers, checksum, matrix addition, sort,
/// Fibonacci, and the batch record update.
pub use bufkit_ops as ops;

/// Common imports for typical bufkit usage.
///
/// ```rust
/// use bufkit::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use bufkit_core::{CharBuf, Record, RecordName, NAME_CAPACITY};

    // Errors
    pub use bufkit_core::{BufError, SequenceError};
    pub use bufkit_ops::ConfigError;

    // Operations
    pub use bufkit_ops::{
        bubble_sort, compute_checksum, count_matches, fibonacci, find_max, matrix_add,
        matrix_add_assign, reverse_chars, scale_array, sum_array, try_find_max, update_records,
        update_records_with, FIND_MAX_EMPTY,
    };

    // Record update
    pub use bufkit_ops::{AppendOutcome, OverflowPolicy, RecordUpdateConfig, UpdateReport};
}
