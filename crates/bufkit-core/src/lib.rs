//! Core types for the bufkit buffer utility library.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the data shapes every operation works on: the NUL-terminated
//! fixed-capacity [`CharBuf`], the [`Record`] struct, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod charbuf;
pub mod error;
pub mod record;

pub use charbuf::{c_str_len, CharBuf};
pub use error::{BufError, SequenceError};
pub use record::{Record, RecordName, NAME_CAPACITY};
