//! C FFI bindings for bufkit.
//!
//! Exposes every operation through a C-compatible API. Functions return
//! an `i32` [`BufkitStatus`] and deliver values through out-pointers.
//! A non-positive element count is treated as an empty buffer, null
//! pointers are rejected when elements would be read, and panics are
//! caught at the boundary.
//!
//! This is the only bufkit crate that contains `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run an FFI body, converting a panic into [`BufkitStatus::Panicked`].
///
/// `return` inside the body returns from the guarded closure, so early
/// exits still produce a status code.
macro_rules! ffi_guard {
    ($body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| -> i32 { $body })) {
            Ok(status) => status,
            Err(_) => $crate::status::BufkitStatus::Panicked as i32,
        }
    };
}

pub mod array;
pub mod record;
pub mod status;
pub mod text;

pub use record::{BufkitRecord, BufkitUpdateSummary};
pub use status::BufkitStatus;

/// Element count for a C `int` length; non-positive means empty.
pub(crate) fn element_count(n: i32) -> usize {
    if n <= 0 {
        0
    } else {
        n as usize
    }
}
