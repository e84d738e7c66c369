//! Record batch-update FFI.
//!
//! [`BufkitRecord`] has the same layout as
//! `struct { int id; int value; char name[32]; }`, so existing C record
//! arrays can be passed directly. Every name is checked for a terminator
//! before any record is modified.

use std::ffi::c_char;

use bufkit_core::{Record, RecordName, NAME_CAPACITY};
use bufkit_ops::{update_records_with, OverflowPolicy, RecordUpdateConfig, UpdateReport};

use crate::element_count;
use crate::status::BufkitStatus;

/// Size of [`BufkitRecord::name`] in bytes, terminator included.
pub const BUFKIT_NAME_CAPACITY: usize = 32;

const _: () = assert!(BUFKIT_NAME_CAPACITY == NAME_CAPACITY);

/// C-compatible record.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct BufkitRecord {
    /// Record identifier.
    pub id: i32,
    /// Accumulated value.
    pub value: i32,
    /// NUL-terminated name.
    pub name: [c_char; BUFKIT_NAME_CAPACITY],
}

// Compile-time layout assertions for ABI stability.
// 2×i32 + 32×c_char = 40 bytes, align 4.
const _: () = assert!(std::mem::size_of::<BufkitRecord>() == 40);
const _: () = assert!(std::mem::align_of::<BufkitRecord>() == 4);

impl BufkitRecord {
    fn to_rust(&self) -> Result<Record, BufkitStatus> {
        let raw: [u8; NAME_CAPACITY] = self.name.map(|c| c as u8);
        let name = RecordName::from_nul_terminated(raw).map_err(|e| BufkitStatus::from(&e))?;
        Ok(Record {
            id: self.id,
            value: self.value,
            name,
        })
    }

    fn store(&mut self, rec: &Record) {
        self.value = rec.value;
        self.name = rec.name.to_nul_terminated().map(|b| b as c_char);
    }
}

/// C-compatible summary of a batch update.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BufkitUpdateSummary {
    /// Number of records updated.
    pub processed: u32,
    /// Records whose updated value was even.
    pub even: u32,
    /// Records whose updated value was odd.
    pub odd: u32,
    /// Records whose suffix was truncated or rejected.
    pub overflowed: u32,
}

impl BufkitUpdateSummary {
    fn from_rust(r: &UpdateReport) -> Self {
        let clamp = |v: usize| u32::try_from(v).unwrap_or(u32::MAX);
        Self {
            processed: clamp(r.processed),
            even: clamp(r.even),
            odd: clamp(r.odd),
            overflowed: clamp(r.overflowed.len()),
        }
    }
}

/// Overflow policy selector: truncate the suffix to fit.
pub const BUFKIT_OVERFLOW_TRUNCATE: i32 = 0;
/// Overflow policy selector: leave the name unchanged.
pub const BUFKIT_OVERFLOW_REJECT: i32 = 1;

/// Update `count` records with the legacy rule: `value += id * 3`, then
/// append `"_EVEN"` or `"_ODD"`, truncating a suffix that does not fit.
///
/// `summary_out` may be null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bufkit_update_records(
    rec: *mut BufkitRecord,
    count: i32,
    summary_out: *mut BufkitUpdateSummary,
) -> i32 {
    bufkit_update_records_policy(rec, count, BUFKIT_OVERFLOW_TRUNCATE, summary_out)
}

/// Like [`bufkit_update_records`] with an explicit overflow policy
/// (`BUFKIT_OVERFLOW_TRUNCATE` or `BUFKIT_OVERFLOW_REJECT`).
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bufkit_update_records_policy(
    rec: *mut BufkitRecord,
    count: i32,
    policy: i32,
    summary_out: *mut BufkitUpdateSummary,
) -> i32 {
    ffi_guard!({
        let overflow = match policy {
            BUFKIT_OVERFLOW_TRUNCATE => OverflowPolicy::Truncate,
            BUFKIT_OVERFLOW_REJECT => OverflowPolicy::Reject,
            _ => return BufkitStatus::InvalidArgument as i32,
        };
        let n = element_count(count);
        let c_records: &mut [BufkitRecord] = if n == 0 {
            &mut []
        } else if rec.is_null() {
            return BufkitStatus::InvalidArgument as i32;
        } else {
            // SAFETY: caller guarantees rec points to count valid records.
            unsafe { std::slice::from_raw_parts_mut(rec, n) }
        };

        let mut records = Vec::with_capacity(n);
        for r in c_records.iter() {
            match r.to_rust() {
                Ok(r) => records.push(r),
                Err(status) => return status as i32,
            }
        }

        let config = RecordUpdateConfig {
            overflow,
            ..Default::default()
        };
        let report = match update_records_with(&mut records, &config) {
            Ok(report) => report,
            Err(e) => return BufkitStatus::from(&e) as i32,
        };

        for (dst, src) in c_records.iter_mut().zip(&records) {
            dst.store(src);
        }
        if !summary_out.is_null() {
            // SAFETY: summary_out is non-null; caller guarantees it is valid.
            unsafe { *summary_out = BufkitUpdateSummary::from_rust(&report) };
        }
        BufkitStatus::Ok as i32
    })
}
