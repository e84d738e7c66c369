//! NUL-terminated string FFI.
//!
//! Every string comes with the capacity of the buffer it lives in, and
//! scanning never reads past that capacity. A buffer with no NUL inside
//! its capacity is rejected with `MissingTerminator` before anything is
//! modified.

use std::ffi::c_char;

use bufkit_core::c_str_len;
use bufkit_ops::{count_matches, reverse_chars};

use crate::status::BufkitStatus;

/// Reverse the string in `s` in place. `cap` is the buffer size in bytes.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bufkit_reverse_chars(s: *mut c_char, cap: usize) -> i32 {
    ffi_guard!({
        if s.is_null() || cap == 0 {
            return BufkitStatus::InvalidArgument as i32;
        }
        // SAFETY: caller guarantees s points to cap writable bytes.
        let bytes = unsafe { std::slice::from_raw_parts_mut(s.cast::<u8>(), cap) };
        if c_str_len(bytes) == cap {
            return BufkitStatus::MissingTerminator as i32;
        }
        reverse_chars(bytes);
        BufkitStatus::Ok as i32
    })
}

/// Count occurrences of `c` in the string in `s`. `cap` is the buffer
/// size in bytes.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bufkit_count_matches(
    s: *const c_char,
    cap: usize,
    c: c_char,
    out: *mut i32,
) -> i32 {
    ffi_guard!({
        if s.is_null() || cap == 0 || out.is_null() {
            return BufkitStatus::InvalidArgument as i32;
        }
        // SAFETY: caller guarantees s points to cap readable bytes.
        let bytes = unsafe { std::slice::from_raw_parts(s.cast::<u8>(), cap) };
        if c_str_len(bytes) == cap {
            return BufkitStatus::MissingTerminator as i32;
        }
        let count = i32::try_from(count_matches(bytes, c as u8)).unwrap_or(i32::MAX);
        // SAFETY: out is non-null; caller guarantees it is valid and aligned.
        unsafe { *out = count };
        BufkitStatus::Ok as i32
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bufkit_test_utils::{DRIVER_COUNT_TEXT, DRIVER_TEXT};

    const OK: i32 = BufkitStatus::Ok as i32;

    fn c_buf<const N: usize>(s: &str) -> [c_char; N] {
        let mut buf = [0 as c_char; N];
        for (dst, &src) in buf.iter_mut().zip(s.as_bytes()) {
            *dst = src as c_char;
        }
        buf
    }

    fn to_string(buf: &[c_char]) -> String {
        buf.iter()
            .take_while(|&&c| c != 0)
            .map(|&c| c as u8 as char)
            .collect()
    }

    #[test]
    fn reverse_driver_text() {
        let mut buf = c_buf::<64>(DRIVER_TEXT);
        assert_eq!(bufkit_reverse_chars(buf.as_mut_ptr(), buf.len()), OK);
        assert_eq!(to_string(&buf), "esac_tset_dlrow_olleh");
    }

    #[test]
    fn reverse_unterminated_is_rejected_untouched() {
        let mut buf = c_buf::<3>("abc");
        assert_eq!(
            bufkit_reverse_chars(buf.as_mut_ptr(), 3),
            BufkitStatus::MissingTerminator as i32
        );
        assert_eq!(buf, c_buf::<3>("abc"));
    }

    #[test]
    fn count_driver_text() {
        let buf = c_buf::<32>(DRIVER_COUNT_TEXT);
        let mut out = 0;
        assert_eq!(
            bufkit_count_matches(buf.as_ptr(), buf.len(), b'a' as c_char, &mut out),
            OK
        );
        assert_eq!(out, 6);
    }

    #[test]
    fn null_string_is_rejected() {
        let mut out = 0;
        assert_eq!(
            bufkit_count_matches(std::ptr::null(), 8, b'a' as c_char, &mut out),
            BufkitStatus::InvalidArgument as i32
        );
        assert_eq!(
            bufkit_reverse_chars(std::ptr::null_mut(), 8),
            BufkitStatus::InvalidArgument as i32
        );
    }
}
