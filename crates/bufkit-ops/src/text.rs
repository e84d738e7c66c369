//! Operations on NUL-terminated byte strings.
//!
//! Both functions take a C-string view: a byte slice whose logical
//! length ends at the first NUL, or at the slice end if there is none.
//! A [`CharBuf`](bufkit_core::CharBuf) exposes such a view through
//! `as_bytes_with_nul()` and `with_content_mut()`.

use bufkit_core::c_str_len;

/// Reverse the string in place.
///
/// Swaps byte `i` with byte `len - 1 - i` for `i < len / 2`. An odd
/// length leaves the middle byte where it is, and the terminator (and
/// anything after it) is not touched.
pub fn reverse_chars(s: &mut [u8]) {
    let n = c_str_len(s);
    for i in 0..n / 2 {
        s.swap(i, n - 1 - i);
    }
}

/// Number of bytes equal to `c` before the terminator.
pub fn count_matches(s: &[u8], c: u8) -> usize {
    s[..c_str_len(s)].iter().filter(|&&b| b == c).count()
}
