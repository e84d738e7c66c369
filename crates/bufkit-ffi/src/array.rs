//! Numeric array FFI: reducers, scaling, checksum, matrix addition,
//! sorting, and Fibonacci.
//!
//! Lengths are C `int`s, as in the classic signatures. A null array is
//! accepted only when its count is non-positive.

use bufkit_ops::{
    bubble_sort, compute_checksum, fibonacci, find_max, matrix_add, matrix_add_assign,
    scale_array, sum_array,
};

use crate::element_count;
use crate::status::BufkitStatus;

/// Borrow `n` elements at `ptr`, or an empty slice when `n == 0`.
///
/// Returns `None` for a null `ptr` with `n > 0`.
#[allow(unsafe_code)]
fn slice_from<'a, T>(ptr: *const T, n: usize) -> Option<&'a [T]> {
    if n == 0 {
        return Some(&[]);
    }
    if ptr.is_null() {
        return None;
    }
    // SAFETY: caller guarantees ptr points to n valid, initialized T.
    Some(unsafe { std::slice::from_raw_parts(ptr, n) })
}

/// Mutable counterpart of [`slice_from`].
#[allow(unsafe_code)]
fn slice_from_mut<'a, T>(ptr: *mut T, n: usize) -> Option<&'a mut [T]> {
    if n == 0 {
        return Some(&mut []);
    }
    if ptr.is_null() {
        return None;
    }
    // SAFETY: caller guarantees ptr points to n valid T with no other
    // live references for the duration of the call.
    Some(unsafe { std::slice::from_raw_parts_mut(ptr, n) })
}

/// Sum `n` integers, wrapping on overflow. Writes `0` for `n <= 0`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bufkit_sum_array(a: *const i32, n: i32, out: *mut i32) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return BufkitStatus::InvalidArgument as i32;
        }
        let Some(a) = slice_from(a, element_count(n)) else {
            return BufkitStatus::InvalidArgument as i32;
        };
        // SAFETY: out is non-null; caller guarantees it is valid and aligned.
        unsafe { *out = sum_array(a) };
        BufkitStatus::Ok as i32
    })
}

/// Multiply `n` floats by `factor` in place.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bufkit_scale_array(a: *mut f32, n: i32, factor: f32) -> i32 {
    ffi_guard!({
        let Some(a) = slice_from_mut(a, element_count(n)) else {
            return BufkitStatus::InvalidArgument as i32;
        };
        scale_array(a, factor);
        BufkitStatus::Ok as i32
    })
}

/// Largest of `n` integers. Writes `-1` for `n <= 0`, indistinguishable
/// from a real maximum of `-1`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bufkit_find_max(a: *const i32, n: i32, out: *mut i32) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return BufkitStatus::InvalidArgument as i32;
        }
        let Some(a) = slice_from(a, element_count(n)) else {
            return BufkitStatus::InvalidArgument as i32;
        };
        // SAFETY: out is non-null; caller guarantees it is valid and aligned.
        unsafe { *out = find_max(a) };
        BufkitStatus::Ok as i32
    })
}

/// 16-bit folded checksum of `n` bytes, widened to a non-negative `int`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bufkit_compute_checksum(b: *const u8, n: i32, out: *mut i32) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return BufkitStatus::InvalidArgument as i32;
        }
        let Some(b) = slice_from(b, element_count(n)) else {
            return BufkitStatus::InvalidArgument as i32;
        };
        // SAFETY: out is non-null; caller guarantees it is valid and aligned.
        unsafe { *out = i32::from(compute_checksum(b)) };
        BufkitStatus::Ok as i32
    })
}

/// `C = A + B` over row-major `m x n` matrices.
///
/// `c` may be the same pointer as `a` or `b`; any other overlap between
/// the output and an input is rejected with `OverlappingBuffers`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bufkit_matrix_add(
    m: i32,
    n: i32,
    a: *const i32,
    b: *const i32,
    c: *mut i32,
) -> i32 {
    ffi_guard!({
        let (rows, cols) = (element_count(m), element_count(n));
        let Some(len) = rows.checked_mul(cols) else {
            return BufkitStatus::InvalidArgument as i32;
        };
        if len == 0 {
            return BufkitStatus::Ok as i32;
        }
        if a.is_null() || b.is_null() || c.is_null() {
            return BufkitStatus::InvalidArgument as i32;
        }

        let c_const = c as *const i32;
        let same_a = c_const == a;
        let same_b = c_const == b;
        if (!same_a && overlaps(c_const, a, len)) || (!same_b && overlaps(c_const, b, len)) {
            return BufkitStatus::OverlappingBuffers as i32;
        }

        match (same_a, same_b) {
            (true, true) => {
                // C = C + C: no separate input slice can be borrowed.
                let Some(acc) = slice_from_mut(c, len) else {
                    return BufkitStatus::InvalidArgument as i32;
                };
                for v in acc.iter_mut() {
                    *v = v.wrapping_add(*v);
                }
            }
            (true, false) | (false, true) => {
                let rhs_ptr = if same_a { b } else { a };
                let (Some(rhs), Some(acc)) = (slice_from(rhs_ptr, len), slice_from_mut(c, len))
                else {
                    return BufkitStatus::InvalidArgument as i32;
                };
                matrix_add_assign(rows, cols, acc, rhs);
            }
            (false, false) => {
                let (Some(a), Some(b), Some(c)) =
                    (slice_from(a, len), slice_from(b, len), slice_from_mut(c, len))
                else {
                    return BufkitStatus::InvalidArgument as i32;
                };
                matrix_add(rows, cols, a, b, c);
            }
        }
        BufkitStatus::Ok as i32
    })
}

/// Whether `[x, x+len)` and `[y, y+len)` share any element.
fn overlaps(x: *const i32, y: *const i32, len: usize) -> bool {
    let bytes = len.saturating_mul(std::mem::size_of::<i32>());
    let (x, y) = (x as usize, y as usize);
    x < y.saturating_add(bytes) && y < x.saturating_add(bytes)
}

/// Sort `n` integers ascending in place.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bufkit_bubble_sort(a: *mut i32, n: i32) -> i32 {
    ffi_guard!({
        let Some(a) = slice_from_mut(a, element_count(n)) else {
            return BufkitStatus::InvalidArgument as i32;
        };
        bubble_sort(a);
        BufkitStatus::Ok as i32
    })
}

/// The `n`-th Fibonacci number. Negative `n` yields `NegativeIndex`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bufkit_fibonacci(n: i32, out: *mut i32) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return BufkitStatus::InvalidArgument as i32;
        }
        match fibonacci(n) {
            Ok(v) => {
                // SAFETY: out is non-null; caller guarantees it is valid and aligned.
                unsafe { *out = v };
                BufkitStatus::Ok as i32
            }
            Err(e) => BufkitStatus::from(&e) as i32,
        }
    })
}
