//! Test fixtures for bufkit development.
//!
//! The `driver_*` fixtures are the exact inputs of the reference driver
//! scenario, shared by integration tests, benchmarks, and the driver
//! example so all three agree on the expected values. The `random_*`
//! helpers produce seeded, reproducible inputs for larger workloads.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use bufkit_core::Record;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Text reversed by the driver.
pub const DRIVER_TEXT: &str = "hello_world_test_case";

/// Text scanned for matches by the driver, and the byte it counts.
pub const DRIVER_COUNT_TEXT: &str = "banana_bandana";
pub const DRIVER_COUNT_CHAR: u8 = b'a';

/// Factor applied by the driver's float scaling step.
pub const DRIVER_SCALE_FACTOR: f32 = 0.75;

/// Unsorted input for the driver's sort step.
pub const DRIVER_SORT_INPUT: [i32; 8] = [9, 2, 5, 1, 7, 3, 6, 4];

/// Fibonacci index computed by the driver.
pub const DRIVER_FIB_INDEX: i32 = 15;

/// Matrix shape used by the driver.
pub const DRIVER_MATRIX_ROWS: usize = 3;
pub const DRIVER_MATRIX_COLS: usize = 3;

/// `(i * 7) % 13` for `i` in `0..16`.
pub fn driver_ints() -> [i32; 16] {
    std::array::from_fn(|i| (i as i32 * 7) % 13)
}

/// `i * 1.25` for `i` in `0..10`.
pub fn driver_floats() -> [f32; 10] {
    std::array::from_fn(|i| i as f32 * 1.25)
}

/// `i * 3` for `i` in `0..32`.
pub fn driver_bytes() -> [u8; 32] {
    std::array::from_fn(|i| (i * 3) as u8)
}

/// `(A, B)` with `A[i] = i` and `B[i] = 2 * i`, flattened 3x3.
pub fn driver_matrices() -> ([i32; 9], [i32; 9]) {
    (
        std::array::from_fn(|i| i as i32),
        std::array::from_fn(|i| i as i32 * 2),
    )
}

/// The three records updated by the driver.
pub fn driver_records() -> [Record; 3] {
    [
        Record::new(1, 10, "first").expect("fixture name fits"),
        Record::new(2, 5, "second").expect("fixture name fits"),
        Record::new(3, 7, "third").expect("fixture name fits"),
    ]
}

/// `len` pseudo-random integers, reproducible from `seed`.
pub fn random_ints(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.next_u32() as i32).collect()
}

/// `len` pseudo-random bytes, reproducible from `seed`.
pub fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = vec![0u8; len];
    rng.fill_bytes(&mut out);
    out
}
