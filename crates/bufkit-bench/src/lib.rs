//! Reference driver and benchmark helpers for bufkit.
//!
//! [`run_driver`] exercises every operation once over the fixed driver
//! inputs from `bufkit-test-utils` and collects the results into a
//! [`DriverReport`]. The `driver` example prints it; the benches time it
//! alongside the individual operations.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt;

use bufkit_core::{CharBuf, Record, SequenceError};
use bufkit_ops::{
    bubble_sort, compute_checksum, count_matches, fibonacci, find_max, matrix_add, reverse_chars,
    scale_array, sum_array, update_records, UpdateReport,
};
use bufkit_test_utils::{
    driver_bytes, driver_floats, driver_ints, driver_matrices, driver_records, DRIVER_COUNT_CHAR,
    DRIVER_COUNT_TEXT, DRIVER_FIB_INDEX, DRIVER_MATRIX_COLS, DRIVER_MATRIX_ROWS,
    DRIVER_SCALE_FACTOR, DRIVER_SORT_INPUT, DRIVER_TEXT,
};

/// Every value the driver computes, in the order it computes them.
#[derive(Clone, Debug, PartialEq)]
pub struct DriverReport {
    pub sum: i32,
    pub scaled: [f32; 10],
    pub max: i32,
    pub reversed: CharBuf<64>,
    pub records: [Record; 3],
    pub record_update: UpdateReport,
    pub matches: usize,
    pub checksum: u16,
    pub matrix: [i32; 9],
    pub sorted: [i32; 8],
    pub fib: i32,
}

/// Run the reference scenario.
///
/// # Errors
///
/// Only the Fibonacci step can fail, and only for a negative index,
/// which the fixed inputs never use.
pub fn run_driver() -> Result<DriverReport, SequenceError> {
    let arr = driver_ints();
    let sum = sum_array(&arr);

    let mut scaled = driver_floats();
    scale_array(&mut scaled, DRIVER_SCALE_FACTOR);

    let max = find_max(&arr);

    // A fixed string always fits in 64 bytes.
    let mut reversed = CharBuf::<64>::from_bytes_truncating(DRIVER_TEXT.as_bytes());
    reversed.with_content_mut(reverse_chars);

    let mut records = driver_records();
    let record_update = update_records(&mut records);

    let count_text = CharBuf::<32>::from_bytes_truncating(DRIVER_COUNT_TEXT.as_bytes());
    let matches = count_matches(count_text.as_bytes_with_nul(), DRIVER_COUNT_CHAR);

    let checksum = compute_checksum(&driver_bytes());

    let (a, b) = driver_matrices();
    let mut matrix = [0; 9];
    matrix_add(DRIVER_MATRIX_ROWS, DRIVER_MATRIX_COLS, &a, &b, &mut matrix);

    let mut sorted = DRIVER_SORT_INPUT;
    bubble_sort(&mut sorted);

    let fib = fibonacci(DRIVER_FIB_INDEX)?;

    Ok(DriverReport {
        sum,
        scaled,
        max,
        reversed,
        records,
        record_update,
        matches,
        checksum,
        matrix,
        sorted,
        fib,
    })
}

impl fmt::Display for DriverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sum_array        = {}", self.sum)?;
        writeln!(f, "scale_array      = {:?}", self.scaled)?;
        writeln!(f, "find_max         = {}", self.max)?;
        writeln!(f, "reverse_chars    = {}", self.reversed)?;
        for r in &self.records {
            writeln!(
                f,
                "update_records   = {{ id: {}, value: {}, name: {} }}",
                r.id, r.value, r.name
            )?;
        }
        writeln!(f, "count_matches    = {}", self.matches)?;
        writeln!(f, "compute_checksum = {}", self.checksum)?;
        writeln!(f, "matrix_add       = {:?}", self.matrix)?;
        writeln!(f, "bubble_sort      = {:?}", self.sorted)?;
        write!(f, "fibonacci        = {}", self.fib)
    }
}
