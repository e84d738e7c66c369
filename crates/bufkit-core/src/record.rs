//! The [`Record`] data shape shared by the record-update operations.

use crate::charbuf::CharBuf;
use crate::error::BufError;

/// Size of a record name buffer in bytes, terminator included.
pub const NAME_CAPACITY: usize = 32;

/// Fixed-capacity record name: up to 31 content bytes plus the terminator.
pub type RecordName = CharBuf<NAME_CAPACITY>;

/// An `(id, value, name)` triple updated in place by batch operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    /// Record identifier; also the input to the value update.
    pub id: i32,
    /// Accumulated value.
    pub value: i32,
    /// Name, always NUL-terminated within [`NAME_CAPACITY`] bytes.
    pub name: RecordName,
}

impl Record {
    /// Create a record, rejecting names that do not fit.
    ///
    /// # Errors
    ///
    /// Propagates [`BufError`] from [`CharBuf::try_from`].
    pub fn new(id: i32, value: i32, name: &str) -> Result<Self, BufError> {
        Ok(Self {
            id,
            value,
            name: RecordName::try_from(name)?,
        })
    }
}
