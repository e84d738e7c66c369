//! Per-batch outcome of a record update.
//!
//! [`UpdateReport`] tells the caller how many records were touched,
//! how the parity split came out, and which names could not take their
//! full suffix.

use smallvec::SmallVec;

/// What happened to one record's suffix append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The whole suffix was appended.
    Appended,
    /// Only `written` bytes of the suffix fit.
    Truncated {
        /// Suffix bytes actually appended.
        written: usize,
    },
    /// The name was left unchanged.
    Rejected,
}

/// Summary of an [`update_records_with`](crate::records::update_records_with) call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Number of records updated.
    pub processed: usize,
    /// Records whose updated value was even.
    pub even: usize,
    /// Records whose updated value was odd.
    pub odd: usize,
    /// `(record index, outcome)` for every append that did not fit.
    pub overflowed: SmallVec<[(usize, AppendOutcome); 4]>,
}

impl UpdateReport {
    /// Whether every suffix was appended in full.
    pub fn is_clean(&self) -> bool {
        self.overflowed.is_empty()
    }

    pub(crate) fn note(&mut self, index: usize, value: i32, outcome: AppendOutcome) {
        self.processed += 1;
        if value % 2 == 0 {
            self.even += 1;
        } else {
            self.odd += 1;
        }
        if outcome != AppendOutcome::Appended {
            self.overflowed.push((index, outcome));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_report_is_clean_and_zero() {
        let r = UpdateReport::default();
        assert_eq!(r.processed, 0);
        assert_eq!(r.even, 0);
        assert_eq!(r.odd, 0);
        assert!(r.is_clean());
    }

    #[test]
    fn note_tracks_parity_and_overflow() {
        let mut r = UpdateReport::default();
        r.note(0, 13, AppendOutcome::Appended);
        r.note(1, 16, AppendOutcome::Truncated { written: 2 });
        r.note(2, -7, AppendOutcome::Rejected);
        assert_eq!(r.processed, 3);
        assert_eq!(r.even, 1);
        assert_eq!(r.odd, 2);
        assert!(!r.is_clean());
        assert_eq!(
            r.overflowed.as_slice(),
            &[
                (1, AppendOutcome::Truncated { written: 2 }),
                (2, AppendOutcome::Rejected)
            ]
        );
    }
}
