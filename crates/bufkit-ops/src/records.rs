//! Batch update of [`Record`]s: arithmetic on the value, then a bounded
//! parity suffix on the name.

use bufkit_core::{Record, RecordName};

use crate::config::{ConfigError, OverflowPolicy, RecordUpdateConfig};
use crate::report::{AppendOutcome, UpdateReport};

/// Update every record with the default configuration.
///
/// For each record: `value += id * 3` (wrapping), then append `"_EVEN"`
/// if the new value is even or `"_ODD"` otherwise. A suffix that does
/// not fit is truncated to the remaining capacity; the name stays
/// NUL-terminated within its 32 bytes either way.
pub fn update_records(records: &mut [Record]) -> UpdateReport {
    apply(records, &RecordUpdateConfig::default())
}

/// Update every record according to `config`.
///
/// # Errors
///
/// Returns the [`ConfigError`] from [`RecordUpdateConfig::validate`]
/// without touching any record.
pub fn update_records_with(
    records: &mut [Record],
    config: &RecordUpdateConfig,
) -> Result<UpdateReport, ConfigError> {
    config.validate()?;
    Ok(apply(records, config))
}

fn apply(records: &mut [Record], config: &RecordUpdateConfig) -> UpdateReport {
    let mut report = UpdateReport::default();
    for (index, rec) in records.iter_mut().enumerate() {
        rec.value = rec
            .value
            .wrapping_add(rec.id.wrapping_mul(config.id_multiplier));
        let suffix = config.suffix_for(rec.value);
        let outcome = append_suffix(&mut rec.name, suffix, config.overflow);
        report.note(index, rec.value, outcome);
    }
    report
}

fn append_suffix(name: &mut RecordName, suffix: &str, policy: OverflowPolicy) -> AppendOutcome {
    match policy {
        OverflowPolicy::Truncate => {
            let written = name.push_str_truncating(suffix);
            if written == suffix.len() {
                AppendOutcome::Appended
            } else {
                AppendOutcome::Truncated { written }
            }
        }
        OverflowPolicy::Reject => match name.push_str(suffix) {
            Ok(()) => AppendOutcome::Appended,
            Err(_) => AppendOutcome::Rejected,
        },
    }
}
