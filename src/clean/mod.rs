mod fields;
pub use fields::{
    extract_count, extract_fee, extract_fee_numeric, extract_success_rate,
    strip_enumeration_prefix,
};

use crate::{CleanRecord, RawRecord};

/// Convert one filtered raw row into its typed form. Provenance columns and
/// `course_name` are dropped here. Every numeric field that fails to parse
/// degrades to 0 rather than erroring, so downstream aggregation never sees
/// dirty input.
pub fn normalize_record(record: &RawRecord) -> CleanRecord {
    CleanRecord {
        uni: record.uni.clone(),
        major: strip_enumeration_prefix(&record.major),
        minor: strip_enumeration_prefix(&record.minor),
        course: strip_enumeration_prefix(&record.course),
        fee: extract_fee(&record.fee).unwrap_or(0),
        success_rate: extract_success_rate(&record.success_rate).unwrap_or(0),
        round1: extract_count(&record.round1).unwrap_or(0),
        round2: extract_count(&record.round2).unwrap_or(0),
        round3: extract_count(&record.round3).unwrap_or(0),
        round4: extract_count(&record.round4).unwrap_or(0),
        lat: None,
        lon: None,
    }
}
