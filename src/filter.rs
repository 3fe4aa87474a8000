use std::collections::HashSet;

use crate::RawRecord;

/// The four text columns a subject keyword is allowed to match in.
fn matches_keyword(record: &RawRecord, keyword: &str) -> bool {
    record.major.contains(keyword)
        || record.minor.contains(keyword)
        || record.course.contains(keyword)
        || record.course_name.contains(keyword)
}

/// Select the rows mentioning `keyword` in any of the major, minor, course
/// or course_name columns, collapsing rows that are identical across all
/// fields to one. First occurrence wins; relative input order is kept.
pub fn filter_records(records: &[RawRecord], keyword: &str) -> Vec<RawRecord> {
    let mut seen: HashSet<&RawRecord> = HashSet::new();
    let mut filtered = Vec::new();

    for record in records {
        if matches_keyword(record, keyword) && seen.insert(record) {
            filtered.push(record.clone());
        }
    }

    filtered
}
