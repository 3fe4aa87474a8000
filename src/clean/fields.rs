use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ENUM_PREFIX_RE: Regex = Regex::new(r"^\d+\.\s*").unwrap();
    static ref FEE_RE: Regex = Regex::new(r"\d[\d,]*").unwrap();
    static ref RATE_RE: Regex = Regex::new(r"\b\d{1,3}\b").unwrap();
    static ref COUNT_RE: Regex = Regex::new(r"\d+").unwrap();
}

/// Strip a leading "<digits>. " enumeration prefix, e.g.
/// "10. วิศวกรรมโยธา" becomes "วิศวกรรมโยธา". Numbers anywhere else in the
/// text are left alone.
pub fn strip_enumeration_prefix(text: &str) -> String {
    ENUM_PREFIX_RE.replace(text, "").into_owned()
}

/// First run of digits and thousands separators, separators removed.
/// "150,000 บาท/ปี" yields 150000; "-" yields nothing.
pub fn extract_fee(text: &str) -> Option<u64> {
    FEE_RE
        .find(text)
        .and_then(|m| m.as_str().replace(',', "").parse().ok())
}

/// Same digit run as `extract_fee`, kept as a float. The fee adjustment
/// thresholds compare against this value from the original text.
pub fn extract_fee_numeric(text: &str) -> Option<f64> {
    FEE_RE
        .find(text)
        .and_then(|m| m.as_str().replace(',', "").parse().ok())
}

/// First standalone run of 1-3 digits. Digits embedded in a longer number
/// do not count, so a bare year like "2566" yields nothing.
pub fn extract_success_rate(text: &str) -> Option<u32> {
    RATE_RE.find(text).and_then(|m| m.as_str().parse().ok())
}

/// First run of digits anywhere in the text.
pub fn extract_count(text: &str) -> Option<u32> {
    COUNT_RE.find(text).and_then(|m| m.as_str().parse().ok())
}
