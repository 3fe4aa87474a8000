use serde::{Deserialize, Serialize};

pub mod adjust;
pub mod clean;
pub mod enrich;
pub mod filter;
pub mod prepare;

/// One scraped mytcas listing, exactly as the scraper exported it.
/// Every field is free text; an empty string means the cell was blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "web-scraper-order")]
    pub order: String,
    #[serde(rename = "web-scraper-start-url")]
    pub start_url: String,
    pub uni: String,
    #[serde(rename = "uni-href")]
    pub uni_href: String,
    pub major: String,
    #[serde(rename = "major-href")]
    pub major_href: String,
    pub minor: String,
    #[serde(rename = "minor-href")]
    pub minor_href: String,
    pub course: String,
    #[serde(rename = "course-href")]
    pub course_href: String,
    pub course_name: String,
    pub fee: String,
    pub success_rate: String,
    pub round1: String,
    pub round2: String,
    pub round3: String,
    pub round4: String,
}

/// Normalized, typed row ready for aggregation. Provenance columns and
/// `course_name` are dropped; numeric fields hold 0 where the source text
/// had no parseable value, and coordinates stay empty for universities
/// missing from the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub uni: String,
    pub major: String,
    pub minor: String,
    pub course: String,
    pub fee: u64,
    pub success_rate: u32,
    pub round1: u32,
    pub round2: u32,
    pub round3: u32,
    pub round4: u32,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}
