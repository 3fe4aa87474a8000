use clap::ValueEnum;

use crate::clean::extract_fee_numeric;
use crate::{CleanRecord, RawRecord};

/// Fee descriptions containing this phrase quote the whole programme;
/// everything else is read as a per-term or per-year figure.
pub const WHOLE_PROGRAM_MARKER: &str = "ตลอดหลักสูตร";

/// Multiplier used to lift an under-scaled per-term figure onto a
/// whole-programme basis (roughly eight terms in a four-year programme).
const TERM_MULTIPLIER: u64 = 8;

/// Heuristic for detecting under-scaled fee values. The thresholds compare
/// the number re-extracted from the original free text, not the already
/// normalized integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FeePolicy {
    /// Marker-aware rule: whole-programme fees below 75,000 and per-term
    /// fees below 200,000 are rescaled. The thresholds are intentionally
    /// asymmetric.
    #[default]
    Tiered,
    /// Historical rule: one unconditional 80,000 threshold, marker ignored.
    Flat,
}

impl FeePolicy {
    /// Fee to record given the original text and the normalized integer.
    /// Texts with no digit run at all are left unchanged.
    pub fn adjusted_fee(&self, raw_fee_text: &str, fee: u64) -> u64 {
        let numeric = match extract_fee_numeric(raw_fee_text) {
            Some(n) => n,
            None => return fee,
        };

        let under_scaled = match self {
            FeePolicy::Tiered => {
                if raw_fee_text.contains(WHOLE_PROGRAM_MARKER) {
                    numeric < 75_000.0
                } else {
                    numeric < 200_000.0
                }
            }
            FeePolicy::Flat => numeric < 80_000.0,
        };

        if under_scaled {
            fee * TERM_MULTIPLIER
        } else {
            fee
        }
    }

    /// Apply the policy in place, pairing the clean row with the raw row it
    /// was derived from. Only the fee field is touched.
    pub fn apply(&self, raw: &RawRecord, clean: &mut CleanRecord) {
        clean.fee = self.adjusted_fee(&raw.fee, clean.fee);
    }
}
