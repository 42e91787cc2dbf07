use crate::tokens::{contains_any, HIGH_CONFIDENCE_TOKENS, LOW_CONFIDENCE_TOKENS, MEDIUM_CONFIDENCE_TOKENS};

/// Starts from `source_reliability`, nudges up for confident language, down
/// for hedging language, and clamps to `[0, 1]`.
pub fn assess_confidence(detail_lowercase: &str, source_reliability: f64) -> f64 {
    let mut confidence = source_reliability;

    if contains_any(detail_lowercase, HIGH_CONFIDENCE_TOKENS) {
        confidence += 0.2;
    } else if contains_any(detail_lowercase, MEDIUM_CONFIDENCE_TOKENS) {
        confidence += 0.1;
    }

    if contains_any(detail_lowercase, LOW_CONFIDENCE_TOKENS) {
        confidence -= 0.2;
    }

    confidence.clamp(0.0, 1.0)
}
