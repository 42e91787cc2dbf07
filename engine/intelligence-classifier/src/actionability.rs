use data_model::{RawSignalType, Severity};

pub const MIN_ACTIONABLE_CONFIDENCE: f64 = 0.6;
pub const MIN_PLAYER_MATCH_SCORE: f64 = 70.0;
pub const HIGH_SEVERITY_MIN_CONFIDENCE: f64 = 0.7;
pub const HIGH_SEVERITY_MIN_MATCH_SCORE: f64 = 75.0;
pub const MEDIUM_SEVERITY_MIN_CONFIDENCE: f64 = 0.8;
pub const MEDIUM_SEVERITY_MIN_MATCH_SCORE: f64 = 80.0;

/// Gate deciding whether a classified signal should reach the prediction
/// adjuster. The base confidence/match-score thresholds are waived for
/// `LineupLeak` match score only, never for confidence.
pub fn is_actionable(
    confidence: f64,
    severity: Severity,
    match_score: f64,
    raw_type: RawSignalType,
) -> bool {
    if confidence < MIN_ACTIONABLE_CONFIDENCE {
        return false;
    }
    if match_score < MIN_PLAYER_MATCH_SCORE && raw_type != RawSignalType::LineupLeak {
        return false;
    }

    match severity {
        Severity::Critical => true,
        Severity::High => confidence >= HIGH_SEVERITY_MIN_CONFIDENCE && match_score >= HIGH_SEVERITY_MIN_MATCH_SCORE,
        Severity::Medium => {
            confidence >= MEDIUM_SEVERITY_MIN_CONFIDENCE && match_score >= MEDIUM_SEVERITY_MIN_MATCH_SCORE
        }
        Severity::Low => false,
    }
}
