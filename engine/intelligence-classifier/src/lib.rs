//! Classifies raw intelligence into actionable signals: confidence
//! scoring from language patterns, fuzzy player-name resolution, severity
//! assignment and an actionability gate. Pure — the same raw signal and
//! player index always classify to the same signal.

pub mod actionability;
pub mod confidence;
pub mod matching;
pub mod severity;
pub mod status;
pub mod tokens;

pub use actionability::is_actionable;
pub use confidence::assess_confidence;
pub use matching::{PlayerNameIndex, FUZZY_MATCH_CUTOFF};
pub use severity::assess_severity;
pub use status::assess_status;

use data_model::{IntelligenceSignal, RawSignal};

/// Classifies one raw signal into an [`IntelligenceSignal`] ready for the
/// prediction adjuster.
pub fn classify(raw: &RawSignal, player_index: &PlayerNameIndex) -> IntelligenceSignal {
    let detail_lowercase = raw.detail.to_lowercase();

    let confidence = assess_confidence(&detail_lowercase, raw.source_reliability);
    let (matched_player, match_score) = player_index.resolve(&raw.player_name);
    let severity = assess_severity(&detail_lowercase, raw.raw_type);
    let status = assess_status(&detail_lowercase, raw.raw_type);
    let actionable = is_actionable(confidence, severity, match_score, raw.raw_type);

    IntelligenceSignal {
        timestamp: raw.observed_at,
        source_id: raw.source_id.clone(),
        source_reliability: raw.source_reliability,
        raw_type: raw.raw_type,
        matched_player,
        match_score,
        confidence,
        severity,
        status,
        actionable,
        detail: raw.detail.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use data_model::{PlayerId, RawSignalType};

    fn index() -> PlayerNameIndex {
        PlayerNameIndex::build(vec![("Mohamed Salah", PlayerId(1))])
    }

    #[test]
    fn confirmed_injury_is_actionable_and_critical() {
        let raw = RawSignal {
            source_id: "press".into(),
            source_reliability: 0.6,
            raw_type: RawSignalType::Injury,
            player_name: "Mohamed Salah".into(),
            detail: "Confirmed out for the season with ACL surgery".into(),
            observed_at: Utc::now(),
        };
        let signal = classify(&raw, &index());
        assert_eq!(signal.severity, data_model::Severity::Critical);
        assert!(signal.actionable);
        assert_eq!(signal.matched_player, Some(PlayerId(1)));
    }

    #[test]
    fn rumor_with_low_reliability_is_not_actionable() {
        let raw = RawSignal {
            source_id: "forum".into(),
            source_reliability: 0.3,
            raw_type: RawSignalType::Rotation,
            player_name: "Mohamed Salah".into(),
            detail: "Might be rotated, just a rumor".into(),
            observed_at: Utc::now(),
        };
        let signal = classify(&raw, &index());
        assert!(!signal.actionable);
    }
}
